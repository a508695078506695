// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

pub const ISSUES_URL: &str = "https://github.com/r3bl-org/r3bl-open-core/issues/new";

pub const ABOUT: &str = "A small terminal text editor 📝";

pub const HELP_TEMPLATE: &str = "{about}\nVersion: {bin} {version} 💻\n\nProvide a file path to edit it, or no arguments to edit a new file.\nUSAGE 📓:\n  kilo [\x1b[32mfile path\x1b[0m] [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}";

pub fn logging_enabled_msg(log_file: &str) -> String {
    format!("kilo: logging to {log_file}")
}
