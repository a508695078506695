// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use kilo_cmdr::{CLIArg, run_app, ui_str};
use kilo_tui::setup_default_miette_global_report_handler;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> miette::Result<()> {
    setup_default_miette_global_report_handler(ui_str::ISSUES_URL);
    let cli_arg = CLIArg::parse();
    run_app(cli_arg)
}
