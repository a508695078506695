// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser};
use kilo_tui::{DEFAULT_TAB_STOP, try_parse_tab_stop};

use super::ui_str;

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "kilo")]
#[command(about = ui_str::ABOUT)]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(help_template = ui_str::HELP_TEMPLATE)]
pub struct CLIArg {
    #[arg(name = "file path")]
    pub maybe_file_path: Option<String>,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file (`kilo_log.txt` by default) for debugging."
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        requires = "enable_logging",
        help = "Path of the log file, used with --enable-logging."
    )]
    pub log_file: Option<String>,

    #[arg(
        global = true,
        long,
        default_value_t = DEFAULT_TAB_STOP,
        value_parser = parse_tab_stop,
        help = "Width of a tab stop, from 1 to 16."
    )]
    pub tab_stop: usize,
}

fn parse_tab_stop(arg: &str) -> Result<usize, String> {
    try_parse_tab_stop(arg).map_err(|report| report.to_string())
}
