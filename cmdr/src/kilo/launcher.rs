// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use kilo_tui::{CommonResult, DEFAULT_LOG_FILE_NAME, EditorConfig, TracingConfig,
               run_editor, try_initialize_logging_global};

use super::{CLIArg, ui_str};

/// Build the [`EditorConfig`] from the command line.
#[must_use]
pub fn editor_config_from(cli_arg: &CLIArg) -> EditorConfig {
    EditorConfig::default().with_tab_stop(cli_arg.global_options.tab_stop)
}

/// Logging goes to a file only, since the terminal is in raw mode while the editor
/// runs.
///
/// # Errors
///
/// Returns an error if logging is enabled and the subscriber can't be installed, or if
/// the editor fails.
pub fn run_app(cli_arg: CLIArg) -> CommonResult<()> {
    if cli_arg.global_options.enable_logging {
        let log_file = cli_arg
            .global_options
            .log_file
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string());
        eprintln!("{}", ui_str::logging_enabled_msg(&log_file));
        try_initialize_logging_global(TracingConfig::new_file(Some(log_file)))?;
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let config = editor_config_from(&cli_arg);
    run_editor(config, cli_arg.maybe_file_path.as_deref())
}
