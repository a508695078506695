// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use crate::{CommonError, CommonErrorType, CommonResult};

pub const DEFAULT_TAB_STOP: usize = 4;
pub const DEFAULT_MESSAGE_DURATION: Duration = Duration::from_secs(5);
pub const DEFAULT_QUIT_TIMES: u8 = 1;

/// Knobs for the editor. Build one with [`EditorConfig::default`] and the `with_*`
/// setters.
///
/// ```
/// use kilo_tui::EditorConfig;
/// let config = EditorConfig::default().with_tab_stop(8);
/// assert_eq!(config.tab_stop, 8);
/// assert_eq!(config.quit_times, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorConfig {
    /// Width of a tab stop, for rendering tabs and for soft tabs.
    pub tab_stop: usize,
    /// How long a status message stays on the message bar.
    pub message_duration: Duration,
    /// Extra `Ctrl-Q` presses needed to quit with unsaved changes.
    pub quit_times: u8,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_stop: DEFAULT_TAB_STOP,
            message_duration: DEFAULT_MESSAGE_DURATION,
            quit_times: DEFAULT_QUIT_TIMES,
        }
    }
}

impl EditorConfig {
    /// A tab stop of 0 is treated as 1.
    #[must_use]
    pub fn with_tab_stop(mut self, tab_stop: usize) -> Self {
        self.tab_stop = tab_stop.max(1);
        self
    }

    #[must_use]
    pub fn with_message_duration(mut self, message_duration: Duration) -> Self {
        self.message_duration = message_duration;
        self
    }

    #[must_use]
    pub fn with_quit_times(mut self, quit_times: u8) -> Self {
        self.quit_times = quit_times;
        self
    }
}

/// Parse a tab stop given on the command line.
///
/// # Errors
///
/// Returns [`CommonErrorType::InvalidArguments`] if `arg` isn't a number in `1..=16`.
pub fn try_parse_tab_stop(arg: &str) -> CommonResult<usize> {
    match arg.trim().parse::<usize>() {
        Ok(it) if (1..=16).contains(&it) => Ok(it),
        _ => CommonError::new_error_result(
            CommonErrorType::InvalidArguments,
            &format!("Tab stop must be a number from 1 to 16, got: {arg}"),
        ),
    }
}
