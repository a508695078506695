// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;

use super::main_event_loop_impl;
use crate::{CommonResult, EditorConfig, EditorState, RawModeGuard, StdinByteSource,
            StdoutOutputDevice, WindowSize, open_file};

/// Run the editor on the controlling terminal until the user quits.
///
/// The terminal is in raw mode for the duration of the call, and is restored on every
/// exit path.
///
/// # Errors
///
/// Returns an error if the terminal size can't be read, the terminal is too small,
/// raw mode can't be entered, or terminal I/O fails.
pub fn run_editor(config: EditorConfig, maybe_filename: Option<&str>) -> CommonResult<()> {
    let (cols, rows) = crossterm::terminal::size().into_diagnostic()?;
    let window_size = WindowSize::try_from_terminal_size(cols, rows)?;

    let mut state = EditorState::new(config, window_size);
    if let Some(filename) = maybe_filename {
        open_file(&mut state, filename);
    }

    let _raw_mode = RawModeGuard::try_new()?;
    main_event_loop_impl(
        &mut state,
        &mut StdinByteSource,
        &mut StdoutOutputDevice,
    )
}
