// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Load and save the buffer. Failures never end the process: they are reported in
//! the message bar, and a failed save leaves the dirty counter alone.

use std::{fs::OpenOptions,
          io::{ErrorKind, Write}};

use miette::Diagnostic;

use crate::{Caret, DEBUG_TUI_MOD, EditorState, RowStore, ScrollOffset, inline_string,
            select_syntax_for_filename};

#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum FileIoError {
    #[error("Could not open {path}")]
    #[diagnostic(
        code(kilo_tui::file_io::open),
        help("Check that the file is readable by the current user")
    )]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not save {path}")]
    #[diagnostic(
        code(kilo_tui::file_io::save),
        help("Check that the directory exists and is writable, and that the disk is not full")
    )]
    Save {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FileIoError {
    #[must_use]
    pub fn io_error(&self) -> &std::io::Error {
        match self {
            FileIoError::Open { source, .. } | FileIoError::Save { source, .. } => source,
        }
    }
}

/// Split file contents into lines. `\n` ends a line and a trailing `\r` is dropped,
/// so a final newline does not produce an extra empty row.
#[must_use]
pub fn split_into_lines(content: &[u8]) -> Vec<Vec<u8>> {
    let mut lines: Vec<Vec<u8>> = content
        .split(|it| *it == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line).to_vec())
        .collect();
    if content.is_empty() || content.ends_with(b"\n") {
        lines.pop();
    }
    lines
}

/// Read a file into lines. A missing file reads as no lines, so that it is created on
/// the first save.
///
/// # Errors
///
/// Returns [`FileIoError::Open`] for any failure other than the file not existing.
pub fn try_read_lines(path: &str) -> Result<Vec<Vec<u8>>, FileIoError> {
    match std::fs::read(path) {
        Ok(content) => Ok(split_into_lines(&content)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(vec![]),
        Err(source) => Err(FileIoError::Open {
            path: path.to_string(),
            source,
        }),
    }
}

/// Write `bytes` to `path`, creating the file if needed. The file is resized to fit
/// before writing. Returns the number of bytes written.
///
/// # Errors
///
/// Returns [`FileIoError::Save`] if the file can't be opened, resized, or written.
pub fn try_write_bytes(path: &str, bytes: &[u8]) -> Result<usize, FileIoError> {
    let to_save_error = |source| FileIoError::Save {
        path: path.to_string(),
        source,
    };

    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .map_err(to_save_error)?;
    file.set_len(bytes.len() as u64).map_err(to_save_error)?;
    file.write_all(bytes).map_err(to_save_error)?;

    Ok(bytes.len())
}

/// Replace the buffer with the contents of `filename` and pick the syntax profile
/// for it. The caret and scroll offsets go back to the top.
pub fn open_file(state: &mut EditorState, filename: &str) {
    let syntax = select_syntax_for_filename(filename);
    state.filename = Some(filename.to_string());

    match try_read_lines(filename) {
        Ok(lines) => {
            state.rows = RowStore::from_lines(&lines, state.config.tab_stop, syntax);
        }
        Err(err) => {
            tracing::error!(message = "open failed", error = ?err);
            let mut rows = RowStore::new(state.config.tab_stop);
            rows.set_syntax(syntax);
            state.rows = rows;
            state.set_status_message(&inline_string!(
                "Can't open! I/O error: {}",
                err.io_error()
            ));
        }
    }

    state.scroll = ScrollOffset::default();
    state.set_caret(Caret::default());

    DEBUG_TUI_MOD.then(|| {
        tracing::debug!(message = "opened", filename = filename, rows = state.rows.len());
    });
}

/// Write the buffer to the current filename. Does nothing without a filename.
pub fn save_file(state: &mut EditorState) {
    let Some(filename) = state.filename.clone() else {
        return;
    };

    let bytes = state.rows.to_bytes();
    match try_write_bytes(&filename, &bytes) {
        Ok(len) => {
            state.rows.mark_clean();
            state.set_status_message(&inline_string!("{len} bytes written to disk"));
        }
        Err(err) => {
            tracing::error!(message = "save failed", error = ?err);
            state.set_status_message(&inline_string!(
                "Can't save! I/O error: {}",
                err.io_error()
            ));
        }
    }
}

/// Name the buffer, switch to the syntax profile for the new name, then save.
pub fn save_file_as(state: &mut EditorState, filename: &str) {
    state.filename = Some(filename.to_string());
    state.rows.set_syntax(select_syntax_for_filename(filename));
    save_file(state);
}
