// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turns a byte stream into [`EditorCommand`]s.
//!
//! The decoder does not implement timeouts. It relies on the [`ByteSource`] to return
//! `Ok(None)` when no byte arrives in time (in raw mode with `VTIME=1` this takes
//! 100ms). If no lead byte is available, [`try_read_command`] returns `Ok(None)` and
//! can simply be called again.
//!
//! # Limitation: digit latency inside escape sequences
//!
//! After `ESC [ <digit>` the decoder can't tell `CSI 5~` apart from a sequence it
//! does not know, so it waits for one more byte. When that byte never comes (eg: the
//! user typed `Escape`, `[`, `5` very quickly) the wait lasts one read timeout, and the
//! whole group degrades to a single [`EditorCommand::Escape`]. The `[` and `5` are
//! consumed and not inserted.

use smallvec::SmallVec;

use super::{SequenceParse, parse_keyboard_sequence, parse_single_byte,
            types::EditorCommand};
use crate::{ANSI_ESC, CommonError, CommonErrorType, CommonResult,
            DEBUG_TUI_INPUT, MAX_KEYBOARD_SEQUENCE_LEN};

/// The read primitive. Implemented by [`crate::StdinByteSource`] for the real
/// terminal, and by `ScriptedByteSource` in tests.
pub trait ByteSource {
    /// Returns `Ok(None)` when no byte is available right now.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying read fails.
    fn read_byte(&mut self) -> std::io::Result<Option<u8>>;
}

/// Read at most one logical command from `source`.
///
/// # Errors
///
/// Returns an [`CommonErrorType::IOError`] if the byte source fails.
pub fn try_read_command(
    source: &mut impl ByteSource,
) -> CommonResult<Option<EditorCommand>> {
    let Some(lead) = read_one(source)? else {
        return Ok(None);
    };

    if lead != ANSI_ESC {
        let command = parse_single_byte(lead);
        DEBUG_TUI_INPUT.then(|| {
            tracing::debug!(message = "try_read_command", byte = lead, command = ?command);
        });
        return Ok(Some(command));
    }

    let mut buffer: SmallVec<[u8; MAX_KEYBOARD_SEQUENCE_LEN]> = SmallVec::new();
    buffer.push(lead);

    let command = loop {
        match parse_keyboard_sequence(&buffer) {
            SequenceParse::Complete(command) => break command,
            SequenceParse::Invalid => break EditorCommand::Escape,
            SequenceParse::Incomplete => {
                if buffer.len() >= MAX_KEYBOARD_SEQUENCE_LEN {
                    break EditorCommand::Escape;
                }
                match read_one(source)? {
                    Some(byte) => buffer.push(byte),
                    None => break EditorCommand::Escape,
                }
            }
        }
    };

    DEBUG_TUI_INPUT.then(|| {
        tracing::debug!(message = "try_read_command", sequence = ?buffer.as_slice(), command = ?command);
    });

    Ok(Some(command))
}

fn read_one(source: &mut impl ByteSource) -> CommonResult<Option<u8>> {
    match source.read_byte() {
        Ok(it) => Ok(it),
        Err(err) if err.kind() == std::io::ErrorKind::Interrupted => Ok(None),
        Err(err) => CommonError::new_error_result(
            CommonErrorType::IOError,
            &format!("Failed to read from terminal: {err}"),
        ),
    }
}
