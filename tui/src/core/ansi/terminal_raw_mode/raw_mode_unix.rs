// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Unix/Linux/macOS implementation of raw mode using rustix's safe termios API.

use miette::miette;
use rustix::{fd::{AsFd, BorrowedFd},
             termios::{self, OptionalActions, SpecialCodeIndex, Termios}};
use std::{fs::File,
          io,
          sync::{LazyLock, Mutex}};

/// Stores the original terminal settings to restore later.
static ORIGINAL_TERMIOS: LazyLock<Mutex<Option<Termios>>> =
    LazyLock::new(|| Mutex::new(None));

/// Reads return after this many tenths of a second with no byte.
const READ_TIMEOUT_DECISECONDS: u8 = 1;

/// Represents either stdin or `/dev/tty` for terminal operations.
enum TerminalFd {
    Stdin(io::Stdin),
    DevTty(File),
}

impl AsFd for TerminalFd {
    fn as_fd(&self) -> BorrowedFd<'_> {
        match self {
            TerminalFd::Stdin(stdin) => stdin.as_fd(),
            TerminalFd::DevTty(file) => file.as_fd(),
        }
    }
}

/// Uses stdin if it is a tty, otherwise opens `/dev/tty`.
fn get_terminal_fd() -> io::Result<TerminalFd> {
    let stdin = io::stdin();
    if termios::isatty(&stdin) {
        Ok(TerminalFd::Stdin(stdin))
    } else {
        let file = File::options().read(true).write(true).open("/dev/tty")?;
        Ok(TerminalFd::DevTty(file))
    }
}

/// Enable raw mode on the terminal.
///
/// 1. Save the original terminal settings for restoration (only the first time).
/// 2. Apply `cfmakeraw` style settings: no canonical mode, echo, signals, or output
///    post processing.
/// 3. Set `VMIN=0`, `VTIME=1`, so a read returns with no byte after 100ms. The
///    [`crate::StdinByteSource`] reports that as "no byte available".
///
/// # Errors
///
/// Returns miette diagnostic errors if:
/// - Terminal file descriptor cannot be obtained
/// - Terminal attributes cannot be retrieved or set
/// - Mutex lock is poisoned
pub fn enable_raw_mode() -> miette::Result<()> {
    let fd = get_terminal_fd()
        .map_err(|e| miette!("failed to get terminal file descriptor: {e}"))?;

    let mut termios = termios::tcgetattr(&fd)
        .map_err(|e| miette!("failed to retrieve terminal attributes: {e}"))?;

    {
        let mut original = ORIGINAL_TERMIOS
            .lock()
            .map_err(|e| miette!("terminal settings lock poisoned: {e}"))?;

        if original.is_none() {
            *original = Some(termios.clone());
        }
    }

    termios.make_raw();
    termios.special_codes[SpecialCodeIndex::VMIN] = 0;
    termios.special_codes[SpecialCodeIndex::VTIME] = READ_TIMEOUT_DECISECONDS;

    termios::tcsetattr(&fd, OptionalActions::Flush, &termios)
        .map_err(|e| miette!("failed to set terminal attributes: {e}"))?;

    Ok(())
}

/// Restore the settings saved by [`enable_raw_mode`]. No-op if raw mode was never
/// enabled.
///
/// # Errors
///
/// Returns miette diagnostic errors if:
/// - Terminal file descriptor cannot be obtained
/// - Terminal attributes cannot be set
/// - Mutex lock is poisoned
pub fn disable_raw_mode() -> miette::Result<()> {
    let original = ORIGINAL_TERMIOS
        .lock()
        .map_err(|e| miette!("terminal settings lock poisoned: {e}"))?;

    if let Some(ref termios) = *original {
        let fd = get_terminal_fd()
            .map_err(|e| miette!("failed to get terminal file descriptor: {e}"))?;

        termios::tcsetattr(&fd, OptionalActions::Flush, termios)
            .map_err(|e| miette!("failed to set terminal attributes: {e}"))?;
    }
    Ok(())
}
