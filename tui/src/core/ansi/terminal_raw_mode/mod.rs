// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Raw mode for the controlling terminal.
//!
//! In raw mode every key press is delivered to the process immediately, without line
//! buffering, echo, or signal generation (so `Ctrl-C` and `Ctrl-Q` arrive as bytes).
//! Use [`RawModeGuard`] so that the terminal is restored on every exit path,
//! including `?` early returns.

// Attach sources.
#[cfg(unix)]
mod raw_mode_unix;

// Re-export.
#[cfg(unix)]
pub use raw_mode_unix::*;

/// Enables raw mode on creation and restores the terminal when dropped.
#[cfg(unix)]
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

#[cfg(unix)]
impl RawModeGuard {
    /// # Errors
    ///
    /// Returns an error if the terminal can't be switched to raw mode. This is fatal
    /// for the editor.
    pub fn try_new() -> miette::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { _private: () })
    }
}

#[cfg(unix)]
impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            tracing::error!(message = "Failed to restore terminal", error = ?err);
        }
    }
}
