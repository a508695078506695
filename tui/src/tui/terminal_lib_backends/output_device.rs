// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write;

/// Where painted frames go. Each call receives one complete frame, which must reach
/// the terminal as a single write.
pub trait OutputDevice {
    /// # Errors
    ///
    /// Returns an error if the frame can't be written or flushed.
    fn write_frame(&mut self, frame: &[u8]) -> std::io::Result<()>;
}

#[derive(Debug, Default)]
pub struct StdoutOutputDevice;

impl OutputDevice for StdoutOutputDevice {
    fn write_frame(&mut self, frame: &[u8]) -> std::io::Result<()> {
        let mut locked = std::io::stdout().lock();
        locked.write_all(frame)?;
        locked.flush()
    }
}
