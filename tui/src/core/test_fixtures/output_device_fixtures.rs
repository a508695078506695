// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::OutputDevice;

/// An [`OutputDevice`] that keeps every frame it is given.
#[derive(Debug, Default)]
pub struct CapturingOutputDevice {
    pub frames: Vec<Vec<u8>>,
}

impl CapturingOutputDevice {
    /// The most recent frame, lossily decoded as UTF-8.
    #[must_use]
    pub fn last_frame_as_string(&self) -> String {
        self.frames
            .last()
            .map(|it| String::from_utf8_lossy(it).to_string())
            .unwrap_or_default()
    }
}

impl OutputDevice for CapturingOutputDevice {
    fn write_frame(&mut self, frame: &[u8]) -> std::io::Result<()> {
        self.frames.push(frame.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_output_device_keeps_frames() {
        let mut device = CapturingOutputDevice::default();
        device.write_frame(b"one").unwrap();
        device.write_frame(b"two").unwrap();
        assert_eq!(device.frames.len(), 2);
        assert_eq!(device.last_frame_as_string(), "two");
    }
}
