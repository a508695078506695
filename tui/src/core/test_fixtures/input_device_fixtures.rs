// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::VecDeque;

use crate::ByteSource;

/// A [`ByteSource`] that replays a fixed script. A `None` entry models a read that
/// timed out with no byte. Once the script runs out, every read returns `Ok(None)`.
#[derive(Debug, Default)]
pub struct ScriptedByteSource {
    pub script: VecDeque<Option<u8>>,
    pub fail: bool,
}

impl ScriptedByteSource {
    #[must_use]
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            script: bytes.iter().copied().map(Some).collect(),
            fail: false,
        }
    }

    #[must_use]
    pub fn with_gaps(script: &[Option<u8>]) -> Self {
        Self {
            script: script.iter().copied().collect(),
            fail: false,
        }
    }

    /// Every read returns an I/O error.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            script: VecDeque::new(),
            fail: true,
        }
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool { self.script.is_empty() }
}

impl ByteSource for ScriptedByteSource {
    fn read_byte(&mut self) -> std::io::Result<Option<u8>> {
        if self.fail {
            return Err(std::io::Error::other("scripted failure"));
        }
        Ok(self.script.pop_front().flatten())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_script_then_runs_dry() {
        let mut source = ScriptedByteSource::with_gaps(&[Some(b'a'), None, Some(b'b')]);
        assert_eq!(source.read_byte().unwrap(), Some(b'a'));
        assert_eq!(source.read_byte().unwrap(), None);
        assert_eq!(source.read_byte().unwrap(), Some(b'b'));
        assert!(source.is_exhausted());
        assert_eq!(source.read_byte().unwrap(), None);
    }
}
