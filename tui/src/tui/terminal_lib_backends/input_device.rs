// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{ErrorKind, Read};

use crate::ByteSource;

/// Reads stdin one byte at a time. In raw mode with `VMIN=0, VTIME=1` a read returns
/// 0 bytes after 100ms without input, which is reported as `Ok(None)`.
#[derive(Debug, Default)]
pub struct StdinByteSource;

impl ByteSource for StdinByteSource {
    fn read_byte(&mut self) -> std::io::Result<Option<u8>> {
        let mut buf = [0_u8; 1];
        match std::io::stdin().lock().read(&mut buf) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(buf[0])),
            // Some platforms report the timeout as EAGAIN instead of a 0 byte read.
            Err(err) if err.kind() == ErrorKind::WouldBlock => Ok(None),
            Err(err) => Err(err),
        }
    }
}
