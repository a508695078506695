// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! VT-100 terminal input parsing.
//!
//! ```text
//! Raw terminal input (stdin, raw mode, VMIN=0 VTIME=1)
//!    │
//! ┌──▼───────────────────────────────────────┐
//! │  ByteSource::read_byte()                 │  ← StdinByteSource, ScriptedByteSource
//! └──────────────────────────────────────────┘
//!    │ one byte at a time
//! ┌──▼───────────────────────────────────────┐
//! │  decoder::try_read_command()             │  ← bounded lookahead after ESC
//! │  keyboard::parse_keyboard_sequence()     │  ← pure
//! │  keyboard::parse_single_byte()           │  ← pure
//! └──────────────────────────────────────────┘
//!    │
//!    ▼
//! EditorCommand
//! ```

// Attach sources.
pub mod decoder;
pub mod keyboard;
pub mod types;

// Re-export.
pub use decoder::*;
pub use keyboard::*;
pub use types::*;
