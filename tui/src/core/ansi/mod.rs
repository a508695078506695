// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Protocol level terminal support: input byte constants, raw mode, and the input
//! decoder that turns a byte stream into [`EditorCommand`]s.

// Attach sources.
pub mod constants;
pub mod terminal_raw_mode;
pub mod vt_100_terminal_input_parser;

// Re-export.
pub use constants::*;
pub use terminal_raw_mode::*;
pub use vt_100_terminal_input_parser::*;
