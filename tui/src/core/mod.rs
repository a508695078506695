// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! App agnostic building blocks: error types, logging, and terminal input protocol
//! support. Nothing in here knows about rows, cursors, or syntax highlighting.

// Connect to source file.
pub mod ansi;
pub mod common;
pub mod log;
#[cfg(test)]
pub mod test_fixtures;

// Re-export.
pub use ansi::*;
pub use common::*;
pub use log::*;
#[cfg(test)]
pub use test_fixtures::*;
