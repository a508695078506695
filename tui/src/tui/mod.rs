// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The editor: rows, highlighting, editing, selection, search, rendering, and the main
//! event loop.

// Attach sources.
pub mod editor;
pub mod global_constants;
pub mod syntax_highlighting;
pub mod terminal_lib_backends;
pub mod terminal_window;

// Re-export.
pub use editor::*;
pub use global_constants::*;
pub use syntax_highlighting::*;
pub use terminal_lib_backends::*;
pub use terminal_window::*;
