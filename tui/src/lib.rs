// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # kilo_tui
//!
//! The engine behind the `kilo` terminal text editor. A buffer of text rows is kept in
//! sync with a rendered, tab expanded, syntax colored view, drawn into a fixed size
//! character grid, and driven by the raw byte stream coming from the keyboard.
//!
//! ```text
//! stdin bytes ─▶ try_read_command ─▶ EditorCommand ─▶ process_command
//!                                                          │
//!                   ┌──────────────────────────────────────┘
//!                   ▼
//!   RowStore (insert / delete / split / join) ─▶ highlight cascade
//!                   │
//!                   ▼
//!   render_engine ─▶ RenderOps ─▶ paint ─▶ one write to stdout
//! ```
//!
//! ## Layout
//!
//! - [`core`]: app agnostic building blocks.
//!   - Errors ([`CommonResult`], [`CommonError`]).
//!   - Logging ([`TracingConfig`], [`try_initialize_logging_global`]).
//!   - Input byte constants, raw mode ([`RawModeGuard`]), and the VT100 input decoder
//!     ([`try_read_command`]).
//! - [`tui`]: the editor.
//!   - [`RowStore`] owns the rows. Every mutation recomputes the rendered form and the
//!     highlight tags of the affected rows, renumbers row indices, and bumps the dirty
//!     counter.
//!   - [`highlight_row`] tags one row. The row store cascades to following rows while
//!     the "ends inside a block comment" flag keeps changing.
//!   - [`EditorState`] is the one value that holds the caret, scroll offsets,
//!     selection, clipboard, prompt, and status message. It is passed by reference to
//!     every operation.
//!   - [`process_command`] applies an [`EditorCommand`], [`render_engine`] turns the
//!     state into [`RenderOps`], and [`paint_and_write`] serializes them into a single
//!     write.
//!   - [`main_event_loop_impl`] ties these together over any [`ByteSource`] and
//!     [`OutputDevice`], so the loop runs the same way in tests.
//!
//! ## Model
//!
//! One byte is one column. Tabs expand to the next tab stop in the rendered form and
//! the caret is tracked in raw columns, see [`cx_to_rx`] and [`rx_to_cx`]. There is no
//! Unicode grapheme handling, no undo, and no regex search.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod core;
pub mod tui;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
pub use core::*;
pub use tui::*;
