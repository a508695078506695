// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # kilo
//!
//! Command line front end for [`kilo_tui`]. Parses the arguments, optionally turns on
//! file logging, and hands the terminal over to the editor.
//!
//! ```text
//! kilo [file path] [-l] [--log-file <path>] [--tab-stop <n>]
//! ```
//!
//! | Key               | Action                                   |
//! | ----------------- | ---------------------------------------- |
//! | `Ctrl-S`          | Save, prompting for a name if needed      |
//! | `Ctrl-Q`          | Quit, pressed twice with unsaved changes  |
//! | `Ctrl-F`          | Incremental search, arrows to step        |
//! | `Shift` + arrows  | Extend the selection                      |
//! | `Ctrl-C`/`Ctrl-V` | Copy the selection, paste                 |

#![warn(clippy::all)]
#![warn(clippy::unwrap_in_result)]
#![warn(rust_2018_idioms)]
#![warn(clippy::doc_markdown)]
#![warn(clippy::redundant_closure)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::must_use_candidate)]
#![warn(clippy::items_after_statements)]

// Attach sources.
pub mod kilo;

// Re-export.
pub use kilo::*;
