// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod main_event_loop;
#[cfg(unix)]
pub mod terminal_window_api;

// Re-export.
pub use main_event_loop::*;
#[cfg(unix)]
pub use terminal_window_api::*;
