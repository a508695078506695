// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod caret_mut;
pub mod content_mut;
pub mod dispatch;
pub mod engine_render_api;
pub mod prompt;
pub mod scroll_editor_content;
pub mod select_mode;

// Re-export.
pub use dispatch::*;
pub use engine_render_api::*;
pub use prompt::*;
pub use scroll_editor_content::*;
pub use select_mode::*;

#[cfg(test)]
mod test_editor_engine;
