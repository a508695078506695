// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod editor_config;
pub mod editor_engine;
pub mod editor_state;
pub mod file_io;
pub mod row_store;
pub mod search;
pub mod selection;

// Re-export.
pub use editor_config::*;
pub use editor_engine::*;
pub use editor_state::*;
pub use file_io::*;
pub use row_store::*;
pub use search::*;
pub use selection::*;
