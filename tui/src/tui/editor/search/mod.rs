// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod search_session;

// Re-export.
pub use search_session::*;
