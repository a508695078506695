// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod clipboard_support;
pub mod selection_range;

// Re-export.
pub use clipboard_support::*;
pub use selection_range::*;
