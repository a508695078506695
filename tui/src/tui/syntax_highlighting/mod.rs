// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod highlight_tag;
pub mod highlighter;
pub mod syntax_profile;

// Re-export.
pub use highlight_tag::*;
pub use highlighter::*;
pub use syntax_profile::*;
