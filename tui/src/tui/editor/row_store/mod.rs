// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod column_translator;
pub mod row;
pub mod row_store_impl;

// Re-export.
pub use column_translator::*;
pub use row::*;
pub use row_store_impl::*;

#[cfg(test)]
mod test_row_store;
