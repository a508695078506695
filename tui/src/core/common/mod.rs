// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod common_result_and_error;
pub mod inline_string;
pub mod miette_setup_global_report_handler;

// Re-export.
pub use common_result_and_error::*;
pub use inline_string::*;
pub use miette_setup_global_report_handler::*;
