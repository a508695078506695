// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod input_device;
pub mod output_device;
pub mod paint;
pub mod render_op;

// Re-export.
pub use input_device::*;
pub use output_device::*;
pub use paint::*;
pub use render_op::*;
