// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Be careful when adjusting this tuning parameter. Status and prompt lines are
//! short, so they live on the stack until they outgrow [`DEFAULT_STRING_STORAGE_SIZE`],
//! at which point they are [`smallvec::SmallVec::spilled`] on the heap.

use smallstr::SmallString;

pub const DEFAULT_STRING_STORAGE_SIZE: usize = 80;

/// Stack allocated string storage for small strings.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

/// Format into an [`InlineString`], the same way [`format!`] formats into a
/// [`String`].
///
/// # Example
///
/// ```
/// use kilo_tui::{inline_string, InlineString};
/// let it: InlineString = inline_string!("{} bytes written to disk", 42);
/// assert_eq!(it.as_str(), "42 bytes written to disk");
/// ```
#[macro_export]
macro_rules! inline_string {
    ($($format:tt)*) => {{
        use std::fmt::Write as _;
        let mut acc = $crate::InlineString::new();
        _ = write!(acc, $($format)*);
        acc
    }};
}
