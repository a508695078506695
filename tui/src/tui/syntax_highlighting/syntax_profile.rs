// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The built in language database. A [`SyntaxProfile`] is plain static data, so the
//! row store can hold a `&'static SyntaxProfile` and copy it around freely.

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxProfile {
    /// Shown in the status bar.
    pub file_type: &'static str,
    /// Patterns starting with `.` match the final extension of the file name. Any
    /// other pattern matches as a substring of the file name.
    pub file_match: &'static [&'static str],
    pub keywords: &'static [&'static str],
    pub single_line_comment_start: Option<&'static str>,
    pub multi_line_comment_start: Option<&'static str>,
    pub multi_line_comment_end: Option<&'static str>,
    pub highlight_numbers: bool,
    pub highlight_strings: bool,
}

impl SyntaxProfile {
    /// Both block comment markers, if this language has block comments.
    #[must_use]
    pub fn block_comment_markers(&self) -> Option<(&'static str, &'static str)> {
        match (self.multi_line_comment_start, self.multi_line_comment_end) {
            (Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => {
                Some((start, end))
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn matches_filename(&self, filename: &str) -> bool {
        let extension = Path::new(filename).extension().and_then(|it| it.to_str());
        self.file_match
            .iter()
            .any(|pattern| match pattern.strip_prefix('.') {
                Some(pattern_ext) => extension == Some(pattern_ext),
                None => filename.contains(pattern),
            })
    }
}

pub const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double",
    "else", "enum", "extern", "float", "for", "goto", "if", "int", "long", "register",
    "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while",
];

pub const C_PROFILE: SyntaxProfile = SyntaxProfile {
    file_type: "c",
    file_match: &[".c", ".cpp", ".h"],
    keywords: C_KEYWORDS,
    single_line_comment_start: Some("//"),
    multi_line_comment_start: Some("/*"),
    multi_line_comment_end: Some("*/"),
    highlight_numbers: true,
    highlight_strings: true,
};

/// Highlight database.
pub static HLDB: &[SyntaxProfile] = &[C_PROFILE];

/// First profile in [`HLDB`] that matches `filename`.
#[must_use]
pub fn select_syntax_for_filename(filename: &str) -> Option<&'static SyntaxProfile> {
    HLDB.iter().find(|it| it.matches_filename(filename))
}
