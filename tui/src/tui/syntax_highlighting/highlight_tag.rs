// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::style::Color;
use strum_macros::{Display, EnumIter};

/// One tag per rendered character of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum HighlightTag {
    #[default]
    Normal,
    Comment,
    BlockComment,
    Keyword,
    String,
    Number,
    /// Transient overlay for the current search match. Replaced by the next full
    /// highlight pass of the row.
    Match,
}

impl HighlightTag {
    /// Fixed tag to foreground color lookup.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            HighlightTag::BlockComment | HighlightTag::Number => Color::DarkRed,
            HighlightTag::String => Color::DarkGreen,
            HighlightTag::Match => Color::DarkBlue,
            HighlightTag::Keyword => Color::DarkMagenta,
            HighlightTag::Comment => Color::DarkCyan,
            HighlightTag::Normal => Color::Reset,
        }
    }
}
