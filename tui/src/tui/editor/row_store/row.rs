// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::HighlightTag;

/// One line of text. `raw` is the authoritative content, everything else is derived
/// from it by [`Row::update_render`] and the highlighter.
///
/// ```text
/// raw     a ␉ b          (3 bytes, tab stop 4)
/// render  a · · · b      (5 bytes)
/// tags    N N N N N      (one per rendered byte)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    /// Position in the [`crate::RowStore`].
    pub index: usize,
    pub raw: Vec<u8>,
    pub render: Vec<u8>,
    pub tags: Vec<HighlightTag>,
    /// This row's highlighting ends inside an unterminated block comment.
    pub ends_in_open_comment: bool,
    /// Number of leading spaces in `raw`.
    pub indent: usize,
}

impl Row {
    /// Tags are all [`HighlightTag::Normal`] until the store highlights the row.
    #[must_use]
    pub fn new(index: usize, raw: &[u8], tab_stop: usize) -> Self {
        let mut it = Self {
            index,
            raw: raw.to_vec(),
            ..Default::default()
        };
        it.update_render(tab_stop);
        it
    }

    #[must_use]
    pub fn size(&self) -> usize { self.raw.len() }

    #[must_use]
    pub fn render_size(&self) -> usize { self.render.len() }

    /// Recompute `render`, `indent` and reset `tags` to the new rendered length.
    pub fn update_render(&mut self, tab_stop: usize) {
        let tab_stop = tab_stop.max(1);

        self.indent = self.raw.iter().take_while(|&&it| it == b' ').count();

        self.render.clear();
        for &byte in &self.raw {
            if byte == b'\t' {
                self.render.push(b' ');
                while self.render.len() % tab_stop != 0 {
                    self.render.push(b' ');
                }
            } else {
                self.render.push(byte);
            }
        }

        self.tags.clear();
        self.tags.resize(self.render.len(), HighlightTag::Normal);
    }
}
