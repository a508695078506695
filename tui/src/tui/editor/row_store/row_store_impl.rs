// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The ordered rows of the buffer and every operation that mutates them.
//!
//! All mutations keep these invariants:
//! 1. `rows[i].index == i` for every row.
//! 2. `render` and `tags` are recomputed for every row whose `raw` changed, and
//!    `tags.len() == render.len()`.
//! 3. The dirty counter goes up by one.
//! 4. Highlighting cascades to following rows for as long as a row's
//!    `ends_in_open_comment` flag changes (see [`RowStore::rehighlight_from`]).
//!
//! Out of range rows or columns turn an operation into a no-op.

use super::Row;
use crate::{DEBUG_TUI_SYN_HI, HighlightTag, HighlightedRow, SyntaxProfile,
            highlight_row};

/// Whether [`RowStore::split_row`] indents the new row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoIndent {
    /// The new row holds exactly the bytes after the split column.
    None,
    /// Prefix the new row with the split row's leading spaces, plus one tab stop if
    /// the byte before the split column is `{`. Splitting at column 0 never indents.
    Preserve,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowStore {
    rows: Vec<Row>,
    syntax: Option<&'static SyntaxProfile>,
    tab_stop: usize,
    dirty: usize,
}

impl RowStore {
    #[must_use]
    pub fn new(tab_stop: usize) -> Self {
        Self {
            rows: vec![],
            syntax: None,
            tab_stop: tab_stop.max(1),
            dirty: 0,
        }
    }

    /// Build a clean (not dirty) store, one row per line.
    #[must_use]
    pub fn from_lines<T: AsRef<[u8]>>(
        lines: &[T],
        tab_stop: usize,
        syntax: Option<&'static SyntaxProfile>,
    ) -> Self {
        let tab_stop = tab_stop.max(1);
        let rows = lines
            .iter()
            .enumerate()
            .map(|(index, line)| Row::new(index, line.as_ref(), tab_stop))
            .collect();
        let mut it = Self {
            rows,
            syntax,
            tab_stop,
            dirty: 0,
        };
        it.rehighlight_all();
        it
    }

    #[must_use]
    pub fn len(&self) -> usize { self.rows.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    #[must_use]
    pub fn rows(&self) -> &[Row] { &self.rows }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Row> { self.rows.get(index) }

    /// Size of the row, or 0 past the last row.
    #[must_use]
    pub fn row_size(&self, index: usize) -> usize { self.get(index).map_or(0, Row::size) }

    #[must_use]
    pub fn tab_stop(&self) -> usize { self.tab_stop }

    #[must_use]
    pub fn syntax(&self) -> Option<&'static SyntaxProfile> { self.syntax }

    /// Switch language and rehighlight everything. Does not dirty the buffer.
    pub fn set_syntax(&mut self, syntax: Option<&'static SyntaxProfile>) {
        self.syntax = syntax;
        self.rehighlight_all();
    }

    #[must_use]
    pub fn dirty(&self) -> usize { self.dirty }

    #[must_use]
    pub fn is_dirty(&self) -> bool { self.dirty > 0 }

    /// Called after a successful save.
    pub fn mark_clean(&mut self) { self.dirty = 0; }

    /// Raw content of every row, joined by `\n`, with a trailing `\n` after the last
    /// row.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let total = self.rows.iter().map(|it| it.size() + 1).sum();
        let mut acc = Vec::with_capacity(total);
        for row in &self.rows {
            acc.extend_from_slice(&row.raw);
            acc.push(b'\n');
        }
        acc
    }

    /// `0 <= at <= len`.
    pub fn insert_row(&mut self, at: usize, content: &[u8]) {
        if at > self.rows.len() {
            return;
        }
        let mut row = Row::new(at, content, self.tab_stop);
        // The flag the following row saw before this insert, so that the cascade can
        // tell whether it needs a new pass.
        row.ends_in_open_comment =
            at > 0 && self.rows[at - 1].ends_in_open_comment;
        self.rows.insert(at, row);
        self.renumber_from(at + 1);
        self.dirty += 1;
        self.rehighlight_from(at);
    }

    /// `0 <= at < len`.
    pub fn delete_row(&mut self, at: usize) {
        if at >= self.rows.len() {
            return;
        }
        self.rows.remove(at);
        self.renumber_from(at);
        self.dirty += 1;
        self.rehighlight_from(at);
    }

    /// `0 <= col <= row.size`.
    pub fn insert_char(&mut self, row_index: usize, col: usize, ch: u8) {
        let tab_stop = self.tab_stop;
        let Some(row) = self.rows.get_mut(row_index) else {
            return;
        };
        if col > row.size() {
            return;
        }
        row.raw.insert(col, ch);
        row.update_render(tab_stop);
        self.dirty += 1;
        self.rehighlight_from(row_index);
    }

    /// Delete the byte at `col`, `0 <= col < row.size`.
    pub fn delete_char(&mut self, row_index: usize, col: usize) {
        let tab_stop = self.tab_stop;
        let Some(row) = self.rows.get_mut(row_index) else {
            return;
        };
        if col >= row.size() {
            return;
        }
        row.raw.remove(col);
        row.update_render(tab_stop);
        self.dirty += 1;
        self.rehighlight_from(row_index);
    }

    pub fn append_string(&mut self, row_index: usize, text: &[u8]) {
        let tab_stop = self.tab_stop;
        let Some(row) = self.rows.get_mut(row_index) else {
            return;
        };
        row.raw.extend_from_slice(text);
        row.update_render(tab_stop);
        self.dirty += 1;
        self.rehighlight_from(row_index);
    }

    /// Truncate the row at `col` and insert the remainder as the next row. Returns
    /// the number of indent spaces put in front of the remainder, or `None` if the
    /// request was out of range.
    ///
    /// With [`AutoIndent::Preserve`] the remainder gets the row's leading spaces, plus
    /// one tab stop when the row ends in `{`.
    pub fn split_row(
        &mut self,
        row_index: usize,
        col: usize,
        auto_indent: AutoIndent,
    ) -> Option<usize> {
        let tab_stop = self.tab_stop;
        let row = self.rows.get_mut(row_index)?;
        if col > row.size() {
            return None;
        }

        let indent = match auto_indent {
            AutoIndent::None => 0,
            AutoIndent::Preserve if col == 0 => 0,
            AutoIndent::Preserve => {
                let brace_bonus = if row.raw.last() == Some(&b'{') { tab_stop } else { 0 };
                row.indent + brace_bonus
            }
        };

        let mut new_raw = vec![b' '; indent];
        new_raw.extend_from_slice(&row.raw[col..]);
        row.raw.truncate(col);
        row.update_render(tab_stop);

        let mut new_row = Row::new(row_index + 1, &new_raw, tab_stop);
        new_row.ends_in_open_comment = row.ends_in_open_comment;
        self.rows.insert(row_index + 1, new_row);
        self.renumber_from(row_index + 2);
        self.dirty += 1;
        self.rehighlight_range(row_index, row_index + 1);

        Some(indent)
    }

    /// Append row `row_index + 1` onto row `row_index` and delete it.
    pub fn join_row(&mut self, row_index: usize) {
        if row_index + 1 >= self.rows.len() {
            return;
        }
        let next = self.rows.remove(row_index + 1);
        let tab_stop = self.tab_stop;
        let row = &mut self.rows[row_index];
        row.raw.extend_from_slice(&next.raw);
        row.update_render(tab_stop);
        // What the row after `next` used to see.
        row.ends_in_open_comment = next.ends_in_open_comment;
        self.renumber_from(row_index + 1);
        self.dirty += 1;
        self.rehighlight_from(row_index);
    }

    /// Paint `tag` over `len` rendered columns starting at `start`. Used for the
    /// transient search match. The next highlight pass of the row clears it.
    pub fn overlay_tags(
        &mut self,
        row_index: usize,
        start: usize,
        len: usize,
        tag: HighlightTag,
    ) {
        let Some(row) = self.rows.get_mut(row_index) else {
            return;
        };
        let end = start.saturating_add(len).min(row.tags.len());
        for it in row.tags.iter_mut().take(end).skip(start) {
            *it = tag;
        }
    }

    /// Put back tags saved before [`Self::overlay_tags`]. Ignored if the row's
    /// rendered length has changed since.
    pub fn restore_tags(&mut self, row_index: usize, tags: Vec<HighlightTag>) {
        if let Some(row) = self.rows.get_mut(row_index) {
            if row.tags.len() == tags.len() {
                row.tags = tags;
            }
        }
    }

    /// Highlight row `start`, then keep going down while a row's
    /// `ends_in_open_comment` flag changes. Never goes past the last row.
    pub fn rehighlight_from(&mut self, start: usize) { self.rehighlight_range(start, start); }

    fn rehighlight_all(&mut self) {
        if let Some(last) = self.rows.len().checked_sub(1) {
            self.rehighlight_range(0, last);
        }
    }

    /// Rows `start..=force_until` are always highlighted. Past that, the cascade
    /// continues only while the comment flag changes.
    fn rehighlight_range(&mut self, start: usize, force_until: usize) {
        let syntax = self.syntax;
        let mut index = start;
        let mut passes = 0;

        while index < self.rows.len() {
            let starts_in_comment =
                index > 0 && self.rows[index - 1].ends_in_open_comment;
            let row = &mut self.rows[index];
            let HighlightedRow {
                tags,
                ends_in_open_comment,
            } = highlight_row(&row.render, syntax, starts_in_comment);
            let changed = row.ends_in_open_comment != ends_in_open_comment;
            row.tags = tags;
            row.ends_in_open_comment = ends_in_open_comment;
            passes += 1;

            if !changed && index >= force_until {
                break;
            }
            index += 1;
        }

        DEBUG_TUI_SYN_HI.then(|| {
            tracing::debug!(message = "rehighlight", start = start, passes = passes);
        });
    }

    fn renumber_from(&mut self, start: usize) {
        for (index, row) in self.rows.iter_mut().enumerate().skip(start) {
            row.index = index;
        }
    }
}
