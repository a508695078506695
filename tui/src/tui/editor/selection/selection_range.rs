// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::Caret;

/// A selection is an anchor (where it started) and a live endpoint (where the caret
/// is now). There is a selection only when the two differ.
///
/// The range is normalized to `[start, end)`: the character at `start` is selected,
/// the character at `end` is not. Crossing a row boundary selects the newline at the
/// end of that row.
///
/// ```text
/// anchor = (row 0, col 4)      endpoint = (row 1, col 4)
///
/// ╭0123456789AB╮
/// 0int main() {│   ← cols 4.. selected, plus the newline
/// 1    return 0│   ← cols ..4 selected
/// ╰────────────╯
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionRange {
    pub anchor: Caret,
    pub endpoint: Caret,
}

impl SelectionRange {
    #[must_use]
    pub fn new(anchor: Caret, endpoint: Caret) -> Self { Self { anchor, endpoint } }

    #[must_use]
    pub fn is_selecting(&self) -> bool { self.anchor != self.endpoint }

    /// `(start, end)` with `start <= end`, whichever way the selection was made.
    #[must_use]
    pub fn normalized(&self) -> (Caret, Caret) {
        if self.endpoint < self.anchor {
            (self.endpoint, self.anchor)
        } else {
            (self.anchor, self.endpoint)
        }
    }

    /// No selection, both ends at `caret`.
    pub fn collapse_to(&mut self, caret: Caret) {
        self.anchor = caret;
        self.endpoint = caret;
    }

    /// Drop the selection, keeping the live endpoint.
    pub fn cancel(&mut self) { self.anchor = self.endpoint; }

    #[must_use]
    pub fn contains(&self, caret: Caret) -> bool {
        let (start, end) = self.normalized();
        start <= caret && caret < end
    }

    /// Raw columns `[start_col, end_col)` selected on `row`, for a row that holds
    /// `row_size` bytes. `None` if nothing on this row is selected. The trailing
    /// newline is not a column, so a row that is only selected through its newline
    /// yields `None`.
    #[must_use]
    pub fn cols_on_row(&self, row: usize, row_size: usize) -> Option<(usize, usize)> {
        if !self.is_selecting() {
            return None;
        }
        let (start, end) = self.normalized();
        if row < start.row || row > end.row {
            return None;
        }
        let start_col = if row == start.row { start.col.min(row_size) } else { 0 };
        let end_col = if row == end.row { end.col.min(row_size) } else { row_size };
        (start_col < end_col).then_some((start_col, end_col))
    }
}
