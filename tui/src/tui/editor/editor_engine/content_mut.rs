// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Edits made at the caret. Each one goes through the [`crate::RowStore`], which keeps
//! render, tags, indices, and the dirty counter up to date, then moves the caret and
//! drops any selection.

use crate::{AutoIndent, Caret, DEBUG_TUI_MOD, EditorCommand, EditorState};

pub fn insert_char(state: &mut EditorState, ch: u8) {
    let Caret { row, mut col } = state.caret;

    if row == state.rows.len() {
        state.rows.insert_row(row, b"");
    }

    if ch == b'}' && state.last_command == Some(EditorCommand::Enter) {
        col = dedent_for_closing_brace(state, row, col);
    }

    state.rows.insert_char(row, col, ch);
    state.set_caret(Caret::new(row, col + 1));
}

/// Typing `}` right after Enter removes one tab stop of the auto-indent, if the
/// tab stop just before the caret is all spaces. Returns the new caret column.
fn dedent_for_closing_brace(state: &mut EditorState, row: usize, col: usize) -> usize {
    let tab_stop = state.rows.tab_stop();
    let Some(current) = state.rows.get(row) else {
        return col;
    };
    if col < tab_stop || !current.raw[col - tab_stop..col].iter().all(|it| *it == b' ') {
        return col;
    }
    for it in (col - tab_stop..col).rev() {
        state.rows.delete_char(row, it);
    }
    col - tab_stop
}

/// Break the row at the caret. Splitting mid-row carries the indentation over, and the
/// caret lands after it on the new row.
pub fn insert_newline(state: &mut EditorState) {
    let Caret { row, col } = state.caret;

    let indent = if col == 0 {
        state.rows.insert_row(row, b"");
        0
    } else {
        state
            .rows
            .split_row(row, col, AutoIndent::Preserve)
            .unwrap_or_default()
    };

    DEBUG_TUI_MOD.then(|| {
        tracing::debug!(message = "newline", row = row, col = col, indent = indent);
    });

    // Land after all of the new row's leading spaces, not just the inserted ones.
    let col = state.rows.get(row + 1).map_or(0, |it| it.indent);
    state.set_caret(Caret::new(row + 1, col));
}

/// Insert spaces up to the next tab stop.
pub fn insert_tab(state: &mut EditorState) {
    let tab_stop = state.rows.tab_stop();
    let count = tab_stop - state.caret.col % tab_stop;
    for _ in 0..count {
        insert_char(state, b' ');
    }
}

/// Delete the character before the caret. A run of spaces is deleted back to the
/// previous tab stop. At the start of a row, the row is joined onto the one above.
pub fn backspace(state: &mut EditorState) {
    let Caret { row, col } = state.caret;
    if row == state.rows.len() || (row == 0 && col == 0) {
        state.selection.collapse_to(state.caret);
        return;
    }

    if col == 0 {
        let prev_size = state.rows.row_size(row - 1);
        state.rows.join_row(row - 1);
        state.set_caret(Caret::new(row - 1, prev_size));
        return;
    }

    let tab_stop = state.rows.tab_stop();
    let previous_stop = (col - 1) / tab_stop * tab_stop;
    let mut new_col = col - 1;
    if let Some(current) = state.rows.get(row)
        && current.raw[col - 1] == b' '
    {
        while new_col > previous_stop && current.raw[new_col - 1] == b' ' {
            new_col -= 1;
        }
    }

    for it in (new_col..col).rev() {
        state.rows.delete_char(row, it);
    }
    state.set_caret(Caret::new(row, new_col));
}

/// Delete the character under the caret. At the end of a row, the next row is
/// joined onto this one.
pub fn delete_forward(state: &mut EditorState) {
    let Caret { row, col } = state.caret;
    if row < state.rows.len() {
        if col < state.rows.row_size(row) {
            state.rows.delete_char(row, col);
        } else {
            state.rows.join_row(row);
        }
    }
    state.set_caret(Caret::new(row, col));
}
