// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Scroll offsets are derived from the caret, once per frame, before drawing.

use crate::{EditorState, cx_to_rx};

/// Width of the line number gutter: the digits of the largest row number plus one
/// space. An empty buffer has no gutter.
#[must_use]
pub fn gutter_width(row_count: usize) -> usize {
    if row_count == 0 {
        0
    } else {
        row_count.to_string().len() + 1
    }
}

/// Columns left for row content once the gutter is drawn. Always at least 1.
#[must_use]
pub fn text_width(state: &EditorState) -> usize {
    state
        .window_size
        .screen_cols
        .saturating_sub(gutter_width(state.rows.len()))
        .max(1)
}

/// The caret's rendered column, 0 past the end of the buffer.
#[must_use]
pub fn caret_rx(state: &EditorState) -> usize {
    state
        .rows
        .get(state.caret.row)
        .map_or(0, |row| cx_to_rx(row, state.caret.col, state.rows.tab_stop()))
}

/// Adjust the scroll offsets so that the caret is on screen.
pub fn scroll_to_caret(state: &mut EditorState) {
    let screen_rows = state.window_size.screen_rows;
    let screen_cols = text_width(state);
    let rx = caret_rx(state);
    let caret_row = state.caret.row;
    let scroll = &mut state.scroll;

    if caret_row < scroll.row_offset {
        scroll.row_offset = caret_row;
    }
    if caret_row >= scroll.row_offset + screen_rows {
        scroll.row_offset = caret_row + 1 - screen_rows;
    }

    if rx < scroll.col_offset {
        scroll.col_offset = rx;
    }
    if rx >= scroll.col_offset + screen_cols {
        scroll.col_offset = rx + 1 - screen_cols;
    }
}
