// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Caret movement. Horizontal moves stay on the current row and set the desired
//! column. Vertical moves return to the desired column where the row is long enough.
//! The caret may sit on the row just past the last one, which is where typing appends
//! a new row.

use super::SelectMode;
use crate::{Direction, EditorState};

pub fn move_caret(state: &mut EditorState, direction: Direction, sel_mod: SelectMode) {
    let prev_caret = state.caret;

    match direction {
        Direction::Left => {
            if state.caret.col > 0 {
                state.caret.col -= 1;
            }
            state.desired_col = state.caret.col;
        }
        Direction::Right => {
            if state.caret.col < state.current_row_size() {
                state.caret.col += 1;
            }
            state.desired_col = state.caret.col;
        }
        Direction::Up => {
            if state.caret.row > 0 {
                state.caret.row -= 1;
            }
            snap_to_desired_col(state);
        }
        Direction::Down => {
            if state.caret.row < state.rows.len() {
                state.caret.row += 1;
            }
            snap_to_desired_col(state);
        }
    }

    sel_mod.update_selection_after_caret_movement(state, prev_caret);
}

pub fn home(state: &mut EditorState, sel_mod: SelectMode) {
    let prev_caret = state.caret;
    state.caret.col = 0;
    state.desired_col = 0;
    sel_mod.update_selection_after_caret_movement(state, prev_caret);
}

pub fn end(state: &mut EditorState, sel_mod: SelectMode) {
    let prev_caret = state.caret;
    state.caret.col = state.current_row_size();
    state.desired_col = state.caret.col;
    sel_mod.update_selection_after_caret_movement(state, prev_caret);
}

/// Jump to the top of the screen, then one screen further up. Drops the selection.
pub fn page_up(state: &mut EditorState) {
    state.caret.row = state.scroll.row_offset.min(state.rows.len());
    for _ in 0..state.window_size.screen_rows {
        move_caret(state, Direction::Up, SelectMode::Disabled);
    }
}

/// Jump to the bottom of the screen, then one screen further down. Drops the
/// selection.
pub fn page_down(state: &mut EditorState) {
    let screen_bottom = state.scroll.row_offset + state.window_size.screen_rows - 1;
    state.caret.row = screen_bottom.min(state.rows.len());
    for _ in 0..state.window_size.screen_rows {
        move_caret(state, Direction::Down, SelectMode::Disabled);
    }
}

fn snap_to_desired_col(state: &mut EditorState) {
    state.caret.col = state.desired_col.min(state.current_row_size());
}
