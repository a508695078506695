// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Compose one frame from the editor state.
//!
//! ```text
//! ╭──────────────────────────────╮
//! │ 1 int main() {               │ ← gutter, then the visible slice of `render`
//! │ 2     return 0;              │
//! │ 3 }                          │
//! │~                             │ ← past the last row
//! │main.c - 3 lines    C | 1,1   │ ← status bar, inverted
//! │HELP: Ctrl-S = save | ...     │ ← message bar
//! ╰──────────────────────────────╯
//! ```
//!
//! Rows are bytes, one byte per column. Bytes that are not printable ASCII are drawn
//! as `?`.

use std::time::Instant;

use super::scroll_editor_content::{caret_rx, gutter_width, scroll_to_caret, text_width};
use crate::{EditorState, FILLER_GLYPH, GUTTER_COLOR, HighlightTag, KILO_VERSION,
            NO_FILETYPE, RenderOp, RenderOps, Row, STATUS_FILENAME_MAX_LEN, ScreenPos,
            WELCOME_BANNER_PREFIX, cx_to_rx, render_ops};

/// Scroll the caret into view, then build the frame.
pub fn render_engine(state: &mut EditorState, now: Instant) -> RenderOps {
    scroll_to_caret(state);

    let mut render_ops = render_ops!(
        @new
        RenderOp::HideCursor,
        RenderOp::MoveCursorPositionAbs(ScreenPos::new(0, 0)),
    );
    render_content(state, &mut render_ops);
    render_status_bar(state, &mut render_ops);
    render_message_bar(state, now, &mut render_ops);
    render_caret(state, &mut render_ops);
    render_ops
}

pub fn render_content(state: &EditorState, render_ops: &mut RenderOps) {
    let row_count = state.rows.len();
    let gutter_digits = gutter_width(row_count).saturating_sub(1);

    for screen_row in 0..state.window_size.screen_rows {
        let file_row = screen_row + state.scroll.row_offset;
        match state.rows.get(file_row) {
            Some(row) => {
                render_ops!(
                    @add_to render_ops =>
                    RenderOp::SetFgColor(GUTTER_COLOR),
                    RenderOp::PaintText(format!("{:>gutter_digits$} ", file_row + 1)),
                    RenderOp::ResetColor,
                );
                render_row(state, row, render_ops);
            }
            None if row_count == 0 && screen_row == state.window_size.screen_rows / 3 => {
                render_empty_state(state, render_ops);
            }
            None => *render_ops += RenderOp::PaintText(FILLER_GLYPH.into()),
        }
        render_ops!(
            @add_to render_ops =>
            RenderOp::ClearCurrentLineToEnd,
            RenderOp::NewLine,
        );
    }
}

/// The visible slice of the row, in runs of the same tag and selection state.
fn render_row(state: &EditorState, row: &Row, render_ops: &mut RenderOps) {
    let tab_stop = state.rows.tab_stop();
    let start = state.scroll.col_offset.min(row.render_size());
    let end = (start + text_width(state)).min(row.render_size());

    let selected = state
        .selection
        .cols_on_row(row.index, row.size())
        .map(|(start_cx, end_cx)| {
            cx_to_rx(row, start_cx, tab_stop)..cx_to_rx(row, end_cx, tab_stop)
        });
    let is_selected = |rx: usize| selected.as_ref().is_some_and(|it| it.contains(&rx));

    let mut run = String::new();
    let mut run_style: Option<(HighlightTag, bool)> = None;

    for rx in start..end {
        let style = (row.tags[rx], is_selected(rx));
        if run_style != Some(style) {
            if let Some(prev_style) = run_style {
                push_run(render_ops, prev_style, std::mem::take(&mut run));
            }
            run_style = Some(style);
        }
        run.push(displayable(row.render[rx]));
    }

    if let Some(style) = run_style {
        push_run(render_ops, style, run);
    }
}

fn push_run(render_ops: &mut RenderOps, (tag, selected): (HighlightTag, bool), text: String) {
    if selected {
        *render_ops += RenderOp::SetInverse;
    }
    if tag != HighlightTag::Normal {
        *render_ops += RenderOp::SetFgColor(tag.color());
    }
    *render_ops += RenderOp::PaintText(text);
    if tag != HighlightTag::Normal {
        *render_ops += RenderOp::ResetColor;
    }
    if selected {
        *render_ops += RenderOp::ResetAttributes;
    }
}

fn displayable(byte: u8) -> char {
    if byte.is_ascii_graphic() || byte == b' ' {
        char::from(byte)
    } else {
        '?'
    }
}

/// The welcome banner, centred, drawn a third of the way down an empty buffer.
pub fn render_empty_state(state: &EditorState, render_ops: &mut RenderOps) {
    let screen_cols = state.window_size.screen_cols;
    let banner: String = format!("{WELCOME_BANNER_PREFIX} {KILO_VERSION}")
        .chars()
        .take(screen_cols)
        .collect();
    let mut padding = (screen_cols - banner.len()) / 2;

    let mut line = String::with_capacity(screen_cols);
    if padding > 0 {
        line.push_str(FILLER_GLYPH);
        padding -= 1;
    }
    line.push_str(&" ".repeat(padding));
    line.push_str(&banner);
    *render_ops += RenderOp::PaintText(line);
}

/// `<name> - <n> lines [(modified)]` on the left, `<filetype> | <row>,<col>` on the
/// right, drawn inverted across the whole width.
pub fn render_status_bar(state: &EditorState, render_ops: &mut RenderOps) {
    let screen_cols = state.window_size.screen_cols;
    let name = state.filename.as_deref().unwrap_or("[No Name]");
    let max_name_len = STATUS_FILENAME_MAX_LEN;
    let left = format!(
        "{name:.max_name_len$} - {} lines{}",
        state.rows.len(),
        if state.is_dirty() { " (modified)" } else { "" }
    );
    let right = format!(
        "{} | {},{}",
        state.syntax().map_or(NO_FILETYPE, |it| it.file_type),
        state.caret.row + 1,
        state.caret.col + 1
    );

    let mut line: String = left.chars().take(screen_cols).collect();
    let mut len = line.chars().count();
    let right_len = right.chars().count();
    while len < screen_cols {
        if screen_cols - len == right_len {
            line.push_str(&right);
            break;
        }
        line.push(' ');
        len += 1;
    }

    render_ops!(
        @add_to render_ops =>
        RenderOp::SetInverse,
        RenderOp::PaintText(line),
        RenderOp::ResetAttributes,
        RenderOp::NewLine,
    );
}

/// The open prompt, or else the status message while it is fresh.
pub fn render_message_bar(state: &EditorState, now: Instant, render_ops: &mut RenderOps) {
    *render_ops += RenderOp::ClearCurrentLineToEnd;

    let text = match &state.prompt {
        Some(prompt) => Some(prompt.display_text()),
        None => state.visible_status_message(now).map(Into::into),
    };
    if let Some(text) = text {
        let visible: String = text.chars().take(state.window_size.screen_cols).collect();
        *render_ops += RenderOp::PaintText(visible);
    }
}

pub fn render_caret(state: &EditorState, render_ops: &mut RenderOps) {
    let gutter = gutter_width(state.rows.len());
    let pos = ScreenPos::new(
        state.caret.row.saturating_sub(state.scroll.row_offset),
        caret_rx(state).saturating_sub(state.scroll.col_offset) + gutter,
    );
    render_ops!(
        @add_to render_ops =>
        RenderOp::MoveCursorPositionAbs(pos),
        RenderOp::ShowCursor,
    );
}
