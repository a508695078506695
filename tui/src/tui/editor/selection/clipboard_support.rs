// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AutoIndent, Caret, DEBUG_TUI_COPY_PASTE, EditorState, inline_string};

/// Copy the selected text into the editor's clipboard, replacing what was there. The
/// selection is kept. With no selection the clipboard is left alone.
pub fn copy_selection_to_clipboard(state: &mut EditorState) {
    if !state.selection.is_selecting() {
        state.set_status_message("Nothing selected");
        return;
    }

    let (start, end) = state.selection.normalized();
    let mut acc: Vec<u8> = vec![];
    let mut cursor = start;

    while cursor < end {
        let Some(row) = state.rows.get(cursor.row) else {
            break;
        };
        if cursor.col < row.size() {
            acc.push(row.raw[cursor.col]);
            cursor.col += 1;
        } else {
            acc.push(b'\n');
            cursor = Caret::new(cursor.row + 1, 0);
        }
    }

    DEBUG_TUI_COPY_PASTE.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "📋📋📋 Selected Text was copied to clipboard",
            copied = %String::from_utf8_lossy(&acc),
        );
    });

    let message = inline_string!("{} characters copied", acc.len());
    state.clipboard = acc;
    state.set_status_message(&message);
}

/// Insert the clipboard at the caret. Each `\n` splits the current row, so the
/// pasted text keeps its row structure. The caret ends up after the pasted text.
pub fn paste_clipboard_at_caret(state: &mut EditorState) {
    if state.clipboard.is_empty() {
        state.set_status_message("Clipboard is empty");
        return;
    }

    let text = state.clipboard.clone();
    let mut caret = state.caret;

    if caret.row == state.rows.len() {
        state.rows.insert_row(caret.row, b"");
    }

    for byte in text {
        if byte == b'\n' {
            state.rows.split_row(caret.row, caret.col, AutoIndent::None);
            caret = Caret::new(caret.row + 1, 0);
        } else {
            state.rows.insert_char(caret.row, caret.col, byte);
            caret.col += 1;
        }
    }

    DEBUG_TUI_COPY_PASTE.then(|| {
        tracing::debug!(
            message = "📋📋📋 Clipboard was pasted",
            bytes = state.clipboard.len(),
            caret = ?caret,
        );
    });

    state.set_caret(caret);
}
