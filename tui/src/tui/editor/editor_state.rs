// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The single, explicitly owned value that holds everything the editor knows. Every
//! operation takes `&mut EditorState` (or `&EditorState` for rendering), nothing
//! keeps its own copy of the caret or the viewport.

use std::time::Instant;

use crate::{CommonError, CommonErrorType, CommonResult, EditorCommand, EditorConfig,
            HELP_MESSAGE, InlineString, Prompt, RowStore,
            STATUS_AND_MESSAGE_BAR_HEIGHT, SelectionRange, SyntaxProfile,
            inline_string};

/// Caret position in raw coordinates. `col` may equal the row size (end of line) and
/// `row` may equal the number of rows (the line past the end of the buffer).
///
/// Ordering is by row, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Caret {
    pub row: usize,
    pub col: usize,
}

impl Caret {
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self { Self { row, col } }
}

/// First visible file row and first visible rendered column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollOffset {
    pub row_offset: usize,
    pub col_offset: usize,
}

/// Size of the text area, which excludes the status and message bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub screen_rows: usize,
    pub screen_cols: usize,
}

impl WindowSize {
    /// # Errors
    ///
    /// Returns [`CommonErrorType::DisplaySizeTooSmall`] if there is no room for at
    /// least one text row next to the status and message bars.
    pub fn try_from_terminal_size(cols: u16, rows: u16) -> CommonResult<Self> {
        let rows = usize::from(rows);
        let cols = usize::from(cols);
        if rows <= STATUS_AND_MESSAGE_BAR_HEIGHT || cols == 0 {
            return CommonError::new_error_result(
                CommonErrorType::DisplaySizeTooSmall,
                &format!("Terminal is too small: {cols} columns x {rows} rows"),
            );
        }
        Ok(Self {
            screen_rows: rows - STATUS_AND_MESSAGE_BAR_HEIGHT,
            screen_cols: cols,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: InlineString,
    pub set_at: Instant,
}

#[derive(Debug)]
pub struct EditorState {
    pub rows: RowStore,
    pub caret: Caret,
    /// Column the caret returns to after moving through shorter rows.
    pub desired_col: usize,
    pub scroll: ScrollOffset,
    pub window_size: WindowSize,
    pub selection: SelectionRange,
    pub clipboard: Vec<u8>,
    pub filename: Option<String>,
    pub status_message: Option<StatusMessage>,
    /// While this is `Some`, key presses go to the prompt.
    pub prompt: Option<Prompt>,
    pub config: EditorConfig,
    pub last_command: Option<EditorCommand>,
    pub quit_times_remaining: u8,
}

impl EditorState {
    #[must_use]
    pub fn new(config: EditorConfig, window_size: WindowSize) -> Self {
        let mut it = Self {
            rows: RowStore::new(config.tab_stop),
            caret: Caret::default(),
            desired_col: 0,
            scroll: ScrollOffset::default(),
            window_size,
            selection: SelectionRange::default(),
            clipboard: vec![],
            filename: None,
            status_message: None,
            prompt: None,
            config,
            last_command: None,
            quit_times_remaining: config.quit_times,
        };
        it.set_status_message(HELP_MESSAGE);
        it
    }

    pub fn set_status_message(&mut self, text: &str) {
        self.status_message = Some(StatusMessage {
            text: inline_string!("{text}"),
            set_at: Instant::now(),
        });
    }

    pub fn clear_status_message(&mut self) { self.status_message = None; }

    /// The status message text, if it is still within its display duration at `now`.
    #[must_use]
    pub fn visible_status_message(&self, now: Instant) -> Option<&str> {
        self.status_message
            .as_ref()
            .filter(|it| now.saturating_duration_since(it.set_at) < self.config.message_duration)
            .map(|it| it.text.as_str())
    }

    #[must_use]
    pub fn syntax(&self) -> Option<&'static SyntaxProfile> { self.rows.syntax() }

    #[must_use]
    pub fn is_dirty(&self) -> bool { self.rows.is_dirty() }

    /// Size of the row under the caret, 0 past the end of the buffer.
    #[must_use]
    pub fn current_row_size(&self) -> usize { self.rows.row_size(self.caret.row) }

    /// Keep the caret inside the buffer after rows were removed or shortened.
    pub fn clamp_caret(&mut self) {
        self.caret.row = self.caret.row.min(self.rows.len());
        self.caret.col = self.caret.col.min(self.current_row_size());
    }

    /// Move the caret and forget any selection.
    pub fn set_caret(&mut self, caret: Caret) {
        self.caret = caret;
        self.clamp_caret();
        self.desired_col = self.caret.col;
        self.selection.collapse_to(self.caret);
    }
}
