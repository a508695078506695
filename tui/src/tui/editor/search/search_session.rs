// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Incremental search. A [`SearchSession`] lives inside the search prompt from the
//! moment `Ctrl-F` is pressed until the prompt is confirmed or cancelled.
//!
//! - Every key press rescans the rendered rows for the query, skipping
//!   `match_offset` earlier matches (at most one match per row).
//! - Arrow keys move `match_offset` forward (Right, Down) or back (Left, Up).
//! - The match is tagged [`HighlightTag::Match`]. The tags it covered are saved, and
//!   put back before the next scan and when the session ends.
//! - Cancelling restores the [`SearchSnapshot`] taken when the session began.

use crate::{Caret, DEBUG_TUI_MOD, Direction, EditorCommand, EditorState, HighlightTag,
            ScrollOffset, SelectionRange, rx_to_cx};

/// Everything that search may move, captured once when the session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSnapshot {
    pub caret: Caret,
    pub desired_col: usize,
    pub scroll: ScrollOffset,
    pub selection: SelectionRange,
}

impl SearchSnapshot {
    #[must_use]
    pub fn capture(state: &EditorState) -> Self {
        Self {
            caret: state.caret,
            desired_col: state.desired_col,
            scroll: state.scroll,
            selection: state.selection,
        }
    }

    pub fn restore(&self, state: &mut EditorState) {
        state.caret = self.caret;
        state.desired_col = self.desired_col;
        state.scroll = self.scroll;
        state.selection = self.selection;
    }
}

/// Tags of one row as they were before the match overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SavedTags {
    row_index: usize,
    tags: Vec<HighlightTag>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSession {
    pub snapshot: SearchSnapshot,
    /// How many matches to skip, counting from the top of the buffer.
    pub match_offset: usize,
    saved_tags: Option<SavedTags>,
}

/// Result of one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Caret),
    NotFound,
    /// Empty query, or the session just ended.
    Skipped,
}

impl SearchSession {
    #[must_use]
    pub fn start(state: &EditorState) -> Self {
        Self {
            snapshot: SearchSnapshot::capture(state),
            match_offset: 0,
            saved_tags: None,
        }
    }

    /// Handle one key press made while the search prompt is open. `query` is the
    /// prompt text after the key press was applied to it.
    pub fn on_key(
        &mut self,
        state: &mut EditorState,
        query: &str,
        command: EditorCommand,
    ) -> SearchOutcome {
        self.clear_overlay(state);

        match command {
            EditorCommand::Enter | EditorCommand::Escape => {
                self.match_offset = 0;
                return SearchOutcome::Skipped;
            }
            EditorCommand::Move(Direction::Right | Direction::Down) => {
                self.match_offset += 1;
            }
            EditorCommand::Move(Direction::Left | Direction::Up) => {
                self.match_offset = self.match_offset.saturating_sub(1);
            }
            _ => {}
        }

        if query.is_empty() {
            return SearchOutcome::Skipped;
        }

        let outcome = self.find_and_highlight(state, query.as_bytes());

        // Ran off the last match, so the next arrow press starts from the last hit.
        if outcome == SearchOutcome::NotFound && self.match_offset > 0 {
            self.match_offset -= 1;
        }

        DEBUG_TUI_MOD.then(|| {
            tracing::debug!(
                message = "search",
                query = query,
                match_offset = self.match_offset,
                outcome = ?outcome
            );
        });

        outcome
    }

    /// Leave the caret at the current match.
    pub fn confirm(mut self, state: &mut EditorState) { self.clear_overlay(state); }

    /// Put back the caret, scroll offsets, selection, and tags exactly as they were.
    pub fn cancel(mut self, state: &mut EditorState) {
        self.clear_overlay(state);
        self.snapshot.restore(state);
    }

    fn find_and_highlight(&mut self, state: &mut EditorState, query: &[u8]) -> SearchOutcome {
        let tab_stop = state.rows.tab_stop();
        let mut to_skip = self.match_offset;

        let hit = state.rows.rows().iter().enumerate().find_map(|(row_index, row)| {
            let rx = find_subslice(&row.render, query)?;
            if to_skip == 0 {
                Some((row_index, rx, rx_to_cx(row, rx, tab_stop)))
            } else {
                to_skip -= 1;
                None
            }
        });

        let Some((row_index, rx, cx)) = hit else {
            return SearchOutcome::NotFound;
        };

        if let Some(row) = state.rows.get(row_index) {
            self.saved_tags = Some(SavedTags {
                row_index,
                tags: row.tags.clone(),
            });
        }
        state
            .rows
            .overlay_tags(row_index, rx, query.len(), HighlightTag::Match);

        let caret = Caret::new(row_index, cx);
        state.set_caret(caret);
        // Bring the match to the top of the screen.
        state.scroll.row_offset = row_index;

        SearchOutcome::Found(caret)
    }

    fn clear_overlay(&mut self, state: &mut EditorState) {
        if let Some(SavedTags { row_index, tags }) = self.saved_tags.take() {
            state.rows.restore_tags(row_index, tags);
        }
    }
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|it| it == needle)
}
