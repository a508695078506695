// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Caret, EditorState};

/// Whether a caret movement drags the selection along with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectMode {
    /// Shift + movement.
    Enabled,
    Disabled,
}

impl SelectMode {
    /// Update the selection after the caret moved away from `prev_caret`.
    ///
    /// - [`SelectMode::Disabled`] forgets any selection.
    /// - [`SelectMode::Enabled`] puts the anchor at `prev_caret` if nothing was
    ///   selected yet, then moves the endpoint to the caret.
    pub fn update_selection_after_caret_movement(
        self,
        state: &mut EditorState,
        prev_caret: Caret,
    ) {
        match self {
            SelectMode::Disabled => state.selection.collapse_to(state.caret),
            SelectMode::Enabled => {
                if !state.selection.is_selecting() {
                    state.selection.anchor = prev_caret;
                }
                state.selection.endpoint = state.caret;
            }
        }
    }
}
