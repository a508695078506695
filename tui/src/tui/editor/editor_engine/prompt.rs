// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A one-line prompt drawn in the message bar. The kinds of prompt form a closed set,
//! and the caller decides what a confirmed or cancelled prompt means for each kind.

use crate::{EditorCommand, EditorState, InlineString, SearchSession, inline_string};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    /// Plain text entry for a filename.
    SaveAs,
    /// Live search, rerun on every key press.
    Search(SearchSession),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: InlineString,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Pending,
    Confirmed,
    Cancelled,
}

impl Prompt {
    #[must_use]
    pub fn save_as() -> Self {
        Self {
            kind: PromptKind::SaveAs,
            input: InlineString::new(),
        }
    }

    #[must_use]
    pub fn search(state: &EditorState) -> Self {
        Self {
            kind: PromptKind::Search(SearchSession::start(state)),
            input: InlineString::new(),
        }
    }

    /// What the message bar shows while the prompt is open.
    #[must_use]
    pub fn display_text(&self) -> InlineString {
        match self.kind {
            PromptKind::SaveAs => inline_string!("Save as: {} (ESC to cancel)", self.input),
            PromptKind::Search(_) => inline_string!(
                "Search: {} (Arrows to navigate | ESC to cancel)",
                self.input
            ),
        }
    }

    /// Apply one key press to the input. A search prompt also reruns its search.
    /// Enter only confirms a non-empty input.
    pub fn handle_command(
        &mut self,
        state: &mut EditorState,
        command: EditorCommand,
    ) -> PromptOutcome {
        let outcome = match command {
            EditorCommand::Escape => PromptOutcome::Cancelled,
            EditorCommand::Enter if !self.input.is_empty() => PromptOutcome::Confirmed,
            EditorCommand::Backspace | EditorCommand::Delete => {
                self.input.pop();
                PromptOutcome::Pending
            }
            EditorCommand::InsertChar(byte) => {
                self.input.push(char::from(byte));
                PromptOutcome::Pending
            }
            _ => PromptOutcome::Pending,
        };

        if let PromptKind::Search(session) = &mut self.kind {
            session.on_key(state, &self.input, command);
        }

        outcome
    }
}
