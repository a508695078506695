// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Prompt, PromptKind, PromptOutcome, SelectMode, caret_mut, content_mut};
use crate::{DEBUG_TUI_MOD, EditorCommand, EditorState, copy_selection_to_clipboard,
            inline_string, paste_clipboard_at_caret, save_file, save_file_as};

/// What the main event loop should do after a command was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Continue,
    Exit,
}

/// Apply one command to the editor. While a prompt is open, commands go to the prompt.
pub fn process_command(state: &mut EditorState, command: EditorCommand) -> DispatchOutcome {
    DEBUG_TUI_MOD.then(|| {
        tracing::debug!(message = "process_command", command = %command);
    });

    if let Some(prompt) = state.prompt.take() {
        process_prompt_command(state, prompt, command);
        return DispatchOutcome::Continue;
    }

    match command {
        EditorCommand::Quit => {
            if state.is_dirty() && state.quit_times_remaining > 0 {
                state.quit_times_remaining -= 1;
                state.set_status_message(&inline_string!(
                    "File has unsaved changes. Press CTRL-Q {} more time(s) to quit, or press CTRL-S to save.",
                    state.quit_times_remaining + 1
                ));
                return DispatchOutcome::Continue;
            }
            return DispatchOutcome::Exit;
        }
        EditorCommand::Save => {
            if state.filename.is_some() {
                save_file(state);
            } else {
                state.prompt = Some(Prompt::save_as());
            }
        }
        EditorCommand::Find => state.prompt = Some(Prompt::search(state)),
        EditorCommand::Copy => copy_selection_to_clipboard(state),
        EditorCommand::Paste => paste_clipboard_at_caret(state),
        EditorCommand::Escape => state.selection.cancel(),
        EditorCommand::Move(direction) => {
            caret_mut::move_caret(state, direction, SelectMode::Disabled);
        }
        EditorCommand::ExtendSelection(direction) => {
            caret_mut::move_caret(state, direction, SelectMode::Enabled);
        }
        EditorCommand::Home => caret_mut::home(state, SelectMode::Disabled),
        EditorCommand::End => caret_mut::end(state, SelectMode::Disabled),
        EditorCommand::PageUp => caret_mut::page_up(state),
        EditorCommand::PageDown => caret_mut::page_down(state),
        EditorCommand::Enter => content_mut::insert_newline(state),
        EditorCommand::Backspace => content_mut::backspace(state),
        EditorCommand::Delete => content_mut::delete_forward(state),
        EditorCommand::Tab => content_mut::insert_tab(state),
        EditorCommand::InsertChar(ch) => content_mut::insert_char(state, ch),
        // The next frame redraws everything anyway.
        EditorCommand::Refresh | EditorCommand::Unbound(_) => {}
    }

    state.quit_times_remaining = state.config.quit_times;
    state.last_command = Some(command);
    DispatchOutcome::Continue
}

fn process_prompt_command(state: &mut EditorState, mut prompt: Prompt, command: EditorCommand) {
    let outcome = prompt.handle_command(state, command);
    // A closed prompt leaves an empty message bar, unless its action reports something.
    if outcome != PromptOutcome::Pending {
        state.clear_status_message();
    }
    match outcome {
        PromptOutcome::Pending => state.prompt = Some(prompt),
        PromptOutcome::Confirmed => match prompt.kind {
            PromptKind::SaveAs => save_file_as(state, &prompt.input),
            PromptKind::Search(session) => session.confirm(state),
        },
        PromptOutcome::Cancelled => match prompt.kind {
            PromptKind::SaveAs => state.set_status_message("Save aborted"),
            PromptKind::Search(session) => session.cancel(state),
        },
    }
}
