// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Scenarios that drive the editor only through [`process_command`], the same way the
//! main event loop does.

use std::time::Instant;

use super::{DispatchOutcome, process_command};
use crate::{Caret, Direction, EditorCommand, EditorConfig, EditorState, RowStore,
            WindowSize, try_create_temp_dir};

fn state_with(lines: &[&str]) -> EditorState {
    let mut state = EditorState::new(
        EditorConfig::default(),
        WindowSize::try_from_terminal_size(80, 24).unwrap(),
    );
    state.rows = RowStore::from_lines(lines, 4, None);
    state
}

fn lines(state: &EditorState) -> Vec<String> {
    state
        .rows
        .rows()
        .iter()
        .map(|it| String::from_utf8_lossy(&it.raw).to_string())
        .collect()
}

fn run(state: &mut EditorState, commands: &[EditorCommand]) -> DispatchOutcome {
    let mut outcome = DispatchOutcome::Continue;
    for command in commands {
        outcome = process_command(state, *command);
    }
    outcome
}

fn type_str(state: &mut EditorState, text: &str) {
    for byte in text.bytes() {
        process_command(state, EditorCommand::InsertChar(byte));
    }
}

fn message(state: &EditorState) -> Option<&str> { state.visible_status_message(Instant::now()) }

mod typing {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_typing_into_empty_buffer_appends_a_row() {
        let mut state = state_with(&[]);
        type_str(&mut state, "abc");
        assert_eq!(lines(&state), vec!["abc"]);
        assert_eq!(state.caret, Caret::new(0, 3));
        assert!(state.is_dirty());
    }

    #[test]
    fn test_enter_at_col_zero_inserts_row_above() {
        let mut state = state_with(&["abc"]);
        run(&mut state, &[EditorCommand::Enter]);
        assert_eq!(lines(&state), vec!["", "abc"]);
        assert_eq!(state.caret, Caret::new(1, 0));
    }

    #[test]
    fn test_enter_after_brace_indents_then_closing_brace_dedents() {
        let mut state = state_with(&["    if (x) {"]);
        run(&mut state, &[EditorCommand::End, EditorCommand::Enter]);
        assert_eq!(lines(&state), vec!["    if (x) {", "        "]);
        assert_eq!(state.caret, Caret::new(1, 8));

        type_str(&mut state, "}");
        assert_eq!(lines(&state), vec!["    if (x) {", "    }"]);
        assert_eq!(state.caret, Caret::new(1, 5));
    }

    #[test]
    fn test_closing_brace_without_enter_does_not_dedent() {
        let mut state = state_with(&["        "]);
        run(&mut state, &[EditorCommand::End]);
        type_str(&mut state, "}");
        assert_eq!(lines(&state), vec!["        }"]);
    }

    #[test]
    fn test_enter_mid_row_keeps_indent() {
        let mut state = state_with(&["    ab"]);
        state.set_caret(Caret::new(0, 5));
        run(&mut state, &[EditorCommand::Enter]);
        assert_eq!(lines(&state), vec!["    a", "    b"]);
        assert_eq!(state.caret, Caret::new(1, 4));
    }

    #[test]
    fn test_enter_mid_row_before_trailing_brace() {
        let mut state = state_with(&["if (x) {"]);
        state.set_caret(Caret::new(0, 7));
        run(&mut state, &[EditorCommand::Enter]);
        assert_eq!(lines(&state), vec!["if (x) ", "    {"]);
        assert_eq!(state.caret, Caret::new(1, 4));
    }

    #[test]
    fn test_enter_lands_after_all_leading_spaces() {
        let mut state = state_with(&["  foo(  bar)"]);
        state.set_caret(Caret::new(0, 6));
        run(&mut state, &[EditorCommand::Enter]);
        assert_eq!(lines(&state), vec!["  foo(", "    bar)"]);
        assert_eq!(state.caret, Caret::new(1, 4));
    }

    #[test]
    fn test_enter_at_col_zero_lands_on_indent_of_pushed_row() {
        let mut state = state_with(&["    x"]);
        run(&mut state, &[EditorCommand::Enter]);
        assert_eq!(lines(&state), vec!["", "    x"]);
        assert_eq!(state.caret, Caret::new(1, 4));
    }

    #[test_case(0, 4 ; "on a stop")]
    #[test_case(1, 4 ; "one past a stop")]
    #[test_case(3, 4 ; "one before a stop")]
    #[test_case(4, 8 ; "on the next stop")]
    fn test_tab_moves_to_next_stop(start_col: usize, expected_col: usize) {
        let mut state = state_with(&["abcd"]);
        state.set_caret(Caret::new(0, start_col));
        run(&mut state, &[EditorCommand::Tab]);
        assert_eq!(state.caret.col, expected_col);
        assert_eq!(state.current_row_size(), 4 + expected_col - start_col);
        assert!(!state.rows.rows()[0].raw.contains(&b'\t'));
    }
}

mod deleting {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_backspace_removes_soft_tab() {
        let mut state = state_with(&["        x"]);
        state.set_caret(Caret::new(0, 8));
        run(&mut state, &[EditorCommand::Backspace]);
        assert_eq!(lines(&state), vec!["    x"]);
        assert_eq!(state.caret, Caret::new(0, 4));
    }

    #[test]
    fn test_backspace_stops_at_non_space() {
        let mut state = state_with(&["a  "]);
        run(&mut state, &[EditorCommand::End, EditorCommand::Backspace]);
        assert_eq!(lines(&state), vec!["a"]);

        run(&mut state, &[EditorCommand::Backspace]);
        assert_eq!(lines(&state), vec![""]);
    }

    #[test]
    fn test_backspace_at_row_start_joins_rows() {
        let mut state = state_with(&["ab", "cd"]);
        state.set_caret(Caret::new(1, 0));
        run(&mut state, &[EditorCommand::Backspace]);
        assert_eq!(lines(&state), vec!["abcd"]);
        assert_eq!(state.caret, Caret::new(0, 2));
    }

    #[test]
    fn test_backspace_at_buffer_start_is_noop() {
        let mut state = state_with(&["ab"]);
        run(&mut state, &[EditorCommand::Backspace]);
        assert_eq!(lines(&state), vec!["ab"]);
        assert!(!state.is_dirty());
    }

    #[test]
    fn test_delete_at_row_end_joins_next_row() {
        let mut state = state_with(&["ab", "cd"]);
        run(&mut state, &[EditorCommand::End, EditorCommand::Delete]);
        assert_eq!(lines(&state), vec!["abcd"]);
        assert_eq!(state.caret, Caret::new(0, 2));

        run(&mut state, &[EditorCommand::Home, EditorCommand::Delete]);
        assert_eq!(lines(&state), vec!["bcd"]);
    }
}

mod movement {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_vertical_moves_keep_desired_column() {
        let mut state = state_with(&["long line here", "ab", "another long"]);
        state.set_caret(Caret::new(0, 10));

        run(&mut state, &[EditorCommand::Move(Direction::Down)]);
        assert_eq!(state.caret, Caret::new(1, 2));
        run(&mut state, &[EditorCommand::Move(Direction::Down)]);
        assert_eq!(state.caret, Caret::new(2, 10));
        run(&mut state, &[
            EditorCommand::Move(Direction::Up),
            EditorCommand::Move(Direction::Up),
        ]);
        assert_eq!(state.caret, Caret::new(0, 10));
    }

    #[test]
    fn test_horizontal_moves_stay_on_row() {
        let mut state = state_with(&["ab", "cd"]);
        run(&mut state, &[EditorCommand::Move(Direction::Left)]);
        assert_eq!(state.caret, Caret::new(0, 0));
        run(&mut state, &[
            EditorCommand::Move(Direction::Right),
            EditorCommand::Move(Direction::Right),
            EditorCommand::Move(Direction::Right),
        ]);
        assert_eq!(state.caret, Caret::new(0, 2));
    }

    #[test]
    fn test_down_stops_one_past_last_row() {
        let mut state = state_with(&["ab"]);
        run(&mut state, &[
            EditorCommand::Move(Direction::Down),
            EditorCommand::Move(Direction::Down),
        ]);
        assert_eq!(state.caret, Caret::new(1, 0));
    }

    #[test]
    fn test_home_and_end() {
        let mut state = state_with(&["hello"]);
        run(&mut state, &[EditorCommand::End]);
        assert_eq!(state.caret.col, 5);
        run(&mut state, &[EditorCommand::Home]);
        assert_eq!(state.caret.col, 0);
    }

    #[test]
    fn test_page_down_then_up() {
        let content: Vec<String> = (0..100).map(|it| format!("row {it}")).collect();
        let content: Vec<&str> = content.iter().map(String::as_str).collect();
        let mut state = state_with(&content);

        run(&mut state, &[EditorCommand::PageDown]);
        // Bottom of the 22 row screen, then 22 more.
        assert_eq!(state.caret.row, 43);

        run(&mut state, &[EditorCommand::PageUp]);
        assert_eq!(state.caret.row, 0);
    }
}

mod selection {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_shift_arrows_select_and_copy() {
        let mut state = state_with(&["int main() {", "    return 0;", "}"]);
        state.set_caret(Caret::new(0, 4));
        run(&mut state, &[EditorCommand::ExtendSelection(Direction::Down)]);
        assert_eq!(state.selection.anchor, Caret::new(0, 4));
        assert_eq!(state.selection.endpoint, Caret::new(1, 4));

        run(&mut state, &[EditorCommand::Copy]);
        assert_eq!(state.clipboard, b"main() {\n    ".to_vec());
        assert_eq!(message(&state), Some("13 characters copied"));
    }

    #[test]
    fn test_extending_keeps_anchor() {
        let mut state = state_with(&["abcdef"]);
        run(&mut state, &[
            EditorCommand::ExtendSelection(Direction::Right),
            EditorCommand::ExtendSelection(Direction::Right),
            EditorCommand::ExtendSelection(Direction::Right),
            EditorCommand::ExtendSelection(Direction::Left),
        ]);
        assert_eq!(state.selection.normalized(), (Caret::new(0, 0), Caret::new(0, 2)));
    }

    #[test]
    fn test_escape_and_plain_moves_cancel_selection() {
        let mut state = state_with(&["abcdef"]);
        run(&mut state, &[
            EditorCommand::ExtendSelection(Direction::Right),
            EditorCommand::Escape,
        ]);
        assert!(!state.selection.is_selecting());

        run(&mut state, &[
            EditorCommand::ExtendSelection(Direction::Right),
            EditorCommand::Move(Direction::Right),
        ]);
        assert!(!state.selection.is_selecting());
        assert_eq!(state.caret, Caret::new(0, 3));
    }

    #[test]
    fn test_copy_then_paste_elsewhere() {
        let mut state = state_with(&["abc", "xyz"]);
        run(&mut state, &[
            EditorCommand::ExtendSelection(Direction::Right),
            EditorCommand::ExtendSelection(Direction::Right),
            EditorCommand::Copy,
            EditorCommand::Move(Direction::Down),
            EditorCommand::End,
            EditorCommand::Paste,
        ]);
        assert_eq!(lines(&state), vec!["abc", "xyzab"]);
        assert_eq!(state.caret, Caret::new(1, 5));
    }
}

mod quit {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_quit_clean_exits_at_once() {
        let mut state = state_with(&["abc"]);
        assert_eq!(run(&mut state, &[EditorCommand::Quit]), DispatchOutcome::Exit);
    }

    #[test]
    fn test_quit_dirty_needs_confirmation() {
        let mut state = state_with(&[]);
        type_str(&mut state, "x");

        assert_eq!(run(&mut state, &[EditorCommand::Quit]), DispatchOutcome::Continue);
        assert!(message(&state).unwrap().starts_with("File has unsaved changes."));
        assert_eq!(run(&mut state, &[EditorCommand::Quit]), DispatchOutcome::Exit);
    }

    #[test]
    fn test_other_command_resets_quit_confirmation() {
        let mut state = state_with(&[]);
        type_str(&mut state, "x");
        run(&mut state, &[EditorCommand::Quit]);
        run(&mut state, &[EditorCommand::Move(Direction::Left)]);
        assert_eq!(run(&mut state, &[EditorCommand::Quit]), DispatchOutcome::Continue);
    }
}

mod prompts {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_save_without_name_prompts_then_saves() {
        let dir = try_create_temp_dir().unwrap();
        let path = dir.join("out.c");
        let path = path.to_str().unwrap().to_string();

        let mut state = state_with(&[]);
        type_str(&mut state, "int x;");
        run(&mut state, &[EditorCommand::Save]);
        assert!(state.prompt.is_some());

        type_str(&mut state, &path);
        run(&mut state, &[EditorCommand::Enter]);

        assert!(state.prompt.is_none());
        assert_eq!(state.filename.as_deref(), Some(path.as_str()));
        assert_eq!(std::fs::read(&path).unwrap(), b"int x;\n".to_vec());
        assert!(!state.is_dirty());
        assert!(state.syntax().is_some());
        // The prompt swallowed the typed path.
        assert_eq!(lines(&state), vec!["int x;"]);
    }

    #[test]
    fn test_save_as_escape_aborts() {
        let mut state = state_with(&["abc"]);
        run(&mut state, &[
            EditorCommand::Save,
            EditorCommand::InsertChar(b'f'),
            EditorCommand::Escape,
        ]);
        assert!(state.prompt.is_none());
        assert_eq!(state.filename, None);
        assert_eq!(message(&state), Some("Save aborted"));
    }

    #[test]
    fn test_search_escape_restores_caret_and_scroll() {
        let content: Vec<String> = (0..100).map(|it| format!("row {it}")).collect();
        let content: Vec<&str> = content.iter().map(String::as_str).collect();
        let mut state = state_with(&content);
        state.set_caret(Caret::new(5, 2));

        run(&mut state, &[EditorCommand::Find]);
        type_str(&mut state, "row 9");
        run(&mut state, &[EditorCommand::Move(Direction::Down)]);
        assert_eq!(state.caret, Caret::new(90, 0));
        assert_eq!(state.scroll.row_offset, 90);

        run(&mut state, &[EditorCommand::Escape]);
        assert!(state.prompt.is_none());
        assert_eq!(state.caret, Caret::new(5, 2));
        assert_eq!(state.scroll.row_offset, 0);
    }

    #[test]
    fn test_search_enter_keeps_match() {
        let mut state = state_with(&["alpha", "beta", "gamma"]);
        run(&mut state, &[EditorCommand::Find]);
        type_str(&mut state, "mm");
        run(&mut state, &[EditorCommand::Enter]);
        assert!(state.prompt.is_none());
        assert_eq!(state.caret, Caret::new(2, 2));
    }

    #[test_case(EditorCommand::Enter ; "confirm")]
    #[test_case(EditorCommand::Escape ; "cancel")]
    fn test_closing_search_clears_message_bar(closing: EditorCommand) {
        let mut state = state_with(&["alpha", "beta"]);
        assert!(message(&state).is_some());

        run(&mut state, &[EditorCommand::Find]);
        type_str(&mut state, "be");
        run(&mut state, &[closing]);

        assert!(state.prompt.is_none());
        assert_eq!(message(&state), None);
    }

    #[test]
    fn test_save_as_reports_after_message_bar_is_cleared() {
        let dir = try_create_temp_dir().unwrap();
        let path = dir.join("notes.txt");
        let path = path.to_str().unwrap().to_string();

        let mut state = state_with(&["abc"]);
        run(&mut state, &[EditorCommand::Save]);
        type_str(&mut state, &path);
        run(&mut state, &[EditorCommand::Enter]);

        assert_eq!(message(&state), Some("4 bytes written to disk"));
    }
}
