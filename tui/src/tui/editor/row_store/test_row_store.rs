// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use pretty_assertions::assert_eq;

use super::*;
use crate::{C_PROFILE, HighlightTag};

use HighlightTag::{BlockComment as B, Normal as N};

fn c_store(lines: &[&str]) -> RowStore { RowStore::from_lines(lines, 4, Some(&C_PROFILE)) }

fn raw_lines(store: &RowStore) -> Vec<String> {
    store
        .rows()
        .iter()
        .map(|it| String::from_utf8_lossy(&it.raw).to_string())
        .collect()
}

fn assert_invariants(store: &RowStore) {
    for (index, row) in store.rows().iter().enumerate() {
        assert_eq!(row.index, index);
        assert!(row.render.len() >= row.raw.len());
        assert_eq!(row.tags.len(), row.render.len());
    }
}

#[test]
fn test_from_lines_is_clean() {
    let store = c_store(&["a", "b"]);
    assert_eq!(store.len(), 2);
    assert_eq!(store.dirty(), 0);
    assert_invariants(&store);
}

#[test]
fn test_indices_after_inserts_and_deletes() {
    let mut store = RowStore::new(4);
    store.insert_row(0, b"two");
    store.insert_row(0, b"zero");
    store.insert_row(1, b"one");
    store.insert_row(3, b"three");
    store.delete_row(0);
    store.insert_row(2, b"\tx");
    store.delete_row(3);
    assert_eq!(raw_lines(&store), vec!["one", "two", "\tx"]);
    assert_invariants(&store);
    assert_eq!(store.dirty(), 7);
}

#[test]
fn test_out_of_range_requests_are_noops() {
    let mut store = c_store(&["abc"]);
    store.insert_row(5, b"x");
    store.delete_row(1);
    store.insert_char(0, 4, b'x');
    store.insert_char(3, 0, b'x');
    store.delete_char(0, 3);
    store.append_string(9, b"x");
    store.join_row(0);
    assert_eq!(store.split_row(0, 4, AutoIndent::None), None);
    assert_eq!(store.split_row(1, 0, AutoIndent::None), None);
    assert_eq!(raw_lines(&store), vec!["abc"]);
    assert_eq!(store.dirty(), 0);
}

#[test]
fn test_char_level_mutations() {
    let mut store = c_store(&["ac"]);
    store.insert_char(0, 1, b'b');
    store.insert_char(0, 3, b'\t');
    store.append_string(0, b"d");
    assert_eq!(raw_lines(&store), vec!["abc\td"]);
    assert_eq!(store.get(0).map(|it| it.render.clone()), Some(b"abc d".to_vec()));
    store.delete_char(0, 3);
    assert_eq!(raw_lines(&store), vec!["abcd"]);
    assert_invariants(&store);
    assert_eq!(store.dirty(), 4);
}

#[test]
fn test_split_then_join_round_trips() {
    let original = "    if (x) {  return 1; }";
    for col in 0..=original.len() {
        let mut store = c_store(&[original, "next"]);
        assert_eq!(store.split_row(0, col, AutoIndent::None), Some(0));
        assert_eq!(store.len(), 3);
        assert_invariants(&store);
        store.join_row(0);
        assert_eq!(raw_lines(&store), vec![original, "next"]);
        assert_invariants(&store);
    }
}

#[test]
fn test_split_preserves_indent() {
    let mut store = c_store(&["    foo(x);"]);
    assert_eq!(store.split_row(0, 8, AutoIndent::Preserve), Some(4));
    assert_eq!(raw_lines(&store), vec!["    foo(", "    x);"]);
}

#[test]
fn test_split_row_ending_in_open_brace_adds_a_tab_stop() {
    let mut store = c_store(&["  int main() {"]);
    assert_eq!(store.split_row(0, 14, AutoIndent::Preserve), Some(6));
    assert_eq!(raw_lines(&store), vec!["  int main() {", "      "]);
}

#[test]
fn test_split_before_trailing_open_brace_adds_a_tab_stop() {
    let mut store = c_store(&["if (x) {"]);
    assert_eq!(store.split_row(0, 7, AutoIndent::Preserve), Some(4));
    assert_eq!(raw_lines(&store), vec!["if (x) ", "    {"]);
}

#[test]
fn test_split_after_brace_not_at_row_end_keeps_indent_only() {
    let mut store = c_store(&["  int main() {}"]);
    assert_eq!(store.split_row(0, 14, AutoIndent::Preserve), Some(2));
    assert_eq!(raw_lines(&store), vec!["  int main() {", "  }"]);
}

#[test]
fn test_split_at_column_zero_never_indents() {
    let mut store = c_store(&["    x"]);
    assert_eq!(store.split_row(0, 0, AutoIndent::Preserve), Some(0));
    assert_eq!(raw_lines(&store), vec!["", "    x"]);
}

#[test]
fn test_save_serialization() {
    let store = c_store(&["ab", "", "c"]);
    assert_eq!(store.to_bytes(), b"ab\n\nc\n".to_vec());
    assert_eq!(store.to_bytes().len(), 2 + 0 + 1 + 3);
    assert_eq!(RowStore::new(4).to_bytes(), Vec::<u8>::new());
}

#[test]
fn test_block_comment_spans_rows() {
    let store = c_store(&["/* start", "middle", "end */ x"]);
    assert_eq!(store.rows()[0].tags, vec![B; 8]);
    assert_eq!(store.rows()[1].tags, vec![B; 6]);
    assert_eq!(store.rows()[2].tags, vec![B, B, B, B, B, B, N, N]);
    assert!(store.rows()[0].ends_in_open_comment);
    assert!(store.rows()[1].ends_in_open_comment);
    assert!(!store.rows()[2].ends_in_open_comment);
}

#[test]
fn test_closing_comment_in_middle_row_cascades() {
    let mut store = c_store(&["/* start", "middle", "end */ x"]);
    store.insert_char(1, 0, b'/');
    store.insert_char(1, 0, b'*');
    assert_eq!(raw_lines(&store)[1], "*/middle");
    assert_eq!(&store.rows()[1].tags[..2], &[B, B]);
    assert_eq!(&store.rows()[1].tags[2..], &[N; 6]);
    assert_eq!(store.rows()[2].tags, vec![N; 8]);
}

#[test]
fn test_deleting_opening_row_cascades() {
    let mut store = c_store(&["/* start", "middle", "end */ x"]);
    store.delete_row(0);
    assert_eq!(store.rows()[0].tags, vec![N; 6]);
    assert_eq!(store.rows()[1].tags, vec![N; 8]);
}

#[test]
fn test_inserting_closing_row_cascades() {
    let mut store = c_store(&["/* a", "b", "c"]);
    assert_eq!(store.rows()[2].tags, vec![B]);
    store.insert_row(1, b"*/");
    assert_eq!(store.rows()[1].tags, vec![B, B]);
    assert_eq!(store.rows()[2].tags, vec![N]);
    assert_eq!(store.rows()[3].tags, vec![N]);
}

#[test]
fn test_joining_rows_reopens_comment() {
    let mut store = c_store(&["x /*", "*/ y", "z"]);
    assert_eq!(store.rows()[2].tags, vec![N]);
    // Splitting "*/" apart means the comment never closes.
    store.split_row(1, 1, AutoIndent::None);
    assert_eq!(raw_lines(&store), vec!["x /*", "*", "/ y", "z"]);
    assert_eq!(store.rows()[3].tags, vec![B]);
    store.join_row(1);
    assert_eq!(store.rows()[2].tags, vec![N]);
    assert_invariants(&store);
}

#[test]
fn test_overlay_and_restore_tags() {
    let mut store = c_store(&["int x"]);
    let saved = store.rows()[0].tags.clone();
    store.overlay_tags(0, 4, 10, HighlightTag::Match);
    assert_eq!(store.rows()[0].tags[4], HighlightTag::Match);
    store.restore_tags(0, saved.clone());
    assert_eq!(store.rows()[0].tags, saved);
}

#[test]
fn test_set_syntax_rehighlights_without_dirtying() {
    let mut store = RowStore::from_lines(&["int x"], 4, None);
    assert_eq!(store.rows()[0].tags, vec![N; 5]);
    store.set_syntax(Some(&C_PROFILE));
    assert_eq!(store.rows()[0].tags[0], HighlightTag::Keyword);
    assert_eq!(store.dirty(), 0);
}
