// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Single row syntax highlighting. This is a pure function of the rendered bytes, the
//! language profile, and whether the previous row ended inside a block comment. The
//! cross row cascade lives in [`crate::RowStore::rehighlight_from`].

use super::{HighlightTag, SyntaxProfile};

/// Whitespace, NUL, or one of `,.()+-/*=~%<>[];`.
#[must_use]
pub fn is_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c | 0)
        || b",.()+-/*=~%<>[];".contains(&byte)
}

/// Result of highlighting one row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HighlightedRow {
    /// Same length as the rendered row.
    pub tags: Vec<HighlightTag>,
    pub ends_in_open_comment: bool,
}

/// Tag every byte of `render`. With no profile everything is
/// [`HighlightTag::Normal`] and the row never ends inside a comment.
#[must_use]
pub fn highlight_row(
    render: &[u8],
    maybe_profile: Option<&SyntaxProfile>,
    starts_in_comment: bool,
) -> HighlightedRow {
    let len = render.len();
    let mut tags = vec![HighlightTag::Normal; len];

    let Some(profile) = maybe_profile else {
        return HighlightedRow {
            tags,
            ends_in_open_comment: false,
        };
    };

    let single_line_marker = profile
        .single_line_comment_start
        .filter(|it| !it.is_empty())
        .map(str::as_bytes);
    let block_markers = profile
        .block_comment_markers()
        .map(|(start, end)| (start.as_bytes(), end.as_bytes()));

    // Start of row behaves like a NUL, which is a separator.
    let mut prev_byte: u8 = 0;
    let mut in_string: Option<u8> = None;
    let mut in_comment = starts_in_comment;
    let mut index = 0;

    while index < len {
        let byte = render[index];
        let rest = &render[index..];
        let prev_tag = if index > 0 {
            tags[index - 1]
        } else {
            HighlightTag::Normal
        };

        // Single line comment: the rest of the row.
        if in_string.is_none() && !in_comment {
            if let Some(marker) = single_line_marker {
                if rest.starts_with(marker) {
                    fill(&mut tags, index, len, HighlightTag::Comment);
                    break;
                }
            }
        }

        // Block comment.
        if let Some((start_marker, end_marker)) = block_markers {
            if in_string.is_none() {
                if in_comment {
                    if rest.starts_with(end_marker) {
                        let end = index + end_marker.len();
                        fill(&mut tags, index, end, HighlightTag::BlockComment);
                        prev_byte = render[end - 1];
                        index = end;
                        in_comment = false;
                    } else {
                        tags[index] = HighlightTag::BlockComment;
                        prev_byte = byte;
                        index += 1;
                    }
                    continue;
                }
                if rest.starts_with(start_marker) {
                    let end = index + start_marker.len();
                    fill(&mut tags, index, end, HighlightTag::BlockComment);
                    prev_byte = render[end - 1];
                    index = end;
                    in_comment = true;
                    continue;
                }
            }
        }

        // String literal.
        if profile.highlight_strings {
            if let Some(quote) = in_string {
                tags[index] = HighlightTag::String;
                // An escape never closes the string.
                if byte == b'\\' && index + 1 < len {
                    tags[index + 1] = HighlightTag::String;
                    prev_byte = render[index + 1];
                    index += 2;
                    continue;
                }
                if byte == quote {
                    in_string = None;
                }
                prev_byte = byte;
                index += 1;
                continue;
            }
            if byte == b'"' || byte == b'\'' {
                in_string = Some(byte);
                tags[index] = HighlightTag::String;
                prev_byte = byte;
                index += 1;
                continue;
            }
        }

        // Number.
        if profile.highlight_numbers {
            let is_digit_run = byte.is_ascii_digit()
                && (is_separator(prev_byte) || prev_tag == HighlightTag::Number);
            let is_decimal_point = byte == b'.' && prev_tag == HighlightTag::Number;
            if is_digit_run || is_decimal_point {
                tags[index] = HighlightTag::Number;
                prev_byte = byte;
                index += 1;
                continue;
            }
        }

        // Whole word keyword.
        if is_separator(prev_byte) {
            if let Some(keyword_len) = match_keyword(rest, profile.keywords) {
                let end = index + keyword_len;
                fill(&mut tags, index, end, HighlightTag::Keyword);
                prev_byte = render[end - 1];
                index = end;
                continue;
            }
        }

        prev_byte = byte;
        index += 1;
    }

    HighlightedRow {
        tags,
        ends_in_open_comment: in_comment,
    }
}

/// Length of the first keyword that `rest` starts with, followed by a separator or
/// the end of the row.
fn match_keyword(rest: &[u8], keywords: &[&str]) -> Option<usize> {
    keywords
        .iter()
        .map(|it| it.as_bytes())
        .filter(|it| !it.is_empty())
        .find(|keyword| {
            rest.starts_with(keyword)
                && rest
                    .get(keyword.len())
                    .is_none_or(|&next| is_separator(next))
        })
        .map(<[u8]>::len)
}

fn fill(tags: &mut [HighlightTag], start: usize, end: usize, tag: HighlightTag) {
    let end = end.min(tags.len());
    for it in &mut tags[start..end] {
        *it = tag;
    }
}
