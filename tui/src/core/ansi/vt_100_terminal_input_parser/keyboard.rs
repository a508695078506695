// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Keyboard input parsing from single bytes and ANSI/CSI/SS3 sequences.
//!
//! Both parsers are pure: they look at bytes that have already been read and never
//! perform I/O. The [`super::decoder`] feeds them one byte at a time.
//!
//! Sequences are resolved in this order of priority:
//!
//! 1. `CSI n ; 2 d` → [`EditorCommand::ExtendSelection`] (Shift + arrow).
//! 2. `CSI n ~` → Home, Delete, End, Page Up, Page Down.
//! 3. `CSI d`, `CSI H`, `CSI F` → arrows, Home, End.
//! 4. `SS3 H`, `SS3 F` → Home, End.

use super::types::{Direction, EditorCommand};
use crate::{ANSI_CSI_BRACKET, ANSI_ESC, ANSI_FUNCTION_KEY_TERMINATOR,
            ANSI_MODIFIER_SHIFT, ANSI_PARAM_SEPARATOR, ANSI_SS3_O, ARROW_DOWN_FINAL,
            ARROW_LEFT_FINAL, ARROW_RIGHT_FINAL, ARROW_UP_FINAL, ASCII_CR, ASCII_DEL,
            ASCII_PRINTABLE_END, ASCII_PRINTABLE_START, ASCII_TAB, END_FINAL,
            HOME_FINAL, SPECIAL_DELETE_CODE, SPECIAL_END_ALT_CODE, SPECIAL_END_CODE,
            SPECIAL_HOME_ALT_CODE, SPECIAL_HOME_CODE, SPECIAL_PAGE_DOWN_CODE,
            SPECIAL_PAGE_UP_CODE, ctrl_key};

/// Outcome of looking at a partially read escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceParse {
    Complete(EditorCommand),
    /// One more byte is needed.
    Incomplete,
    /// Not a sequence this editor understands. It degrades to a plain Escape.
    Invalid,
}

/// Classify a single byte that is not the start of an escape sequence.
#[must_use]
pub fn parse_single_byte(byte: u8) -> EditorCommand {
    match byte {
        ASCII_TAB => EditorCommand::Tab,
        ASCII_CR => EditorCommand::Enter,
        ASCII_DEL => EditorCommand::Backspace,
        ANSI_ESC => EditorCommand::Escape,
        it if it == ctrl_key(b'h') => EditorCommand::Backspace,
        it if it == ctrl_key(b'q') => EditorCommand::Quit,
        it if it == ctrl_key(b's') => EditorCommand::Save,
        it if it == ctrl_key(b'f') => EditorCommand::Find,
        it if it == ctrl_key(b'c') => EditorCommand::Copy,
        it if it == ctrl_key(b'v') => EditorCommand::Paste,
        it if it == ctrl_key(b'l') => EditorCommand::Refresh,
        ASCII_PRINTABLE_START..=ASCII_PRINTABLE_END => EditorCommand::InsertChar(byte),
        _ => EditorCommand::Unbound(byte),
    }
}

/// Parse `buffer`, which starts with `ESC` and holds every byte read so far.
#[must_use]
pub fn parse_keyboard_sequence(buffer: &[u8]) -> SequenceParse {
    match buffer {
        [] => SequenceParse::Invalid,
        [first, ..] if *first != ANSI_ESC => SequenceParse::Invalid,
        [_] => SequenceParse::Incomplete,
        [_, ANSI_CSI_BRACKET, rest @ ..] => parse_csi(rest),
        [_, ANSI_SS3_O, rest @ ..] => parse_ss3(rest),
        _ => SequenceParse::Invalid,
    }
}

/// `rest` is everything after `ESC [`.
fn parse_csi(rest: &[u8]) -> SequenceParse {
    match rest {
        [] => SequenceParse::Incomplete,
        [digit, tail @ ..] if digit.is_ascii_digit() => parse_csi_digit(*digit, tail),
        [final_byte, ..] => match parse_direction(*final_byte) {
            Some(direction) => SequenceParse::Complete(EditorCommand::Move(direction)),
            None => match *final_byte {
                HOME_FINAL => SequenceParse::Complete(EditorCommand::Home),
                END_FINAL => SequenceParse::Complete(EditorCommand::End),
                _ => SequenceParse::Invalid,
            },
        },
    }
}

/// `tail` is everything after `ESC [ digit`.
fn parse_csi_digit(digit: u8, tail: &[u8]) -> SequenceParse {
    match tail {
        [] => SequenceParse::Incomplete,
        [ANSI_PARAM_SEPARATOR] | [ANSI_PARAM_SEPARATOR, ANSI_MODIFIER_SHIFT] => {
            SequenceParse::Incomplete
        }
        [ANSI_PARAM_SEPARATOR, ANSI_MODIFIER_SHIFT, final_byte, ..] => {
            match parse_direction(*final_byte) {
                Some(direction) => {
                    SequenceParse::Complete(EditorCommand::ExtendSelection(direction))
                }
                None => SequenceParse::Invalid,
            }
        }
        [ANSI_FUNCTION_KEY_TERMINATOR, ..] => parse_special_key(digit)
            .map_or(SequenceParse::Invalid, SequenceParse::Complete),
        _ => SequenceParse::Invalid,
    }
}

/// `rest` is everything after `ESC O`.
fn parse_ss3(rest: &[u8]) -> SequenceParse {
    match rest {
        [] => SequenceParse::Incomplete,
        [HOME_FINAL, ..] => SequenceParse::Complete(EditorCommand::Home),
        [END_FINAL, ..] => SequenceParse::Complete(EditorCommand::End),
        _ => SequenceParse::Invalid,
    }
}

fn parse_direction(final_byte: u8) -> Option<Direction> {
    match final_byte {
        ARROW_UP_FINAL => Some(Direction::Up),
        ARROW_DOWN_FINAL => Some(Direction::Down),
        ARROW_RIGHT_FINAL => Some(Direction::Right),
        ARROW_LEFT_FINAL => Some(Direction::Left),
        _ => None,
    }
}

fn parse_special_key(code: u8) -> Option<EditorCommand> {
    match code {
        SPECIAL_HOME_CODE | SPECIAL_HOME_ALT_CODE => Some(EditorCommand::Home),
        SPECIAL_DELETE_CODE => Some(EditorCommand::Delete),
        SPECIAL_END_CODE | SPECIAL_END_ALT_CODE => Some(EditorCommand::End),
        SPECIAL_PAGE_UP_CODE => Some(EditorCommand::PageUp),
        SPECIAL_PAGE_DOWN_CODE => Some(EditorCommand::PageDown),
        _ => None,
    }
}
