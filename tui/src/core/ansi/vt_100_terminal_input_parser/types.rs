// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logical commands produced by the input decoder. These are decoupled from raw byte
//! values: the dispatcher never looks at bytes, only at [`EditorCommand`]s.

use strum_macros::Display;

/// Cursor direction for arrow keys and Shift + arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EditorCommand {
    /// A printable ASCII byte.
    InsertChar(u8),
    Enter,
    /// `DEL` (127) or `Ctrl-H`.
    Backspace,
    /// `CSI 3~`.
    Delete,
    Tab,
    /// A lone `ESC`, or an escape sequence that could not be resolved.
    Escape,
    Move(Direction),
    /// Shift + arrow.
    ExtendSelection(Direction),
    Home,
    End,
    PageUp,
    PageDown,
    Quit,
    Save,
    Find,
    Copy,
    Paste,
    Refresh,
    /// A control chord or non ASCII byte with no binding.
    Unbound(u8),
}
