// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI/VT100 input sequence constants, for the keys the editor understands.
//!
//! # ANSI Input Sequence Format
//!
//! - `CSI` = ESC [  (0x1B 0x5B)
//! - `SS3` = ESC O  (0x1B 0x4F), sent by terminals in application cursor mode
//!
//! # Keyboard Sequences
//!
//! ## Arrow Keys (CSI A/B/C/D)
//! - Up: `ESC[A`
//! - Down: `ESC[B`
//! - Right: `ESC[C`
//! - Left: `ESC[D`
//!
//! ## Home and End
//! - `ESC[H`, `ESC[F`, `ESCOH`, `ESCOF`
//! - `ESC[1~` and `ESC[7~` are Home, `ESC[4~` and `ESC[8~` are End
//!
//! ## Special Keys (CSI n~)
//! - Delete: `CSI 3~`
//! - Page Up: `CSI 5~`
//! - Page Down: `CSI 6~`
//!
//! ## Shift + Arrow (CSI 1;2 A/B/C/D)
//! The modifier parameter `2` means Shift. Any leading digit parameter is accepted.

// ==================== ANSI Sequence Components ====================

/// ESC byte (27 in decimal, 0x1B in hex)
pub const ANSI_ESC: u8 = 0x1B;

/// CSI bracket byte: `[` (91 in decimal, 0x5B in hex)
pub const ANSI_CSI_BRACKET: u8 = 0x5B;

/// SS3 'O' byte: Second byte of SS3 sequences (0x4F)
pub const ANSI_SS3_O: u8 = b'O';

/// Parameter separator byte: `;` (59 in decimal, 0x3B in hex)
pub const ANSI_PARAM_SEPARATOR: u8 = b';';

/// Function key terminator: `~` (126 in decimal, 0x7E in hex)
pub const ANSI_FUNCTION_KEY_TERMINATOR: u8 = b'~';

/// Modifier parameter for Shift in `CSI 1 ; m final`.
pub const ANSI_MODIFIER_SHIFT: u8 = b'2';

/// Longest sequence that is resolved: `ESC [ n ; 2 d`.
pub const MAX_KEYBOARD_SEQUENCE_LEN: usize = 6;

// ==================== Final bytes ====================

pub const ARROW_UP_FINAL: u8 = b'A';
pub const ARROW_DOWN_FINAL: u8 = b'B';
pub const ARROW_RIGHT_FINAL: u8 = b'C';
pub const ARROW_LEFT_FINAL: u8 = b'D';
pub const HOME_FINAL: u8 = b'H';
pub const END_FINAL: u8 = b'F';

// ==================== Special key codes (CSI n~) ====================

pub const SPECIAL_HOME_CODE: u8 = b'1';
pub const SPECIAL_DELETE_CODE: u8 = b'3';
pub const SPECIAL_END_CODE: u8 = b'4';
pub const SPECIAL_PAGE_UP_CODE: u8 = b'5';
pub const SPECIAL_PAGE_DOWN_CODE: u8 = b'6';
pub const SPECIAL_HOME_ALT_CODE: u8 = b'7';
pub const SPECIAL_END_ALT_CODE: u8 = b'8';

// ==================== Single bytes ====================

pub const ASCII_TAB: u8 = b'\t';
pub const ASCII_CR: u8 = b'\r';
/// What most terminals send for the Backspace key.
pub const ASCII_DEL: u8 = 127;
pub const ASCII_PRINTABLE_START: u8 = b' ';
pub const ASCII_PRINTABLE_END: u8 = b'~';

/// Conventional terminal control-key encoding: keep the low 5 bits.
///
/// ```
/// use kilo_tui::ctrl_key;
/// assert_eq!(ctrl_key(b'q'), 17);
/// assert_eq!(ctrl_key(b'h'), 8);
/// ```
#[must_use]
pub const fn ctrl_key(key: u8) -> u8 { key & 0x1f }
