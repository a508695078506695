// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::style::Color;

pub const KILO_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Drawn on screen lines past the end of the buffer.
pub const FILLER_GLYPH: &str = "~";

pub const WELCOME_BANNER_PREFIX: &str = "Kilo editor -- version";

pub const HELP_MESSAGE: &str = "HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find";

pub const DEFAULT_LOG_FILE_NAME: &str = "kilo_log.txt";

/// The status bar shows at most this many characters of the file name.
pub const STATUS_FILENAME_MAX_LEN: usize = 20;

pub const NO_FILETYPE: &str = "no filetype";

/// Foreground color of the line number gutter.
pub const GUTTER_COLOR: Color = Color::DarkYellow;

/// One status bar row plus one message bar row.
pub const STATUS_AND_MESSAGE_BAR_HEIGHT: usize = 2;

// Flags to switch verbose logging on for individual subsystems.
pub const DEBUG_TUI_COPY_PASTE: bool = false;
pub const DEBUG_TUI_SYN_HI: bool = false;
pub const DEBUG_TUI_INPUT: bool = false;
pub const DEBUG_TUI_MOD: bool = false;
