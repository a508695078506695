// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Convert between raw columns (`cx`, an index into [`Row::raw`]) and rendered
//! columns (`rx`, an index into [`Row::render`]). The gutter width is not part of
//! `rx`, the viewport adds it when painting.
//!
//! With tabs the mapping is many to one in the `rx` → `cx` direction: every rendered
//! column covered by a tab maps back to the tab itself.

use super::Row;

#[must_use]
pub fn cx_to_rx(row: &Row, cx: usize, tab_stop: usize) -> usize {
    let tab_stop = tab_stop.max(1);
    let mut rx = 0;
    for &byte in row.raw.iter().take(cx) {
        if byte == b'\t' {
            rx += (tab_stop - 1) - (rx % tab_stop);
        }
        rx += 1;
    }
    rx
}

/// The first raw column whose cumulative rendered width exceeds `rx`, clamped to the
/// row size.
#[must_use]
pub fn rx_to_cx(row: &Row, rx: usize, tab_stop: usize) -> usize {
    let tab_stop = tab_stop.max(1);
    let mut cur_rx = 0;
    for (cx, &byte) in row.raw.iter().enumerate() {
        if byte == b'\t' {
            cur_rx += (tab_stop - 1) - (cur_rx % tab_stop);
        }
        cur_rx += 1;
        if cur_rx > rx {
            return cx;
        }
    }
    row.size()
}
