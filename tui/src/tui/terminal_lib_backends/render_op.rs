// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::{AddAssign, Deref, DerefMut};

use crossterm::style::Color;

/// Convenient macro for creating and manipulating [`RenderOps`] collections.
///
/// - `@new`: Create a new `RenderOps` with optional initial operations.
/// - `@add_to`: Add operations to an existing `RenderOps`.
///
/// ```
/// use kilo_tui::*;
///
/// let mut render_ops = render_ops!(
///   @new
///   RenderOp::HideCursor, RenderOp::ResetColor
/// );
/// render_ops!(
///   @add_to render_ops =>
///   RenderOp::MoveCursorPositionAbs(ScreenPos::new(0, 0)),
///   RenderOp::ShowCursor
/// );
/// assert_eq!(render_ops.len(), 4);
/// ```
#[macro_export]
macro_rules! render_ops {
  // Empty.
  () => {
    $crate::RenderOps::default()
  };

  // @new: Create a RenderOps. If any ($arg_render_op)* are passed, then add it to its
  // list. Finally return it.
  (
    @new
    $(
      $arg_render_op: expr
    )
    ,
    *
    $(,)*
  ) => {
    {
      let mut render_ops = $crate::RenderOps::default();
      $(
        render_ops.list.push($arg_render_op);
      )*
      render_ops
    }
  };

  // @add_to: If any ($arg_render_op)* are passed, then add to it.
  (
    @add_to
    $arg_render_ops: expr
    =>
    $(
      $arg_render_op: expr
    )
    ,
    *
    $(,)*
  ) => {
    {
      $(
        $arg_render_ops.list.push($arg_render_op);
      )*
    }
  };
}

/// Zero based position on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenPos {
    pub row: usize,
    pub col: usize,
}

impl ScreenPos {
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self { Self { row, col } }
}

/// One drawing instruction. A whole frame is a [`RenderOps`], which the paint step
/// serializes into a single buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOp {
    HideCursor,
    ShowCursor,
    MoveCursorPositionAbs(ScreenPos),
    ClearScreen,
    /// Clear from the cursor to the end of the current line.
    ClearCurrentLineToEnd,
    SetFgColor(Color),
    ResetColor,
    /// Swap foreground and background until [`RenderOp::ResetAttributes`].
    SetInverse,
    ResetAttributes,
    PaintText(String),
    NewLine,
}

/// For ease of use, please use the [`render_ops`!] macro.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderOps {
    pub list: Vec<RenderOp>,
}

impl RenderOps {
    /// The text painted between [`RenderOp::NewLine`]s, one string per screen line.
    /// Colors, attributes, and cursor moves are ignored.
    #[must_use]
    pub fn painted_lines(&self) -> Vec<String> {
        let mut acc = vec![String::new()];
        for op in &self.list {
            match op {
                RenderOp::PaintText(text) => {
                    if let Some(last) = acc.last_mut() {
                        last.push_str(text);
                    }
                }
                RenderOp::NewLine => acc.push(String::new()),
                _ => {}
            }
        }
        acc
    }
}

impl Deref for RenderOps {
    type Target = Vec<RenderOp>;

    fn deref(&self) -> &Self::Target { &self.list }
}

impl DerefMut for RenderOps {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.list }
}

impl AddAssign<RenderOp> for RenderOps {
    fn add_assign(&mut self, rhs: RenderOp) { self.list.push(rhs); }
}
