// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Serialize [`RenderOps`] with `crossterm` commands. Nothing here touches the
//! terminal: commands are queued into a byte buffer, and the whole buffer is handed to
//! an [`OutputDevice`] in one write.

use crossterm::{cursor::{Hide, MoveTo, Show},
                style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
                terminal::{Clear, ClearType}};
use miette::IntoDiagnostic;

use crate::{CommonResult, DEBUG_TUI_MOD, OutputDevice, RenderOp, RenderOps};

/// Queue one or more `crossterm` commands into `$writer`, propagating errors with `?`.
#[macro_export]
macro_rules! queue_terminal_command {
    ($writer: expr $(, $command: expr)* $(,)?) => {{
        $(
            ::crossterm::QueueableCommand::queue($writer, $command)?;
        )*
    }};
}

/// Serialize every op in order.
///
/// # Errors
///
/// Returns an error if a command can't be encoded.
pub fn paint_render_ops(render_ops: &RenderOps) -> CommonResult<Vec<u8>> {
    let mut acc: Vec<u8> = Vec::with_capacity(4096);
    for render_op in render_ops.iter() {
        paint_render_op(&mut acc, render_op).into_diagnostic()?;
    }
    Ok(acc)
}

/// Serialize the frame and write it to `output_device` in a single write.
///
/// # Errors
///
/// Returns an error if the frame can't be encoded or written.
pub fn paint_and_write(
    render_ops: &RenderOps,
    output_device: &mut impl OutputDevice,
) -> CommonResult<()> {
    let frame = paint_render_ops(render_ops)?;

    DEBUG_TUI_MOD.then(|| {
        tracing::debug!(message = "paint", ops = render_ops.len(), bytes = frame.len());
    });

    output_device.write_frame(&frame).into_diagnostic()
}

fn paint_render_op(writer: &mut Vec<u8>, render_op: &RenderOp) -> std::io::Result<()> {
    match render_op {
        RenderOp::HideCursor => queue_terminal_command!(writer, Hide),
        RenderOp::ShowCursor => queue_terminal_command!(writer, Show),
        RenderOp::MoveCursorPositionAbs(pos) => {
            queue_terminal_command!(writer, MoveTo(to_u16(pos.col), to_u16(pos.row)));
        }
        RenderOp::ClearScreen => {
            queue_terminal_command!(writer, Clear(ClearType::All), MoveTo(0, 0));
        }
        RenderOp::ClearCurrentLineToEnd => {
            queue_terminal_command!(writer, Clear(ClearType::UntilNewLine));
        }
        RenderOp::SetFgColor(color) => {
            queue_terminal_command!(writer, SetForegroundColor(*color));
        }
        RenderOp::ResetColor => queue_terminal_command!(writer, ResetColor),
        RenderOp::SetInverse => {
            queue_terminal_command!(writer, SetAttribute(Attribute::Reverse));
        }
        RenderOp::ResetAttributes => {
            queue_terminal_command!(writer, SetAttribute(Attribute::Reset));
        }
        RenderOp::PaintText(text) => queue_terminal_command!(writer, Print(text)),
        RenderOp::NewLine => queue_terminal_command!(writer, Print("\r\n")),
    }
    Ok(())
}

fn to_u16(value: usize) -> u16 { u16::try_from(value).unwrap_or(u16::MAX) }
