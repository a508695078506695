// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Instant;

use crate::{ByteSource, CommonResult, DEBUG_TUI_MOD, DispatchOutcome, EditorState,
            OutputDevice, RenderOp, paint_and_write, process_command, render_engine,
            render_ops, try_read_command};

/// Render a frame, wait for one command, apply it, repeat. Each cycle writes exactly
/// one frame. Returns after a quit, once the screen has been cleared.
///
/// # Errors
///
/// Returns an error if reading input or writing a frame fails.
pub fn main_event_loop_impl(
    state: &mut EditorState,
    input_device: &mut impl ByteSource,
    output_device: &mut impl OutputDevice,
) -> CommonResult<()> {
    tracing::info!("main_event_loop -> Startup 🚀");

    loop {
        let render_ops = render_engine(state, Instant::now());
        paint_and_write(&render_ops, output_device)?;

        let command = loop {
            if let Some(command) = try_read_command(input_device)? {
                break command;
            }
        };

        DEBUG_TUI_MOD.then(|| {
            tracing::info!("main_event_loop -> Tick: ⏰ {command}");
        });

        if process_command(state, command) == DispatchOutcome::Exit {
            break;
        }
    }

    paint_and_write(&render_ops!(@new RenderOp::ClearScreen), output_device)?;

    tracing::info!("main_event_loop -> Shutdown 🛑");
    Ok(())
}
