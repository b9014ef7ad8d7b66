// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Continuation, DEBUG_SHOW_KEY_EVENTS, DEBUG_TUI_MOD, InputDevice,
            RawModeGuard, TerminalError, TerminalInputDevice, TerminalOutputDevice,
            ViewState, clear_screen_and_home_cursor, dispatch_key, get_window_size,
            read_key, render};
use rustix::fd::AsFd;
use std::io::{self, Write};

/// Render, read a key, dispatch it, repeat. Returns after Ctrl+Q, once the screen has
/// been cleared and the cursor homed.
///
/// # Errors
///
/// Any [`TerminalError`] from rendering or reading input. All of them are fatal.
pub fn run_main_event_loop(
    input: &mut impl InputDevice,
    output: &mut impl Write,
    state: &mut ViewState,
) -> Result<(), TerminalError> {
    loop {
        render(state, output)?;

        let key = read_key(input)?;
        DEBUG_SHOW_KEY_EVENTS.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(message = "main_event_loop -> key", key = ?key, state = ?state);
        });

        if dispatch_key(state, key) == Continuation::Stop {
            clear_screen_and_home_cursor(output).map_err(TerminalError::write)?;
            DEBUG_TUI_MOD.then(|| {
                tracing::debug!(message = "main_event_loop -> quit");
            });
            return Ok(());
        }
    }
}

/// Run the editor on the process's own terminal (stdin / stdout).
///
/// # Errors
///
/// See [`run_editor_on`].
pub fn run_editor() -> Result<(), TerminalError> {
    run_editor_on(
        io::stdin(),
        &mut TerminalInputDevice::new_stdin(),
        &mut TerminalOutputDevice::new_stdout(),
    )
}

/// Put `terminal` in raw mode, measure it, and run the main event loop until the user
/// quits.
///
/// On failure the terminal settings are restored first, then the screen is cleared and
/// the cursor homed, so the error report lands on a clean screen in cooked mode.
///
/// # Errors
///
/// Any [`TerminalError`]: raw mode setup, window size discovery, or I/O in the loop.
pub fn run_editor_on(
    terminal: impl AsFd,
    input: &mut impl InputDevice,
    output: &mut impl Write,
) -> Result<(), TerminalError> {
    let result = run_editor_session(terminal, input, output);

    if let Err(error) = &result {
        tracing::error!(message = "run_editor_on -> fatal error", error = ?error);
        // The original error is what gets reported.
        drop(clear_screen_and_home_cursor(output));
    }

    result
}

fn run_editor_session(
    terminal: impl AsFd,
    input: &mut impl InputDevice,
    output: &mut impl Write,
) -> Result<(), TerminalError> {
    let raw_mode = RawModeGuard::new(&terminal)?;

    let size = get_window_size(&terminal, input, output)?;
    DEBUG_TUI_MOD.then(|| {
        tracing::debug!(message = "run_editor_session -> window size", size = %size);
    });

    let mut state = ViewState::new(size);
    run_main_event_loop(input, output, &mut state)?;

    raw_mode.disable()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MockInputDevice, OutputRecorder, Size, compose_frame, open_pty_pair};
    use pretty_assertions::assert_eq;
    use rustix::termios::{LocalModes, Winsize, tcgetattr, tcsetwinsize};
    use std::fs::File;

    const CLEAR_AND_HOME: &[u8] = b"\x1b[2J\x1b[H";

    #[test]
    fn test_loop_renders_each_key_then_quits() {
        let mut state = ViewState::new(Size { rows: 24, cols: 80 });
        let mut input = MockInputDevice::new(b"\x1b[C\x1b[B\x11");
        let mut output = OutputRecorder::default();

        run_main_event_loop(&mut input, &mut output, &mut state).unwrap();

        let first = compose_frame(&ViewState::new(Size { rows: 24, cols: 80 }));
        let chunks = output.chunks();
        // Three frames (initial, after right, after down), then the clear.
        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks[0], first.as_bytes());
        assert!(chunks[1].ends_with(b"\x1b[1;2H\x1b[?25h"));
        assert!(chunks[2].ends_with(b"\x1b[2;2H\x1b[?25h"));
        assert_eq!(chunks[3], CLEAR_AND_HOME);
        assert_eq!((state.cursor_col, state.cursor_row), (1, 1));
    }

    #[test]
    fn test_loop_propagates_read_errors() {
        let mut state = ViewState::new(Size { rows: 2, cols: 2 });
        let mut input = MockInputDevice::failing();
        let mut output = OutputRecorder::default();

        let result = run_main_event_loop(&mut input, &mut output, &mut state);

        assert!(matches!(result, Err(TerminalError::Io { .. })));
        // The frame was drawn, the screen was not cleared.
        assert_eq!(output.chunks().len(), 1);
    }

    #[test]
    fn test_editor_on_pty_quits_and_restores_terminal() {
        let (_controller, user) = open_pty_pair();
        tcsetwinsize(
            &user,
            Winsize {
                ws_row: 24,
                ws_col: 80,
                ws_xpixel: 0,
                ws_ypixel: 0,
            },
        )
        .unwrap();
        let before = tcgetattr(&user).unwrap();
        let mut input = MockInputDevice::new(&[0x11]);
        let mut output = OutputRecorder::default();

        run_editor_on(&user, &mut input, &mut output).unwrap();

        let bytes = output.bytes();
        assert!(bytes.starts_with(b"\x1b[?25l\x1b[H"));
        assert!(bytes.ends_with(CLEAR_AND_HOME));
        let after = tcgetattr(&user).unwrap();
        assert_eq!(after.local_modes, before.local_modes);
        assert!(after.local_modes.contains(LocalModes::ECHO));
    }

    #[test]
    fn test_editor_on_non_terminal_clears_screen_and_fails() {
        let dev_null = File::open("/dev/null").unwrap();
        let mut input = MockInputDevice::default();
        let mut output = OutputRecorder::default();

        let result = run_editor_on(&dev_null, &mut input, &mut output);

        assert!(matches!(result, Err(TerminalError::TerminalQuery(_))));
        assert_eq!(output.bytes(), CLEAR_AND_HOME);
    }

    #[test]
    fn test_editor_window_size_failure_is_fatal() {
        // A fresh PTY reports 0 columns, and nobody answers the cursor probe.
        let (_controller, user) = open_pty_pair();
        let mut input = MockInputDevice::with_events([None]);
        let mut output = OutputRecorder::default();

        let result = run_editor_on(&user, &mut input, &mut output);

        assert!(matches!(result, Err(TerminalError::WindowSize(_))));
        assert!(output.bytes().ends_with(CLEAR_AND_HOME));
    }
}
