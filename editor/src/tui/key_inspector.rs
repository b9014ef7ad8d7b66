// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Print every decoded keypress. Handy for finding out what a terminal emulator sends
//! for a key, and whether the decoder recognizes it.

use crate::{CRLF_BYTES, EditorKey, InputDevice, RawModeGuard, TerminalError,
            TerminalInputDevice, TerminalOutputDevice, clear_screen_and_home_cursor,
            read_key};
use rustix::fd::AsFd;
use std::io::{self, Write};

/// Pressing this (unmodified) stops the inspector.
pub const KEY_INSPECTOR_QUIT_BYTE: u8 = b'q';

/// Run the key inspector on the process's own terminal (stdin / stdout).
///
/// # Errors
///
/// See [`run_key_inspector_on`].
pub fn run_key_inspector() -> Result<(), TerminalError> {
    run_key_inspector_on(
        io::stdin(),
        &mut TerminalInputDevice::new_stdin(),
        &mut TerminalOutputDevice::new_stdout(),
    )
}

/// Put `terminal` in raw mode and run [`run_key_inspector_loop`]. Like the editor, a
/// fatal error restores the terminal and then clears the screen.
///
/// # Errors
///
/// Any [`TerminalError`] from raw mode setup or terminal I/O.
pub fn run_key_inspector_on(
    terminal: impl AsFd,
    input: &mut impl InputDevice,
    output: &mut impl Write,
) -> Result<(), TerminalError> {
    let result = RawModeGuard::new(&terminal).and_then(|raw_mode| {
        run_key_inspector_loop(input, output)?;
        raw_mode.disable()
    });

    if result.is_err() {
        drop(clear_screen_and_home_cursor(output));
    }

    result
}

/// Write one line per key until `q` is pressed (the `q` line is written too).
///
/// # Errors
///
/// Any [`TerminalError`] from reading input or writing output.
pub fn run_key_inspector_loop(
    input: &mut impl InputDevice,
    output: &mut impl Write,
) -> Result<(), TerminalError> {
    loop {
        let key = read_key(input)?;

        let mut line = describe_key(key).into_bytes();
        line.extend_from_slice(CRLF_BYTES);
        output
            .write_all(&line)
            .and_then(|()| output.flush())
            .map_err(TerminalError::write)?;

        if key == EditorKey::Byte(KEY_INSPECTOR_QUIT_BYTE) {
            return Ok(());
        }
    }
}

/// - control and non-ASCII bytes: the decimal value, `17`
/// - printable ASCII: the value and the character, `97 ('a')`
/// - decoded keys: the key name, `ArrowUp`
#[must_use]
pub fn describe_key(key: EditorKey) -> String {
    match key {
        EditorKey::Byte(byte) if byte.is_ascii_graphic() || byte == b' ' => {
            format!("{byte} ('{}')", char::from(byte))
        }
        EditorKey::Byte(byte) => byte.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MockInputDevice, OutputRecorder, open_pty_pair};
    use pretty_assertions::assert_eq;
    use rustix::termios::tcgetattr;
    use test_case::test_case;

    #[test_case(EditorKey::Byte(b'a'),  "97 ('a')"  ; "printable")]
    #[test_case(EditorKey::Byte(b' '),  "32 (' ')"  ; "space")]
    #[test_case(EditorKey::Byte(0x11),  "17"        ; "ctrl q")]
    #[test_case(EditorKey::Byte(0x7f),  "127"       ; "backspace")]
    #[test_case(EditorKey::Byte(0xc3),  "195"       ; "utf8 lead byte")]
    #[test_case(EditorKey::ArrowUp,     "ArrowUp"   ; "arrow up")]
    #[test_case(EditorKey::PageDown,    "PageDown"  ; "page down")]
    #[test_case(EditorKey::Escape,      "Escape"    ; "escape")]
    fn test_describe_key(key: EditorKey, expected: &str) {
        assert_eq!(describe_key(key), expected);
    }

    #[test]
    fn test_inspector_stops_after_q() {
        let mut input = MockInputDevice::new(b"\x01\x1b[Aqz");
        let mut output = OutputRecorder::default();

        run_key_inspector_loop(&mut input, &mut output).unwrap();

        assert_eq!(output.as_string(), "1\r\nArrowUp\r\n113 ('q')\r\n");
        // `z` was never read.
        assert_eq!(input.remaining(), 1);
    }

    #[test]
    fn test_inspector_on_pty_restores_terminal() {
        let (_controller, user) = open_pty_pair();
        let before = tcgetattr(&user).unwrap();
        let mut input = MockInputDevice::new(b"q");
        let mut output = OutputRecorder::default();

        run_key_inspector_on(&user, &mut input, &mut output).unwrap();

        assert_eq!(output.as_string(), "113 ('q')\r\n");
        assert_eq!(tcgetattr(&user).unwrap().local_modes, before.local_modes);
    }

    #[test]
    fn test_inspector_read_failure_clears_screen() {
        let (_controller, user) = open_pty_pair();
        let mut input = MockInputDevice::failing();
        let mut output = OutputRecorder::default();

        let result = run_key_inspector_on(&user, &mut input, &mut output);

        assert!(matches!(result, Err(TerminalError::Io { .. })));
        assert_eq!(output.bytes(), b"\x1b[2J\x1b[H");
    }
}
