// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words winsize tcgetwinsize

//! Terminal window size discovery.
//!
//! The direct way is the `TIOCGWINSZ` ioctl ([`tcgetwinsize`]). Some terminals (and
//! serial consoles) don't support it, or report 0 columns. The fallback is to push the
//! cursor as far right and down as it goes, ask the terminal where the cursor ended up
//! (`ESC [ 6 n`), and read the answer off the input stream.
//!
//! [`tcgetwinsize`]: fn@rustix::termios::tcgetwinsize

use crate::{CURSOR_DOWN_TO_EDGE_BYTES, CURSOR_FORWARD_TO_EDGE_BYTES,
            DSR_CURSOR_POSITION_REQUEST_BYTES, DSR_CURSOR_POSITION_RESPONSE_END,
            DSR_CURSOR_POSITION_RESPONSE_MAX_LEN, InputDevice, TerminalError,
            parse_cursor_position_report};
use rustix::fd::AsFd;
use smallvec::SmallVec;
use std::{fmt, io};

/// Terminal window size in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub rows: u16,
    pub cols: u16,
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

/// Get the window size of `terminal_fd`, falling back to [`probe_window_size`] when
/// the direct query fails or reports 0 columns.
///
/// `input` and `output` are only used by the fallback. They must be connected to the
/// same terminal, and the terminal must be in raw mode (otherwise the reply to the
/// cursor position request waits for Enter and is echoed).
///
/// # Errors
///
/// See [`probe_window_size`].
pub fn get_window_size(
    terminal_fd: impl AsFd,
    input: &mut impl InputDevice,
    output: &mut impl io::Write,
) -> Result<Size, TerminalError> {
    match rustix::termios::tcgetwinsize(terminal_fd) {
        Ok(winsize) if winsize.ws_col != 0 => {
            let size = Size {
                rows: winsize.ws_row,
                cols: winsize.ws_col,
            };
            tracing::debug!(message = "Window size from tcgetwinsize", %size);
            Ok(size)
        }
        result => {
            tracing::debug!(
                message = "tcgetwinsize unusable, probing with the cursor",
                ?result
            );
            probe_window_size(input, output)
        }
    }
}

/// Measure the window by moving the cursor to the bottom right corner and asking the
/// terminal for its position.
///
/// The reply is read byte by byte until its `R` terminator, until the read deadline
/// expires, or until the reply buffer is full, whichever happens first.
///
/// # Errors
///
/// - [`TerminalError::WindowSize`] if the request can't be written, or the reply
///   can't be read or never arrives.
/// - [`TerminalError::MalformedCursorReply`] if a reply arrives but isn't
///   `ESC [ <rows> ; <cols> R`.
pub fn probe_window_size(
    input: &mut impl InputDevice,
    output: &mut impl io::Write,
) -> Result<Size, TerminalError> {
    write_probe_request(output).map_err(TerminalError::WindowSize)?;

    let reply = read_probe_reply(input)?;
    if reply.is_empty() {
        return Err(TerminalError::WindowSize(io::Error::new(
            io::ErrorKind::TimedOut,
            "no reply to the cursor position request",
        )));
    }

    let malformed = || TerminalError::MalformedCursorReply {
        reply: String::from_utf8_lossy(&reply).into_owned(),
    };
    let text = std::str::from_utf8(&reply).map_err(|_| malformed())?;
    let size = parse_cursor_position_report(text).ok_or_else(malformed)?;

    tracing::debug!(message = "Window size from cursor probe", %size);
    Ok(size)
}

fn write_probe_request(output: &mut impl io::Write) -> io::Result<()> {
    output.write_all(CURSOR_FORWARD_TO_EDGE_BYTES)?;
    output.write_all(CURSOR_DOWN_TO_EDGE_BYTES)?;
    output.write_all(DSR_CURSOR_POSITION_REQUEST_BYTES)?;
    output.flush()
}

fn read_probe_reply(
    input: &mut impl InputDevice,
) -> Result<SmallVec<[u8; DSR_CURSOR_POSITION_RESPONSE_MAX_LEN]>, TerminalError> {
    let mut reply = SmallVec::<[u8; DSR_CURSOR_POSITION_RESPONSE_MAX_LEN]>::new();

    // Leave one slot spare, the reply is never allowed to fill the buffer.
    while reply.len() < DSR_CURSOR_POSITION_RESPONSE_MAX_LEN - 1 {
        let byte = match input.try_read_byte() {
            Ok(Some(byte)) => byte,
            Ok(None) => break,
            Err(TerminalError::Io { source, .. }) => {
                return Err(TerminalError::WindowSize(source));
            }
            Err(other) => return Err(other),
        };
        reply.push(byte);
        if char::from(byte) == DSR_CURSOR_POSITION_RESPONSE_END {
            break;
        }
    }

    Ok(reply)
}
