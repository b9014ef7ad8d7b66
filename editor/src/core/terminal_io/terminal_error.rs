// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words tcgetattr tcsetattr

//! Every way the terminal I/O subsystem can fail. See [`TerminalError`].

use std::io;

/// Errors from the terminal I/O subsystem.
///
/// All of these are fatal. There is no retry policy beyond the key decoder quietly
/// re-reading when the input device reports that no byte arrived before the read
/// deadline (which is not an error at all, see [`InputDevice::try_read_byte`]).
///
/// | Variant                    | Cause                                                  |
/// | :------------------------- | :----------------------------------------------------- |
/// | [`TerminalQuery`]          | `tcgetattr` failed, usually because stdin is not a tty |
/// | [`TerminalConfigure`]      | `tcsetattr` failed while entering or leaving raw mode  |
/// | [`Io`]                     | a read or write on the terminal fd failed              |
/// | [`WindowSize`]             | neither the size query nor the cursor probe worked     |
/// | [`MalformedCursorReply`]   | the cursor probe reply is not `ESC [ rows ; cols R`    |
///
/// [`InputDevice::try_read_byte`]: crate::InputDevice::try_read_byte
/// [`Io`]: Self::Io
/// [`MalformedCursorReply`]: Self::MalformedCursorReply
/// [`TerminalConfigure`]: Self::TerminalConfigure
/// [`TerminalQuery`]: Self::TerminalQuery
/// [`WindowSize`]: Self::WindowSize
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum TerminalError {
    /// Could not read the current terminal attributes.
    #[error("Failed to retrieve terminal attributes")]
    #[diagnostic(
        code(best_editor::terminal::query),
        help("Make sure stdin is an interactive terminal, not a pipe or a file")
    )]
    TerminalQuery(#[source] io::Error),

    /// Could not apply (or restore) terminal attributes.
    #[error("Failed to set terminal attributes")]
    #[diagnostic(code(best_editor::terminal::configure))]
    TerminalConfigure(#[source] io::Error),

    /// A read or write on the terminal failed for a reason other than "no data yet".
    #[error("Terminal {operation} failed")]
    #[diagnostic(code(best_editor::terminal::io))]
    Io {
        /// Which primitive failed (`"read"` or `"write"`).
        operation: &'static str,
        #[source]
        source: io::Error,
    },

    /// Both the direct window size query and the cursor position probe failed.
    #[error("Failed to determine the terminal window size")]
    #[diagnostic(
        code(best_editor::terminal::window_size),
        help("The terminal did not answer the cursor position request (ESC [ 6 n)")
    )]
    WindowSize(#[source] io::Error),

    /// The cursor position probe got a reply, but it could not be parsed.
    #[error("Malformed cursor position reply: {reply:?}")]
    #[diagnostic(
        code(best_editor::terminal::malformed_cursor_reply),
        help("Expected a reply of the form ESC [ <rows> ; <cols> R")
    )]
    MalformedCursorReply {
        /// The raw reply, lossily decoded for display.
        reply: String,
    },
}

impl TerminalError {
    pub(crate) fn read(source: impl Into<io::Error>) -> Self {
        TerminalError::Io {
            operation: "read",
            source: source.into(),
        }
    }

    pub(crate) fn write(source: impl Into<io::Error>) -> Self {
        TerminalError::Io {
            operation: "write",
            source: source.into(),
        }
    }
}
