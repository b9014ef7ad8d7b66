// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Unbuffered output to the terminal. See [`TerminalOutputDevice`].

use crate::{CLEAR_SCREEN_BYTES, CURSOR_HOME_BYTES};
use rustix::fd::AsFd;
use std::io::{self, Write};

/// [`Write`] implementation that hands every buffer straight to the fd with
/// [`rustix::io::write`].
///
/// [`std::io::Stdout`] is line buffered, so a frame that contains `\r\n` would reach
/// the terminal as many small writes. Writing to the fd directly keeps each
/// [`FrameBuffer`] a single `write(2)` call (modulo short writes, which `write_all`
/// retries).
///
/// [`FrameBuffer`]: crate::FrameBuffer
#[derive(Debug)]
pub struct TerminalOutputDevice<Fd: AsFd> {
    fd: Fd,
}

impl TerminalOutputDevice<io::Stdout> {
    #[must_use]
    pub fn new_stdout() -> Self { Self::new(io::stdout()) }
}

impl<Fd: AsFd> TerminalOutputDevice<Fd> {
    pub fn new(fd: Fd) -> Self { Self { fd } }
}

impl<Fd: AsFd> Write for TerminalOutputDevice<Fd> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // EINTR maps to ErrorKind::Interrupted, which write_all retries.
        rustix::io::write(&self.fd, buf).map_err(io::Error::from)
    }

    /// Nothing is buffered in userspace.
    fn flush(&mut self) -> io::Result<()> { Ok(()) }
}

/// Clear the whole screen and move the cursor to the top left corner. Used on every
/// way out of the editor (Ctrl-Q and fatal errors).
///
/// # Errors
///
/// Returns the underlying I/O error if the write fails.
pub fn clear_screen_and_home_cursor(output: &mut impl Write) -> io::Result<()> {
    let mut bytes = [0_u8; CLEAR_SCREEN_BYTES.len() + CURSOR_HOME_BYTES.len()];
    let (clear, home) = bytes.split_at_mut(CLEAR_SCREEN_BYTES.len());
    clear.copy_from_slice(CLEAR_SCREEN_BYTES);
    home.copy_from_slice(CURSOR_HOME_BYTES);
    output.write_all(&bytes)?;
    output.flush()
}
