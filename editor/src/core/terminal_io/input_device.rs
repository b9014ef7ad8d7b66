// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Byte-at-a-time input from the terminal. See [`InputDevice`].

use crate::TerminalError;
use rustix::{fd::AsFd, io::Errno};
use std::io;

/// Source of raw input bytes for the key decoder.
///
/// In raw mode the terminal is configured with `VMIN = 0` and `VTIME = 1`, so a read
/// returns as soon as one byte is available, or after ~100ms with nothing. That second
/// case is not an error: it is what lets the main event loop keep going when the user
/// is not typing. It is reported as `Ok(None)`.
pub trait InputDevice {
    /// Read a single byte.
    ///
    /// - `Ok(Some(byte))` - a byte arrived.
    /// - `Ok(None)` - no data yet (read deadline expired, `EAGAIN`, or `EINTR`).
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::Io`] for any other read failure.
    fn try_read_byte(&mut self) -> Result<Option<u8>, TerminalError>;
}

/// [`InputDevice`] backed by a terminal file descriptor (stdin in production).
///
/// Reads go straight to the fd with [`rustix::io::read`]. Going through
/// [`std::io::Stdin`] would put a userspace buffer in front of the fd, and bytes that
/// sit in that buffer are invisible to the read deadline.
#[derive(Debug)]
pub struct TerminalInputDevice<Fd: AsFd> {
    fd: Fd,
}

impl TerminalInputDevice<io::Stdin> {
    #[must_use]
    pub fn new_stdin() -> Self { Self::new(io::stdin()) }
}

impl<Fd: AsFd> TerminalInputDevice<Fd> {
    pub fn new(fd: Fd) -> Self { Self { fd } }
}

impl<Fd: AsFd> InputDevice for TerminalInputDevice<Fd> {
    fn try_read_byte(&mut self) -> Result<Option<u8>, TerminalError> {
        let mut buf = [0_u8; 1];
        match rustix::io::read(&self.fd, &mut buf[..]) {
            Ok(0) | Err(Errno::AGAIN | Errno::INTR) => Ok(None),
            Ok(_) => Ok(Some(buf[0])),
            Err(errno) => Err(TerminalError::read(errno)),
        }
    }
}
