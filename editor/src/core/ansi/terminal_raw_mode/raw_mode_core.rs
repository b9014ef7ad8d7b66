// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The [`RawModeGuard`] RAII wrapper.

use super::make_raw_termios;
use crate::TerminalError;
use rustix::{fd::AsFd,
             termios::{self, OptionalActions, Termios}};

/// RAII guard that puts a terminal into raw mode and restores the original settings
/// when dropped.
///
/// The guard owns the snapshot of the original settings, so there is no global state:
/// the snapshot is captured exactly once (in [`new`]) and restored at most once
/// (by [`disable`] or by [`Drop`], whichever comes first). `Drop` covers every exit
/// path, including `?` propagation and panic unwinding.
///
/// See [module documentation] for the exact flags.
///
/// [`disable`]: Self::disable
/// [`new`]: Self::new
/// [module documentation]: mod@crate::core::ansi::terminal_raw_mode
#[derive(Debug)]
pub struct RawModeGuard<Fd: AsFd> {
    fd: Fd,
    /// `None` once the original settings have been restored.
    original: Option<Termios>,
}

impl<Fd: AsFd> RawModeGuard<Fd> {
    /// Snapshot the terminal settings of `fd` and switch it to raw mode.
    ///
    /// # Errors
    ///
    /// - [`TerminalError::TerminalQuery`] if the settings can't be read (`fd` is not
    ///   a terminal, for example).
    /// - [`TerminalError::TerminalConfigure`] if raw mode can't be applied.
    pub fn new(fd: Fd) -> Result<Self, TerminalError> {
        let original = termios::tcgetattr(&fd)
            .map_err(|errno| TerminalError::TerminalQuery(errno.into()))?;

        let raw = make_raw_termios(&original);
        termios::tcsetattr(&fd, OptionalActions::Flush, &raw)
            .map_err(|errno| TerminalError::TerminalConfigure(errno.into()))?;

        tracing::debug!(message = "Raw mode enabled");

        Ok(Self {
            fd,
            original: Some(original),
        })
    }

    /// The settings that will be restored. `None` after restoration.
    #[must_use]
    pub fn original_termios(&self) -> Option<&Termios> { self.original.as_ref() }

    /// Restore the original settings now, and report failure (which [`Drop`] can't).
    ///
    /// # Errors
    ///
    /// [`TerminalError::TerminalConfigure`] if the settings can't be applied.
    pub fn disable(mut self) -> Result<(), TerminalError> { self.restore() }

    fn restore(&mut self) -> Result<(), TerminalError> {
        let Some(original) = self.original.take() else {
            return Ok(());
        };
        termios::tcsetattr(&self.fd, OptionalActions::Flush, &original)
            .map_err(|errno| TerminalError::TerminalConfigure(errno.into()))?;
        tracing::debug!(message = "Raw mode disabled");
        Ok(())
    }
}

impl<Fd: AsFd> Drop for RawModeGuard<Fd> {
    fn drop(&mut self) {
        if let Err(error) = self.restore() {
            tracing::error!(message = "Failed to restore terminal settings", ?error);
        }
    }
}
