// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{InputDevice, TerminalError};
use std::{collections::VecDeque, io};

/// How many "no data yet" reads an exhausted mock hands out before failing. Keeps a
/// test that reads past its script from spinning forever in [`read_key`].
///
/// [`read_key`]: crate::read_key
const EXHAUSTED_READ_LIMIT: usize = 64;

/// Scripted [`InputDevice`]. Each event is either `Some(byte)` or `None` (the read
/// deadline expired). Once the script runs out, reads keep reporting "no data yet"
/// for a while and then fail with [`TerminalError::Io`].
#[derive(Debug, Default)]
pub struct MockInputDevice {
    events: VecDeque<Option<u8>>,
    exhausted_reads: usize,
    always_fail: bool,
}

impl MockInputDevice {
    /// All bytes arrive back to back, like a burst from the terminal.
    #[must_use]
    pub fn new(bytes: &[u8]) -> Self {
        Self::with_events(bytes.iter().copied().map(Some))
    }

    #[must_use]
    pub fn with_events(events: impl IntoIterator<Item = Option<u8>>) -> Self {
        Self {
            events: events.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Every read fails.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            always_fail: true,
            ..Default::default()
        }
    }

    /// Scripted events not consumed yet.
    #[must_use]
    pub fn remaining(&self) -> usize { self.events.len() }
}

impl InputDevice for MockInputDevice {
    fn try_read_byte(&mut self) -> Result<Option<u8>, TerminalError> {
        if self.always_fail {
            return Err(TerminalError::read(io::Error::from(io::ErrorKind::BrokenPipe)));
        }
        if let Some(event) = self.events.pop_front() {
            return Ok(event);
        }
        self.exhausted_reads += 1;
        if self.exhausted_reads > EXHAUSTED_READ_LIMIT {
            return Err(TerminalError::read(io::Error::from(
                io::ErrorKind::UnexpectedEof,
            )));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_replays_script_then_times_out_then_fails() {
        let mut input = MockInputDevice::with_events([Some(b'a'), None]);
        assert_eq!(input.try_read_byte().unwrap(), Some(b'a'));
        assert_eq!(input.try_read_byte().unwrap(), None);
        assert_eq!(input.remaining(), 0);

        for _ in 0..EXHAUSTED_READ_LIMIT {
            assert_eq!(input.try_read_byte().unwrap(), None);
        }
        assert!(input.try_read_byte().is_err());
    }
}
