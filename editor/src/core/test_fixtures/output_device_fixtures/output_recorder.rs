// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{self, Write};

/// [`Write`] mock that keeps every `write` call as a separate chunk, so tests can
/// check both what was written and how many writes it took.
#[derive(Debug, Default)]
pub struct OutputRecorder {
    chunks: Vec<Vec<u8>>,
    flush_count: usize,
    always_fail: bool,
}

impl OutputRecorder {
    /// Every write fails with `BrokenPipe`.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            always_fail: true,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn chunks(&self) -> &[Vec<u8>] { &self.chunks }

    /// All chunks, concatenated.
    #[must_use]
    pub fn bytes(&self) -> Vec<u8> { self.chunks.concat() }

    #[must_use]
    pub fn as_string(&self) -> String { String::from_utf8_lossy(&self.bytes()).into() }

    #[must_use]
    pub fn flush_count(&self) -> usize { self.flush_count }
}

impl Write for OutputRecorder {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.always_fail {
            return Err(io::Error::from(io::ErrorKind::BrokenPipe));
        }
        self.chunks.push(buf.to_vec());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_count += 1;
        Ok(())
    }
}
