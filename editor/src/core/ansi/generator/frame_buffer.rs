// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The per-frame append buffer. See [`FrameBuffer`] for details.

use crate::CsiSequence;
use std::io::{self, Write};

/// Append-only byte buffer that a whole frame is composed into before it is written to
/// the terminal in one operation.
///
/// Writing each fragment (cursor moves, row markers, erase sequences) straight to the
/// terminal lets the user watch the frame being drawn, which shows up as flicker and
/// tearing. Composing everything first and handing the terminal a single buffer avoids
/// that.
///
/// A buffer is built fresh for each frame and consumed by [`FrameBuffer::write_to`], so
/// it cannot be reused across frames by accident.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    bytes: Vec<u8>,
}

impl FrameBuffer {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn append(&mut self, bytes: &[u8]) { self.bytes.extend_from_slice(bytes); }

    pub fn append_str(&mut self, text: &str) { self.append(text.as_bytes()); }

    pub fn append_csi(&mut self, sequence: CsiSequence) {
        let mut acc = String::new();
        sequence.write_to_buf(&mut acc);
        self.append_str(&acc);
    }

    /// Append `count` copies of `byte`.
    pub fn append_repeated(&mut self, byte: u8, count: usize) {
        self.bytes.resize(self.bytes.len() + count, byte);
    }

    #[must_use]
    pub fn len(&self) -> usize { self.bytes.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.bytes.is_empty() }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] { &self.bytes }

    /// Write the entire buffer with one `write_all`, flush, and drop it.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the write or flush fails.
    pub fn write_to(self, output: &mut impl Write) -> io::Result<()> {
        output.write_all(&self.bytes)?;
        output.flush()
    }
}
