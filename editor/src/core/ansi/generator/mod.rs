// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI sequence generation engine.
//!
//! ## Key Types
//!
//! - [`CsiSequence`] - parameterized CSI sequence builder (cursor positioning)
//! - [`FrameBuffer`] - the append buffer a whole frame is composed into before the
//!   single write to the terminal
//! - [`DsrSequence`] - DSR reply builder, used by tests to play the terminal's part

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod csi_sequence;
mod frame_buffer;

// Test/doc-only modules.
#[cfg(any(test, doc))]
mod dsr_sequence;

// Public re-exports (flat API).
pub use csi_sequence::*;
pub use frame_buffer::*;

#[cfg(any(test, doc))]
pub use dsr_sequence::*;
