// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Centralized ANSI/VT100 escape sequence constants.
//!
//! Constants are grouped by protocol domain:
//! - **csi**: output CSI sequences the frame renderer and cleanup paths emit
//! - **dsr**: Device Status Report (cursor position) request, reply, and probe
//! - **esc**: C0 control bytes and line endings
//! - **input_sequences**: bytes that make up VT100 keyboard input sequences
//!
//! ## Usage
//!
//! ```rust
//! use best_editor::{ANSI_ESC, CURSOR_HOME_BYTES, HIDE_CURSOR_BYTES};
//!
//! let mut frame = Vec::new();
//! frame.extend_from_slice(HIDE_CURSOR_BYTES);
//! frame.extend_from_slice(CURSOR_HOME_BYTES);
//! assert_eq!(frame[0], ANSI_ESC);
//! ```

// Skip rustfmt for rest of file to preserve manual alignment.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod csi;
mod dsr;
mod esc;
mod input_sequences;

// Public re-exports (flat API) for convenience.
pub use csi::*;
pub use dsr::*;
pub use esc::*;
pub use input_sequences::*;
