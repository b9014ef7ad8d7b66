// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! VT-100 terminal input parsing.
//!
//! Turns the raw byte stream coming out of a terminal in raw mode into meaningful
//! values:
//!
//! ```text
//! Raw Terminal Input (stdin, VMIN=0 VTIME=1)
//!    │
//! ┌──▼───────────────────────────────────────┐
//! │  InputDevice::try_read_byte()            │  ← core/terminal_io/
//! │  • one byte, or "no data yet"            │
//! └──────────────────────────────────────────┘
//!    │
//! ┌──▼───────────────────────────────────────┐
//! │  vt_100_terminal_input_parser            │  ← core/ansi/
//! │  • read_key()      → EditorKey           │     vt_100_terminal_input_parser/
//! │  • parse_cursor_position_report() → Size │
//! └──────────────────────────────────────────┘
//! ```
//!
//! ## Module Responsibilities
//!
//! ### `keyboard.rs`
//! - Single byte keys (printable, control, Ctrl+letter)
//! - CSI sequences (`ESC [`) for arrows, Home / End, and the `~` terminated keys
//! - SS3 sequences (`ESC O`) for Home / End in application mode
//! - Telling a lone `ESC` keypress apart from a sequence, using the read deadline
//!
//! ### `dsr_reply.rs`
//! - Cursor position reports (`ESC [ rows ; cols R`), used to measure the window
//!   when the size can't be queried directly

// Private modules (hide internal structure).
mod dsr_reply;
mod ir_event_types;
mod keyboard;

// Re-export flat public API.
pub use dsr_reply::*;
pub use ir_event_types::*;
pub use keyboard::*;
