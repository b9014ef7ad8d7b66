// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios winsize tcgetwinsize

//! # Best Editor
//!
//! A minimal full screen terminal editor front end. The interesting part of this crate
//! is the terminal I/O subsystem, which has three pieces:
//!
//! 1. **Raw mode lifecycle** ([`RawModeGuard`]): captures the terminal's termios
//!    snapshot, switches to raw input with a 100ms read deadline, and restores the
//!    snapshot on every exit path (including `?` propagation and panics).
//! 2. **Keyboard decoding** ([`read_key`]): a small lookahead state machine that turns
//!    the raw byte stream into [`EditorKey`] values, including multi byte VT100 escape
//!    sequences like `ESC [ 5 ~` (Page Up) or `ESC O H` (Home).
//! 3. **Frame rendering** ([`render`]): composes a whole screen (row markers, welcome
//!    banner, cursor position) into one [`FrameBuffer`] and writes it in one operation,
//!    so the terminal never shows a half drawn frame.
//!
//! Everything else is thin glue:
//!
//! ```text
//! ┌──────────────┐   bytes    ┌────────────┐  EditorKey  ┌────────────┐
//! │ RawModeGuard ├───────────►│ read_key() ├────────────►│ dispatch   │
//! │ (stdin fd)   │            └────────────┘             │ _key()     │
//! └──────────────┘                                       └─────┬──────┘
//!        ▲                                                     │ &mut ViewState
//!        │ one write per frame   ┌────────────┐                ▼
//!        └───────────────────────┤ render()   │◄───────── ViewState
//!                                └────────────┘
//! ```
//!
//! # Fatal errors
//!
//! Every [`TerminalError`] is fatal. [`run_editor`] clears the screen and homes the
//! cursor before returning the error, and the raw mode guard has already restored the
//! terminal by then, so the user's shell is left usable.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod core;
pub mod tui;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
pub use core::*;
pub use tui::*;
