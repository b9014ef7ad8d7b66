// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI / VT100 protocol layer.
//!
//! | Direction | Module                          | What it does                               |
//! | :-------- | :------------------------------ | :----------------------------------------- |
//! | both      | [`constants`]                   | exact control sequence bytes               |
//! | output    | [`generator`]                   | parameterized CSI sequences, frame buffer  |
//! | input     | [`vt_100_terminal_input_parser`]| bytes → [`EditorKey`], cursor reports      |
//! | setup     | [`terminal_raw_mode`]           | termios snapshot, raw mode, restoration    |
//!
//! [`EditorKey`]: crate::EditorKey
//! [`constants`]: mod@constants
//! [`generator`]: mod@generator
//! [`terminal_raw_mode`]: mod@terminal_raw_mode
//! [`vt_100_terminal_input_parser`]: mod@vt_100_terminal_input_parser

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Module is public only when building documentation or tests.
// This allows rustdoc links to work while keeping it private in release builds.
#[cfg(any(test, doc))]
pub mod constants;
#[cfg(not(any(test, doc)))]
mod constants;

#[cfg(any(test, doc))]
pub mod generator;
#[cfg(not(any(test, doc)))]
mod generator;

#[cfg(any(test, doc))]
pub mod terminal_raw_mode;
#[cfg(not(any(test, doc)))]
mod terminal_raw_mode;

// Input parsing module - public for protocol access.
pub mod vt_100_terminal_input_parser;

// Re-export flat public API.
pub use constants::*;
pub use generator::*;
pub use terminal_raw_mode::*;
pub use vt_100_terminal_input_parser::*;
