// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Terminal I/O building blocks: ANSI constants and generators, raw mode, the VT100
//! keyboard decoder, window size discovery, fd backed input and output devices, and
//! tracing setup. Nothing in here knows about the editor's view state.

// Connect to source file.
pub mod ansi;
pub mod log;
pub mod term;
pub mod terminal_io;

#[cfg(test)]
pub mod test_fixtures;

// Re-export.
pub use ansi::*;
pub use log::*;
pub use term::*;
pub use terminal_io::*;

#[cfg(test)]
pub use test_fixtures::*;
