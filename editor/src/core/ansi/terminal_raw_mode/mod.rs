// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words tcgetattr tcsetattr BRKINT ICRNL INPCK ISTRIP IXON OPOST ICANON IEXTEN
// cspell:words ISIG VMIN VTIME TCSAFLUSH

//! Terminal raw mode lifecycle.
//!
//! ## Raw Mode vs Cooked Mode
//!
//! **Cooked Mode** (default):
//! - Input is line-buffered (waits for Enter key)
//! - Special characters are interpreted (Ctrl+C, Ctrl+Z, Ctrl+S, Ctrl+V)
//! - Typed characters are echoed
//! - Output `\n` is translated to `\r\n`
//!
//! **Raw Mode**:
//! - Bytes are available as soon as they are typed
//! - Control keys arrive as plain bytes (Ctrl+Q is `0x11`)
//! - No echo and no output post-processing, so the editor writes `\r\n` itself
//!
//! ## Flags
//!
//! | Group         | Change                                     |
//! | :------------ | :----------------------------------------- |
//! | input modes   | clear `BRKINT ICRNL INPCK ISTRIP IXON`     |
//! | output modes  | clear `OPOST`                              |
//! | control modes | set `CS8`                                  |
//! | local modes   | clear `ECHO ICANON IEXTEN ISIG`            |
//! | special codes | `VMIN = 0`, `VTIME = 1`                    |
//!
//! `VMIN = 0` with `VTIME = 1` gives every read a 100ms deadline: it returns one byte
//! as soon as one is available, or nothing when the deadline expires. The key decoder
//! relies on this to tell a lone `ESC` keypress apart from the start of an escape
//! sequence.
//!
//! Both the switch to raw mode and the restoration use `TCSAFLUSH` semantics
//! ([`OptionalActions::Flush`]): pending output is drained and unread input is
//! discarded before the change takes effect.
//!
//! ## Usage
//!
//! ```no_run
//! use best_editor::RawModeGuard;
//!
//! # fn main() -> Result<(), best_editor::TerminalError> {
//! {
//!     let _guard = RawModeGuard::new(std::io::stdin())?;
//!     // Terminal is now in raw mode.
//! } // Original settings restored here, even if the block returns early or panics.
//! # Ok(())
//! # }
//! ```
//!
//! [`OptionalActions::Flush`]: rustix::termios::OptionalActions::Flush

// Private modules (hide internal structure).
mod raw_mode_core;
mod raw_mode_unix;

// Re-export the public API (flat, ergonomic surface).
pub use raw_mode_core::*;
pub use raw_mode_unix::*;
