// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Device Status Report (DSR) request and reply constants.

/// ESC [ 6 n (DSR 6): Ask the terminal to report the cursor position.
pub const DSR_CURSOR_POSITION_REQUEST_BYTES: &[u8] = b"\x1b[6n";

/// CSI sequence start for DSR responses: ESC [
pub const DSR_RESPONSE_START: &str = "\x1b[";

/// Cursor position response terminator: R
pub const DSR_CURSOR_POSITION_RESPONSE_END: char = 'R';

/// The longest cursor position reply accepted, in bytes. Two 5 digit numbers plus
/// `ESC [ ; R` fits comfortably.
pub const DSR_CURSOR_POSITION_RESPONSE_MAX_LEN: usize = 32;
