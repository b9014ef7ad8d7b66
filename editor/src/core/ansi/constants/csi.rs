// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! CSI (Control Sequence Introducer) output constants.
//!
//! These are the exact bytes written to the terminal. They are kept byte for byte
//! compatible with VT100, so any xterm-like emulator understands them.

/// CSI sequence start: ESC [
pub const CSI_START: &str = "\x1b[";

/// Separator between numeric CSI parameters: `;`
pub const CSI_PARAM_SEPARATOR: char = ';';

/// CSI H (CUP) final char. With parameters this is `ESC [ row ; col H`.
pub const CUP_CURSOR_POSITION: char = 'H';

/// ESC [ 2 J (ED 2): Erase the entire display.
pub const CLEAR_SCREEN_BYTES: &[u8] = b"\x1b[2J";

/// ESC [ H (CUP with no parameters): Move cursor to row 1, column 1.
pub const CURSOR_HOME_BYTES: &[u8] = b"\x1b[H";

/// ESC [ ? 25 l (DECTCEM reset): Hide the cursor while a frame is drawn.
pub const HIDE_CURSOR_BYTES: &[u8] = b"\x1b[?25l";

/// ESC [ ? 25 h (DECTCEM set): Show the cursor again.
pub const SHOW_CURSOR_BYTES: &[u8] = b"\x1b[?25h";

/// ESC [ K (EL 0): Erase from the cursor to the end of the line.
pub const ERASE_TO_END_OF_LINE_BYTES: &[u8] = b"\x1b[K";

/// ESC [ 999 C (CUF 999): Move the cursor right as far as it goes. The terminal clamps
/// the cursor at the right edge, which is what the window size probe relies on.
pub const CURSOR_FORWARD_TO_EDGE_BYTES: &[u8] = b"\x1b[999C";

/// ESC [ 999 B (CUD 999): Move the cursor down as far as it goes (clamped at the bottom
/// edge).
pub const CURSOR_DOWN_TO_EDGE_BYTES: &[u8] = b"\x1b[999B";
