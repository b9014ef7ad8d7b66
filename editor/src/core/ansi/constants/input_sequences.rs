// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI/VT100 keyboard input sequence constants.
//!
//! # Keyboard Sequences
//!
//! ## Arrow Keys (CSI A/B/C/D)
//! - Up: `ESC[A`
//! - Down: `ESC[B`
//! - Right: `ESC[C`
//! - Left: `ESC[D`
//!
//! ## Special Keys
//! - Home: `ESC[H`, `ESC[1~`, `ESC[7~`, `ESC OH`
//! - End: `ESC[F`, `ESC[4~`, `ESC[8~`, `ESC OF`
//! - Delete: `ESC[3~`
//! - Page Up: `ESC[5~`
//! - Page Down: `ESC[6~`
//!
//! Which of the Home / End variants arrives depends on the terminal emulator (xterm,
//! rxvt, linux console) and on whether it is in cursor key application mode.

// ==================== ANSI Sequence Components ====================

/// ESC byte (27 in decimal, 0x1B in hex)
pub const ANSI_ESC: u8 = 0x1B;

/// CSI bracket byte: `[` (91 in decimal, 0x5B in hex)
pub const ANSI_CSI_BRACKET: u8 = 0x5B;

/// SS3 'O' byte: Second byte of SS3 sequences (0x4F)
/// SS3 sequences format: ESC O `command_char` (used in application mode).
pub const ANSI_SS3_O: u8 = b'O';

/// Function key terminator: `~` (126 in decimal, 0x7E in hex)
pub const ANSI_FUNCTION_KEY_TERMINATOR: u8 = b'~';

// ==================== Arrow Keys (CSI A/B/C/D) ====================

/// CSI A: Up arrow key final byte
pub const ARROW_UP_FINAL: u8 = b'A';

/// CSI B: Down arrow key final byte
pub const ARROW_DOWN_FINAL: u8 = b'B';

/// CSI C: Right arrow key final byte
pub const ARROW_RIGHT_FINAL: u8 = b'C';

/// CSI D: Left arrow key final byte
pub const ARROW_LEFT_FINAL: u8 = b'D';

// ==================== Special Keys (CSI H/F, SS3 H/F) ====================

/// CSI H / SS3 H: Home key final byte
pub const SPECIAL_HOME_FINAL: u8 = b'H';

/// CSI F / SS3 F: End key final byte
pub const SPECIAL_END_FINAL: u8 = b'F';

// ==================== Special Keys (CSI n~) ====================

/// CSI 1~: Home key code (alternative, vt220)
pub const SPECIAL_HOME_ALT1_CODE: u8 = b'1';

/// CSI 3~: Delete key code
pub const SPECIAL_DELETE_CODE: u8 = b'3';

/// CSI 4~: End key code (alternative, vt220)
pub const SPECIAL_END_ALT1_CODE: u8 = b'4';

/// CSI 5~: Page Up key code
pub const SPECIAL_PAGE_UP_CODE: u8 = b'5';

/// CSI 6~: Page Down key code
pub const SPECIAL_PAGE_DOWN_CODE: u8 = b'6';

/// CSI 7~: Home key code (alternative, rxvt)
pub const SPECIAL_HOME_ALT2_CODE: u8 = b'7';

/// CSI 8~: End key code (alternative, rxvt)
pub const SPECIAL_END_ALT2_CODE: u8 = b'8';
