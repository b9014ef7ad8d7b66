// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! C0 control characters and line endings.

/// CRLF (Carriage Return + Line Feed) sequence for terminal line endings. Output post
/// processing (`OPOST`) is off in raw mode, so a bare `\n` would not return the carriage.
pub const CRLF_BYTES: &[u8] = b"\r\n";

/// Mask applied to a letter to get the byte the terminal sends for Ctrl + that letter.
/// For example Ctrl+Q is `b'q' & 0x1F` = 0x11.
pub const CTRL_KEY_MASK: u8 = 0x1F;

/// Returns the byte sent when `Ctrl` is held with `letter`.
#[must_use]
pub const fn ctrl_key(letter: u8) -> u8 { letter & CTRL_KEY_MASK }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_key() {
        assert_eq!(ctrl_key(b'q'), 0x11);
        assert_eq!(ctrl_key(b'Q'), 0x11);
        assert_eq!(ctrl_key(b'a'), 0x01);
    }
}
