// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Keyboard decoding: raw bytes to [`EditorKey`].
//!
//! ## The ESC ambiguity
//!
//! The Escape key sends a single `0x1B`, and so does the first byte of every arrow
//! and navigation key sequence. The only way to tell them apart is timing: a
//! terminal sends a whole sequence at once, a human can't type `ESC [ A` within a
//! read deadline. So after an `ESC` the decoder reads the next bytes with the raw mode
//! read deadline (100ms), and if they don't show up it reports [`EditorKey::Escape`].
//!
//! ## Recognized sequences
//!
//! | Bytes                 | Key                         |
//! | :-------------------- | :-------------------------- |
//! | `ESC [ A` .. `ESC [ D`| arrows (up, down, right, left) |
//! | `ESC [ H`, `ESC O H`  | Home                        |
//! | `ESC [ F`, `ESC O F`  | End                         |
//! | `ESC [ 1 ~`, `ESC [ 7 ~` | Home                     |
//! | `ESC [ 4 ~`, `ESC [ 8 ~` | End                      |
//! | `ESC [ 3 ~`           | Delete                      |
//! | `ESC [ 5 ~`           | Page Up                     |
//! | `ESC [ 6 ~`           | Page Down                   |
//!
//! Anything else that starts with `ESC` (including truncated sequences) is
//! [`EditorKey::Escape`]. Bytes that were consumed while deciding that are discarded,
//! never re-read.

use crate::{ANSI_CSI_BRACKET, ANSI_ESC, ANSI_FUNCTION_KEY_TERMINATOR, ANSI_SS3_O,
            ARROW_DOWN_FINAL, ARROW_LEFT_FINAL, ARROW_RIGHT_FINAL, ARROW_UP_FINAL,
            EditorKey, InputDevice, SPECIAL_DELETE_CODE, SPECIAL_END_ALT1_CODE,
            SPECIAL_END_ALT2_CODE, SPECIAL_END_FINAL, SPECIAL_HOME_ALT1_CODE,
            SPECIAL_HOME_ALT2_CODE, SPECIAL_HOME_FINAL, SPECIAL_PAGE_DOWN_CODE,
            SPECIAL_PAGE_UP_CODE, TerminalError};

/// Longest sequence after `ESC` that is ever looked at: `[ <digit> ~`.
const MAX_LOOKAHEAD: usize = 3;

/// Block until a key arrives and decode it.
///
/// Waits indefinitely for the first byte (quietly retrying every time the read
/// deadline expires). Everything after an `ESC` is read with a single deadline per
/// byte. See [module docs](self) for the recognized sequences.
///
/// # Errors
///
/// Propagates [`TerminalError::Io`] from the input device.
pub fn read_key(input: &mut impl InputDevice) -> Result<EditorKey, TerminalError> {
    let first_byte = loop {
        if let Some(byte) = input.try_read_byte()? {
            break byte;
        }
    };

    if first_byte != ANSI_ESC {
        return Ok(EditorKey::Byte(first_byte));
    }

    let key = read_escape_sequence(input)?;
    tracing::trace!(message = "Decoded escape sequence", ?key);
    Ok(key)
}

/// The `ESC` has already been consumed.
fn read_escape_sequence(input: &mut impl InputDevice) -> Result<EditorKey, TerminalError> {
    let mut lookahead = [0_u8; MAX_LOOKAHEAD];

    for slot in lookahead.iter_mut().take(2) {
        match input.try_read_byte()? {
            Some(byte) => *slot = byte,
            None => return Ok(EditorKey::Escape),
        }
    }

    let key = match (lookahead[0], lookahead[1]) {
        (ANSI_CSI_BRACKET, code @ b'0'..=b'9') => {
            let Some(byte) = input.try_read_byte()? else {
                return Ok(EditorKey::Escape);
            };
            lookahead[2] = byte;
            if lookahead[2] == ANSI_FUNCTION_KEY_TERMINATOR {
                decode_tilde_code(code)
            } else {
                None
            }
        }
        (ANSI_CSI_BRACKET, final_byte) => decode_csi_final(final_byte),
        (ANSI_SS3_O, final_byte) => decode_ss3_final(final_byte),
        _ => None,
    };

    Ok(key.unwrap_or(EditorKey::Escape))
}

/// `ESC [ <code> ~`
fn decode_tilde_code(code: u8) -> Option<EditorKey> {
    match code {
        SPECIAL_HOME_ALT1_CODE | SPECIAL_HOME_ALT2_CODE => Some(EditorKey::Home),
        SPECIAL_DELETE_CODE => Some(EditorKey::Delete),
        SPECIAL_END_ALT1_CODE | SPECIAL_END_ALT2_CODE => Some(EditorKey::End),
        SPECIAL_PAGE_UP_CODE => Some(EditorKey::PageUp),
        SPECIAL_PAGE_DOWN_CODE => Some(EditorKey::PageDown),
        _ => None,
    }
}

/// `ESC [ <final>`
fn decode_csi_final(final_byte: u8) -> Option<EditorKey> {
    match final_byte {
        ARROW_UP_FINAL => Some(EditorKey::ArrowUp),
        ARROW_DOWN_FINAL => Some(EditorKey::ArrowDown),
        ARROW_RIGHT_FINAL => Some(EditorKey::ArrowRight),
        ARROW_LEFT_FINAL => Some(EditorKey::ArrowLeft),
        SPECIAL_HOME_FINAL => Some(EditorKey::Home),
        SPECIAL_END_FINAL => Some(EditorKey::End),
        _ => None,
    }
}

/// `ESC O <final>`
fn decode_ss3_final(final_byte: u8) -> Option<EditorKey> {
    match final_byte {
        SPECIAL_HOME_FINAL => Some(EditorKey::Home),
        SPECIAL_END_FINAL => Some(EditorKey::End),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MockInputDevice, ctrl_key};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn decode(bytes: &[u8]) -> (EditorKey, MockInputDevice) {
        let mut input = MockInputDevice::new(bytes);
        let key = read_key(&mut input).unwrap();
        (key, input)
    }

    #[test]
    fn test_every_non_escape_byte_is_a_plain_byte() {
        for byte in (0..=u8::MAX).filter(|it| *it != ANSI_ESC) {
            let (key, input) = decode(&[byte]);
            assert_eq!(key, EditorKey::Byte(byte));
            assert_eq!(input.remaining(), 0);
        }
    }

    #[test]
    fn test_ctrl_q_is_byte_0x11() {
        let (key, _) = decode(&[ctrl_key(b'q')]);
        assert_eq!(key, EditorKey::Byte(0x11));
    }

    #[test_case(b"\x1b[A", EditorKey::ArrowUp   ; "arrow up")]
    #[test_case(b"\x1b[B", EditorKey::ArrowDown ; "arrow down")]
    #[test_case(b"\x1b[C", EditorKey::ArrowRight; "arrow right")]
    #[test_case(b"\x1b[D", EditorKey::ArrowLeft ; "arrow left")]
    #[test_case(b"\x1b[H", EditorKey::Home      ; "csi home")]
    #[test_case(b"\x1b[F", EditorKey::End       ; "csi end")]
    #[test_case(b"\x1bOH", EditorKey::Home      ; "ss3 home")]
    #[test_case(b"\x1bOF", EditorKey::End       ; "ss3 end")]
    #[test_case(b"\x1b[1~", EditorKey::Home     ; "vt220 home")]
    #[test_case(b"\x1b[7~", EditorKey::Home     ; "rxvt home")]
    #[test_case(b"\x1b[4~", EditorKey::End      ; "vt220 end")]
    #[test_case(b"\x1b[8~", EditorKey::End      ; "rxvt end")]
    #[test_case(b"\x1b[3~", EditorKey::Delete   ; "delete")]
    #[test_case(b"\x1b[5~", EditorKey::PageUp   ; "page up")]
    #[test_case(b"\x1b[6~", EditorKey::PageDown ; "page down")]
    fn test_supported_sequences(bytes: &[u8], expected: EditorKey) {
        let (key, input) = decode(bytes);
        assert_eq!(key, expected);
        assert_eq!(input.remaining(), 0);
    }

    #[test_case(b"\x1b"        ; "lone escape")]
    #[test_case(b"\x1b["       ; "truncated after bracket")]
    #[test_case(b"\x1b[5"      ; "truncated before tilde")]
    #[test_case(b"\x1b[5x"     ; "digit without tilde")]
    #[test_case(b"\x1b[2~"     ; "unmapped digit")]
    #[test_case(b"\x1b[9~"     ; "unmapped digit nine")]
    #[test_case(b"\x1b[Z"      ; "unmapped csi final")]
    #[test_case(b"\x1bOA"      ; "unmapped ss3 final")]
    #[test_case(b"\x1bxy"      ; "unknown introducer")]
    #[test_case(b"\x1bO"       ; "truncated ss3")]
    fn test_unmapped_or_truncated_is_escape(bytes: &[u8]) {
        let (key, input) = decode(bytes);
        assert_eq!(key, EditorKey::Escape);
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn test_waits_through_timeouts_for_the_first_byte() {
        let mut input = MockInputDevice::with_events([None, None, None, Some(b'a')]);
        assert_eq!(read_key(&mut input).unwrap(), EditorKey::Byte(b'a'));
    }

    #[test]
    fn test_timeout_mid_sequence_is_escape_and_rest_is_not_reread() {
        // ESC, then the deadline expires, then `[A` arrives late. The late bytes are
        // decoded as plain keys, not glued onto the earlier ESC.
        let mut input =
            MockInputDevice::with_events([Some(ANSI_ESC), None, Some(b'['), Some(b'A')]);
        assert_eq!(read_key(&mut input).unwrap(), EditorKey::Escape);
        assert_eq!(read_key(&mut input).unwrap(), EditorKey::Byte(b'['));
        assert_eq!(read_key(&mut input).unwrap(), EditorKey::Byte(b'A'));
    }

    #[test]
    fn test_consecutive_keys_in_one_burst() {
        let mut input = MockInputDevice::new(b"\x1b[5~\x1b[Ax");
        assert_eq!(read_key(&mut input).unwrap(), EditorKey::PageUp);
        assert_eq!(read_key(&mut input).unwrap(), EditorKey::ArrowUp);
        assert_eq!(read_key(&mut input).unwrap(), EditorKey::Byte(b'x'));
    }

    #[test]
    fn test_read_error_propagates() {
        let mut input = MockInputDevice::failing();
        assert!(matches!(
            read_key(&mut input),
            Err(TerminalError::Io {
                operation: "read",
                ..
            })
        ));
    }
}
