// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Parser for the terminal's reply to a cursor position request (`ESC [ 6 n`).

use crate::{CSI_PARAM_SEPARATOR, DSR_CURSOR_POSITION_RESPONSE_END, DSR_RESPONSE_START,
            Size};
use nom::{IResult, Parser,
          bytes::complete::tag,
          character::complete::{char, u16}};

/// Parse a complete cursor position report, `ESC [ <rows> ; <cols> R`, into a
/// [`Size`]. The cursor was moved to the bottom right corner before the request, so
/// its 1-based position is the window size.
///
/// Returns `None` if `reply` is not exactly one well formed report (trailing bytes are
/// rejected too).
#[must_use]
pub fn parse_cursor_position_report(reply: &str) -> Option<Size> {
    match cursor_position_report(reply) {
        Ok(("", size)) => Some(size),
        _ => None,
    }
}

fn cursor_position_report(input: &str) -> IResult<&str, Size> {
    let (rest, (_, rows, _, cols, _)) = (
        tag(DSR_RESPONSE_START),
        u16,
        char(CSI_PARAM_SEPARATOR),
        u16,
        char(DSR_CURSOR_POSITION_RESPONSE_END),
    )
        .parse(input)?;
    Ok((rest, Size { rows, cols }))
}
