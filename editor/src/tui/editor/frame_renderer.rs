// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turns a [`ViewState`] into the bytes of one full frame.
//!
//! Frame layout, for a 24 row screen:
//!
//! ```text
//! ESC[?25l ESC[H                       hide cursor, go home
//! ~ ESC[K \r\n                         row 0
//! ...
//! ~<padding>Best Editor -- ... ESC[K   row 8 (screen_rows / 3)
//! ...
//! ~ ESC[K                              row 23, no trailing \r\n
//! ESC[<row+1>;<col+1>H ESC[?25h        place and show the cursor
//! ```
//!
//! Each row is erased to its end right after it is drawn, instead of clearing the whole
//! screen up front, so nothing blanks out between frames.

use crate::{CRLF_BYTES, CURSOR_HOME_BYTES, CsiSequence, ERASE_TO_END_OF_LINE_BYTES,
            FrameBuffer, HIDE_CURSOR_BYTES, SHOW_CURSOR_BYTES, TerminalError,
            ViewState};
use const_format::concatcp;
use std::io::Write;

/// Drawn once, centered horizontally, a third of the way down the screen.
pub const WELCOME_BANNER: &str =
    concatcp!("Best Editor -- version ", env!("CARGO_PKG_VERSION"));

/// Drawn at the start of every row past the end of the (empty) buffer.
pub const EMPTY_ROW_MARKER: u8 = b'~';

/// Compose the whole frame for `view`. Pure and deterministic: the same view always
/// produces the same bytes.
#[must_use]
pub fn compose_frame(view: &ViewState) -> FrameBuffer {
    let mut frame = FrameBuffer::new();

    frame.append(HIDE_CURSOR_BYTES);
    frame.append(CURSOR_HOME_BYTES);

    draw_rows(view, &mut frame);

    frame.append_csi(CsiSequence::move_cursor_to_zero_based(
        view.cursor_row,
        view.cursor_col,
    ));
    frame.append(SHOW_CURSOR_BYTES);

    frame
}

/// Compose the frame for `view` and write it to `output` in a single write.
///
/// # Errors
///
/// [`TerminalError::Io`] if the write fails.
pub fn render(view: &ViewState, output: &mut impl Write) -> Result<(), TerminalError> {
    compose_frame(view)
        .write_to(output)
        .map_err(TerminalError::write)
}

fn draw_rows(view: &ViewState, frame: &mut FrameBuffer) {
    let banner_row = view.screen_rows / 3;

    for row_index in 0..view.screen_rows {
        if row_index == banner_row {
            draw_welcome_banner(view.screen_cols, frame);
        } else {
            frame.append(&[EMPTY_ROW_MARKER]);
        }

        frame.append(ERASE_TO_END_OF_LINE_BYTES);
        if row_index < view.screen_rows - 1 {
            frame.append(CRLF_BYTES);
        }
    }
}

fn draw_welcome_banner(screen_cols: u16, frame: &mut FrameBuffer) {
    let banner = WELCOME_BANNER.as_bytes();
    let banner = &banner[..banner.len().min(usize::from(screen_cols))];

    let mut padding = (usize::from(screen_cols) - banner.len()) / 2;
    if padding > 0 {
        frame.append(&[EMPTY_ROW_MARKER]);
        padding -= 1;
    }
    frame.append_repeated(b' ', padding);
    frame.append(banner);
}
