// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Builder for parameterized CSI sequences. The fixed, parameterless sequences live in
//! [`constants`] as byte slices.
//!
//! [`constants`]: mod@crate::core::ansi::constants

use crate::{CSI_PARAM_SEPARATOR, CSI_START, CUP_CURSOR_POSITION};
use std::fmt;

/// Parameterized CSI sequences.
///
/// ```rust
/// use best_editor::CsiSequence;
///
/// let seq = CsiSequence::CursorPosition { row: 5, col: 10 };
/// assert_eq!(seq.to_string(), "\x1b[5;10H");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsiSequence {
    /// `ESC [ row ; col H` - move the cursor. Both values are 1-based terminal
    /// coordinates.
    CursorPosition { row: u32, col: u32 },
}

impl CsiSequence {
    /// Build a [`CsiSequence::CursorPosition`] from 0-based view coordinates.
    #[must_use]
    pub fn move_cursor_to_zero_based(row_index: u16, col_index: u16) -> Self {
        CsiSequence::CursorPosition {
            row: u32::from(row_index) + 1,
            col: u32::from(col_index) + 1,
        }
    }

    /// Append this sequence to `acc`.
    pub fn write_to_buf(&self, acc: &mut String) {
        acc.push_str(CSI_START);
        match self {
            CsiSequence::CursorPosition { row, col } => {
                acc.push_str(&row.to_string());
                acc.push(CSI_PARAM_SEPARATOR);
                acc.push_str(&col.to_string());
                acc.push(CUP_CURSOR_POSITION);
            }
        }
    }
}

impl fmt::Display for CsiSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut acc = String::new();
        self.write_to_buf(&mut acc);
        f.write_str(&acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(0, 0, "\x1b[1;1H" ; "origin")]
    #[test_case(7, 0, "\x1b[8;1H" ; "row only")]
    #[test_case(23, 79, "\x1b[24;80H" ; "bottom right of 24x80")]
    #[test_case(u16::MAX, u16::MAX, "\x1b[65536;65536H" ; "no overflow at max")]
    fn test_move_cursor_to_zero_based(row: u16, col: u16, expected: &str) {
        assert_eq!(
            CsiSequence::move_cursor_to_zero_based(row, col).to_string(),
            expected
        );
    }
}
