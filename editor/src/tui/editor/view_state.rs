// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::Size;

/// Cursor position and screen dimensions, in character cells. All coordinates are
/// 0-based.
///
/// Only [`dispatch_key`] mutates this, and it keeps the cursor inside
/// `[0, screen_cols - 1] x [0, screen_rows - 1]`. The renderer only reads it.
///
/// [`dispatch_key`]: crate::dispatch_key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub cursor_col: u16,
    pub cursor_row: u16,
    pub screen_rows: u16,
    pub screen_cols: u16,
}

impl ViewState {
    /// Cursor at the top left corner of a screen of `size`.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            cursor_col: 0,
            cursor_row: 0,
            screen_rows: size.rows,
            screen_cols: size.cols,
        }
    }

    #[must_use]
    pub fn last_col_index(&self) -> u16 { self.screen_cols.saturating_sub(1) }

    #[must_use]
    pub fn last_row_index(&self) -> u16 { self.screen_rows.saturating_sub(1) }
}

impl From<Size> for ViewState {
    fn from(size: Size) -> Self { Self::new(size) }
}
