// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! DSR reply builder. The editor never sends replies, it only parses them, so this is
//! compiled for tests and docs only: mocks use it to answer a cursor position request
//! the way a real terminal would.

use crate::{CSI_PARAM_SEPARATOR, DSR_CURSOR_POSITION_RESPONSE_END, DSR_RESPONSE_START};
use std::fmt;

/// Device Status Report replies, as a terminal would send them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DsrSequence {
    /// Cursor position response - ESC[row;colR (1-based)
    CursorPositionResponse { row: u16, col: u16 },
}

impl fmt::Display for DsrSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DsrSequence::CursorPositionResponse { row, col } => write!(
                f,
                "{DSR_RESPONSE_START}{row}{CSI_PARAM_SEPARATOR}{col}{DSR_CURSOR_POSITION_RESPONSE_END}"
            ),
        }
    }
}
