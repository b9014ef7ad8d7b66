// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{EditorKey, ViewState, ctrl_key};

/// Ctrl+Q.
pub const QUIT_KEY: u8 = ctrl_key(b'q');

/// What the main event loop should do after a key has been dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    Continue,
    Stop,
}

/// Apply `key` to `state`.
///
/// | Key                    | Effect                                        |
/// | :--------------------- | :-------------------------------------------- |
/// | Ctrl+Q                 | [`Continuation::Stop`]                        |
/// | arrows                 | move one cell, no-op at the edge              |
/// | Home / End             | first / last column of the current row        |
/// | Page Up / Page Down    | move up / down by a screen height (clamped)   |
/// | anything else          | no-op                                         |
///
/// Clearing the screen on quit is the caller's job.
pub fn dispatch_key(state: &mut ViewState, key: EditorKey) -> Continuation {
    match key {
        EditorKey::Byte(QUIT_KEY) => return Continuation::Stop,
        EditorKey::ArrowUp
        | EditorKey::ArrowDown
        | EditorKey::ArrowLeft
        | EditorKey::ArrowRight => move_cursor(state, key),
        EditorKey::Home => state.cursor_col = 0,
        EditorKey::End => state.cursor_col = state.last_col_index(),
        EditorKey::PageUp | EditorKey::PageDown => {
            let arrow = if key == EditorKey::PageUp {
                EditorKey::ArrowUp
            } else {
                EditorKey::ArrowDown
            };
            for _ in 0..state.screen_rows {
                move_cursor(state, arrow);
            }
        }
        EditorKey::Delete | EditorKey::Escape | EditorKey::Byte(_) => {}
    }
    Continuation::Continue
}

fn move_cursor(state: &mut ViewState, arrow: EditorKey) {
    match arrow {
        EditorKey::ArrowLeft => state.cursor_col = state.cursor_col.saturating_sub(1),
        EditorKey::ArrowRight if state.cursor_col < state.last_col_index() => {
            state.cursor_col += 1;
        }
        EditorKey::ArrowUp => state.cursor_row = state.cursor_row.saturating_sub(1),
        EditorKey::ArrowDown if state.cursor_row < state.last_row_index() => {
            state.cursor_row += 1;
        }
        _ => {}
    }
}
