// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// A logical keypress, decoded from one or more raw input bytes by [`read_key`].
///
/// The [`Display`] impl gives the variant name (`ArrowUp`, `PageDown`, ...), which is
/// what the key inspector prints for special keys.
///
/// [`Display`]: std::fmt::Display
/// [`read_key`]: crate::read_key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum EditorKey {
    /// Any byte that isn't the start of a recognized escape sequence. Includes
    /// printable ASCII, control bytes like Ctrl+Q (`0x11`), and UTF-8 continuation
    /// bytes (which are passed through one at a time).
    Byte(u8),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    /// A lone `ESC` keypress, or an escape sequence that is truncated or unknown.
    Escape,
}
