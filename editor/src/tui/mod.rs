// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The editor application on top of [`crate::core`]: view state, key dispatch,
//! rendering, the main event loop, the key inspector, and CLI handling.

/// This is the global `DEBUG` const. If set to `true`, lifecycle events (start, window
/// size, quit) are logged. Only has an effect when logging is enabled (`-l`).
pub const DEBUG_TUI_MOD: bool = true;

/// Log every decoded key and the view state it was applied to. Noisy.
pub const DEBUG_SHOW_KEY_EVENTS: bool = false;

// Attach sources.
pub mod cmd_line_args;
pub mod editor;
pub mod key_inspector;
pub mod launcher;
pub mod main_event_loop;

// Re-export.
pub use cmd_line_args::*;
pub use editor::*;
pub use key_inspector::*;
pub use launcher::*;
pub use main_event_loop::*;
