// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The editor itself: what is on screen ([`ViewState`]), how keys change it
//! ([`dispatch_key`]), and how it is drawn ([`render`]).

// Attach sources.
pub mod dispatcher;
pub mod frame_renderer;
pub mod view_state;

// Re-export.
pub use dispatcher::*;
pub use frame_renderer::*;
pub use view_state::*;
