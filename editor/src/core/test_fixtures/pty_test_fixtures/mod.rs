// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod open_pty_pair;

// Re-export.
pub use open_pty_pair::*;
