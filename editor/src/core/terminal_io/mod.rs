// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Private modules (hide internal structure).
mod input_device;
mod output_device;
mod terminal_error;

// Re-exports for flat public API.
pub use input_device::*;
pub use output_device::*;
pub use terminal_error::*;
