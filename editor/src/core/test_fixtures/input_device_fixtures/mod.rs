// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod mock_input_device;

// Re-export.
pub use mock_input_device::*;
