// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The termios flag changes that define raw mode, using rustix's safe termios API.

use rustix::termios::{ControlModes, InputModes, LocalModes, OutputModes,
                      SpecialCodeIndex, Termios};

/// `VMIN`: a read may return with zero bytes.
pub const RAW_MODE_READ_MIN_BYTES: u8 = 0;

/// `VTIME`: read deadline, in tenths of a second (100ms).
pub const RAW_MODE_READ_TIMEOUT_DECISECONDS: u8 = 1;

/// Derive the raw mode settings from `original`. The input is left untouched so it can
/// be restored later.
///
/// Not the same as [`Termios::make_raw`], which sets `VMIN = 1, VTIME = 0` (block until
/// a byte arrives) and clears a different set of flags.
#[must_use]
pub fn make_raw_termios(original: &Termios) -> Termios {
    let mut termios = original.clone();

    termios.input_modes.remove(
        InputModes::BRKINT
            | InputModes::ICRNL
            | InputModes::INPCK
            | InputModes::ISTRIP
            | InputModes::IXON,
    );
    termios.output_modes.remove(OutputModes::OPOST);
    termios.control_modes.insert(ControlModes::CS8);
    termios.local_modes.remove(
        LocalModes::ECHO | LocalModes::ICANON | LocalModes::IEXTEN | LocalModes::ISIG,
    );
    termios.special_codes[SpecialCodeIndex::VMIN] = RAW_MODE_READ_MIN_BYTES;
    termios.special_codes[SpecialCodeIndex::VTIME] = RAW_MODE_READ_TIMEOUT_DECISECONDS;

    termios
}
