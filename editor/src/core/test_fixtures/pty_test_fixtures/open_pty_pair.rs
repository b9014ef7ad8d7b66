// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words openpt grantpt unlockpt ptsname NOCTTY

use rustix::{fd::OwnedFd,
             fs::{Mode, OFlags},
             pty::{OpenptFlags, grantpt, openpt, ptsname, unlockpt}};

/// Open a fresh PTY pair. Returns `(controller, user)`. The user side is what a
/// program running in a terminal sees as its stdin / stdout, so that is where raw mode
/// and window size calls go. Each call gets its own pair, so tests never touch the
/// terminal that `cargo test` runs in.
///
/// # Panics
///
/// If the PTY can't be allocated.
#[must_use]
pub fn open_pty_pair() -> (OwnedFd, OwnedFd) {
    let controller = openpt(OpenptFlags::RDWR | OpenptFlags::NOCTTY).unwrap();
    grantpt(&controller).unwrap();
    unlockpt(&controller).unwrap();
    let user_path = ptsname(&controller, Vec::new()).unwrap();
    let user = rustix::fs::open(
        user_path.as_c_str(),
        OFlags::RDWR | OFlags::NOCTTY,
        Mode::empty(),
    )
    .unwrap();
    (controller, user)
}
