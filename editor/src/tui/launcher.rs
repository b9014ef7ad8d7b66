// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CLIArg, DEBUG_TUI_MOD, TracingConfig, run_editor, run_key_inspector};

/// Entry point for the `best_editor` binary, after argument parsing.
///
/// # Errors
///
/// Returns the fatal error (as a [`miette::Report`] so `main` can render it) if
/// logging can't be set up or the editor fails.
pub fn run_app(cli_arg: CLIArg) -> miette::Result<()> {
    if cli_arg.global_options.enable_logging {
        TracingConfig::new_file(None).try_install_global()?;
    }

    DEBUG_TUI_MOD.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(message = "run_app -> start", cli_arg = ?cli_arg);
    });

    if cli_arg.inspect_keys {
        run_key_inspector()?;
    } else {
        run_editor()?;
    }

    DEBUG_TUI_MOD.then(|| {
        tracing::debug!(message = "run_app -> exit");
    });

    Ok(())
}
