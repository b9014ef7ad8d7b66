// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use best_editor::{CLIArg, run_app};
use clap::Parser;

fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();
    run_app(cli_arg)
}
