// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::miette;
use std::path::PathBuf;

/// Create an appender that writes to `path_str` and never rotates. A bare file name
/// (like `log.txt`) goes in the current directory.
///
/// # Errors
///
/// Returns an error if the path has no file name (for example `/` or `..`).
pub fn try_create(
    path_str: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let file_name = path
        .file_name()
        .ok_or_else(|| miette!("Log file path {} has no file name", path.display()))?;

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok(tracing_appender::rolling::never(parent, file_name))
}
