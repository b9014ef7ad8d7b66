// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

/// Log file used when none is given.
pub const DEFAULT_LOG_FILE_PATH: &str = "log.txt";

/// Configure tracing: where log output goes and how verbose it is.
///
/// Install it with [`TracingConfig::try_install_global`].
///
/// Fields:
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
/// - `level_filter`: [`LevelFilter`] for the most verbose level that is recorded.
///
/// [`TracingConfig::try_install_global`]: crate::TracingConfig::try_install_global
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// There is no display option: stdout is the editor's screen, and anything written
/// to it (or to stderr, which is usually the same terminal) would corrupt the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    File(String /* tracing_log_file_path */),
}

impl TracingConfig {
    /// Log at `DEBUG` to `filename`, or to [`DEFAULT_LOG_FILE_PATH`].
    #[must_use]
    pub fn new_file(filename: Option<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_PATH.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn new_disabled() -> Self {
        Self {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::OFF,
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}
