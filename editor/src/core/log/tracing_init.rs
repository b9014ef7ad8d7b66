// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{TracingConfig, WriterConfig, log::rolling_file_appender_impl};
use miette::IntoDiagnostic;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer. ANSI
/// colors are off since the output is a plain file.
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_thread_ids(false)
            .with_thread_names(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

impl TracingConfig {
    /// Install the layers as the global default subscriber. Call once, at startup.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be set up, or if a global subscriber
    /// is already installed.
    pub fn try_install_global(self) -> miette::Result<()> {
        let Some(layers) = try_create_layers(self)? else {
            return Ok(());
        };
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .into_diagnostic()
    }

    /// Install the layers for the current thread only, until the returned guard is
    /// dropped. Returns `None` if logging is disabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be set up.
    pub fn install_thread_local(
        self,
    ) -> miette::Result<Option<tracing::subscriber::DefaultGuard>> {
        let Some(layers) = try_create_layers(self)? else {
            return Ok(None);
        };
        let subscriber = tracing_subscriber::registry().with(layers);
        Ok(Some(tracing::subscriber::set_default(subscriber)))
    }
}

/// Returns the layers, or `None` if logging is disabled. This does not initialize the
/// tracing system, see [`TracingConfig::try_install_global`] for that.
///
/// # Errors
///
/// Returns an error if the log file can't be set up.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Option<Vec<Box<DynLayer<tracing_subscriber::Registry>>>>> {
    if tracing_config.get_level_filter() == LevelFilter::OFF {
        return Ok(None);
    }

    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Needed if more layers without their own level filter are added later.
    return_it.push(Box::new(tracing_config.get_level_filter()));

    match try_create_file_layer(
        tracing_config.get_level_filter(),
        tracing_config.get_writer_config(),
    )? {
        Some(layer) => return_it.push(layer),
        None => return Ok(None),
    }

    Ok(Some(return_it))
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// # Errors
///
/// Returns an error if the log file can't be set up.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    Ok(match writer_config {
        WriterConfig::File(tracing_log_file_path) => {
            let file = rolling_file_appender_impl::try_create(&tracing_log_file_path)?;
            Some(Box::new(
                create_fmt!().with_writer(file).with_filter(level_filter),
            ))
        }
        WriterConfig::None => None,
    })
}
