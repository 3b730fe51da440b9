//! CLI logging initialization
//!
//! Per-phase log control built on `tracing-subscriber`. Logs go to stderr
//! so they never mix with the trace and verdict output on stdout.

use std::io;

use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

use crate::config::LogConfig;

/// Log output format
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Colored, multi-line (development)
    Pretty,
    /// Compact single-line
    Compact,
    /// JSON (tool integration)
    Json,
}

/// Initialize the log system with the given format, optionally teeing to a file
pub fn init_with_file<P: AsRef<std::path::Path>>(
    log_config: &LogConfig,
    format: LogFormat,
    file: Option<P>,
) {
    // Build filter targets
    let targets = Targets::new()
        .with_default(log_config.global)
        .with_target("automa::parser", log_config.level_for("automa::parser"))
        .with_target("automa::validator", log_config.level_for("automa::validator"))
        .with_target("automa::engine", log_config.level_for("automa::engine"))
        .with_target("automa::cli", log_config.global);

    // If a file is given, write to both stderr and the file
    if let Some(path) = file {
        let file_handle = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .expect("Failed to open log file");

        let stderr_layer = fmt::layer()
            .with_writer(io::stderr)
            .with_filter(targets.clone());

        let file_layer = fmt::layer()
            .with_ansi(false)
            .with_writer(move || file_handle.try_clone().expect("Failed to clone file handle"))
            .with_filter(targets);

        tracing_subscriber::registry()
            .with(stderr_layer)
            .with(file_layer)
            .init();
    } else {
        let stderr_layer = create_format_layer(format, io::stderr).with_filter(targets);
        tracing_subscriber::registry().with(stderr_layer).init();
    }
}

/// Create a formatter layer for the requested format
fn create_format_layer<W, F>(
    format: LogFormat,
    make_writer: F,
) -> impl Layer<tracing_subscriber::Registry>
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
    }
}
