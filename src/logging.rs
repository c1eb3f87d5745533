//! Tracing subscriber setup

use clap::ValueEnum;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Output format for log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Filter used when `RUST_LOG` is not set.
///
/// Step debug logging on the runner (`RUNNER_DEBUG=1`) switches to `debug`.
pub fn default_directive(runner_debug: Option<&str>) -> &'static str {
    match runner_debug {
        Some("1") => "setup_r=debug,info",
        _ => "info",
    }
}

/// Install the global subscriber writing to stderr.
///
/// The returned guard flushes buffered lines on drop and must be held until exit.
pub fn init(format: LogFormat) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());

    let runner_debug = std::env::var("RUNNER_DEBUG").ok();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(runner_debug.as_deref())));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }

    guard
}
