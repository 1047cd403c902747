//! Log subscriber setup.
//!
//! `MOHAN_LOG` (an `EnvFilter` directive) wins over the configured level.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV: &str = "MOHAN_LOG";

pub enum LogTarget<'a> {
    Stderr,
    /// The terminal is owned by the UI; `None` discards logs.
    File(Option<&'a Path>),
}

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global subscriber. The returned guard flushes the file writer
/// on drop and must outlive the UI.
pub fn init(level: &str, target: LogTarget<'_>) -> Option<WorkerGuard> {
    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::registry()
                .with(filter(level))
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(false),
                )
                .try_init();
            None
        }
        LogTarget::File(None) => None,
        LogTarget::File(Some(path)) => {
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
            let dir = dir.unwrap_or_else(|| Path::new("."));
            let file_name = path.file_name()?;
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = tracing_subscriber::registry()
                .with(filter(level))
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false),
                )
                .try_init();
            Some(guard)
        }
    }
}
