//! Logging initialization.
//!
//! Console output plus a rolling daily log file. `log` macro calls are
//! bridged into `tracing` by tracing-subscriber's default feature set, so
//! both macro families end up in the same sinks.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global subscriber. Returns the file-writer guard, which
/// must be held for the lifetime of the process; dropping it flushes and
/// stops the background writer.
pub fn init() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console = tracing_subscriber::fmt::layer().with_target(false);

    let log_dir = log_dir();
    match std::fs::create_dir_all(&log_dir) {
        Ok(()) => {
            let appender = tracing_appender::rolling::daily(&log_dir, "docuhub.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(file)
                .init();
            Some(guard)
        }
        Err(e) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .init();
            tracing::warn!("File logging disabled ({}): {e}", log_dir.display());
            None
        }
    }
}

fn log_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("docuhub").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dir_is_absolute_or_local_fallback() {
        let dir = log_dir();
        assert!(dir.ends_with("docuhub/logs") || dir == PathBuf::from("logs"));
    }
}
