use std::path::PathBuf;

use daily_tasks_core::config::LoggingConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "daily-tasks.log";

static LOG_GUARD: std::sync::OnceLock<WorkerGuard> = std::sync::OnceLock::new();

/// Installs the global subscriber on stderr and/or a daily log file.
///
/// Nothing is installed when logging is disabled or both sinks are off.
pub fn init_tracing(logging: &LoggingConfig) -> Result<(), String> {
    if !logging.enabled || (!logging.console && !logging.file) {
        return Ok(());
    }

    let filter = env_filter(&logging.level)?;

    let file_writer = if logging.file {
        let dir = log_dir(logging);
        std::fs::create_dir_all(&dir).map_err(|e| format!("create log dir failed: {e}"))?;
        let (writer, guard) =
            tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX));
        let _ = LOG_GUARD.set(guard);
        Some(writer)
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(logging.console.then(|| {
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(atty::is(atty::Stream::Stderr))
        }))
        .with(file_writer.map(|w| {
            tracing_subscriber::fmt::layer()
                .with_writer(w)
                .with_ansi(false)
        }))
        .init();

    Ok(())
}

/// `RUST_LOG` wins over the configured level when set.
fn env_filter(level: &str) -> Result<EnvFilter, String> {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(v) if !v.trim().is_empty() => Ok(EnvFilter::new(v)),
        _ => EnvFilter::try_new(level).map_err(|e| format!("invalid log level {level:?}: {e}")),
    }
}

fn log_dir(logging: &LoggingConfig) -> PathBuf {
    logging
        .directory
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("daily-tasks"))
}
