//! Logging setup: stderr plus a daily-rolling file under `<root>/logs/`.
//!
//! Filter comes from `PRISI_VAULT_LOG` (EnvFilter syntax), default `warn`.
//! With `--no-storage`, or if the log directory cannot be created, only
//! stderr logging is installed.

use std::path::Path;

use fs_err as fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_ENV: &str = "PRISI_VAULT_LOG";
const LOG_FILE_PREFIX: &str = "prisi-vault.log";

pub fn init(logs_dir: &Path) -> Option<WorkerGuard> {
    match fs::create_dir_all(logs_dir) {
        Ok(()) => {
            let appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = fmt::layer().with_writer(writer).with_ansi(false);
            let _ = tracing_subscriber::registry()
                .with(env_filter())
                .with(stderr_layer())
                .with(file_layer)
                .try_init();
            Some(guard)
        }
        Err(err) => {
            init_stderr();
            tracing::warn!(error = %err, "Log directory unavailable, logging to stderr only");
            None
        }
    }
}

/// Installs the stderr subscriber alone. Nothing touches the filesystem.
pub fn init_stderr() {
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(stderr_layer())
        .try_init();
}

fn stderr_layer<S>() -> impl tracing_subscriber::Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer().with_writer(std::io::stderr).with_target(false)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}
