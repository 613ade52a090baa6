//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Result, ResultExt};

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "MAESTRO_LOG";

const DEFAULT_FILTER: &str = "maestro=info,maestro_app=info,maestro_client=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/maestro-console/logs/` because the
/// terminal UI owns stdout. Log level is controlled by the `MAESTRO_LOG`
/// environment variable.
///
/// # Examples
/// ```bash
/// MAESTRO_LOG=debug maestro --demo
/// MAESTRO_LOG=maestro_client=trace maestro
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "maestro.log");

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("maestro console starting");
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("maestro-console").join("logs"))
}
