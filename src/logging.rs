use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Environment variable naming the log file.
pub const LOG_ENV_VAR: &str = "REPLYGEN_LOG";

/// Initialize tracing with optional file output.
///
/// The TUI owns the terminal, so nothing is logged unless `REPLYGEN_LOG`
/// names a file. `RUST_LOG` controls the filter (default `info`).
///
/// Returns the file actually written, see [`session_log_path`].
pub fn init_tracing() -> Option<PathBuf> {
    let base = std::env::var(LOG_ENV_VAR).ok().filter(|v| !v.is_empty())?;

    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = session_log_path(&base, timestamp, std::process::id());

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: Failed to create log file {}: {}", path.display(), err);
            return None;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), log = %path.display(), "Logging started");
    Some(path)
}

/// `{base}.{timestamp}.{pid}`, so two sessions never share a log file.
pub fn session_log_path(base: &str, timestamp: u64, pid: u32) -> PathBuf {
    PathBuf::from(format!("{}.{}.{}", base, timestamp, pid))
}

/// Record where the session's settings came from and what they resolved to.
pub fn log_session_config(config: &Config, config_file: &Path) {
    tracing::info!(
        config_file = %config_file.display(),
        from_file = config_file.exists(),
        endpoint = %config.endpoint.url,
        timeout_seconds = config.endpoint.timeout_seconds,
        connect_timeout_seconds = config.endpoint.connect_timeout_seconds,
        default_tone = config.ui.default_tone.wire_name(),
        "Configuration resolved"
    );
}
