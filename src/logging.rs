use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming the log file path. Unset means no logging.
pub const LOG_ENV_VAR: &str = "STATEHOLDER_LOG";

/// Initialize tracing with optional file output.
///
/// The TUI owns stdout, so logging only happens when `STATEHOLDER_LOG`
/// points at a file. The actual file is `{path}.{timestamp}.{pid}` so
/// concurrent sessions never share one.
pub fn init_tracing() {
    let Ok(log_path) = std::env::var(LOG_ENV_VAR) else {
        return;
    };

    let unique_path = unique_log_path(&log_path);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

fn unique_log_path(base: &str) -> String {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", base, timestamp, std::process::id())
}
