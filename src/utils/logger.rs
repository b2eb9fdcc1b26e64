//! File logging.
//!
//! The TUI owns the terminal, so logs go to `logs/` next to the executable,
//! one file per run: `logs/portfolio-term.2024-12-06-14-30-25.log`.
//!
//! The level comes from `RUST_LOG` (`debug`, `info`, `warn`, `error`) and
//! defaults to `info`.

use std::fs;
use std::path::PathBuf;
use chrono::Local;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn log_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join("logs")))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Initialize the logging system.
///
/// Returns the writer guard; keep it alive until exit so buffered lines are
/// flushed. Returns `None` (and logs nothing) if the log file can't be created.
pub fn init_logging() -> Option<WorkerGuard> {
    let log_dir = log_dir();

    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Failed to create logs directory: {}", e);
        return None;
    }

    let timestamp = Local::now().format("%Y-%m-%d-%H-%M-%S");
    let log_path = log_dir.join(format!("portfolio-term.{}.log", timestamp));

    let log_file = match fs::File::create(&log_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: Failed to create log file: {}", e);
            return None;
        }
    };

    // Non-blocking so a slow disk never stalls a frame
    let (non_blocking, guard) = tracing_appender::non_blocking(log_file);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("Logging initialized - writing to {}", log_path.display());
    Some(guard)
}
