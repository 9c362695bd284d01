//! File-based diagnostic logging.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::LineWriter;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::paths;

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "ESGEN_LOG";

const DEFAULT_FILTER: &str = "esgen_cli=info";
const LOG_FILE: &str = "esgen.log";
const MAX_LOG_SIZE: u64 = 100 * 1024;

/// Returns the path of the log file.
pub fn log_path() -> PathBuf {
    paths::state_dir().join(LOG_FILE)
}

/// Initializes tracing to append to the log file.
///
/// The terminal stays free of diagnostics: everything emitted through
/// `tracing` lands in `esgen.log` under the state directory. A log larger
/// than 100 KiB is moved to `esgen.log.old` first.
pub fn setup_logging() -> Result<()> {
    let log_path = log_path();
    let log_dir = log_path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    rotate_if_large(&log_path)?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    // Flush after every line so a crash keeps the tail of the log.
    let writer = Mutex::new(LineWriter::new(log_file));

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    Ok(())
}

fn rotate_if_large(log_path: &Path) -> Result<()> {
    let Ok(metadata) = fs::metadata(log_path) else {
        return Ok(());
    };

    if metadata.len() > MAX_LOG_SIZE {
        let backup = log_path.with_extension("log.old");
        if backup.exists() {
            fs::remove_file(&backup)?;
        }
        fs::rename(log_path, &backup)?;
    }

    Ok(())
}
