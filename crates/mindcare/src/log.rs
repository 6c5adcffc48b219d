//! Logging for mindcare.
use anyhow::Context;
use std::io::LineWriter;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::time::OffsetTime;

const MAX_LOG_SIZE: u64 = 100 * 1024;

/// Initializes file based logging under the data directory.
///
/// Logs go to `mindcare/mindcare.log` below `XDG_DATA_HOME`, or the platform
/// data directory. The directory is only created here, so a chat without
/// `--verbose` leaves nothing on disk. A log larger than 100KB is moved to
/// `mindcare.log.old` first, replacing any older backup.
///
/// # Errors
///
/// Fails if the log directory or file cannot be prepared, or if a global
/// subscriber is already installed.
pub fn setup_logging() -> anyhow::Result<()> {
    let dir = log_dir(
        std::env::var_os("XDG_DATA_HOME").map(PathBuf::from),
        dirs::data_local_dir(),
    )?;
    let log_path = prepare_log_file(&dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    // Ensure the logs are flushed after every line
    let writer = Mutex::new(LineWriter::new(log_file));

    tracing_subscriber::fmt()
        .with_env_filter("mindcare=debug,mindcare_core=debug,rustyline=info")
        .with_writer(writer)
        .with_ansi(false)
        .with_timer(OffsetTime::local_rfc_3339()?)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to initialize logger")?;
    Ok(())
}

fn log_dir(
    xdg_data_home: Option<PathBuf>,
    platform_dir: Option<PathBuf>,
) -> anyhow::Result<PathBuf> {
    xdg_data_home
        .or(platform_dir)
        .map(|base| base.join("mindcare"))
        .context("No data directory available for logs")
}

/// Creates `dir` and moves an oversized log aside. Returns the log path.
fn prepare_log_file(dir: &Path) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let log_path = dir.join("mindcare.log");

    if log_path.exists() {
        let metadata = std::fs::metadata(&log_path)?;
        if metadata.len() > MAX_LOG_SIZE {
            let backup_path = dir.join("mindcare.log.old");
            if backup_path.exists() {
                std::fs::remove_file(&backup_path)?;
            }
            std::fs::rename(&log_path, backup_path)?;
        }
    }
    Ok(log_path)
}
