//! File logging for passvault.
//!
//! Standard output and standard error belong to the shell, so log
//! records only ever go to a file.

use anyhow::{Result, anyhow};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Configuration for the logging system.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Path to the log file.
    pub path: PathBuf,
    /// Minimum log level to record.
    pub level: LevelFilter,
    /// Maximum log file size in bytes before rotation (0 = no limit).
    pub max_size: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("passvault.log"),
            level: LevelFilter::Info,
            max_size: 10 * 1024 * 1024,
        }
    }
}

impl LogConfig {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            ..Default::default()
        }
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }
}

/// Installs a file logger with RFC 3339 timestamps.
///
/// The file is rotated first if it has grown past `max_size`.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    if let Some(parent) = config.path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    if needs_rotation(config) {
        rotate_log(&config.path)?;
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.path)
        .map_err(|e| anyhow!("Failed to open log file: {}", e))?;

    let file_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Debug)
        .build();

    WriteLogger::init(config.level, file_config, log_file)
        .map_err(|e| anyhow!("Failed to initialize logger: {}", e))?;

    log::info!("Logging initialized at level {:?}", config.level);
    Ok(())
}

fn needs_rotation(config: &LogConfig) -> bool {
    config.max_size > 0
        && std::fs::metadata(&config.path)
            .map(|m| m.len() > config.max_size)
            .unwrap_or(false)
}

/// Renames the log file with a timestamp suffix.
fn rotate_log(path: &Path) -> Result<PathBuf> {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let rotated_name = format!(
        "{}.{}",
        path.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("passvault.log"),
        timestamp
    );

    let rotated_path = path.with_file_name(rotated_name);
    std::fs::rename(path, &rotated_path)?;
    Ok(rotated_path)
}
