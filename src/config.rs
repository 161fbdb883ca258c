use std::path::PathBuf;

use crate::logging::LogConfig;
use crate::shell::history::HistoryConfig;

/// Name of the backing file, relative to the working directory.
pub const VAULT_FILE: &str = "passwordVault";

/// Fixed application settings. Nothing here is read from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub vault_path: PathBuf,
    /// None when there is no home directory to log into.
    pub log: Option<LogConfig>,
    pub history: Option<HistoryConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let state_dir = state_dir();
        Self {
            vault_path: PathBuf::from(VAULT_FILE),
            log: state_dir
                .as_ref()
                .map(|dir| LogConfig::new(dir.join("passvault.log"))),
            history: state_dir.map(|dir| HistoryConfig::new(dir.join("history"))),
        }
    }
}

/// Per-user directory for the log file and shell history.
pub fn state_dir() -> Option<PathBuf> {
    dirs_next::home_dir().map(|home| home.join(".passvault"))
}
