//! Persistent history for the interactive editor.

use anyhow::Result;
use rustyline::config::Configurer;
use rustyline::history::FileHistory;
use rustyline::{Editor, Helper};
use std::path::PathBuf;

/// Configuration for command history.
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    /// Path to the history file.
    pub path: PathBuf,
    /// Maximum number of entries to keep.
    pub max_entries: usize,
    /// Whether to ignore duplicate consecutive entries.
    pub ignore_dups: bool,
    /// Whether to ignore entries starting with whitespace.
    pub ignore_space: bool,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("history"),
            max_entries: 1000,
            ignore_dups: true,
            ignore_space: true,
        }
    }
}

impl HistoryConfig {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            ..Default::default()
        }
    }

    /// Configures `editor` and loads any saved history into it.
    ///
    /// A missing or unreadable history file is not an error.
    pub fn apply<H: Helper>(&self, editor: &mut Editor<H, FileHistory>) -> Result<()> {
        editor.set_max_history_size(self.max_entries)?;
        editor.set_history_ignore_dups(self.ignore_dups)?;
        editor.set_history_ignore_space(self.ignore_space);

        if self.path.exists() {
            if let Err(e) = editor.load_history(&self.path) {
                log::warn!("Could not load history: {}", e);
            } else {
                log::debug!("Loaded history from {}", self.path.display());
            }
        }
        Ok(())
    }

    /// Writes the editor's history back to disk.
    pub fn save<H: Helper>(&self, editor: &mut Editor<H, FileHistory>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        editor.save_history(&self.path)?;
        log::debug!("Saved history to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustyline::history::History;
    use tempfile::TempDir;

    #[test]
    fn test_history_survives_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let config = HistoryConfig::new(dir.path().join("state").join("history"));

        let mut editor = Editor::<(), FileHistory>::new().unwrap();
        config.apply(&mut editor).unwrap();
        editor.add_history_entry("l").unwrap();
        editor.add_history_entry("l").unwrap();
        editor.add_history_entry(" r secret.com alice").unwrap();
        editor.add_history_entry("r example.com bob").unwrap();
        assert_eq!(editor.history().len(), 2);

        config.save(&mut editor).unwrap();
        assert!(config.path.exists());

        let mut reloaded = Editor::<(), FileHistory>::new().unwrap();
        config.apply(&mut reloaded).unwrap();
        assert_eq!(reloaded.history().len(), 2);
    }

    #[test]
    fn test_apply_without_saved_history() {
        let dir = TempDir::new().unwrap();
        let config = HistoryConfig {
            max_entries: 1,
            ..HistoryConfig::new(dir.path().join("history"))
        };

        let mut editor = Editor::<(), FileHistory>::new().unwrap();
        config.apply(&mut editor).unwrap();
        editor.add_history_entry("l").unwrap();
        editor.add_history_entry("help").unwrap();
        assert_eq!(editor.history().len(), 1);
    }
}
