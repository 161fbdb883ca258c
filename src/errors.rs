use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while working with the vault.
///
/// The first four variants are user errors: they are reported and the
/// shell keeps going. `Io` is fatal and ends the process.
#[derive(Debug, Error)]
pub enum VaultError {
    #[error("add: duplicate entry")]
    DuplicateEntry,

    #[error("remove: site not found")]
    SiteNotFound,

    #[error("remove: user not found")]
    UserNotFound,

    #[error("attempted to remove multiple users")]
    MultipleUsers,

    #[error("Error {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl VaultError {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        VaultError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Returns true for errors that must terminate the program.
    pub fn is_fatal(&self) -> bool {
        matches!(self, VaultError::Io { .. })
    }
}

pub type Result<T> = std::result::Result<T, VaultError>;
