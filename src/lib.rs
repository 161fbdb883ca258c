//! Passvault - a plain-text, per-site credential store.
//!
//! Credentials are kept in memory as site -> (username, password) lists
//! and written back to a flat file after every change. Nothing is
//! encrypted: the backing file holds passwords in cleartext.

pub mod config;
pub mod credentials;
pub mod errors;
pub mod logging;
pub mod shell;
pub mod storage;
pub mod vault;

// Re-export commonly used types
pub use config::AppConfig;
pub use credentials::Credential;
pub use errors::VaultError;
pub use logging::{LogConfig, init_logging};
pub use shell::{Shell, ShellConfig};
pub use storage::{FileStore, Store};
pub use vault::Vault;
