//! Individual command implementations.

mod add;
mod help;
mod list;
mod quit;
mod remove;

pub use add::AddCommand;
pub use help::HelpCommand;
pub use list::{ListCommand, format_listing};
pub use quit::QuitCommand;
pub use remove::RemoveCommand;

use std::sync::Arc;

use super::command::CommandRegistry;

/// Registers all built-in commands with the registry.
pub fn register_all(registry: &mut CommandRegistry) {
    registry.register(Arc::new(ListCommand));
    registry.register(Arc::new(AddCommand));
    registry.register(Arc::new(RemoveCommand));
    registry.register(Arc::new(QuitCommand));
    registry.register(Arc::new(HelpCommand));
}

#[cfg(test)]
pub(crate) mod test_support {
    use tempfile::TempDir;

    use crate::storage::FileStore;
    use crate::vault::Vault;

    /// A vault backed by a file in a fresh temporary directory.
    pub fn temp_vault() -> (Vault, TempDir) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let vault = Vault::open(FileStore::new(dir.path().join("passwordVault")))
            .expect("Failed to open vault");
        (vault, dir)
    }
}
