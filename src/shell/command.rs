//! Command trait and registry for the shell.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::errors::Result;
use crate::vault::Vault;

/// Result of executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Command executed successfully with optional output.
    Success(Option<String>),
    /// Recoverable user error; the message is shown and the shell continues.
    Error(String),
    /// Signal to exit the shell.
    Exit,
    /// Continue without output.
    Continue,
}

impl CommandResult {
    /// Creates a success result with a message.
    pub fn success(msg: impl Into<String>) -> Self {
        CommandResult::Success(Some(msg.into()))
    }

    /// Creates a success result without a message.
    pub fn ok() -> Self {
        CommandResult::Success(None)
    }

    /// Creates an error result.
    pub fn error(msg: impl Into<String>) -> Self {
        CommandResult::Error(msg.into())
    }

    /// Turns the outcome of a vault mutation into a command result.
    ///
    /// User errors become messages, fatal errors are passed on.
    pub fn from_outcome(outcome: Result<()>) -> Result<Self> {
        match outcome {
            Ok(()) => Ok(CommandResult::ok()),
            Err(e) if e.is_fatal() => Err(e),
            Err(e) => Ok(CommandResult::error(e.to_string())),
        }
    }
}

/// What a command argument refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentKind {
    /// An existing site name.
    Site,
    /// Another command's name.
    Command,
    /// Anything else; no completion.
    Free,
}

/// Context available to commands during execution.
pub struct ShellContext<'a> {
    pub vault: &'a mut Vault,
    /// Reference to the command registry for the help command.
    pub registry: Option<&'a CommandRegistry>,
}

impl<'a> ShellContext<'a> {
    pub fn new(vault: &'a mut Vault) -> Self {
        Self {
            vault,
            registry: None,
        }
    }

    pub fn with_registry(mut self, registry: &'a CommandRegistry) -> Self {
        self.registry = Some(registry);
        self
    }
}

/// A command that can be executed in the shell.
pub trait Command: Send + Sync {
    /// Returns the primary name of the command.
    fn name(&self) -> &str;

    /// Returns command aliases (alternative names).
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// Returns a short description of the command.
    fn description(&self) -> &str;

    /// Returns usage information (e.g., "a site user password").
    fn usage(&self) -> &str;

    /// Returns detailed help text.
    fn help(&self) -> &str {
        self.description()
    }

    /// Executes the command with the given arguments.
    ///
    /// An `Err` is always fatal; recoverable problems are reported as
    /// `CommandResult::Error`.
    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult>;

    /// Whether lines invoking this command may be saved to history.
    fn records_history(&self) -> bool {
        true
    }

    /// What argument `arg_index` refers to, for tab completion.
    fn argument_kind(&self, _arg_index: usize) -> ArgumentKind {
        ArgumentKind::Free
    }
}

impl fmt::Debug for dyn Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name())
            .field("description", &self.description())
            .finish()
    }
}

/// Registry of all available commands.
#[derive(Default)]
pub struct CommandRegistry {
    /// Commands indexed by their primary name.
    commands: HashMap<String, Arc<dyn Command>>,
    /// Alias to primary name mapping.
    aliases: HashMap<String, String>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, command: Arc<dyn Command>) {
        let name = command.name().to_string();
        for alias in command.aliases() {
            self.aliases.insert(alias.to_string(), name.clone());
        }
        self.commands.insert(name, command);
    }

    /// Looks up a command by name or alias.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Command>> {
        if let Some(cmd) = self.commands.get(name) {
            return Some(Arc::clone(cmd));
        }

        self.aliases
            .get(name)
            .and_then(|primary| self.commands.get(primary))
            .map(Arc::clone)
    }

    pub fn commands(&self) -> impl Iterator<Item = &Arc<dyn Command>> {
        self.commands.values()
    }

    /// Names and aliases starting with `prefix`, sorted.
    pub fn completions(&self, prefix: &str) -> Vec<String> {
        let mut names: Vec<String> = self
            .commands
            .keys()
            .chain(self.aliases.keys())
            .filter(|name| name.starts_with(prefix))
            .cloned()
            .collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
