//! Add command implementation.

use crate::errors::Result;
use crate::shell::command::{Command, CommandResult, ShellContext};

/// Command to add a credential to a site.
pub struct AddCommand;

impl Command for AddCommand {
    fn name(&self) -> &str {
        "a"
    }

    fn aliases(&self) -> &[&str] {
        &["add"]
    }

    fn description(&self) -> &str {
        "Add a credential for a site"
    }

    fn usage(&self) -> &str {
        "a site user password"
    }

    fn help(&self) -> &str {
        "Add a username and password under a site.\n\n\
         A site may hold several users, but each user only once.\n\
         Values cannot contain whitespace.\n\n\
         Examples:\n  \
           a example.com alice hunter2\n  \
           add github.com bob s3cret"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult> {
        let [site, user, password] = args else {
            return Ok(CommandResult::error(format!("Usage: {}", self.usage())));
        };

        log::debug!("Adding credential for {} on {}", user, site);
        let outcome = ctx.vault.add(site, user, password);
        match &outcome {
            Ok(()) => log::info!("Added credential for {} on {}", user, site),
            Err(e) => log::warn!("Failed to add {} on {}: {}", user, site, e),
        }
        CommandResult::from_outcome(outcome)
    }

    fn records_history(&self) -> bool {
        false
    }
}
