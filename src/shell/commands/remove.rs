//! Remove command implementation.

use crate::errors::Result;
use crate::shell::command::{ArgumentKind, Command, CommandResult, ShellContext};

/// Removes one user from a site, or a whole single-user site.
pub struct RemoveCommand;

impl Command for RemoveCommand {
    fn name(&self) -> &str {
        "r"
    }

    fn aliases(&self) -> &[&str] {
        &["remove", "rm"]
    }

    fn description(&self) -> &str {
        "Remove a user from a site, or a single-user site"
    }

    fn usage(&self) -> &str {
        "r site [user]"
    }

    fn help(&self) -> &str {
        "Remove a credential.\n\n\
         With a user, removes that user from the site. The site disappears\n\
         once its last user is removed.\n\
         Without a user, removes the site, but only if it holds a single user.\n\n\
         Examples:\n  \
           r example.com alice\n  \
           r example.com"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult> {
        let outcome = match args {
            [site] => {
                log::debug!("Removing site {}", site);
                ctx.vault.remove_site(site)
            }
            [site, user] => {
                log::debug!("Removing {} from {}", user, site);
                ctx.vault.remove(site, user)
            }
            _ => return Ok(CommandResult::error(format!("Usage: {}", self.usage()))),
        };

        match &outcome {
            Ok(()) => log::info!("Removed {}", args.join(" ")),
            Err(e) => log::warn!("Failed to remove {}: {}", args.join(" "), e),
        }
        CommandResult::from_outcome(outcome)
    }

    fn argument_kind(&self, arg_index: usize) -> ArgumentKind {
        if arg_index == 0 {
            ArgumentKind::Site
        } else {
            ArgumentKind::Free
        }
    }
}
