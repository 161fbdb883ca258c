//! List command implementation.

use crate::errors::Result;
use crate::shell::command::{Command, CommandResult, ShellContext};
use crate::vault::Vault;

/// Command to list every credential in the vault.
pub struct ListCommand;

impl Command for ListCommand {
    fn name(&self) -> &str {
        "l"
    }

    fn aliases(&self) -> &[&str] {
        &["list", "ls"]
    }

    fn description(&self) -> &str {
        "List all sites, users and passwords"
    }

    fn usage(&self) -> &str {
        "l"
    }

    fn help(&self) -> &str {
        "Display every stored credential as site, user and password columns.\n\n\
         Sites are listed alphabetically; users appear in the order they were added.\n\n\
         Examples:\n  \
           l\n  \
           list"
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult> {
        log::debug!("Listing {} credentials", ctx.vault.len());

        if ctx.vault.is_empty() {
            return Ok(CommandResult::Continue);
        }
        Ok(CommandResult::success(format_listing(ctx.vault)))
    }
}

/// Renders the vault as aligned columns, one credential per line.
///
/// Widths are in characters, matching how `format!` pads.
pub fn format_listing(vault: &Vault) -> String {
    let (site_width, user_width) = vault.entries().fold((0, 0), |(s, u), (site, c)| {
        (
            s.max(site.chars().count()),
            u.max(c.username.chars().count()),
        )
    });

    vault
        .entries()
        .map(|(site, c)| {
            format!(
                "{:<site_width$} {:<user_width$} {}",
                site, c.username, c.password
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::commands::test_support::temp_vault;

    #[test]
    fn test_list_command_empty() {
        let (mut vault, _dir) = temp_vault();
        let mut ctx = ShellContext::new(&mut vault);

        let result = ListCommand.execute(&[], &mut ctx).unwrap();
        assert_eq!(result, CommandResult::Continue);
    }

    #[test]
    fn test_list_command_with_entries() {
        let (mut vault, _dir) = temp_vault();
        vault.add("github.com", "alice", "secret1").unwrap();
        vault.add("aws.amazon.com", "root", "secret2").unwrap();
        vault.add("github.com", "bob", "secret3").unwrap();
        let mut ctx = ShellContext::new(&mut vault);

        let result = ListCommand.execute(&[], &mut ctx).unwrap();
        let CommandResult::Success(Some(msg)) = result else {
            panic!("Expected success with list");
        };

        let lines: Vec<&str> = msg.lines().collect();
        assert_eq!(
            lines,
            vec![
                "aws.amazon.com root  secret2",
                "github.com     alice secret1",
                "github.com     bob   secret3",
            ]
        );
    }

    #[test]
    fn test_listing_aligns_non_ascii_names() {
        let (mut vault, _dir) = temp_vault();
        vault.add("café.fr", "zoë", "pw1").unwrap();
        vault.add("zz.org", "al", "pw2").unwrap();

        assert_eq!(
            format_listing(&vault),
            "café.fr zoë pw1\n\
             zz.org  al  pw2"
        );
    }
}
