//! Help command implementation.

use crate::errors::Result;
use crate::shell::command::{ArgumentKind, Command, CommandResult, ShellContext};

/// Command to display help information.
pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &str {
        "help"
    }

    fn aliases(&self) -> &[&str] {
        &["h", "?"]
    }

    fn description(&self) -> &str {
        "Display help information"
    }

    fn usage(&self) -> &str {
        "help [command]"
    }

    fn help(&self) -> &str {
        "Display help information about commands.\n\n\
         Without arguments, lists all available commands.\n\
         With a command name, shows detailed help for that command.\n\n\
         Examples:\n  \
           help\n  \
           help a\n  \
           ? r"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult> {
        let Some(registry) = ctx.registry else {
            return Ok(CommandResult::error("Help not available (no registry)"));
        };

        let Some(cmd_name) = args.first() else {
            let mut commands: Vec<_> = registry.commands().collect();
            commands.sort_by_key(|c| c.usage().to_string());

            let mut output = String::from("Available commands:\n\n");
            for cmd in commands {
                output.push_str(&format!(
                    "  {:<24}{} ({})\n",
                    cmd.usage(),
                    cmd.description(),
                    cmd.aliases().join(", ")
                ));
            }
            output.push_str("\nType 'help <command>' for detailed help on a specific command.");
            return Ok(CommandResult::success(output));
        };

        Ok(match registry.get(cmd_name) {
            Some(cmd) => CommandResult::success(format!(
                "Usage: {}\nAliases: {}\n\n{}",
                cmd.usage(),
                cmd.aliases().join(", "),
                cmd.help()
            )),
            None => CommandResult::error(format!("Unknown command: '{}'", cmd_name)),
        })
    }

    fn argument_kind(&self, arg_index: usize) -> ArgumentKind {
        if arg_index == 0 {
            ArgumentKind::Command
        } else {
            ArgumentKind::Free
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::command::CommandRegistry;
    use crate::shell::commands::register_all;
    use crate::shell::commands::test_support::temp_vault;

    fn setup_registry() -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        register_all(&mut registry);
        registry
    }

    #[test]
    fn test_help_command_list_all() {
        let registry = setup_registry();
        let (mut vault, _dir) = temp_vault();
        let mut ctx = ShellContext::new(&mut vault).with_registry(&registry);

        let result = HelpCommand.execute(&[], &mut ctx).unwrap();
        let CommandResult::Success(Some(msg)) = result else {
            panic!("Expected success with help text");
        };
        assert!(msg.contains("Available commands"));
        assert!(msg.contains("a site user password"));
        assert!(msg.contains("r site [user]"));
        assert!(msg.contains("help [command]"));
    }

    #[test]
    fn test_help_command_specific() {
        let registry = setup_registry();
        let (mut vault, _dir) = temp_vault();
        let mut ctx = ShellContext::new(&mut vault).with_registry(&registry);

        let result = HelpCommand.execute(&["remove"], &mut ctx).unwrap();
        let CommandResult::Success(Some(msg)) = result else {
            panic!("Expected success with remove help");
        };
        assert!(msg.starts_with("Usage: r site [user]"));
    }

    #[test]
    fn test_help_command_unknown() {
        let registry = setup_registry();
        let (mut vault, _dir) = temp_vault();
        let mut ctx = ShellContext::new(&mut vault).with_registry(&registry);

        let result = HelpCommand.execute(&["nonexistent"], &mut ctx).unwrap();
        assert!(matches!(result, CommandResult::Error(_)));
    }

    #[test]
    fn test_help_without_registry() {
        let (mut vault, _dir) = temp_vault();
        let mut ctx = ShellContext::new(&mut vault);

        let result = HelpCommand.execute(&[], &mut ctx).unwrap();
        assert!(matches!(result, CommandResult::Error(_)));
    }
}
