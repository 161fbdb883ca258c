//! Exit command implementation.

use crate::errors::Result;
use crate::shell::command::{Command, CommandResult, ShellContext};

/// Command to leave the shell.
pub struct QuitCommand;

impl Command for QuitCommand {
    fn name(&self) -> &str {
        "x"
    }

    fn aliases(&self) -> &[&str] {
        &["exit", "quit"]
    }

    fn description(&self) -> &str {
        "Exit passvault"
    }

    fn usage(&self) -> &str {
        "x"
    }

    fn execute(&self, _args: &[&str], _ctx: &mut ShellContext) -> Result<CommandResult> {
        Ok(CommandResult::Exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::commands::test_support::temp_vault;

    #[test]
    fn test_quit_command() {
        let (mut vault, _dir) = temp_vault();
        let mut ctx = ShellContext::new(&mut vault);

        let result = QuitCommand.execute(&[], &mut ctx).unwrap();
        assert_eq!(result, CommandResult::Exit);
    }
}
