//! Tab completion for command names and site names.

use rustyline::Context;
use rustyline::completion::{Completer, Pair};
use std::sync::{Arc, RwLock};

use crate::shell::command::{ArgumentKind, CommandRegistry};

/// Site names known to the completer, refreshed by the shell after each command.
pub type SiteNames = Arc<RwLock<Vec<String>>>;

pub struct VaultCompleter {
    registry: Arc<CommandRegistry>,
    sites: SiteNames,
}

impl VaultCompleter {
    pub fn new(registry: Arc<CommandRegistry>, sites: SiteNames) -> Self {
        Self { registry, sites }
    }

    fn complete_command(&self, partial: &str) -> Vec<Pair> {
        to_pairs(self.registry.completions(partial))
    }

    fn complete_site(&self, partial: &str) -> Vec<Pair> {
        match self.sites.read() {
            Ok(sites) => to_pairs(
                sites
                    .iter()
                    .filter(|s| s.starts_with(partial))
                    .cloned()
                    .collect(),
            ),
            Err(_) => vec![],
        }
    }

    /// Works out what is being typed at `pos`.
    fn parse_context<'a>(&self, line: &'a str, pos: usize) -> CompletionContext<'a> {
        let line_to_pos = &line[..pos];
        let parts: Vec<&str> = line_to_pos.split_whitespace().collect();
        let ends_with_space = line_to_pos.ends_with(char::is_whitespace);

        match parts.as_slice() {
            [] => CompletionContext::Command { partial: "" },
            [command] if !ends_with_space => CompletionContext::Command { partial: *command },
            [command, rest @ ..] => {
                let (arg_index, partial) = if ends_with_space {
                    (rest.len(), "")
                } else {
                    (rest.len() - 1, rest[rest.len() - 1])
                };
                CompletionContext::Argument {
                    command: *command,
                    arg_index,
                    partial,
                }
            }
        }
    }
}

fn to_pairs(names: Vec<String>) -> Vec<Pair> {
    names
        .into_iter()
        .map(|s| Pair {
            display: s.clone(),
            replacement: s,
        })
        .collect()
}

#[derive(Debug)]
enum CompletionContext<'a> {
    Command {
        partial: &'a str,
    },
    Argument {
        command: &'a str,
        arg_index: usize,
        partial: &'a str,
    },
}

impl Completer for VaultCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        match self.parse_context(line, pos) {
            CompletionContext::Command { partial } => {
                Ok((pos - partial.len(), self.complete_command(partial)))
            }
            CompletionContext::Argument {
                command,
                arg_index,
                partial,
            } => {
                let kind = self
                    .registry
                    .get(command)
                    .map(|cmd| cmd.argument_kind(arg_index))
                    .unwrap_or(ArgumentKind::Free);
                let completions = match kind {
                    ArgumentKind::Site => self.complete_site(partial),
                    ArgumentKind::Command => self.complete_command(partial),
                    ArgumentKind::Free => vec![],
                };
                Ok((pos - partial.len(), completions))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::commands::register_all;

    fn setup_completer() -> VaultCompleter {
        let mut registry = CommandRegistry::new();
        register_all(&mut registry);

        let sites = vec![
            "aws.amazon.com".to_string(),
            "github.com".to_string(),
            "gitlab.com".to_string(),
        ];
        VaultCompleter::new(Arc::new(registry), Arc::new(RwLock::new(sites)))
    }

    fn displays(pairs: &[Pair]) -> Vec<&str> {
        pairs.iter().map(|p| p.display.as_str()).collect()
    }

    #[test]
    fn test_complete_command_partial() {
        let completer = setup_completer();
        assert_eq!(displays(&completer.complete_command("re")), vec!["remove"]);
        assert_eq!(displays(&completer.complete_command("e")), vec!["exit"]);
    }

    #[test]
    fn test_complete_site_partial() {
        let completer = setup_completer();
        assert_eq!(
            displays(&completer.complete_site("gi")),
            vec!["github.com", "gitlab.com"]
        );
        assert!(completer.complete_site("zzz").is_empty());
    }

    #[test]
    fn test_parse_context_command() {
        let completer = setup_completer();

        let ctx = completer.parse_context("li", 2);
        assert!(matches!(ctx, CompletionContext::Command { partial: "li" }));

        let ctx = completer.parse_context("", 0);
        assert!(matches!(ctx, CompletionContext::Command { partial: "" }));
    }

    #[test]
    fn test_parse_context_argument() {
        let completer = setup_completer();

        let ctx = completer.parse_context("r gi", 4);
        assert!(matches!(
            ctx,
            CompletionContext::Argument {
                command: "r",
                arg_index: 0,
                partial: "gi"
            }
        ));

        let ctx = completer.parse_context("r github.com ", 13);
        assert!(matches!(
            ctx,
            CompletionContext::Argument {
                command: "r",
                arg_index: 1,
                partial: ""
            }
        ));
    }
}
