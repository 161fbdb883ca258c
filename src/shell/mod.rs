//! The command loop.
//!
//! Reads one command per line and dispatches on the first token. When
//! standard input is a terminal the loop runs inside a rustyline editor
//! with completion and history; otherwise lines are read as they come.

pub mod command;
pub mod commands;
pub mod completer;
pub mod history;

use anyhow::Result;
use rustyline::completion::Completer;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::FileHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::{Arc, RwLock};

use crate::errors;
use crate::storage::lossy_lines;
use crate::vault::Vault;

use command::{CommandRegistry, CommandResult, ShellContext};
use commands::register_all;
use completer::{SiteNames, VaultCompleter};
use history::HistoryConfig;

const PROMPT: &str = "vault> ";

/// rustyline helper; only completion is customised.
pub struct VaultHelper {
    completer: VaultCompleter,
}

impl Completer for VaultHelper {
    type Candidate = rustyline::completion::Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        self.completer.complete(line, pos, ctx)
    }
}

impl Highlighter for VaultHelper {}

impl Hinter for VaultHelper {
    type Hint = String;
}

impl Validator for VaultHelper {}

impl Helper for VaultHelper {}

/// Configuration for the shell.
#[derive(Debug, Clone, Default)]
pub struct ShellConfig {
    /// History for the interactive editor; None keeps history in memory only.
    pub history: Option<HistoryConfig>,
}

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// The command loop.
pub struct Shell {
    registry: Arc<CommandRegistry>,
    /// Site names for completion (shared with the helper).
    sites: SiteNames,
    config: ShellConfig,
}

impl Shell {
    pub fn new() -> Self {
        Self::with_config(ShellConfig::default())
    }

    pub fn with_config(config: ShellConfig) -> Self {
        let mut registry = CommandRegistry::new();
        register_all(&mut registry);

        Self {
            registry: Arc::new(registry),
            sites: Arc::new(RwLock::new(Vec::new())),
            config,
        }
    }

    /// Runs until `x` or end of input, using the editor on a terminal.
    ///
    /// Returns an error only for fatal vault or output failures.
    pub fn run(&self, vault: &mut Vault) -> Result<()> {
        log::info!("Shell started with {} credentials", vault.len());

        let stdin = io::stdin();
        let result = if stdin.is_terminal() {
            self.run_interactive(vault)
        } else {
            self.run_lines(vault, stdin.lock(), &mut io::stdout(), &mut io::stderr())
        };

        log::info!("Shell exited");
        result
    }

    /// Runs the loop over `input`, writing results to `out`.
    ///
    /// A read error on `input` is reported to `err` and ends the loop
    /// without failing.
    pub fn run_lines<R, W, E>(
        &self,
        vault: &mut Vault,
        input: R,
        out: &mut W,
        err: &mut E,
    ) -> Result<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        for line in lossy_lines(input) {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    log::error!("Error reading standard input: {}", e);
                    writeln!(err, "reading standard input: {}", e)?;
                    break;
                }
            };

            if self.handle_line(&line, vault, out)? == Flow::Exit {
                break;
            }
        }
        out.flush()?;
        Ok(())
    }

    fn run_interactive(&self, vault: &mut Vault) -> Result<()> {
        self.refresh_sites(vault);

        let helper = VaultHelper {
            completer: VaultCompleter::new(Arc::clone(&self.registry), Arc::clone(&self.sites)),
        };
        let mut editor: Editor<VaultHelper, FileHistory> = Editor::new()?;
        editor.set_helper(Some(helper));
        if let Some(history) = &self.config.history {
            history.apply(&mut editor)?;
        }

        let mut stdout = io::stdout();
        loop {
            match editor.readline(PROMPT) {
                Ok(line) => {
                    if self.should_record(&line) {
                        let _ = editor.add_history_entry(line.as_str());
                    }
                    let flow = self.handle_line(&line, vault, &mut stdout)?;
                    self.refresh_sites(vault);
                    if flow == Flow::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    log::debug!("Interrupted (Ctrl-C)");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    log::debug!("EOF received (Ctrl-D)");
                    break;
                }
                Err(e) => {
                    log::error!("Readline error: {}", e);
                    eprintln!("reading standard input: {}", e);
                    break;
                }
            }
        }

        if let Some(history) = &self.config.history {
            if let Err(e) = history.save(&mut editor) {
                log::warn!("Failed to save history: {}", e);
            }
        }
        Ok(())
    }

    /// Executes one line and prints its outcome to `out`.
    pub fn handle_line<W: Write>(
        &self,
        line: &str,
        vault: &mut Vault,
        out: &mut W,
    ) -> Result<Flow> {
        match self.execute_line(line, vault)? {
            CommandResult::Success(Some(msg)) | CommandResult::Error(msg) => {
                writeln!(out, "{}", msg)?;
            }
            CommandResult::Success(None) | CommandResult::Continue => {}
            CommandResult::Exit => {
                writeln!(out, "Exiting...")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Parses and executes a command line.
    pub fn execute_line(&self, line: &str, vault: &mut Vault) -> errors::Result<CommandResult> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&cmd_name, args)) = parts.split_first() else {
            return Ok(CommandResult::Continue);
        };

        log::debug!("Executing command: {} with {} args", cmd_name, args.len());

        match self.registry.get(cmd_name) {
            Some(cmd) => {
                let mut ctx = ShellContext::new(vault).with_registry(&self.registry);
                cmd.execute(args, &mut ctx)
            }
            None => Ok(CommandResult::error("Invalid command")),
        }
    }

    /// Whether `line` may go into the history file.
    ///
    /// Blank lines and commands that carry a password are left out.
    fn should_record(&self, line: &str) -> bool {
        match line.split_whitespace().next() {
            Some(cmd_name) => self
                .registry
                .get(cmd_name)
                .is_none_or(|cmd| cmd.records_history()),
            None => false,
        }
    }

    fn refresh_sites(&self, vault: &Vault) {
        if let Ok(mut sites) = self.sites.write() {
            sites.clear();
            sites.extend(vault.sites().map(str::to_string));
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}
