use std::process::ExitCode;

use anyhow::Result;
use passvault::{AppConfig, FileStore, Shell, ShellConfig, Vault, init_logging};

fn main() -> ExitCode {
    let config = AppConfig::default();

    // Logging is best effort; stdout and stderr belong to the shell.
    if let Some(log_config) = &config.log {
        let _ = init_logging(log_config);
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Fatal: {}", e);
            eprintln!("{}", e);
            ExitCode::from(1)
        }
    }
}

fn run(config: &AppConfig) -> Result<()> {
    let mut vault = Vault::open(FileStore::new(&config.vault_path))?;

    let shell = Shell::with_config(ShellConfig {
        history: config.history.clone(),
    });
    shell.run(&mut vault)
}
