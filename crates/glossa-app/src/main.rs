use std::io;
use std::process::ExitCode;

use clap::Parser;
use glossa_store::ShardStore;

pub mod cli;
pub mod commands;
pub mod logging;
pub mod messages;
pub mod profile;
pub mod session;
pub mod shell;

#[cfg(test)]
mod tests;

use self::cli::{Cli, CliCommand};
use self::commands::Status;
use self::session::Session;

fn main() -> ExitCode {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();

    match run(cli) {
        Ok(status) => status.exit_code(),
        Err(e) => {
            eprintln!("Error: {e:#}");
            Status::Failed.exit_code()
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<Status> {
    let mut config = profile::load_config(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        config.storage.data_dir = dir;
    }

    logging::init(&config.logging)?;

    let store = ShardStore::new(&config.storage.data_dir)
        .with_atomic_writes(config.storage.atomic_writes);
    let mut session = Session::open(store);

    let mut stdout = io::stdout().lock();
    let status = match cli.command {
        CliCommand::Dictionary(command) => commands::execute(&mut session, command, &mut stdout)?,
        CliCommand::Shell => shell::run_shell(&mut session, io::stdin().lock(), &mut stdout)?,
    };

    Ok(status)
}
