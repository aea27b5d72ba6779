use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::Command;

/// Word -> translation dictionary backed by a balanced tree
#[derive(Debug, Parser)]
#[command(name = "glossa", version)]
pub struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the a.txt .. z.txt shards
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    #[command(flatten)]
    Dictionary(Command),
    /// Interactive prompt reading commands from stdin
    Shell,
}
