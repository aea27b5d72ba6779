use std::io::{self, Write};
use std::process::ExitCode;

use clap::Subcommand;
use glossa_store::shard_letter;
use glossa_types::{DeleteOutcome, Entry, InsertOutcome};

use crate::messages;
use crate::session::{Mutation, Session};

/// Dictionary operations shared by the CLI and the shell
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Add a word with its translation
    Insert { word: String, translation: String },
    /// Look up a word
    Search { word: String },
    /// Remove a word
    Delete { word: String },
    /// Print entries in ascending order
    List {
        /// Only words persisted in this letter's shard
        #[arg(long)]
        letter: Option<char>,
        /// Print a JSON array instead of plain lines
        #[arg(long)]
        json: bool,
    },
    /// Print index statistics
    Stats,
}

/// How a command ended, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Status {
    Ok = 0,
    /// Not found, already present or invalid input
    Rejected = 1,
    /// Applied in memory but the snapshot on disk is incomplete
    Unsaved = 2,
    /// Startup or I/O failure, nothing was run
    Failed = 3,
}

impl Status {
    pub fn exit_code(self) -> ExitCode {
        ExitCode::from(self as u8)
    }
}

pub fn execute<W: Write>(
    session: &mut Session,
    command: Command,
    out: &mut W,
) -> io::Result<Status> {
    match command {
        Command::Search { word } => match session.search(&word) {
            Some(entry) => {
                writeln!(out, "{}", messages::found(entry))?;
                Ok(Status::Ok)
            }
            None => {
                writeln!(out, "{}", messages::not_found())?;
                Ok(Status::Rejected)
            }
        },
        Command::Insert { word, translation } => match session.insert(&word, &translation) {
            Ok(mutation) => {
                let word = word.trim();
                let status = match mutation.outcome {
                    InsertOutcome::Inserted => {
                        writeln!(out, "{}", messages::inserted(word))?;
                        Status::Ok
                    }
                    InsertOutcome::AlreadyPresent => {
                        writeln!(out, "{}", messages::already_present(word))?;
                        Status::Rejected
                    }
                };
                report_unsaved(out, &mutation, status)
            }
            Err(e) => {
                writeln!(out, "{e}")?;
                Ok(Status::Rejected)
            }
        },
        Command::Delete { word } => match session.delete(&word) {
            Ok(mutation) => {
                let status = match mutation.outcome {
                    DeleteOutcome::Deleted => {
                        writeln!(out, "{}", messages::deleted(word.trim()))?;
                        Status::Ok
                    }
                    DeleteOutcome::NotFound => {
                        writeln!(out, "{}", messages::not_found())?;
                        Status::Rejected
                    }
                };
                report_unsaved(out, &mutation, status)
            }
            Err(e) => {
                writeln!(out, "{e}")?;
                Ok(Status::Rejected)
            }
        },
        Command::List { letter, json } => {
            let entries: Vec<&Entry> = session
                .index()
                .iter()
                .filter(|entry| letter.is_none_or(|l| shard_letter(&entry.word) == Some(l)))
                .collect();

            if json {
                serde_json::to_writer_pretty(&mut *out, &entries)?;
                writeln!(out)?;
            } else {
                for entry in entries {
                    writeln!(out, "{}\t{}", entry.word, entry.translation)?;
                }
            }
            Ok(Status::Ok)
        }
        Command::Stats => {
            let index = session.index();
            let report = session.load_report();
            writeln!(out, "Entries: {}", index.len())?;
            writeln!(out, "Height: {}", index.height())?;
            writeln!(out, "Data directory: {}", session.store().directory().display())?;
            writeln!(out, "Shards read at startup: {}", report.shards_read)?;
            if !report.failed.is_empty() {
                writeln!(out, "Unreadable shards: {}", report.failed.len())?;
            }
            if !report.lossy.is_empty() {
                writeln!(out, "Shards with invalid UTF-8: {}", report.lossy.len())?;
            }
            Ok(Status::Ok)
        }
    }
}

fn report_unsaved<W: Write, T>(
    out: &mut W,
    mutation: &Mutation<T>,
    status: Status,
) -> io::Result<Status> {
    match &mutation.unsaved {
        Some(error) => {
            writeln!(out, "{}", messages::unsaved(error))?;
            Ok(status.max(Status::Unsaved))
        }
        None => Ok(status),
    }
}
