use std::io::{self, BufRead, Write};

use crate::commands::{Command, Status, execute};
use crate::session::Session;

const HELP: &str = "\
Commands:
  search <word>
  insert <word> <translation>
  delete <word>
  list [letter]
  stats
  help
  quit";

#[derive(Debug, PartialEq, Eq)]
pub enum ShellInput {
    Run(Command),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

/// Parse one shell line. The translation of `insert` is the rest of the line,
/// so it may contain spaces.
pub fn parse_line(line: &str) -> ShellInput {
    let line = line.trim();
    if line.is_empty() {
        return ShellInput::Empty;
    }

    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    match verb {
        "search" | "s" => ShellInput::Run(Command::Search {
            word: rest.to_string(),
        }),
        "insert" | "i" => {
            let (word, translation) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            ShellInput::Run(Command::Insert {
                word: word.to_string(),
                translation: translation.trim().to_string(),
            })
        }
        "delete" | "d" => ShellInput::Run(Command::Delete {
            word: rest.to_string(),
        }),
        "list" | "ls" => ShellInput::Run(Command::List {
            letter: rest.chars().next(),
            json: false,
        }),
        "stats" => ShellInput::Run(Command::Stats),
        "help" | "?" => ShellInput::Help,
        "quit" | "exit" | "q" => ShellInput::Quit,
        other => ShellInput::Unknown(other.to_string()),
    }
}

/// Read commands until `quit` or end of input, all against one session.
/// Returns the most severe status seen for a save failure, otherwise Ok.
pub fn run_shell<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
) -> io::Result<Status> {
    let mut status = Status::Ok;
    writeln!(out, "{} words loaded. Type 'help' for commands.", session.index().len())?;

    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            ShellInput::Run(command) => {
                if execute(session, command, out)? == Status::Unsaved {
                    status = Status::Unsaved;
                }
            }
            ShellInput::Help => writeln!(out, "{HELP}")?,
            ShellInput::Quit => break,
            ShellInput::Empty => {}
            ShellInput::Unknown(verb) => {
                writeln!(out, "Unknown command '{verb}'. Type 'help' for commands.")?
            }
        }
        out.flush()?;
    }

    tracing::debug!("Shell finished");
    Ok(status)
}
