//! Parsing of the commands typed at the roster prompt.

use student_api::StudentId;
use thiserror::Error;

pub const HELP_TEXT: &str = "\
Commands:
  delete <id>, d <id>   delete a student after confirmation
  reload, r             fetch the list again
  help, h               show this help
  quit, q               exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Delete(StudentId),
    Reload,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("missing student id")]
    MissingId,

    #[error("invalid student id: {0}")]
    InvalidId(String),

    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "delete" | "d" | "hapus" => {
            let raw = words.next().ok_or(CommandError::MissingId)?;
            let id = raw
                .parse::<StudentId>()
                .map_err(|_| CommandError::InvalidId(raw.to_string()))?;
            Command::Delete(id)
        }
        "reload" | "r" => Command::Reload,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => return Err(CommandError::Unknown(verb.to_string())),
    };

    if let Some(extra) = words.next() {
        return Err(CommandError::UnexpectedArgument(extra.to_string()));
    }

    Ok(Some(command))
}
