//! Terminal front end for the student list.
//!
//! Mounts a [`StudentList`], prints its view and applies commands read
//! line by line until `quit` or end of input.

pub mod command;
pub mod config;
pub mod error;
pub mod prompt;
pub mod terminal;

use std::io::{BufRead, Write};

use student_api::StudentApi;
use student_list::{DeleteOutcome, Prompt, StudentList};

use crate::command::{Command, HELP_TEXT, parse_command};
pub use crate::error::{Result, RosterError};
use crate::terminal::Terminal;

/// Drives `list` from the terminal's input, printing every rendered view.
///
/// A [`TerminalPrompt`](crate::prompt::TerminalPrompt) built on a clone of
/// `terminal` reads its answers from the same input.
pub async fn run<A, P, R, W>(list: &StudentList<A, P>, terminal: &Terminal<R, W>) -> Result<()>
where
    A: StudentApi,
    P: Prompt,
    R: BufRead,
    W: Write,
{
    list.mount().await;
    terminal.print(format_args!("{}\n", list.view().await))?;
    terminal.print(format_args!("Type `help` for commands.\n"))?;

    loop {
        terminal.print(format_args!("> "))?;
        let Some(line) = terminal.read_line()? else {
            break;
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                terminal.print(format_args!("{err}\n"))?;
                continue;
            }
        };

        match command {
            Command::Delete(id) => {
                let outcome = list.delete(id).await;
                tracing::debug!(%id, ?outcome, "delete finished");
                if outcome == DeleteOutcome::NoSuchRow {
                    terminal.print(format_args!("no student {id} in the list\n"))?;
                    continue;
                }
            }
            Command::Reload => list.load().await,
            Command::Help => {
                terminal.print(format_args!("{HELP_TEXT}\n"))?;
                continue;
            }
            Command::Quit => break,
        }

        terminal.print(format_args!("{}\n", list.view().await))?;
    }

    Ok(())
}
