//! Terminal implementation of the blocking prompt.

use std::io::{self, BufRead, Write};

use student_list::Prompt;

use crate::terminal::Terminal;

/// Asks on the terminal output and reads the answer from the same input the
/// command loop reads.
#[derive(Debug, Clone)]
pub struct TerminalPrompt<R, W> {
    terminal: Terminal<R, W>,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(terminal: Terminal<R, W>) -> Self {
        Self { terminal }
    }

    fn ask(&self, message: &str) -> io::Result<Option<String>> {
        self.terminal.print(format_args!("{message} [y/N] "))?;
        self.terminal.read_line()
    }
}

impl<R, W> Prompt for TerminalPrompt<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn confirm(&self, message: &str) -> bool {
        match self.ask(message) {
            Ok(Some(answer)) => is_affirmative(&answer),
            Ok(None) => false,
            Err(err) => {
                tracing::warn!(error = %err, "confirmation prompt failed");
                false
            }
        }
    }

    fn alert(&self, message: &str) {
        if let Err(err) = self.terminal.print(format_args!("! {message}\n")) {
            tracing::warn!(error = %err, "alert could not be shown");
        }
    }
}

/// `y`, `yes` and `ya` (any case) confirm; anything else declines.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "ya"
    )
}
