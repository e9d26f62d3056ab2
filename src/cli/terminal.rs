// src/cli/terminal.rs
use std::io::{self, BufRead, IsTerminal, Write};

use console::style;
use inquire::{InquireError, Text};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Prompt error: {0}")]
    Prompt(#[from] InquireError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Input closed or the prompt was cancelled. Ends the session normally.
    #[error("End of input")]
    EndOfInput,
}

pub type Result<T> = std::result::Result<T, ShellError>;

/// Line-oriented terminal the shell talks through.
pub trait Terminal {
    /// Shows `prompt` and returns the raw answer without its line ending.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    fn say(&mut self, line: &str);

    fn warn(&mut self, line: &str) {
        self.say(line);
    }

    fn error(&mut self, line: &str) {
        self.say(line);
    }
}

/// The real terminal: `inquire` prompts when someone is at the keyboard, plain stdin
/// lines when input is piped.
pub struct ConsoleTerminal {
    interactive: bool,
}

impl ConsoleTerminal {
    pub fn new() -> Self {
        Self {
            interactive: use_inquire(io::stdin().is_terminal(), console::user_attended()),
        }
    }

    fn read_piped(&mut self, prompt: &str) -> Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;

        read_answer(&mut io::stdin().lock())
    }
}

/// `inquire` reads keys from the tty, so it is only usable when both ends are terminals.
pub fn use_inquire(stdin_tty: bool, stdout_tty: bool) -> bool {
    stdin_tty && stdout_tty
}

/// Reads one line from `reader`. Bytes that are not valid UTF-8 are replaced rather than
/// failing the session.
pub fn read_answer<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Err(ShellError::EndOfInput);
    }
    let line = String::from_utf8_lossy(&buf).into_owned();
    Ok(strip_line_ending(line))
}

impl Default for ConsoleTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal for ConsoleTerminal {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        if !self.interactive {
            return self.read_piped(prompt);
        }

        match Text::new(prompt.trim_end()).prompt() {
            Ok(answer) => Ok(answer),
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
                Err(ShellError::EndOfInput)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn say(&mut self, line: &str) {
        println!("{}", line);
    }

    fn warn(&mut self, line: &str) {
        println!("{}", style(line).yellow());
    }

    fn error(&mut self, line: &str) {
        println!("{}", style(line).red());
    }
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
