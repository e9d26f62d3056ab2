// src/cli/mod.rs
use clap::Parser;

pub mod menu;
pub mod prompts;
pub mod terminal;

pub use menu::{MenuAction, Shell};
pub use terminal::{ConsoleTerminal, ShellError, Terminal};

/// Interactive tool to generate, validate and save passwords.
///
/// Everything happens in the menu; settings come from the environment
/// (DEFAULT_PASSWORD_LENGTH, DEFAULT_BATCH_COUNT, EXPORT_DIRECTORY, LOG_LEVEL, LOG_FILE).
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {}
