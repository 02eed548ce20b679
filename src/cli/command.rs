use clap::{ArgAction, Parser};

use crate::domain::Command;
use crate::errors::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "contact-search",
    version,
    about = "Contact book with exact and keyword search"
)]
pub struct Cli {
    /// Run the scripted demo instead of the interactive menu
    #[arg(long, env = "CONTACT_SEARCH_DEMO")]
    pub demo: bool,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Maps a trimmed menu choice to its command.
pub fn parse_command(choice: &str) -> Result<Command, AppError> {
    match choice {
        "1" => Ok(Command::AddContact),
        "2" => Ok(Command::SearchKeyword),
        "3" => Ok(Command::SearchExact),
        "4" => Ok(Command::ListForward),
        "5" => Ok(Command::ListBackward),
        "6" => Ok(Command::Exit),
        _ => Err(AppError::ParseCommand(choice.to_string())),
    }
}
