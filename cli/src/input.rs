//! Line commands read from stdin.

use pokerroom::deck;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Vote(String),
    Reveal,
    Clear,
    Dismiss(u64),
    Status,
    Help,
    Quit,
    Empty,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown command `{0}`; type `help`")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

pub const HELP: &str = "\
commands:
  vote <card>    cast or change your vote (a bare card works too)
  reveal         show or hide everyone's votes
  clear          start a new round
  dismiss <id>   remove a notice
  status         print the room
  quit           leave the room and exit
cards: 0 1 2 3 5 8 13 21 34 55 89 ? coffee";

/// Parse one input line.
///
/// # Errors
///
/// Returns [`InputError`] for unknown commands or missing arguments.
pub fn parse(line: &str) -> Result<Input, InputError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(Input::Empty);
    };
    let arg = words.next();

    match head.to_ascii_lowercase().as_str() {
        "vote" | "v" => arg
            .map(|card| Input::Vote(card.to_owned()))
            .ok_or(InputError::Usage("vote <card>")),
        "reveal" | "r" => Ok(Input::Reveal),
        "clear" | "c" => Ok(Input::Clear),
        "dismiss" | "d" => arg
            .and_then(|id| id.parse::<u64>().ok())
            .map(Input::Dismiss)
            .ok_or(InputError::Usage("dismiss <id>")),
        "status" | "s" => Ok(Input::Status),
        "help" | "h" => Ok(Input::Help),
        "quit" | "q" | "leave" | "exit" => Ok(Input::Quit),
        _ if deck::is_card(head) => Ok(Input::Vote(head.to_owned())),
        _ => Err(InputError::Unknown(head.to_owned())),
    }
}

#[cfg(test)]
#[path = "input_test.rs"]
mod tests;
