use mines_core::{Amount, CellCount, CellId, Command};
use thiserror::Error;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Input {
    Play(Command),
    /// Quick bet preset, 1-based as printed in the help text
    QuickBet(usize),
    Status,
    Help,
    Quit,
    Empty,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("unknown command {0:?}, try `help`")]
    Unknown(String),
    #[error("`{command}` needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("could not read {0:?} as a number")]
    NotANumber(String),
}

pub fn parse(line: &str) -> Result<Input, ParseError> {
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(Input::Empty);
    };
    let arg = words.next();

    let input = match word.to_ascii_lowercase().as_str() {
        "bet" => Input::Play(Command::ConfigureBet(number::<Amount>(
            "bet",
            "an amount",
            arg,
        )?)),
        "quick" => Input::QuickBet(number("quick", "a preset number", arg)?),
        "mines" | "hazards" => Input::Play(Command::ConfigureHazardCount(
            number::<CellCount>("mines", "a mine count", arg)?,
        )),
        "start" | "play" => Input::Play(Command::StartRound),
        "reveal" | "r" => Input::Play(Command::RevealTile(number::<CellId>(
            "reveal",
            "a tile number",
            arg,
        )?)),
        "cashout" | "cash" => Input::Play(Command::CashOut),
        "reset" | "new" => Input::Play(Command::ResetRound),
        "status" | "s" => Input::Status,
        "help" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        other => match other.parse::<CellId>() {
            // a bare number reveals that tile
            Ok(id) => Input::Play(Command::RevealTile(id)),
            Err(_) => return Err(ParseError::Unknown(word.to_string())),
        },
    };
    Ok(input)
}

fn number<T: std::str::FromStr>(
    command: &'static str,
    expected: &'static str,
    arg: Option<&str>,
) -> Result<T, ParseError> {
    let arg = arg.ok_or(ParseError::MissingArgument { command, expected })?;
    arg.parse()
        .map_err(|_| ParseError::NotANumber(arg.to_string()))
}
