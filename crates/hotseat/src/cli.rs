//! Line commands typed at the prompt.

use hotseat_core::Coord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A square name stands in for a click on that square.
    Click(Coord),
    Show,
    Moves,
    Deselect,
    Reset,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Command> {
        let word = line.split_whitespace().next()?;
        let cmd = match word.to_ascii_lowercase().as_str() {
            "board" | "show" | "b" => Command::Show,
            "moves" | "m" => Command::Moves,
            "deselect" | "cancel" | "d" => Command::Deselect,
            "reset" | "replay" | "new" => Command::Reset,
            "help" | "h" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => match Coord::parse(other) {
                Some(at) => Command::Click(at),
                None => Command::Unknown(word.to_string()),
            },
        };
        Some(cmd)
    }
}

pub const HELP: &str = "\
Commands:
  <square>      click a square, e.g. e2 (select, move or deselect)
  board         redraw the board
  moves         list the moves of the selected piece
  deselect      drop the current selection
  replay        start a new game
  help          show this text
  quit          leave (writes the transcript when --record is set)

Board legend: [X] selected, * reachable square, (x) capturable piece";

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
