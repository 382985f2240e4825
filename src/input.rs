use crate::snake::Direction::{self, *};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Quit,
    /// Keep the current direction and just advance one tick
    Continue,
}

/// Maps a line typed by the player to a command. Matching ignores case and
/// surrounding whitespace; anything unrecognised keeps the snake going.
pub fn parse_command(token: &str) -> Command {
    match token.trim().to_lowercase().as_str() {
        "w" | "up" => Command::Turn(Up),
        "s" | "down" => Command::Turn(Down),
        "a" | "left" => Command::Turn(Left),
        "d" | "right" => Command::Turn(Right),
        "q" | "quit" | "exit" => Command::Quit,
        _ => Command::Continue,
    }
}
