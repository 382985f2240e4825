//! Error types for the engine and the binary around it.

use std::io;

use thiserror::Error;

use crate::TermInt;

/// Errors raised while building a [`GameState`](crate::game::GameState).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("a {width}x{height} board cannot hold the starting snake and its food (need at least 6x3)")]
    InvalidDimensions { width: TermInt, height: TermInt },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error("terminal error: {0}")]
    Terminal(#[from] crossterm::ErrorKind),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
