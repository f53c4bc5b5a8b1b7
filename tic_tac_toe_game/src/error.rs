use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::models::Seat;

/// Rejected player identity at start time. Surfaced to the user; the game is
/// left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("{seat} needs a name")]
    EmptyName { seat: Seat },
    #[error("{seat} needs a visible symbol")]
    BlankSymbol { seat: Seat },
    #[error("{seat}'s symbol must be a single character")]
    SymbolTooLong { seat: Seat },
    #[error("both players cannot use the symbol '{symbol}'")]
    DuplicateSymbol { symbol: char },
}

/// A player that cannot be created, independent of which seat it was for.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerError {
    #[error("player name must not be blank")]
    EmptyName,
    #[error("player symbol must be visible")]
    BlankSymbol,
}

impl ValidationError {
    pub fn for_seat(seat: Seat, err: PlayerError) -> Self {
        match err {
            PlayerError::EmptyName => ValidationError::EmptyName { seat },
            PlayerError::BlankSymbol => ValidationError::BlankSymbol { seat },
        }
    }
}

/// Why an action was dropped without effect. Never shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoredAction {
    /// No round in progress.
    Inactive,
    OutOfRange,
    Occupied,
    NoHistory,
    /// Computer move requested while a human is to play.
    NotComputerTurn,
    /// Human click while the computer is to play.
    ComputerTurn,
    /// Computer move scheduled for a turn that has since passed.
    StaleTurn,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a whole number of milliseconds, got {value:?}")]
    InvalidDelay { key: &'static str, value: String },
    #[error("{key} must not be blank")]
    BlankName { key: &'static str },
}
