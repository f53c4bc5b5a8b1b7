use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PlayerError, ValidationError};

/// Symbols handed out when the start form leaves them blank.
pub const DEFAULT_SYMBOLS: [char; 2] = ['X', 'O'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Seat {
    #[default]
    One,
    Two,
}

impl Seat {
    pub fn opponent(self) -> Seat {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }

    pub fn default_symbol(self) -> char {
        DEFAULT_SYMBOLS[self.index()]
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::One => write!(f, "Player 1"),
            Seat::Two => write!(f, "Player 2"),
        }
    }
}

/// A seated player. Name and symbol are fixed once created; only the score
/// moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    symbol: char,
    score: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, symbol: char) -> Result<Self, PlayerError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(PlayerError::EmptyName);
        }
        if symbol.is_whitespace() {
            return Err(PlayerError::BlankSymbol);
        }

        Ok(Player {
            name: name.to_string(),
            symbol,
            score: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn increment_score(&mut self) {
        self.score = self.score.saturating_add(1);
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }

    /// Takes back a point awarded for a win that has since been undone.
    pub(crate) fn revoke_point(&mut self) {
        self.score = self.score.saturating_sub(1);
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

/// One seat's start-form input, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub name: String,
    pub symbol: Option<char>,
}

impl PlayerInfo {
    pub fn new(name: impl Into<String>, symbol: Option<char>) -> Self {
        PlayerInfo {
            name: name.into(),
            symbol,
        }
    }

    /// Parses raw form text. A blank symbol field means "use the default".
    pub fn from_input(seat: Seat, name: &str, symbol: &str) -> Result<Self, ValidationError> {
        let mut chars = symbol.trim().chars();
        let symbol = match (chars.next(), chars.next()) {
            (None, _) => None,
            (Some(c), None) => Some(c),
            (Some(_), Some(_)) => return Err(ValidationError::SymbolTooLong { seat }),
        };

        Ok(PlayerInfo::new(name, symbol))
    }

    pub(crate) fn into_player(self, seat: Seat) -> Result<Player, ValidationError> {
        let symbol = self.symbol.unwrap_or_else(|| seat.default_symbol());
        Player::new(self.name, symbol).map_err(|err| ValidationError::for_seat(seat, err))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub index: usize,
    pub seat: Seat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Status {
    #[default]
    Idle,
    InProgress,
    Won {
        winner: Seat,
    },
    Draw,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Won { .. } | Status::Draw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_rejects_blank_name() {
        assert_eq!(Player::new("   ", 'O'), Err(PlayerError::EmptyName));
        assert_eq!(Player::new("Bob", '\t'), Err(PlayerError::BlankSymbol));
    }

    #[test]
    fn player_errors_name_the_seat_they_came_from() {
        assert_eq!(
            PlayerInfo::new("", Some('O')).into_player(Seat::Two),
            Err(ValidationError::EmptyName { seat: Seat::Two })
        );
        assert_eq!(
            PlayerInfo::new("Alice", Some(' ')).into_player(Seat::One),
            Err(ValidationError::BlankSymbol { seat: Seat::One })
        );
        assert_eq!(
            PlayerError::EmptyName.to_string(),
            "player name must not be blank"
        );
    }

    #[test]
    fn player_trims_name_and_starts_at_zero() {
        let player = Player::new("  Alice ", 'X').unwrap();
        assert_eq!(player.name(), "Alice");
        assert_eq!(player.symbol(), 'X');
        assert_eq!(player.score(), 0);
    }

    #[test]
    fn score_increments_and_resets() {
        let mut player = Player::new("Bob", 'O').unwrap();
        player.increment_score();
        player.increment_score();
        assert_eq!(player.score(), 2);

        player.revoke_point();
        assert_eq!(player.score(), 1);

        player.reset_score();
        player.revoke_point();
        assert_eq!(player.score(), 0);
    }

    #[test]
    fn form_input_symbol_parsing() {
        assert_eq!(
            PlayerInfo::from_input(Seat::Two, "Bob", "").unwrap().symbol,
            None
        );
        assert_eq!(
            PlayerInfo::from_input(Seat::Two, "Bob", " @ ").unwrap().symbol,
            Some('@')
        );
        assert_eq!(
            PlayerInfo::from_input(Seat::Two, "Bob", "OO"),
            Err(ValidationError::SymbolTooLong { seat: Seat::Two })
        );
    }

    #[test]
    fn missing_symbol_falls_back_to_seat_default() {
        let player = PlayerInfo::new("Bob", None).into_player(Seat::Two).unwrap();
        assert_eq!(player.symbol(), 'O');
    }
}
