use serde::{Deserialize, Serialize};

use super::models::PlayerInfo;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartRequest {
    pub player1: PlayerInfo,
    pub player2: PlayerInfo,
    pub vs_computer: bool,
}

/// Everything the hosting UI can ask of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Command {
    Start(StartRequest),
    SelectCell { index: usize },
    /// Fired by the deferred callback scheduled after a human move, carrying
    /// the game's turn token from scheduling time.
    ComputerMove { token: u64 },
    Undo,
    Cancel,
    Restart,
    ResetScores,
}
