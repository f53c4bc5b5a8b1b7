pub mod config;
pub mod error;
pub mod frontend;
pub mod game;

pub use config::GameConfig;
pub use error::{ConfigError, IgnoredAction, PlayerError, ValidationError};
pub use frontend::Frontend;
pub use game::board::{Board, LINES};
pub use game::handlers::{handle_command, reject_start};
pub use game::message::{Command, StartRequest};
pub use game::models::{Move, Player, PlayerInfo, Seat, Status};
pub use game::session::{Game, MoveOutcome};
