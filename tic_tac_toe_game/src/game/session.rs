use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::board::{Board, CELL_COUNT};
use super::models::{Move, Player, PlayerInfo, Seat, Status};
use crate::error::{IgnoredAction, ValidationError};

/// What a move did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Ignored(IgnoredAction),
    /// Cell taken, turn passed to `next`.
    Continue { index: usize, next: Seat },
    Won { index: usize, winner: Seat },
    Draw { index: usize },
}

impl MoveOutcome {
    /// The cell that changed, if any.
    pub fn placed(&self) -> Option<usize> {
        match *self {
            MoveOutcome::Ignored(_) => None,
            MoveOutcome::Continue { index, .. }
            | MoveOutcome::Won { index, .. }
            | MoveOutcome::Draw { index } => Some(index),
        }
    }
}

/// A tic-tac-toe session: board, both seats, whose turn it is and the move
/// history of the current round.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    players: Option<[Player; 2]>,
    current: Seat,
    status: Status,
    vs_computer: bool,
    history: Vec<Move>,
    /// Bumped on every change of whose turn it is; stamps scheduled
    /// computer moves.
    #[serde(default)]
    epoch: u64,
}

impl Game {
    pub fn new() -> Self {
        Game::default()
    }

    /// Seats two fresh players and opens a round. On a validation error
    /// nothing changes.
    pub fn start(
        &mut self,
        player1: PlayerInfo,
        player2: PlayerInfo,
        vs_computer: bool,
    ) -> Result<(), ValidationError> {
        let one = player1.into_player(Seat::One)?;
        let two = player2.into_player(Seat::Two)?;
        if one.symbol() == two.symbol() {
            return Err(ValidationError::DuplicateSymbol {
                symbol: one.symbol(),
            });
        }

        info!(
            "Starting game: {} vs {}{}",
            one,
            two,
            if vs_computer { " (computer)" } else { "" }
        );

        self.players = Some([one, two]);
        self.vs_computer = vs_computer;
        self.open_round();
        Ok(())
    }

    /// Plays `index` for whoever is to move.
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        if self.status != Status::InProgress {
            debug!("Move rejected: no round in progress.");
            return MoveOutcome::Ignored(IgnoredAction::Inactive);
        }
        if index >= CELL_COUNT {
            debug!("Move rejected: cell {} is off the board.", index);
            return MoveOutcome::Ignored(IgnoredAction::OutOfRange);
        }
        if !self.board.is_empty(index) {
            debug!("Move rejected: cell {} already taken.", index);
            return MoveOutcome::Ignored(IgnoredAction::Occupied);
        }
        let Some(symbol) = self.current_player().map(Player::symbol) else {
            return MoveOutcome::Ignored(IgnoredAction::Inactive);
        };

        let seat = self.current;
        self.board.set(index, symbol);
        self.history.push(Move { index, seat });
        self.epoch += 1;

        if self.check_win() {
            self.status = Status::Won { winner: seat };
            if let Some(player) = self.player_mut(seat) {
                player.increment_score();
            }
            info!("Game over: {:?} wins with {} at {}.", seat, symbol, index);
            MoveOutcome::Won {
                index,
                winner: seat,
            }
        } else if self.board.is_full() {
            self.status = Status::Draw;
            info!("Game over: it's a draw.");
            MoveOutcome::Draw { index }
        } else {
            self.current = seat.opponent();
            debug!("Turn switched: now {:?} to move.", self.current);
            MoveOutcome::Continue {
                index,
                next: self.current,
            }
        }
    }

    /// Plays a uniformly random empty cell for the computer seat. `token` is
    /// the `turn_token` taken when the move was scheduled; a move scheduled
    /// for an earlier turn is dropped.
    pub fn computer_move<R: Rng + ?Sized>(&mut self, token: u64, rng: &mut R) -> MoveOutcome {
        if self.status != Status::InProgress {
            return MoveOutcome::Ignored(IgnoredAction::Inactive);
        }
        if token != self.epoch {
            debug!(
                "Computer move rejected: scheduled at turn {}, now turn {}.",
                token, self.epoch
            );
            return MoveOutcome::Ignored(IgnoredAction::StaleTurn);
        }
        if !self.awaiting_computer() {
            debug!("Computer move rejected: {:?} is to move.", self.current);
            return MoveOutcome::Ignored(IgnoredAction::NotComputerTurn);
        }

        match self.board.empty_cells().choose(rng) {
            Some(&index) => {
                debug!("Computer picks cell {}.", index);
                self.apply_move(index)
            }
            None => MoveOutcome::Ignored(IgnoredAction::Occupied),
        }
    }

    /// Whether the player to move holds a complete line.
    pub fn check_win(&self) -> bool {
        self.current_player()
            .is_some_and(|player| self.board.has_line(player.symbol()))
    }

    /// Takes back the latest move, or the latest human+computer pair when
    /// playing the computer. Returns the removed moves, newest first.
    pub fn undo(&mut self) -> Vec<Move> {
        if self.status == Status::Idle {
            return Vec::new();
        }

        let mut undone = Vec::new();
        while let Some(last) = self.history.pop() {
            self.board.clear(last.index);
            undone.push(last);
            let computer_reply = self.vs_computer && last.seat == Seat::Two;
            if !computer_reply || self.history.is_empty() {
                break;
            }
        }

        let Some(mover) = undone.last().map(|m| m.seat) else {
            debug!("Undo ignored: no moves to take back.");
            return undone;
        };

        if let Status::Won { winner } = self.status {
            if let Some(player) = self.player_mut(winner) {
                player.revoke_point();
            }
        }
        self.status = Status::InProgress;
        self.current = mover;
        self.epoch += 1;

        info!(
            "Undid {} move(s); {:?} to move again.",
            undone.len(),
            self.current
        );
        undone
    }

    /// Abandons the round and goes back to idle.
    pub fn cancel(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.current = Seat::One;
        self.status = Status::Idle;
        self.epoch += 1;
        info!("Game cancelled.");
    }

    /// Opens a new round with the same players, keeping scores.
    pub fn restart(&mut self) -> bool {
        if self.players.is_none() {
            debug!("Restart ignored: no players seated.");
            return false;
        }
        self.open_round();
        info!("New round started.");
        true
    }

    pub fn reset_scores(&mut self) {
        if let Some(players) = self.players.as_mut() {
            players.iter_mut().for_each(Player::reset_score);
            debug!("Scores reset.");
        }
    }

    fn open_round(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.current = Seat::One;
        self.status = Status::InProgress;
        self.epoch += 1;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn is_active(&self) -> bool {
        self.status == Status::InProgress
    }

    pub fn vs_computer(&self) -> bool {
        self.vs_computer
    }

    pub fn current_seat(&self) -> Seat {
        self.current
    }

    pub fn player(&self, seat: Seat) -> Option<&Player> {
        self.players.as_ref().map(|players| &players[seat.index()])
    }

    fn player_mut(&mut self, seat: Seat) -> Option<&mut Player> {
        self.players.as_mut().map(|players| &mut players[seat.index()])
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.player(self.current)
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            Status::Won { winner } => self.player(winner),
            _ => None,
        }
    }

    /// Identifies the current turn; changes whenever a move is made or taken
    /// back and whenever a round opens or closes.
    pub fn turn_token(&self) -> u64 {
        self.epoch
    }

    /// True while the computer seat is to move in an open round.
    pub fn awaiting_computer(&self) -> bool {
        self.is_active() && self.vs_computer && self.current == Seat::Two
    }
}
