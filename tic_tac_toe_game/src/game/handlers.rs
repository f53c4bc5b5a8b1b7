use rand::Rng;
use tracing::{debug, error, info};

use super::message::{Command, StartRequest};
use super::session::{Game, MoveOutcome};
use crate::error::{IgnoredAction, ValidationError};
use crate::frontend::Frontend;

/// Applies one UI command to `game` and drives `frontend` with the result.
pub fn handle_command<F, R>(game: &mut Game, command: Command, frontend: &mut F, rng: &mut R)
where
    F: Frontend + ?Sized,
    R: Rng + ?Sized,
{
    match command {
        Command::Start(request) => handle_start(game, request, frontend),
        Command::SelectCell { index } => handle_select_cell(game, index, frontend),
        Command::ComputerMove { token } => {
            let outcome = game.computer_move(token, rng);
            report_outcome(game, outcome, frontend);
        }
        Command::Undo => handle_undo(game, frontend),
        Command::Cancel => {
            game.cancel();
            frontend.rebuild_board();
        }
        Command::Restart => {
            if game.restart() {
                frontend.rebuild_board();
                schedule_if_computer_turn(game, frontend);
            }
        }
        Command::ResetScores => game.reset_scores(),
    }
}

fn handle_start<F: Frontend + ?Sized>(game: &mut Game, request: StartRequest, frontend: &mut F) {
    info!(
        "📥 Start requested - {:?} vs {:?}, computer: {}",
        request.player1.name, request.player2.name, request.vs_computer
    );

    match game.start(request.player1, request.player2, request.vs_computer) {
        Ok(()) => {
            frontend.rebuild_board();
            schedule_if_computer_turn(game, frontend);
        }
        Err(err) => reject_start(&err, frontend),
    }
}

/// Surfaces a start failure, including form input the host could not parse.
pub fn reject_start<F: Frontend + ?Sized>(err: &ValidationError, frontend: &mut F) {
    error!("❌ Start rejected: {}", err);
    frontend.report_error(err);
}

fn handle_select_cell<F: Frontend + ?Sized>(game: &mut Game, index: usize, frontend: &mut F) {
    if game.awaiting_computer() {
        debug!("Click on cell {} ignored: {:?}", index, IgnoredAction::ComputerTurn);
        return;
    }
    let outcome = game.apply_move(index);
    report_outcome(game, outcome, frontend);
}

fn handle_undo<F: Frontend + ?Sized>(game: &mut Game, frontend: &mut F) {
    let undone = game.undo();
    if undone.is_empty() {
        debug!("Undo ignored: {:?}", IgnoredAction::NoHistory);
        return;
    }
    for mv in &undone {
        frontend.update_cell(mv.index, None);
    }
    schedule_if_computer_turn(game, frontend);
}

fn report_outcome<F: Frontend + ?Sized>(game: &Game, outcome: MoveOutcome, frontend: &mut F) {
    let Some(index) = outcome.placed() else {
        if let MoveOutcome::Ignored(reason) = outcome {
            debug!("Move ignored: {:?}", reason);
        }
        return;
    };
    frontend.update_cell(index, game.board().get(index));

    match outcome {
        MoveOutcome::Won { .. } => {
            let name = game.winner().map(|p| p.name()).unwrap_or("Someone");
            frontend.notify(&format!("{name} wins!"));
            log_final_board(game);
        }
        MoveOutcome::Draw { .. } => {
            frontend.notify("It's a draw!");
            log_final_board(game);
        }
        MoveOutcome::Continue { .. } => schedule_if_computer_turn(game, frontend),
        MoveOutcome::Ignored(_) => {}
    }
}

fn schedule_if_computer_turn<F: Frontend + ?Sized>(game: &Game, frontend: &mut F) {
    if game.awaiting_computer() {
        let token = game.turn_token();
        debug!("Scheduling computer move for turn {}.", token);
        frontend.schedule_computer_move(token);
    }
}

fn log_final_board(game: &Game) {
    match serde_json::to_string(game.board()) {
        Ok(board) => debug!("Final board: {}", board),
        Err(e) => error!("❌ Failed to serialize board: {}", e),
    }
}
