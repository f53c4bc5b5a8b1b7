use std::time::Duration;
use tic_tac_toe_game::{Command, Frontend, PlayerInfo, Seat, StartRequest, ValidationError};
use tokio::sync::mpsc;
use tracing::error;

/// Raw text of the start form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartForm {
    pub player1_name: String,
    pub player1_symbol: String,
    pub player2_name: String,
    pub player2_symbol: String,
    pub vs_computer: bool,
}

impl Default for StartForm {
    fn default() -> Self {
        StartForm {
            player1_name: "Player 1".to_string(),
            player1_symbol: Seat::One.default_symbol().to_string(),
            player2_name: "Player 2".to_string(),
            player2_symbol: Seat::Two.default_symbol().to_string(),
            vs_computer: false,
        }
    }
}

impl StartForm {
    /// Seat two takes `computer_name` when playing the computer.
    pub fn to_request(&self, computer_name: &str) -> Result<StartRequest, ValidationError> {
        let player2_name = if self.vs_computer {
            computer_name
        } else {
            self.player2_name.as_str()
        };

        Ok(StartRequest {
            player1: PlayerInfo::from_input(Seat::One, &self.player1_name, &self.player1_symbol)?,
            player2: PlayerInfo::from_input(Seat::Two, player2_name, &self.player2_symbol)?,
            vs_computer: self.vs_computer,
        })
    }
}

/// What the window shows: the 9 cells, the outcome banner and the last
/// start error.
pub struct BoardView {
    cells: [Option<char>; 9],
    banner: Option<String>,
    error: Option<String>,
    computer_delay: Duration,
    tx: mpsc::UnboundedSender<Command>,
    ctx: Option<egui::Context>,
}

impl BoardView {
    pub fn new(tx: mpsc::UnboundedSender<Command>, computer_delay: Duration) -> Self {
        BoardView {
            cells: [None; 9],
            banner: None,
            error: None,
            computer_delay,
            tx,
            ctx: None,
        }
    }

    pub fn attach(&mut self, ctx: egui::Context) {
        self.ctx = Some(ctx);
    }

    pub fn cells(&self) -> &[Option<char>; 9] {
        &self.cells
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Frontend for BoardView {
    fn update_cell(&mut self, index: usize, cell: Option<char>) {
        if let Some(slot) = self.cells.get_mut(index) {
            *slot = cell;
        }
        // an undo can reopen a finished round
        if cell.is_none() {
            self.banner = None;
        }
    }

    fn rebuild_board(&mut self) {
        self.cells = [None; 9];
        self.banner = None;
        self.error = None;
    }

    fn notify(&mut self, message: &str) {
        self.banner = Some(message.to_string());
    }

    fn report_error(&mut self, error: &ValidationError) {
        self.error = Some(error.to_string());
    }

    fn schedule_computer_move(&mut self, token: u64) {
        let tx = self.tx.clone();
        let ctx = self.ctx.clone();
        let delay = self.computer_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(Command::ComputerMove { token }).is_err() {
                error!("❌ Game closed before the computer could move.");
                return;
            }
            if let Some(ctx) = ctx {
                ctx.request_repaint();
            }
        });
    }
}
