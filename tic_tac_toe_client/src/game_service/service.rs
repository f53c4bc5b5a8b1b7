use rand::rngs::StdRng;
use rand::SeedableRng;
use tic_tac_toe_game::{handle_command, reject_start, Command, Game, GameConfig};
use tokio::sync::mpsc;
use tracing::info;

use super::model::{BoardView, StartForm};

/// Owns the game session and its view. All mutation happens on the UI
/// thread through `dispatch`; deferred computer moves come back through the
/// channel and are drained by `poll`.
pub struct GameService {
    game: Game,
    view: BoardView,
    rng: StdRng,
    computer_name: String,
    commands: mpsc::UnboundedReceiver<Command>,
}

impl GameService {
    pub fn new(config: &GameConfig) -> Self {
        let (tx, commands) = mpsc::unbounded_channel();

        Self {
            game: Game::new(),
            view: BoardView::new(tx, config.computer_delay),
            rng: StdRng::from_entropy(),
            computer_name: config.computer_name.clone(),
            commands,
        }
    }

    /// Lets scheduled computer moves wake the window.
    pub fn attach(&mut self, ctx: egui::Context) {
        self.view.attach(ctx);
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn view(&self) -> &BoardView {
        &self.view
    }

    pub fn computer_name(&self) -> &str {
        &self.computer_name
    }

    pub fn dispatch(&mut self, command: Command) {
        info!("📩 Handling {:?}", command);
        handle_command(&mut self.game, command, &mut self.view, &mut self.rng);
    }

    pub fn submit_start(&mut self, form: &StartForm) {
        match form.to_request(&self.computer_name) {
            Ok(request) => self.dispatch(Command::Start(request)),
            Err(err) => reject_start(&err, &mut self.view),
        }
    }

    /// Handles every command that arrived since the last frame.
    pub fn poll(&mut self) {
        while let Ok(command) = self.commands.try_recv() {
            self.dispatch(command);
        }
    }
}
