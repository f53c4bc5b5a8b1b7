mod game_app;
mod game_service;

use anyhow::{anyhow, Result};
use game_app::GameApp;
use tic_tac_toe_game::GameConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = GameConfig::from_env();
    info!(
        "Computer plays as {:?} after {:?}",
        config.computer_name, config.computer_delay
    );

    // computer replies are scheduled as tokio tasks from the UI thread
    let runtime = tokio::runtime::Runtime::new()?;
    let _guard = runtime.enter();

    eframe::run_native(
        "Tic-Tac-Toe",
        eframe::NativeOptions::default(),
        Box::new(move |cc| Ok(Box::new(GameApp::new(cc, config)))),
    )
    .map_err(|e| anyhow!("window closed with error: {e}"))
}
