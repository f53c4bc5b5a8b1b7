use std::env;
use std::time::Duration;

use tracing::warn;

use crate::error::ConfigError;

pub const COMPUTER_DELAY_VAR: &str = "TIC_TAC_TOE_COMPUTER_DELAY_MS";
pub const COMPUTER_NAME_VAR: &str = "TIC_TAC_TOE_COMPUTER_NAME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Pause before the computer answers a human move.
    pub computer_delay: Duration,
    /// Name seated in player 2 when playing the computer.
    pub computer_name: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            computer_delay: Duration::from_millis(500),
            computer_name: "Computer".to_string(),
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from `lookup`, keeping the default for any value that
    /// is missing or invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = GameConfig::default();

        if let Some(raw) = lookup(COMPUTER_DELAY_VAR) {
            match parse_delay(&raw) {
                Ok(delay) => config.computer_delay = delay,
                Err(e) => warn!("{}; using {:?}", e, config.computer_delay),
            }
        }

        if let Some(raw) = lookup(COMPUTER_NAME_VAR) {
            match parse_name(&raw) {
                Ok(name) => config.computer_name = name,
                Err(e) => warn!("{}; using {:?}", e, config.computer_name),
            }
        }

        config
    }
}

fn parse_delay(raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::InvalidDelay {
            key: COMPUTER_DELAY_VAR,
            value: raw.to_string(),
        })
}

fn parse_name(raw: &str) -> Result<String, ConfigError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ConfigError::BlankName {
            key: COMPUTER_NAME_VAR,
        });
    }
    Ok(name.to_string())
}
