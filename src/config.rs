use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;
use crate::game::{
    Grid, Player, StartOrder, Token, DEFAULT_HEIGHT, DEFAULT_RUN_LENGTH, DEFAULT_WIDTH,
};

/// Largest accepted grid width or height.
pub const MAX_DIMENSION: usize = 64;

/// Grid dimensions and the run needed to win.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
    pub run_length: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            run_length: DEFAULT_RUN_LENGTH,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub token: Token,
}

/// The two participants, in listed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub first: PlayerConfig,
    pub second: PlayerConfig,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            first: PlayerConfig {
                name: "Player 1".to_string(),
                token: Token::O,
            },
            second: PlayerConfig {
                name: "Player 2".to_string(),
                token: Token::X,
            },
        }
    }
}

/// Seed 0 keeps the listed order, seed 1 swaps it; unset picks at random.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StartConfig {
    pub seed: Option<u8>,
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
    pub start: StartConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.width == 0 {
            return Err(ConfigError::Validation("board.width must be >= 1".into()));
        }
        if self.board.height == 0 {
            return Err(ConfigError::Validation("board.height must be >= 1".into()));
        }
        if self.board.width > MAX_DIMENSION || self.board.height > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.width and board.height must be <= {MAX_DIMENSION}"
            )));
        }
        if self.board.run_length == 0 {
            return Err(ConfigError::Validation(
                "board.run_length must be >= 1".into(),
            ));
        }
        if self.board.run_length > self.board.width.max(self.board.height) {
            return Err(ConfigError::Validation(
                "board.run_length must fit on the board".into(),
            ));
        }

        if self.players.first.name.trim().is_empty()
            || self.players.second.name.trim().is_empty()
        {
            return Err(ConfigError::Validation(
                "players.*.name must not be empty".into(),
            ));
        }
        if self.players.first.token == self.players.second.token {
            return Err(ConfigError::Validation(
                "players.first.token and players.second.token must differ".into(),
            ));
        }

        if let Some(seed) = self.start.seed {
            if StartOrder::from_seed(seed).is_none() {
                return Err(ConfigError::Validation("start.seed must be 0 or 1".into()));
            }
        }

        Ok(())
    }

    /// Empty grid with the configured dimensions
    pub fn grid(&self) -> Grid {
        Grid::new(self.board.width, self.board.height)
    }

    /// Players in listed order
    pub fn players(&self) -> [Player; 2] {
        let PlayersConfig { first, second } = &self.players;
        [
            Player::new(first.name.clone(), first.token),
            Player::new(second.name.clone(), second.token),
        ]
    }

    pub fn start_order(&self) -> Option<StartOrder> {
        self.start.seed.and_then(StartOrder::from_seed)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
