use std::path::PathBuf;

/// Errors raised by direct grid access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("cell ({column}, {row}) is outside the grid")]
    OutOfBounds { column: usize, row: usize },

    #[error("cell ({column}, {row}) is already occupied")]
    CellOccupied { column: usize, row: usize },
}

/// Errors raised when a player selects a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (0..{width})")]
    ColumnOutOfRange { column: usize, width: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("the game is already over")]
    GameOver,

    #[error("grid rejected a resolved move: {0}")]
    Grid(#[from] GridError),
}

impl MoveError {
    /// Whether the move source should simply be asked for another column.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MoveError::ColumnOutOfRange { .. } | MoveError::ColumnFull { .. }
        )
    }
}

/// Errors raised when parsing the text form of a grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseGridError {
    #[error("grid text has no rows")]
    Empty,

    #[error("line {line} has {found} cells, expected {expected}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line} contains invalid cell {found:?}")]
    InvalidCell { line: usize, found: char },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
