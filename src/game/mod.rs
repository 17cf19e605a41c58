//! Core rules: grid, players and roster, gravity-drop resolution, line
//! detection and the turn state machine.

mod grid;
mod player;
pub mod resolver;
mod roster;
mod state;
pub mod win;

pub use grid::{Cell, Grid, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use player::{Player, Token};
pub use roster::{Roster, StartOrder};
pub use state::{GameEngine, GameStatus};
pub use win::{Axis, Line, DEFAULT_RUN_LENGTH};
