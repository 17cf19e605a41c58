//! Collaborators around the engine: where columns come from, where the board
//! goes, and a plain-text console implementation of both.

mod app;
pub mod board_widget;
mod console;

pub use app::{run_match, ColumnSource, Presenter};
pub use console::{ConsolePresenter, ConsoleSource};
