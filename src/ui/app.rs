use std::io;

use tracing::{info, instrument, warn};

use crate::error::MoveError;
use crate::game::{GameEngine, GameStatus, Grid, Player};

/// Supplies the column each player chooses.
pub trait ColumnSource {
    /// Column for `player` to drop into, or `None` when the host gives up
    /// on the match.
    fn next_column(&mut self, grid: &Grid, player: &Player) -> io::Result<Option<usize>>;
}

/// Receives every state the match passes through.
pub trait Presenter {
    /// Called once before the first move and after every accepted move.
    fn show(&mut self, grid: &Grid, player: &Player, status: &GameStatus) -> io::Result<()>;

    /// Called when a column was refused; the same player is asked again.
    fn rejected(&mut self, player: &Player, error: &MoveError) -> io::Result<()>;

    /// Called exactly once, when the match reaches `Won` or `Draw`.
    fn finished(&mut self, status: &GameStatus) -> io::Result<()>;
}

/// Drive `engine` to a terminal state, asking `source` for columns and
/// reporting to `presenter`.
///
/// Returns the terminal status, or `None` if the source ran dry first.
#[instrument(skip_all)]
pub fn run_match<S, P>(
    engine: &mut GameEngine,
    source: &mut S,
    presenter: &mut P,
) -> io::Result<Option<GameStatus>>
where
    S: ColumnSource + ?Sized,
    P: Presenter + ?Sized,
{
    presenter.show(engine.grid(), engine.active(), engine.status())?;

    while !engine.is_terminal() {
        let Some(column) = source.next_column(engine.grid(), engine.active())? else {
            info!(moves = engine.history().len(), "match abandoned");
            return Ok(None);
        };

        match engine.play(column).map(|_| ()) {
            Ok(()) => presenter.show(engine.grid(), engine.active(), engine.status())?,
            Err(err) if err.is_recoverable() => presenter.rejected(engine.active(), &err)?,
            Err(err) => {
                warn!(%err, "engine refused a resolved move");
                return Err(io::Error::other(err));
            }
        }
    }

    let status = engine.status().clone();
    presenter.finished(&status)?;
    Ok(Some(status))
}
