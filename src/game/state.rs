use rand::Rng;
use tracing::{debug, info, instrument};

use crate::error::MoveError;

use super::resolver::resolve;
use super::win::{find_line, Line};
use super::{Grid, Player, Roster, StartOrder};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Turn state machine: one grid, one roster, one status.
///
/// Each accepted column is resolved to its landing cell, filled with the
/// active player's token and scored. The turn passes to the other player
/// only while the game is still in progress.
#[derive(Debug, Clone)]
pub struct GameEngine {
    grid: Grid,
    roster: Roster,
    run_length: usize,
    status: GameStatus,
    history: Vec<(usize, usize)>,
    winning_line: Option<Line>,
}

impl GameEngine {
    /// Engine over an existing grid and roster; `roster.active()` moves first.
    pub fn new(grid: Grid, roster: Roster, run_length: usize) -> Self {
        GameEngine {
            grid,
            roster,
            run_length,
            status: GameStatus::InProgress,
            history: Vec::new(),
            winning_line: None,
        }
    }

    /// Set up a fresh game: order the roster once, then hand the first turn
    /// over with the setup rotation.
    ///
    /// `StartOrder::Keep` therefore lets the second listed player open, and
    /// `StartOrder::Swap` the first.
    pub fn start<R: Rng>(
        grid: Grid,
        players: [Player; 2],
        order: Option<StartOrder>,
        run_length: usize,
        rng: &mut R,
    ) -> Self {
        let mut roster = Roster::initial_order(players, order, rng);
        roster.rotate();
        info!(
            width = grid.width(),
            height = grid.height(),
            run_length,
            first = %roster.active(),
            "game started"
        );
        Self::new(grid, roster, run_length)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Player whose turn it is (the winner, once won)
    pub fn active(&self) -> &Player {
        self.roster.active()
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn run_length(&self) -> usize {
        self.run_length
    }

    /// Landing cells of every accepted move, oldest first
    pub fn history(&self) -> &[(usize, usize)] {
        &self.history
    }

    pub fn winning_line(&self) -> Option<&Line> {
        self.winning_line.as_ref()
    }

    /// Drop the active player's token into `column`.
    ///
    /// # Errors
    ///
    /// `ColumnOutOfRange` and `ColumnFull` leave the game untouched and the
    /// same player keeps the turn. `GameOver` is returned once terminal.
    #[instrument(skip(self), fields(player = %self.roster.active()))]
    pub fn play(&mut self, column: usize) -> Result<&GameStatus, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let (column, row) = resolve(&self.grid, column).inspect_err(|err| {
            debug!(%err, "move rejected");
        })?;

        let mover = self.roster.active().clone();
        self.grid.place(column, row, mover.token())?;
        self.history.push((column, row));
        debug!(column, row, "token dropped");

        if let Some(line) = find_line(&self.grid, mover.token(), self.run_length) {
            info!(winner = %mover, axis = ?line.axis, moves = self.history.len(), "game won");
            self.winning_line = Some(line);
            self.status = GameStatus::Won(mover);
        } else if self.grid.free_cells().is_empty() {
            info!(moves = self.history.len(), "game drawn");
            self.status = GameStatus::Draw;
        } else {
            self.roster.rotate();
        }

        Ok(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::win::{has_line, Axis};
    use crate::game::{Cell, Token};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn players() -> [Player; 2] {
        [
            Player::new("Player 1", Token::O),
            Player::new("Player 2", Token::X),
        ]
    }

    fn engine(width: usize, height: usize) -> GameEngine {
        let [first, second] = players();
        GameEngine::new(Grid::new(width, height), Roster::new(first, second), 4)
    }

    #[test]
    fn test_initial_state() {
        let engine = engine(7, 6);
        assert_eq!(engine.status(), &GameStatus::InProgress);
        assert_eq!(engine.active().token(), Token::O);
        assert_eq!(engine.grid().free_cells().len(), 42);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_play_drops_and_rotates() {
        let mut engine = engine(7, 6);
        assert_eq!(engine.play(3), Ok(&GameStatus::InProgress));
        assert_eq!(engine.grid().get(3, 0), Some(Cell::Occupied(Token::O)));
        assert_eq!(engine.active().token(), Token::X);

        engine.play(3).unwrap();
        assert_eq!(engine.grid().get(3, 1), Some(Cell::Occupied(Token::X)));
        assert_eq!(engine.history(), &[(3, 0), (3, 1)]);
        assert_eq!(engine.active().token(), Token::O);
    }

    #[test]
    fn test_vertical_win_in_center_column() {
        let mut engine = engine(7, 6);
        for _ in 0..3 {
            engine.play(3).unwrap(); // O
            engine.play(0).unwrap(); // X
        }
        let status = engine.play(3).unwrap().clone();

        assert_eq!(status, GameStatus::Won(Player::new("Player 1", Token::O)));
        let line = engine.winning_line().unwrap();
        assert_eq!(line.axis, Axis::Vertical);
        assert_eq!(line.cells, vec![(3, 0), (3, 1), (3, 2), (3, 3)]);
        // The winner keeps index 0.
        assert_eq!(engine.active().token(), Token::O);
    }

    #[test]
    fn test_unopposed_drops_form_vertical_line() {
        let mut grid = Grid::new(7, 6);
        for placed in 1..=4 {
            let (column, row) = resolve(&grid, 3).unwrap();
            grid.place(column, row, Token::O).unwrap();
            assert_eq!(has_line(&grid, Token::O, 4), placed == 4);
        }
        let line = find_line(&grid, Token::O, 4).unwrap();
        assert_eq!(line.axis, Axis::Vertical);
    }

    #[test]
    fn test_draw_on_full_grid() {
        // Final position:
        //   XXOOXXO
        //   OOXXOOX
        //   XXOOXXO
        //   OOXXOOX
        //   XXOOXXO
        //   OOXXOOX
        let moves = [
            0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 4, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 4, 4, 4,
            4, 4, 5, 5, 5, 5, 5, 6, 6, 6, 6, 6, 6, 5,
        ];
        let mut engine = engine(7, 6);

        for (i, &column) in moves.iter().enumerate() {
            let status = engine.play(column).unwrap().clone();
            assert!(!matches!(status, GameStatus::Won(_)), "won at move {i}");
            if i + 1 < moves.len() {
                assert_eq!(status, GameStatus::InProgress);
            }
        }

        assert_eq!(engine.status(), &GameStatus::Draw);
        assert!(engine.grid().free_cells().is_empty());
        assert!(engine.winning_line().is_none());
        assert_eq!(engine.play(0), Err(MoveError::GameOver));
    }

    #[test]
    fn test_full_column_rejected_without_changes() {
        let mut engine = engine(7, 6);
        for _ in 0..6 {
            engine.play(2).unwrap();
        }
        let grid_before = engine.grid().clone();
        let active_before = engine.active().clone();

        assert_eq!(engine.play(2), Err(MoveError::ColumnFull { column: 2 }));
        assert_eq!(engine.grid(), &grid_before);
        assert_eq!(engine.active(), &active_before);
        assert_eq!(engine.history().len(), 6);
        assert_eq!(engine.status(), &GameStatus::InProgress);
    }

    #[test]
    fn test_out_of_range_column_rejected() {
        let mut engine = engine(7, 6);
        assert_eq!(
            engine.play(7),
            Err(MoveError::ColumnOutOfRange { column: 7, width: 7 })
        );
        assert_eq!(engine.grid(), &Grid::new(7, 6));
        assert_eq!(engine.active().token(), Token::O);
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut engine = engine(4, 4);
        for column in 0..3 {
            engine.play(column).unwrap(); // O
            engine.play(column).unwrap(); // X
        }
        assert!(matches!(engine.play(3), Ok(GameStatus::Won(_))));
        let grid_before = engine.grid().clone();
        assert_eq!(engine.play(3), Err(MoveError::GameOver));
        assert_eq!(engine.grid(), &grid_before);
    }

    #[test]
    fn test_start_keep_lets_second_player_open() {
        let mut rng = StdRng::seed_from_u64(0);
        let engine = GameEngine::start(
            Grid::new(7, 6),
            players(),
            Some(StartOrder::Keep),
            4,
            &mut rng,
        );
        assert_eq!(engine.active().name(), "Player 2");
    }

    #[test]
    fn test_start_swap_lets_first_player_open() {
        let mut rng = StdRng::seed_from_u64(0);
        let engine = GameEngine::start(
            Grid::new(7, 6),
            players(),
            Some(StartOrder::Swap),
            4,
            &mut rng,
        );
        assert_eq!(engine.active().name(), "Player 1");
    }

    #[test]
    fn test_start_random_order_is_seeded() {
        let first = |seed| {
            GameEngine::start(
                Grid::new(7, 6),
                players(),
                None,
                4,
                &mut StdRng::seed_from_u64(seed),
            )
            .active()
            .clone()
        };
        assert_eq!(first(11), first(11));
    }
}
