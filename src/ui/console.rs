use std::io::{self, BufRead, Write};

use tracing::debug;

use super::board_widget::render_board;
use super::{ColumnSource, Presenter};
use crate::error::MoveError;
use crate::game::{GameStatus, Grid, Player};

/// Reads one column number per line from `input`, prompting on `output`.
pub struct ConsoleSource<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        ConsoleSource { input, output }
    }
}

impl<R: BufRead, W: Write> ColumnSource for ConsoleSource<R, W> {
    fn next_column(&mut self, grid: &Grid, player: &Player) -> io::Result<Option<usize>> {
        loop {
            write!(
                self.output,
                "{player}, choose a column [0-{}]: ",
                grid.width().saturating_sub(1)
            )?;
            self.output.flush()?;

            // Raw bytes, so a line that is not UTF-8 is re-asked like any other
            // unparsable answer.
            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None);
            }

            let line = String::from_utf8_lossy(&buf);
            let answer = line.trim();
            if answer.eq_ignore_ascii_case("q") || answer.eq_ignore_ascii_case("quit") {
                return Ok(None);
            }
            match answer.parse::<usize>() {
                Ok(column) => return Ok(Some(column)),
                Err(err) => {
                    debug!(input = answer, %err, "unparsable column");
                    writeln!(self.output, "Please enter a column number.")?;
                }
            }
        }
    }
}

/// Prints the board after every move and the result at the end.
pub struct ConsolePresenter<W> {
    output: W,
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(output: W) -> Self {
        ConsolePresenter { output }
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn show(&mut self, grid: &Grid, player: &Player, status: &GameStatus) -> io::Result<()> {
        writeln!(self.output)?;
        write!(self.output, "{}", render_board(grid))?;
        if !status.is_terminal() {
            writeln!(self.output, "{player} to move")?;
        }
        Ok(())
    }

    fn rejected(&mut self, _player: &Player, error: &MoveError) -> io::Result<()> {
        let message = match error {
            MoveError::ColumnFull { .. } => "Column is full!".to_string(),
            MoveError::ColumnOutOfRange { width, .. } => {
                format!("Invalid column! Pick 0 to {}.", width.saturating_sub(1))
            }
            other => other.to_string(),
        };
        writeln!(self.output, "{message}")
    }

    fn finished(&mut self, status: &GameStatus) -> io::Result<()> {
        match status {
            GameStatus::Won(player) => writeln!(self.output, "{} wins!", player.name()),
            GameStatus::Draw => writeln!(self.output, "It's a draw!"),
            GameStatus::InProgress => Ok(()),
        }
    }
}
