use std::fmt;
use std::str::FromStr;

use crate::error::{GridError, ParseGridError};

use super::Token;

pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Token),
}

impl Cell {
    pub fn token(self) -> Option<Token> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(token) => Some(token),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(token) => token.symbol(),
        }
    }
}

/// The playing field, `width` columns by `height` rows.
///
/// Coordinates are `(column, row)` with row 0 at the bottom, where dropped
/// tokens come to rest. Cells are stored row-major from the bottom row up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, column: usize, row: usize) -> Option<usize> {
        self.is_in_bounds(column, row).then(|| row * self.width + column)
    }

    pub fn is_in_bounds(&self, column: usize, row: usize) -> bool {
        column < self.width && row < self.height
    }

    /// Get the cell at a position, `None` when out of bounds
    pub fn get(&self, column: usize, row: usize) -> Option<Cell> {
        self.index(column, row).map(|idx| self.cells[idx])
    }

    pub fn is_occupied(&self, column: usize, row: usize) -> Result<bool, GridError> {
        self.get(column, row)
            .map(|cell| cell != Cell::Empty)
            .ok_or(GridError::OutOfBounds { column, row })
    }

    /// Put `token` into an empty cell. Touches nothing else.
    pub fn place(&mut self, column: usize, row: usize, token: Token) -> Result<(), GridError> {
        let idx = self
            .index(column, row)
            .ok_or(GridError::OutOfBounds { column, row })?;

        if self.cells[idx] != Cell::Empty {
            return Err(GridError::CellOccupied { column, row });
        }

        self.cells[idx] = Cell::Occupied(token);
        Ok(())
    }

    /// Row a token dropped into `column` would land on, or `None` if the
    /// column is full or does not exist.
    pub fn lowest_free_row(&self, column: usize) -> Option<usize> {
        if column >= self.width {
            return None;
        }
        (0..self.height).find(|&row| self.cells[row * self.width + column] == Cell::Empty)
    }

    /// Every empty coordinate, row 0 first, left to right within a row
    pub fn free_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(idx, _)| (idx % self.width, idx / self.width))
            .collect()
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| **cell != Cell::Empty).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

/// One line per row, top row first: `.` for empty, `O`/`X` for tokens.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.height).rev() {
            let line: String = self.cells[row * self.width..(row + 1) * self.width]
                .iter()
                .map(|cell| cell.symbol())
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let width = match lines.first() {
            Some(first) => first.chars().count(),
            None => return Err(ParseGridError::Empty),
        };
        let height = lines.len();
        let mut grid = Grid::new(width, height);

        // Text is written top row first.
        for (line_no, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(ParseGridError::Ragged {
                    line: line_no + 1,
                    expected: width,
                    found,
                });
            }

            let row = height - 1 - line_no;
            for (column, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '.' => Cell::Empty,
                    other => match Token::from_symbol(other) {
                        Some(token) => Cell::Occupied(token),
                        None => {
                            return Err(ParseGridError::InvalidCell {
                                line: line_no + 1,
                                found: other,
                            })
                        }
                    },
                };
                grid.cells[row * width + column] = cell;
            }
        }

        Ok(grid)
    }
}
