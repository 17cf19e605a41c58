//! Four-in-a-row detection.
//!
//! Every axis is reduced to the same primitive: a run scan over a linear
//! sequence of cells. Each axis only differs in how those sequences are laid
//! over the grid, described by a set of start cells and a fixed step. Nothing
//! is copied, transposed or rotated; lines are walked in place, so grids of
//! any aspect ratio work the same way.

use super::{Cell, Grid, Token};

pub const DEFAULT_RUN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left to right along a row
    Horizontal,
    /// Bottom to top along a column
    Vertical,
    /// Bottom-left to top-right, /
    Rising,
    /// Top-left to bottom-right, \
    Falling,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::Horizontal, Axis::Vertical, Axis::Rising, Axis::Falling];

    /// Column and row offset from one cell of a line to the next
    fn step(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (1, 0),
            Axis::Vertical => (0, 1),
            Axis::Rising => (1, 1),
            Axis::Falling => (1, -1),
        }
    }

    /// First cell of every line along this axis.
    fn starts(self, width: usize, height: usize) -> Vec<(usize, usize)> {
        if width == 0 || height == 0 {
            return Vec::new();
        }

        let left_edge = (0..height).map(|row| (0, row));
        match self {
            Axis::Horizontal => left_edge.collect(),
            Axis::Vertical => (0..width).map(|column| (column, 0)).collect(),
            Axis::Rising => left_edge.chain((1..width).map(|column| (column, 0))).collect(),
            Axis::Falling => left_edge
                .chain((1..width).map(|column| (column, height - 1)))
                .collect(),
        }
    }
}

/// A winning run of cells, listed in walk order along `axis`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub axis: Axis,
    pub cells: Vec<(usize, usize)>,
}

/// Coordinates of the line through `start` along `axis`, up to the grid edge.
fn walk(
    grid: &Grid,
    start: (usize, usize),
    axis: Axis,
) -> impl Iterator<Item = (usize, usize)> + '_ {
    let (dc, dr) = axis.step();
    std::iter::successors(Some(start), move |&(column, row)| {
        let column = column.checked_add_signed(dc)?;
        let row = row.checked_add_signed(dr)?;
        grid.is_in_bounds(column, row).then_some((column, row))
    })
}

/// First `run_length` consecutive cells equal to `target`, if any.
fn scan_run<I>(cells: I, target: Cell, run_length: usize) -> Option<Vec<(usize, usize)>>
where
    I: IntoIterator<Item = ((usize, usize), Cell)>,
{
    let mut run = Vec::with_capacity(run_length);
    for (coord, cell) in cells {
        if cell != target {
            run.clear();
            continue;
        }
        run.push(coord);
        if run.len() == run_length {
            return Some(run);
        }
    }
    None
}

/// Find a run of `run_length` cells holding `token`, checking horizontal,
/// vertical, rising and falling lines in that order.
pub fn find_line(grid: &Grid, token: Token, run_length: usize) -> Option<Line> {
    if run_length == 0 {
        return None;
    }

    let target = Cell::Occupied(token);
    Axis::ALL.into_iter().find_map(|axis| {
        axis.starts(grid.width(), grid.height())
            .into_iter()
            .find_map(|start| {
                let cells = walk(grid, start, axis).filter_map(|(column, row)| {
                    grid.get(column, row).map(|cell| ((column, row), cell))
                });
                scan_run(cells, target, run_length)
            })
            .map(|cells| Line { axis, cells })
    })
}

/// Whether `token` has `run_length` in a row anywhere on the grid.
pub fn has_line(grid: &Grid, token: Token, run_length: usize) -> bool {
    find_line(grid, token, run_length).is_some()
}
