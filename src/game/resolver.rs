use crate::error::MoveError;

use super::Grid;

/// Where a token dropped into `column` would land.
///
/// Gravity decides the row: it is the lowest empty cell of the column. The
/// grid is only read, so a rejected column can be retried freely.
pub fn resolve(grid: &Grid, column: usize) -> Result<(usize, usize), MoveError> {
    if column >= grid.width() {
        return Err(MoveError::ColumnOutOfRange {
            column,
            width: grid.width(),
        });
    }

    grid.lowest_free_row(column)
        .map(|row| (column, row))
        .ok_or(MoveError::ColumnFull { column })
}
