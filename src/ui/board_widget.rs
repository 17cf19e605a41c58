use crate::game::{Cell, Grid};

/// Render the grid as text, top row first, with a column index ruler below.
///
/// ```text
///  .  .  .  .  .  .  .
///  .  .  .  O  .  .  .
///  .  .  X  O  .  .  .
/// ---------------------
///  0  1  2  3  4  5  6
/// ```
pub fn render_board(grid: &Grid) -> String {
    let cell_width = grid.width().saturating_sub(1).to_string().len() + 2;
    let mut out = String::new();

    for row in (0..grid.height()).rev() {
        for column in 0..grid.width() {
            let symbol = grid
                .get(column, row)
                .and_then(Cell::token)
                .map_or('.', |token| token.symbol());
            out.push_str(&format!("{symbol:^cell_width$}"));
        }
        out.push('\n');
    }

    out.push_str(&"-".repeat(cell_width * grid.width()));
    out.push('\n');
    for column in 0..grid.width() {
        out.push_str(&format!("{column:^cell_width$}"));
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_small_board() {
        let grid: Grid = "
            .X
            OX
        "
        .parse()
        .unwrap();
        assert_eq!(render_board(&grid), " .  X \n O  X \n------\n 0  1 \n");
    }

    #[test]
    fn test_render_wide_board_keeps_columns_aligned() {
        let grid = Grid::new(11, 1);
        let rendered = render_board(&grid);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), lines[2].len());
        assert!(lines[2].ends_with(" 10 "));
    }
}
