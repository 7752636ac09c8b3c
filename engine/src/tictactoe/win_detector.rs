use super::types::{Cell, Mark, Move};

/// Checks the lines passing through `mv`: its row, its column and each
/// diagonal it lies on. Only lines spanning the whole board count.
pub fn completes_line(grid: &[Vec<Cell>], mv: Move, mark: Mark) -> bool {
    let size = grid.len();
    let target = Cell::Marked(mark);

    if check_row(grid, mv.row, target) || check_column(grid, mv.col, target) {
        return true;
    }
    if mv.row == mv.col && check_main_diagonal(grid, target) {
        return true;
    }
    if mv.row + mv.col == size - 1 && check_anti_diagonal(grid, target) {
        return true;
    }
    false
}

fn check_row(grid: &[Vec<Cell>], row: usize, target: Cell) -> bool {
    grid[row].iter().all(|&cell| cell == target)
}

fn check_column(grid: &[Vec<Cell>], col: usize, target: Cell) -> bool {
    grid.iter().all(|row| row[col] == target)
}

fn check_main_diagonal(grid: &[Vec<Cell>], target: Cell) -> bool {
    (0..grid.len()).all(|i| grid[i][i] == target)
}

fn check_anti_diagonal(grid: &[Vec<Cell>], target: Cell) -> bool {
    let size = grid.len();
    (0..size).all(|i| grid[i][size - 1 - i] == target)
}
