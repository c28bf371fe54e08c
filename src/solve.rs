//! Puzzle solving boundary.
//!
//! Consumers of [`GridCells`](crate::GridCells) read one digit per cell into a
//! [`DigitGrid`] and hand it to a [`PuzzleSolver`]. [`BacktrackingSolver`] is
//! a plain depth-first search over the blanks in row-major order.

use crate::types::{CELL_COUNT, GRID_DIM};

/// Row-major 9×9 digits; `0` is a blank.
pub type DigitGrid = [u8; CELL_COUNT];

pub trait PuzzleSolver {
    /// Completed grid, or `None` when the givens admit no solution.
    fn solve(&self, givens: &DigitGrid) -> Option<DigitGrid>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BacktrackingSolver;

impl PuzzleSolver for BacktrackingSolver {
    fn solve(&self, givens: &DigitGrid) -> Option<DigitGrid> {
        if !givens_consistent(givens) {
            return None;
        }
        let mut grid = *givens;
        fill(&mut grid, 0).then_some(grid)
    }
}

fn fill(grid: &mut DigitGrid, pos: usize) -> bool {
    let Some(next) = (pos..CELL_COUNT).find(|&i| grid[i] == 0) else {
        return true;
    };
    for digit in 1..=9u8 {
        if can_place(grid, next, digit) {
            grid[next] = digit;
            if fill(grid, next + 1) {
                return true;
            }
        }
    }
    grid[next] = 0;
    false
}

fn can_place(grid: &DigitGrid, idx: usize, digit: u8) -> bool {
    let row = idx / GRID_DIM;
    let col = idx % GRID_DIM;
    let box_row = row / 3 * 3;
    let box_col = col / 3 * 3;
    for k in 0..GRID_DIM {
        let in_row = row * GRID_DIM + k;
        let in_col = k * GRID_DIM + col;
        let in_box = (box_row + k / 3) * GRID_DIM + box_col + k % 3;
        if (in_row != idx && grid[in_row] == digit)
            || (in_col != idx && grid[in_col] == digit)
            || (in_box != idx && grid[in_box] == digit)
        {
            return false;
        }
    }
    true
}

/// Givens must be digits 0..=9 and must not already clash.
fn givens_consistent(grid: &DigitGrid) -> bool {
    grid.iter()
        .enumerate()
        .all(|(idx, &d)| d == 0 || (d <= 9 && can_place(grid, idx, d)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> DigitGrid {
        let mut g = [0u8; CELL_COUNT];
        for (i, ch) in s.chars().filter(|c| !c.is_whitespace()).enumerate() {
            g[i] = ch.to_digit(10).unwrap_or(0) as u8;
        }
        g
    }

    fn is_valid_solution(g: &DigitGrid) -> bool {
        g.iter().all(|&d| (1..=9).contains(&d)) && givens_consistent(g)
    }

    #[test]
    fn solves_classic_puzzle() {
        let givens = parse(
            "530070000 600195000 098000060 800060003 400803001 \
             700020006 060000280 000419005 000080079",
        );
        let solved = BacktrackingSolver.solve(&givens).expect("solvable");
        assert!(is_valid_solution(&solved));
        for (g, s) in givens.iter().zip(solved.iter()) {
            if *g != 0 {
                assert_eq!(g, s, "givens are preserved");
            }
        }
        assert_eq!(&solved[..9], &[5, 3, 4, 6, 7, 8, 9, 1, 2]);
    }

    #[test]
    fn empty_grid_has_a_solution() {
        let solved = BacktrackingSolver.solve(&[0u8; CELL_COUNT]).expect("solvable");
        assert!(is_valid_solution(&solved));
    }

    #[test]
    fn clashing_givens_are_unsatisfiable() {
        let mut givens = [0u8; CELL_COUNT];
        givens[0] = 7;
        givens[8] = 7;
        assert!(BacktrackingSolver.solve(&givens).is_none());
    }

    #[test]
    fn out_of_range_digit_is_rejected() {
        let mut givens = [0u8; CELL_COUNT];
        givens[40] = 12;
        assert!(BacktrackingSolver.solve(&givens).is_none());
    }
}
