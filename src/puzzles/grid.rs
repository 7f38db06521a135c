//! Matrix and board puzzles.

use serde::{Deserialize, Serialize};

/// Product of two conformable matrices.
///
/// `a` is `n x m`, `b` is `m x p`; the result is `n x p`. Conformability is
/// the caller's responsibility.
///
/// # Example
///
/// ```rust
/// use selectra::puzzles::grid::matrix_product;
///
/// let row = vec![vec![1, 2, 3]];
/// let column = vec![vec![4], vec![5], vec![6]];
/// assert_eq!(matrix_product(&row, &column), vec![vec![32]]);
/// ```
pub fn matrix_product(a: &[Vec<i64>], b: &[Vec<i64>]) -> Vec<Vec<i64>> {
    let columns = b.first().map_or(0, Vec::len);
    a.iter()
        .map(|row| {
            (0..columns)
                .map(|k| row.iter().zip(b).map(|(x, b_row)| x * b_row[k]).sum())
                .collect()
        })
        .collect()
}

/// A player's mark on a tic-tac-toe board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Mark {
    /// The X player.
    X,
    /// The O player.
    O,
}

/// A 3x3 tic-tac-toe position; `None` is an empty cell.
pub type Position = [[Option<Mark>; 3]; 3];

/// Evaluate a tic-tac-toe position.
///
/// Returns the mark holding a completed row, column or diagonal, or `None`
/// when no line is complete.
///
/// # Example
///
/// ```rust
/// use selectra::puzzles::grid::{winner, Mark};
///
/// let x = Some(Mark::X);
/// let o = Some(Mark::O);
/// let position = [
///     [x, None, o],
///     [None, x, o],
///     [None, None, x],
/// ];
/// assert_eq!(winner(&position), Some(Mark::X));
/// ```
pub fn winner(position: &Position) -> Option<Mark> {
    let lines: [[(usize, usize); 3]; 8] = [
        [(0, 0), (0, 1), (0, 2)],
        [(1, 0), (1, 1), (1, 2)],
        [(2, 0), (2, 1), (2, 2)],
        [(0, 0), (1, 0), (2, 0)],
        [(0, 1), (1, 1), (2, 1)],
        [(0, 2), (1, 2), (2, 2)],
        [(0, 0), (1, 1), (2, 2)],
        [(0, 2), (1, 1), (2, 0)],
    ];

    lines.iter().find_map(|line| {
        let first = position[line[0].0][line[0].1]?;
        line[1..]
            .iter()
            .all(|&(row, column)| position[row][column] == Some(first))
            .then_some(first)
    })
}
