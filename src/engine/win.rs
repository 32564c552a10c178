//! Win detection over the four Teeko patterns.
//!
//! A player wins with 4 in a row, 4 in a column, 4 along a diagonal, or a
//! 2×2 square. Detection scans the player's occupied cells in row-major
//! order and counts qualifying consecutive pairs: three same-row pairs with
//! column step +1 form a horizontal line, three same-column pairs with row
//! step +1 a vertical one, and the two diagonal directions count pairs
//! stepping (+1,+1) and (+1,−1). The square pattern checks the first four
//! sorted positions directly.
//!
//! All scans are bounded to `len - 1` pairs via `windows(2)`.

use crate::board::Board;
use crate::core::{PlayerColor, Position};

/// Consecutive qualifying pairs needed for a line of 4.
const LINE_PAIRS: usize = 3;

/// Check whether the given player has completed any winning pattern.
pub(crate) fn has_won(board: &Board, color: PlayerColor) -> bool {
    let positions = board.occupied_by(color);
    line_win(&positions) || diagonal_win(&positions) || square_win(&positions)
}

/// Horizontal and vertical lines: count row-adjacent and column-adjacent
/// consecutive pairs over the sorted positions.
fn line_win(positions: &[Position]) -> bool {
    let mut row_pairs = 0;
    let mut col_pairs = 0;

    for pair in positions.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if a.row() == b.row() && a.col() + 1 == b.col() {
            row_pairs += 1;
        }
        if a.col() == b.col() && a.row() + 1 == b.row() {
            col_pairs += 1;
        }
    }

    row_pairs >= LINE_PAIRS || col_pairs >= LINE_PAIRS
}

/// Diagonal lines: count (+1,+1) and (+1,−1) consecutive pair steps.
fn diagonal_win(positions: &[Position]) -> bool {
    let mut down_right = 0;
    let mut down_left = 0;

    for pair in positions.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if a.row() + 1 == b.row() && a.col() + 1 == b.col() {
            down_right += 1;
        }
        if a.row() + 1 == b.row() && b.col() + 1 == a.col() {
            down_left += 1;
        }
    }

    down_right >= LINE_PAIRS || down_left >= LINE_PAIRS
}

/// A 2×2 square: the first four sorted positions forming exactly
/// `(r,c), (r,c+1), (r+1,c), (r+1,c+1)`.
fn square_win(positions: &[Position]) -> bool {
    let [a, b, c, d] = match positions {
        [a, b, c, d, ..] => [*a, *b, *c, *d],
        _ => return false,
    };

    a.row() == b.row()
        && c.row() == d.row()
        && a.row() + 1 == c.row()
        && a.col() == c.col()
        && b.col() == d.col()
        && a.col() + 1 == b.col()
}
