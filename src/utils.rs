use crate::types::{Direction, Position};

/// Manhattan (taxicab) distance between two cells
pub fn manhattan(a: Position, b: Position) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Chebyshev (king-move) distance between two cells
pub fn chebyshev(a: Position, b: Position) -> i32 {
    (a.row - b.row).abs().max((a.col - b.col).abs())
}

/// True when `b` is one of the eight cells around `a`
pub fn is_adjacent(a: Position, b: Position) -> bool {
    chebyshev(a, b) == 1
}

/// Orthogonal direction from `from` toward `to` along the axis with the larger gap.
/// Ties go to the column axis.
pub fn toward_on_major_axis(from: Position, to: Position) -> Direction {
    let row_diff = to.row - from.row;
    let col_diff = to.col - from.col;
    if row_diff.abs() > col_diff.abs() {
        if row_diff > 0 { Direction::South } else { Direction::North }
    } else if col_diff > 0 {
        Direction::East
    } else {
        Direction::West
    }
}

/// Orthogonal direction leading away from `threat` along the axis with the larger gap.
pub fn away_on_major_axis(from: Position, threat: Position) -> Direction {
    let row_diff = from.row - threat.row;
    let col_diff = from.col - threat.col;
    if row_diff.abs() > col_diff.abs() {
        if row_diff > 0 { Direction::South } else { Direction::North }
    } else if col_diff > 0 {
        Direction::East
    } else {
        Direction::West
    }
}
