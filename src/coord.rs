//! Grid coordinates and orthogonal adjacency.

use core::fmt;

/// One occupied cell, addressed as (`row`, `col`).
///
/// Ordering is row-major, which is also the order the extractor emits cells in.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Coordinate) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Returns `true` when `other` shares an edge with this cell.
    /// Identity (distance 0) and diagonals (distance 2) are not adjacent.
    #[inline]
    pub fn is_adjacent(self, other: Coordinate) -> bool {
        self.manhattan(other) == 1
    }

    /// Iterator over the orthogonal neighbours that exist on a grid anchored at (0, 0).
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        let up = self.row.checked_sub(1).map(|r| Coordinate::new(r, self.col));
        let left = self.col.checked_sub(1).map(|c| Coordinate::new(self.row, c));
        let down = self.row.checked_add(1).map(|r| Coordinate::new(r, self.col));
        let right = self.col.checked_add(1).map(|c| Coordinate::new(self.row, c));
        [up, left, down, right].into_iter().flatten()
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
