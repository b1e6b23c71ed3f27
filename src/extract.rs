//! Turns raw grid rows into the list of occupied coordinates.

use alloc::vec::Vec;

use crate::coord::Coordinate;

/// Scan `rows` and collect every cell equal to `marker`, in row-major order.
///
/// Columns count `char`s, so multi-byte markers line up with what a reader sees.
/// Rows may have different lengths; anything other than `marker` is empty.
pub fn extract_coordinates<I, S>(rows: I, marker: char) -> Vec<Coordinate>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut coords = Vec::new();
    for (row, line) in rows.into_iter().enumerate() {
        coords.extend(
            line.as_ref()
                .chars()
                .enumerate()
                .filter(|&(_, cell)| cell == marker)
                .map(|(col, _)| Coordinate::new(row, col)),
        );
    }
    coords
}
