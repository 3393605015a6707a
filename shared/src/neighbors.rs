use crate::grid::Grid;

const OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Count the alive neighbors of `(x, y)`.
///
/// The border is clipped: cells past the edge count as dead, nothing wraps.
pub fn count_live_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    let (x, y) = (x as i64, y as i64);
    OFFSETS
        .iter()
        .filter(|(dx, dy)| grid.cell(x + dx, y + dy).is_alive())
        .count() as u8
}
