use crate::core::constants::{EMAX, EMIN, GRID_WIDTH, NMAX, NMIN};
use crate::util::coord::Position;
use crate::util::error::Q3mError;
use geo_types::Point;

/// Returns the 1m cell index containing the Lambert93 point `(e, n)`.
///
/// Cells are numbered row-major from the south-west corner. Returns `None`
/// outside `[EMIN, EMAX) x [NMIN, NMAX)`.
pub fn cell_index(e: f64, n: f64) -> Option<u64> {
    // Negated comparisons also reject NaN.
    if !(EMIN..EMAX).contains(&e) || !(NMIN..NMAX).contains(&n) {
        return None;
    }
    let x = (e - EMIN).floor() as u64;
    let y = (n - NMIN).floor() as u64;
    Some(y * GRID_WIDTH + x)
}

/// Returns the Lambert93 centre of cell `idx` (+0.5m on both axes).
///
/// `idx` must be below `TOTAL_CELLS`.
pub fn cell_center(idx: u64) -> (f64, f64) {
    let x = idx % GRID_WIDTH;
    let y = idx / GRID_WIDTH;
    (EMIN + x as f64 + 0.5, NMIN + y as f64 + 0.5)
}

/// Converts a Lambert93 position to its cell index.
///
/// The position is reported back as `OutOfRegion` (in planar units) when it
/// falls outside the grid.
pub fn point_to_cell<C: Position>(coord: &C) -> Result<u64, Q3mError> {
    cell_index(coord.x(), coord.y()).ok_or(Q3mError::OutOfRegion {
        lat: coord.y(),
        lon: coord.x(),
    })
}

/// Returns the centre point of cell `idx` in Lambert93 coordinates.
pub fn cell_to_point(idx: u64) -> Point<f64> {
    let (e, n) = cell_center(idx);
    Point::new(e, n)
}
