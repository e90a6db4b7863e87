use crate::core::constants::{
    DICT_SIZE, EMAX, EMIN, FORMAT_VERSION, GRID_HEIGHT, GRID_WIDTH, NMAX, NMIN, TOTAL_CELLS,
};
use serde::Serialize;

/// Fixed parameters of the grid and address format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridInfo {
    pub projection: &'static str,
    pub emin: u64,
    pub emax: u64,
    pub nmin: u64,
    pub nmax: u64,
    pub grid_width: u64,
    pub grid_height: u64,
    pub total_cells: u64,
    pub dict_size: usize,
    pub precision: &'static str,
    pub format_version: u8,
}

/// Returns the grid and format parameters, e.g. for `info` style tooling.
///
/// # Example
/// ```
/// let info = q3m_rs::grid_info();
/// assert_eq!(info.total_cells, 1_230_500_000_000);
/// assert_eq!(info.dict_size, 10_800);
/// ```
pub fn grid_info() -> GridInfo {
    GridInfo {
        projection: "Lambert93/EPSG:2154",
        emin: EMIN as u64,
        emax: EMAX as u64,
        nmin: NMIN as u64,
        nmax: NMAX as u64,
        grid_width: GRID_WIDTH,
        grid_height: GRID_HEIGHT,
        total_cells: TOTAL_CELLS,
        dict_size: DICT_SIZE,
        precision: "1m x 1m",
        format_version: FORMAT_VERSION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_info_values() {
        let info = grid_info();
        assert_eq!(info.emin, 100_000);
        assert_eq!(info.emax, 1_250_000);
        assert_eq!(info.nmin, 6_050_000);
        assert_eq!(info.nmax, 7_120_000);
        assert_eq!(info.grid_width, info.emax - info.emin);
        assert_eq!(info.grid_height, info.nmax - info.nmin);
    }

    #[test]
    fn test_grid_info_json_keys() {
        let json = serde_json::to_value(grid_info()).unwrap();
        for key in ["projection", "total_cells", "dict_size", "format_version"] {
            assert!(json.get(key).is_some(), "missing key {}", key);
        }
        assert_eq!(json["projection"], "Lambert93/EPSG:2154");
    }
}
