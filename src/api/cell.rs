use crate::api::address::{Address, Coordinate};
use crate::api::codec::{address_to_cell, cell_to_address};
use crate::core::geometry::{create_cell_square, polygon_to_wgs84};
use crate::core::grid::{cell_to_point, point_to_cell};
use crate::core::projection::from_lambert93;
use crate::util::coord::{Position, wgs84_to_lambert93};
use crate::util::error::Q3mError;
use geo_types::{Point, Polygon};

/// A single 1m cell of the Lambert93 grid together with its address.
///
/// # Example
///
/// ```
/// use q3m_rs::Cell;
///
/// # fn main() -> Result<(), q3m_rs::Q3mError> {
/// // From WGS84 lon/lat
/// let cell = Cell::from_wgs84(&(2.2945, 48.8584))?;
/// println!("{} at ({}, {})", cell.address, cell.easting(), cell.northing());
///
/// let restored = Cell::from_address(&cell.address.to_string())?;
/// assert_eq!(cell, restored);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Three-word address of this cell
    pub address: Address,
    /// Row-major cell index on the grid
    pub index: u64,
    /// Cell centre in Lambert93 coordinates (EPSG:2154)
    pub center: Point<f64>,
}

impl Cell {
    /// Create a Cell from its grid index.
    pub fn from_index(index: u64) -> Result<Self, Q3mError> {
        let address = cell_to_address(index)?;
        Ok(Self {
            address,
            index,
            center: cell_to_point(index),
        })
    }

    /// Create a Cell from Lambert93 easting/northing.
    pub fn from_lambert93(coord: &impl Position) -> Result<Self, Q3mError> {
        let index = point_to_cell(coord).map_err(|_| {
            let (lat, lon) = from_lambert93(coord.x(), coord.y());
            Q3mError::OutOfRegion { lat, lon }
        })?;
        Self::from_index(index)
    }

    /// Create a Cell from WGS84 lon/lat.
    pub fn from_wgs84(coord: &impl Position) -> Result<Self, Q3mError> {
        let l93 = wgs84_to_lambert93(coord);
        let index = point_to_cell(&l93).map_err(|_| Q3mError::OutOfRegion {
            lat: coord.y(),
            lon: coord.x(),
        })?;
        Self::from_index(index)
    }

    /// Create a Cell from a `w1.w2.w3` address.
    pub fn from_address(address: &str) -> Result<Self, Q3mError> {
        let address: Address = address.parse()?;
        let index = address_to_cell(&address)?;
        Ok(Self {
            address,
            index,
            center: cell_to_point(index),
        })
    }

    pub fn easting(&self) -> f64 {
        self.center.x()
    }

    pub fn northing(&self) -> f64 {
        self.center.y()
    }

    /// Returns the WGS84 coordinate of the cell centre.
    pub fn to_wgs84(&self) -> Coordinate {
        let (lat, lon) = from_lambert93(self.easting(), self.northing());
        Coordinate { lat, lon }
    }

    /// Returns the 1m square footprint in Lambert93.
    pub fn to_polygon(&self) -> Polygon<f64> {
        create_cell_square(self.easting(), self.northing())
    }

    /// Returns the footprint reprojected to WGS84 (x = lon, y = lat).
    pub fn to_wgs84_polygon(&self) -> Polygon<f64> {
        polygon_to_wgs84(&self.to_polygon())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::codec::{decode, encode};
    use crate::core::constants::TOTAL_CELLS;

    #[test]
    fn test_from_wgs84_tuple() -> Result<(), Q3mError> {
        let cell = Cell::from_wgs84(&(2.2945, 48.8584))?;

        assert_eq!(cell.index, 934_112_198_237);
        assert_eq!(cell.address, encode(48.8584, 2.2945)?);
        assert!((cell.easting() - 648237.5).abs() < 1e-9);
        assert!((cell.northing() - 6862271.5).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_from_wgs84_point() -> Result<(), Q3mError> {
        let from_tuple = Cell::from_wgs84(&(2.2945, 48.8584))?;
        let from_point = Cell::from_wgs84(&Point::new(2.2945, 48.8584))?;

        assert_eq!(from_tuple, from_point);
        Ok(())
    }

    #[test]
    fn test_from_wgs84_outside() {
        assert_eq!(
            Cell::from_wgs84(&(0.0, 0.0)),
            Err(Q3mError::OutOfRegion { lat: 0.0, lon: 0.0 })
        );
    }

    #[test]
    fn test_from_lambert93_same_cell_within_meter() -> Result<(), Q3mError> {
        let cell1 = Cell::from_lambert93(&(652469.02, 6862035.26))?;
        let cell2 = Cell::from_lambert93(&(652469.98, 6862035.01))?;
        let cell3 = Cell::from_lambert93(&(652470.01, 6862035.26))?;

        assert_eq!(cell1, cell2);
        assert_ne!(cell1.address, cell3.address);
        assert_eq!(cell3.index, cell1.index + 1);
        Ok(())
    }

    #[test]
    fn test_from_address_roundtrip() -> Result<(), Q3mError> {
        let cell = Cell::from_lambert93(&(892760.12, 6246890.67))?;
        let restored = Cell::from_address(&cell.address.to_string())?;

        assert_eq!(cell, restored);
        assert_eq!(restored.to_wgs84(), decode(&cell.address.to_string())?);
        Ok(())
    }

    #[test]
    fn test_from_index_out_of_range() {
        assert!(Cell::from_index(TOTAL_CELLS).is_err());
    }

    #[test]
    fn test_to_polygon_contains_center() -> Result<(), Q3mError> {
        let cell = Cell::from_index(0)?;
        let polygon = cell.to_polygon();
        let exterior = polygon.exterior();

        assert_eq!(exterior.coords().count(), 5);
        assert_eq!(exterior.0[0].x, 100_000.0);
        assert_eq!(exterior.0[0].y, 6_050_000.0);

        let wgs = cell.to_wgs84_polygon();
        assert_eq!(wgs.exterior().coords().count(), 5);
        Ok(())
    }
}
