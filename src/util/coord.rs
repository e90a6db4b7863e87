use crate::core::projection::{from_lambert93, to_lambert93};
use geo_types::Point;

/// Trait for types that can provide x/y coordinates.
///
/// Implemented for `(f64, f64)` tuples and `geo_types::Point<f64>`.
/// For geodetic input x is the longitude and y the latitude; for Lambert93
/// input x is the easting and y the northing.
pub trait Position {
    /// Returns the x-coordinate (easting or longitude).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (northing or latitude).
    fn y(&self) -> f64;
}

impl Position for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Position for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

/// Projects a WGS84 lon/lat position to a Lambert93 point (x = E, y = N).
pub fn wgs84_to_lambert93<C: Position>(coord: &C) -> Point<f64> {
    let (e, n) = to_lambert93(coord.y(), coord.x());
    Point::new(e, n)
}

/// Inverse of [`wgs84_to_lambert93`], returns a lon/lat point.
pub fn lambert93_to_wgs84<C: Position>(coord: &C) -> Point<f64> {
    let (lat, lon) = from_lambert93(coord.x(), coord.y());
    Point::new(lon, lat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wgs84_to_lambert93() {
        let l93 = wgs84_to_lambert93(&(2.3522, 48.8566));

        assert!((l93.x() - 652469.02).abs() < 1.0);
        assert!((l93.y() - 6862035.26).abs() < 1.0);
    }

    #[test]
    fn test_roundtrip() {
        let lon = 5.3698;
        let lat = 43.2965;

        let l93 = wgs84_to_lambert93(&(lon, lat));
        let back = lambert93_to_wgs84(&l93);

        assert!((lon - back.x()).abs() < 1e-8);
        assert!((lat - back.y()).abs() < 1e-8);
    }

    #[test]
    fn test_position_trait_tuple() {
        let tuple = (100.0, 200.0);
        assert_eq!(tuple.x(), 100.0);
        assert_eq!(tuple.y(), 200.0);
    }

    #[test]
    fn test_position_trait_point() {
        let point = Point::new(100.0, 200.0);
        assert_eq!(Position::x(&point), 100.0);
        assert_eq!(Position::y(&point), 200.0);
    }

    #[test]
    fn test_same_result_tuple_and_point() {
        let from_tuple = wgs84_to_lambert93(&(-4.4861, 48.3904));
        let from_point = wgs84_to_lambert93(&Point::new(-4.4861, 48.3904));

        assert_eq!(from_tuple, from_point);
    }
}
