use crate::core::projection::from_lambert93;
use geo_types::{Coord, LineString, Point, Polygon};

/// Half the side of a grid cell, in metres.
const HALF_CELL: f64 = 0.5;

/// Builds the 1m square footprint of a cell around its Lambert93 centre.
///
/// Vertices run counter-clockwise from the south-west corner, closed.
pub fn create_cell_square(center_x: f64, center_y: f64) -> Polygon<f64> {
    let offsets = [
        (-HALF_CELL, -HALF_CELL),
        (HALF_CELL, -HALF_CELL),
        (HALF_CELL, HALF_CELL),
        (-HALF_CELL, HALF_CELL),
    ];
    let mut coords: Vec<Coord<f64>> = offsets
        .iter()
        .map(|(dx, dy)| Coord {
            x: center_x + dx,
            y: center_y + dy,
        })
        .collect();
    coords.push(coords[0]);

    Polygon::new(LineString::from(coords), vec![])
}

pub fn create_cell_square_from_point(center: &Point<f64>) -> Polygon<f64> {
    create_cell_square(center.x(), center.y())
}

/// Reprojects a Lambert93 polygon exterior to WGS84 (x = lon, y = lat).
pub fn polygon_to_wgs84(polygon: &Polygon<f64>) -> Polygon<f64> {
    let coords: Vec<Coord<f64>> = polygon
        .exterior()
        .coords()
        .map(|c| {
            let (lat, lon) = from_lambert93(c.x, c.y);
            Coord { x: lon, y: lat }
        })
        .collect();

    Polygon::new(LineString::from(coords), vec![])
}
