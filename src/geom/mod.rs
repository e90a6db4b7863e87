mod parse;

pub use parse::{geometry_to_points, parse_geojson, parse_geometry, parse_wkt};
