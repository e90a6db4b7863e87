use crate::util::error::Q3mError;
use geo::Centroid;
use geo_types::{Geometry, Point};
use geojson::GeoJson;
use std::str::FromStr;
use wkt::Wkt;

/// Parses a geometry string, auto-detecting WKT or GeoJSON format.
///
/// GeoJSON is detected by a leading `{`, everything else is tried as WKT.
pub fn parse_geometry(s: &str) -> Result<Geometry<f64>, Q3mError> {
    let trimmed = s.trim();
    if trimmed.starts_with('{') {
        parse_geojson(trimmed)
    } else {
        parse_wkt(trimmed)
    }
}

/// Parses a GeoJSON string into a `geo_types::Geometry`.
pub fn parse_geojson(s: &str) -> Result<Geometry<f64>, Q3mError> {
    let geojson: GeoJson = s
        .parse()
        .map_err(|e: geojson::Error| Q3mError::GeometryParseError(e.to_string()))?;

    match geojson {
        GeoJson::Geometry(geom) => {
            Geometry::try_from(geom).map_err(|e| Q3mError::GeometryParseError(e.to_string()))
        }
        GeoJson::Feature(feat) => feat
            .geometry
            .ok_or_else(|| Q3mError::GeometryParseError("Feature has no geometry".to_string()))
            .and_then(|g| {
                Geometry::try_from(g).map_err(|e| Q3mError::GeometryParseError(e.to_string()))
            }),
        GeoJson::FeatureCollection(_) => Err(Q3mError::GeometryParseError(
            "FeatureCollection not supported, use individual geometries".to_string(),
        )),
    }
}

/// Parses a WKT string into a `geo_types::Geometry`.
pub fn parse_wkt(s: &str) -> Result<Geometry<f64>, Q3mError> {
    let wkt: Wkt<f64> =
        Wkt::from_str(s).map_err(|e| Q3mError::GeometryParseError(e.to_string()))?;

    wkt.try_into()
        .map_err(|_| Q3mError::GeometryParseError("Failed to convert WKT to geometry".to_string()))
}

/// Reduces a geometry to the points that get an address.
///
/// Points and multi-points keep every point; lines, polygons and their multi
/// forms collapse to their centroid; collections recurse. Empty geometries
/// yield nothing.
pub fn geometry_to_points(geom: Geometry<f64>) -> Vec<Point<f64>> {
    match geom {
        Geometry::Point(pt) => vec![pt],
        Geometry::MultiPoint(mp) => mp.0,
        Geometry::GeometryCollection(gc) => {
            gc.0.into_iter().flat_map(geometry_to_points).collect()
        }
        other => other.centroid().into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_geojson_point() -> Result<(), Q3mError> {
        let json = r#"{"type":"Point","coordinates":[2.2945,48.8584]}"#;
        let geom = parse_geometry(json)?;
        match geom {
            Geometry::Point(pt) => {
                assert!((pt.x() - 2.2945).abs() < 0.001);
                assert!((pt.y() - 48.8584).abs() < 0.001);
            }
            _ => panic!("Expected Point"),
        }
        Ok(())
    }

    #[test]
    fn test_parse_geojson_feature() -> Result<(), Q3mError> {
        let json = r#"{"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[5.37,43.29]}}"#;
        let geom = parse_geometry(json)?;
        assert!(matches!(geom, Geometry::Point(_)));
        Ok(())
    }

    #[test]
    fn test_parse_geojson_feature_collection_rejected() {
        let json = r#"{"type":"FeatureCollection","features":[]}"#;
        assert!(matches!(
            parse_geometry(json),
            Err(Q3mError::GeometryParseError(_))
        ));
    }

    #[test]
    fn test_parse_wkt_point() -> Result<(), Q3mError> {
        let geom = parse_geometry("POINT(2.2945 48.8584)")?;
        match geom {
            Geometry::Point(pt) => {
                assert!((pt.x() - 2.2945).abs() < 0.001);
                assert!((pt.y() - 48.8584).abs() < 0.001);
            }
            _ => panic!("Expected Point"),
        }
        Ok(())
    }

    #[test]
    fn test_parse_wkt_invalid() {
        assert!(parse_geometry("POINT(oops)").is_err());
    }

    #[test]
    fn test_polygon_reduces_to_centroid() -> Result<(), Q3mError> {
        let geom = parse_geometry("POLYGON((2 48, 4 48, 4 50, 2 50, 2 48))")?;
        let points = geometry_to_points(geom);

        assert_eq!(points.len(), 1);
        assert!((points[0].x() - 3.0).abs() < 1e-9);
        assert!((points[0].y() - 49.0).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_multipoint_keeps_every_point() -> Result<(), Q3mError> {
        let geom = parse_geometry("MULTIPOINT((2 48), (3 47), (4 46))")?;
        assert_eq!(geometry_to_points(geom).len(), 3);
        Ok(())
    }

    #[test]
    fn test_collection_recurses() -> Result<(), Q3mError> {
        let geom = parse_geometry(
            "GEOMETRYCOLLECTION(POINT(2 48), LINESTRING(2 48, 4 48))",
        )?;
        let points = geometry_to_points(geom);

        assert_eq!(points.len(), 2);
        assert!((points[1].x() - 3.0).abs() < 1e-9);
        Ok(())
    }
}
