use crate::api::cell::Cell;
use crate::geom::{geometry_to_points, parse_geometry};
use crate::util::error::Q3mError;
use geo_types::{Point, Polygon};
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// For the type of location source in the file
enum SourceIndices {
    Geometry(usize),
    Coordinates { x_idx: usize, y_idx: usize },
}

/// Coordinate reference system for input location data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Crs {
    /// WGS84 (EPSG:4326) - longitude/latitude coordinates
    #[default]
    Wgs84,
    /// Lambert93 (EPSG:2154) - easting/northing coordinates
    Lambert93,
}

/// Output format for cell footprint geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POLYGON((...))")
    Wkt,
    /// GeoJSON format
    GeoJson,
}

/// Specifies how to extract location data from CSV rows.
#[derive(Debug, Clone)]
pub enum CoordinateSource {
    /// A single column containing WKT or GeoJSON geometry
    GeometryColumn(String),
    /// Separate X and Y coordinate columns (e.g., Longitude/Latitude or Easting/Northing)
    CoordinateColumns { x_column: String, y_column: String },
}

/// Configuration for CSV to address conversion.
#[derive(Debug, Clone)]
pub struct CsvAddressConfig {
    pub source: CoordinateSource,
    pub exclude_columns: Vec<String>,
    pub crs: Crs,
    pub include_cell_geometry: Option<GeometryFormat>,
    pub skip_invalid: bool,
}

impl CsvAddressConfig {
    /// Create config for a CSV with a geometry column (WKT or GeoJSON).
    ///
    /// # Example
    /// ```
    /// use q3m_rs::CsvAddressConfig;
    ///
    /// let config = CsvAddressConfig::new("geometry");
    /// ```
    pub fn new(geometry_column: impl Into<String>) -> Self {
        Self {
            source: CoordinateSource::GeometryColumn(geometry_column.into()),
            exclude_columns: Vec::new(),
            crs: Crs::default(),
            include_cell_geometry: None,
            skip_invalid: false,
        }
    }

    /// Create config for a CSV with separate X/Y coordinate columns.
    ///
    /// # Example
    /// ```
    /// use q3m_rs::{CsvAddressConfig, Crs};
    ///
    /// // For WGS84 coordinates (Longitude/Latitude)
    /// let config = CsvAddressConfig::from_coords("Longitude", "Latitude");
    ///
    /// // For Lambert93 coordinates (Easting/Northing)
    /// let config = CsvAddressConfig::from_coords("E", "N").crs(Crs::Lambert93);
    /// ```
    pub fn from_coords(x_column: impl Into<String>, y_column: impl Into<String>) -> Self {
        Self {
            source: CoordinateSource::CoordinateColumns {
                x_column: x_column.into(),
                y_column: y_column.into(),
            },
            exclude_columns: Vec::new(),
            crs: Crs::default(),
            include_cell_geometry: None,
            skip_invalid: false,
        }
    }

    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    pub fn crs(mut self, crs: Crs) -> Self {
        self.crs = crs;
        self
    }

    /// Include the 1m cell footprint in output, in the input CRS.
    pub fn with_cell_geometry(mut self, format: GeometryFormat) -> Self {
        self.include_cell_geometry = Some(format);
        self
    }

    /// Write rows that cannot be encoded with an empty address instead of failing.
    pub fn skip_invalid(mut self, skip: bool) -> Self {
        self.skip_invalid = skip;
        self
    }
}

/// Configuration for decoding an address column back to coordinates.
#[derive(Debug, Clone)]
pub struct CsvDecodeConfig {
    pub address_column: String,
    pub include_lambert93: bool,
    pub skip_invalid: bool,
}

impl CsvDecodeConfig {
    pub fn new(address_column: impl Into<String>) -> Self {
        Self {
            address_column: address_column.into(),
            include_lambert93: false,
            skip_invalid: false,
        }
    }

    /// Also write the Lambert93 cell centre as `e`, `n`.
    pub fn with_lambert93(mut self) -> Self {
        self.include_lambert93 = true;
        self
    }

    pub fn skip_invalid(mut self, skip: bool) -> Self {
        self.skip_invalid = skip;
        self
    }
}

pub trait CsvToAddress {
    fn to_address_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvAddressConfig,
    ) -> Result<(), Q3mError>;
}

impl<P: AsRef<Path>> CsvToAddress for P {
    fn to_address_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvAddressConfig,
    ) -> Result<(), Q3mError> {
        csv_to_address_csv(self, output_path, config)
    }
}

fn polygon_to_wkt(polygon: &Polygon<f64>) -> String {
    use wkt::ToWkt;
    polygon.wkt_string()
}

fn polygon_to_geojson(polygon: &Polygon<f64>) -> String {
    let geom = geojson::Geometry::from(polygon);
    geom.to_string()
}

fn point_to_cell(pt: &Point<f64>, crs: Crs) -> Result<Cell, Q3mError> {
    match crs {
        Crs::Wgs84 => Cell::from_wgs84(pt),
        Crs::Lambert93 => Cell::from_lambert93(pt),
    }
}

fn cell_geometry(cell: &Cell, crs: Crs, format: GeometryFormat) -> String {
    let polygon = match crs {
        Crs::Wgs84 => cell.to_wgs84_polygon(),
        Crs::Lambert93 => cell.to_polygon(),
    };
    match format {
        GeometryFormat::Wkt => polygon_to_wkt(&polygon),
        GeometryFormat::GeoJson => polygon_to_geojson(&polygon),
    }
}

fn column_index(headers: &csv::StringRecord, name: &str, kind: &str) -> Result<usize, Q3mError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| Q3mError::CsvError(format!("{} column '{}' not found", kind, name)))
}

fn parse_field(record: &csv::StringRecord, idx: usize, kind: &str) -> Result<f64, Q3mError> {
    let raw = record
        .get(idx)
        .ok_or_else(|| Q3mError::CsvError(format!("Missing {} column at index {}", kind, idx)))?
        .trim();
    raw.parse()
        .map_err(|_| Q3mError::CsvError(format!("Invalid {} coordinate: '{}'", kind, raw)))
}

// ============================================================================
// CSV Conversion
// ============================================================================

/// Converts a CSV file with geometry or coordinate columns to a CSV file with addresses.
///
/// Streams output to minimize memory usage for large files. The output starts
/// with an `address` column (and `cell_geometry` when requested), followed by
/// every input column that is neither a source column nor excluded.
///
/// # Example with geometry column (WKT or GeoJSON)
///
/// ```no_run
/// use q3m_rs::{csv_to_address_csv, CsvAddressConfig, Crs};
///
/// let config = CsvAddressConfig::new("geometry")
///     .exclude(vec!["comment".into()])
///     .crs(Crs::Wgs84);
///
/// csv_to_address_csv("input.csv", "output.csv", &config).unwrap();
/// ```
///
/// # Example with coordinate columns
///
/// ```no_run
/// use q3m_rs::{csv_to_address_csv, CsvAddressConfig, Crs};
///
/// let config = CsvAddressConfig::from_coords("E", "N").crs(Crs::Lambert93);
///
/// csv_to_address_csv("bornes.csv", "output.csv", &config).unwrap();
/// ```
#[instrument(skip_all, fields(input = %csv_path.as_ref().display()))]
pub fn csv_to_address_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvAddressConfig,
) -> Result<(), Q3mError> {
    let file = File::open(csv_path.as_ref()).map_err(|e| Q3mError::CsvError(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| Q3mError::CsvError(e.to_string()))?
        .clone();

    // Determine which columns to exclude based on source type
    let (source_indices, mut exclude_indices) = match &config.source {
        CoordinateSource::GeometryColumn(col) => {
            let idx = column_index(&headers, col, "Geometry")?;
            (SourceIndices::Geometry(idx), HashSet::from([idx]))
        }
        CoordinateSource::CoordinateColumns { x_column, y_column } => {
            let x_idx = column_index(&headers, x_column, "X")?;
            let y_idx = column_index(&headers, y_column, "Y")?;
            (
                SourceIndices::Coordinates { x_idx, y_idx },
                HashSet::from([x_idx, y_idx]),
            )
        }
    };

    // Add user-specified exclusions
    for col_name in &config.exclude_columns {
        if let Some(idx) = headers.iter().position(|h| h == col_name) {
            exclude_indices.insert(idx);
        }
    }
    debug!(
        crs = ?config.crs,
        excluded = exclude_indices.len(),
        "resolved CSV columns"
    );

    let out_file =
        File::create(output_path.as_ref()).map_err(|e| Q3mError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);

    // Write header row
    let mut header_row: Vec<&str> = vec!["address"];
    if config.include_cell_geometry.is_some() {
        header_row.push("cell_geometry");
    }
    for (i, h) in headers.iter().enumerate() {
        if !exclude_indices.contains(&i) {
            header_row.push(h);
        }
    }
    writer
        .write_record(&header_row)
        .map_err(|e| Q3mError::CsvError(e.to_string()))?;

    let mut rows_in = 0usize;
    let mut rows_out = 0usize;
    let mut skipped = 0usize;

    for result in reader.records() {
        let record = result.map_err(|e| Q3mError::CsvError(e.to_string()))?;
        rows_in += 1;

        let points = match &source_indices {
            SourceIndices::Geometry(idx) => {
                let geom_str = record.get(*idx).ok_or_else(|| {
                    Q3mError::CsvError(format!("Missing geometry column at index {}", idx))
                })?;
                geometry_to_points(parse_geometry(geom_str)?)
            }
            SourceIndices::Coordinates { x_idx, y_idx } => {
                let x = parse_field(&record, *x_idx, "X")?;
                let y = parse_field(&record, *y_idx, "Y")?;
                vec![Point::new(x, y)]
            }
        };

        for pt in points {
            let cell = match point_to_cell(&pt, config.crs) {
                Ok(cell) => Some(cell),
                Err(e) if config.skip_invalid => {
                    warn!(row = rows_in, error = %e, "row left without address");
                    skipped += 1;
                    None
                }
                Err(e) => return Err(e),
            };

            let mut row: Vec<String> = vec![
                cell.map(|c| c.address.to_string()).unwrap_or_default(),
            ];

            if let Some(format) = config.include_cell_geometry {
                row.push(
                    cell.map(|c| cell_geometry(&c, config.crs, format))
                        .unwrap_or_default(),
                );
            }

            for (i, field) in record.iter().enumerate() {
                if !exclude_indices.contains(&i) {
                    row.push(field.to_string());
                }
            }
            writer
                .write_record(&row)
                .map_err(|e| Q3mError::CsvError(e.to_string()))?;
            rows_out += 1;
        }
    }

    writer
        .flush()
        .map_err(|e| Q3mError::CsvError(e.to_string()))?;

    info!(rows_in, rows_out, skipped, "encoded CSV");
    Ok(())
}

/// Decodes an address column to `lat`, `lon` (and optionally `e`, `n`) columns.
///
/// The new columns are appended after every input column.
///
/// ```no_run
/// use q3m_rs::{csv_decode_addresses, CsvDecodeConfig};
///
/// let config = CsvDecodeConfig::new("address").with_lambert93();
/// csv_decode_addresses("addresses.csv", "decoded.csv", &config).unwrap();
/// ```
#[instrument(skip_all, fields(input = %csv_path.as_ref().display()))]
pub fn csv_decode_addresses(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvDecodeConfig,
) -> Result<(), Q3mError> {
    let file = File::open(csv_path.as_ref()).map_err(|e| Q3mError::CsvError(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| Q3mError::CsvError(e.to_string()))?
        .clone();
    let addr_idx = column_index(&headers, &config.address_column, "Address")?;

    let out_file =
        File::create(output_path.as_ref()).map_err(|e| Q3mError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);

    let mut header_row: Vec<&str> = headers.iter().collect();
    header_row.extend(["lat", "lon"]);
    if config.include_lambert93 {
        header_row.extend(["e", "n"]);
    }
    writer
        .write_record(&header_row)
        .map_err(|e| Q3mError::CsvError(e.to_string()))?;

    let mut rows = 0usize;
    let mut skipped = 0usize;

    for result in reader.records() {
        let record = result.map_err(|e| Q3mError::CsvError(e.to_string()))?;
        rows += 1;

        let raw = record.get(addr_idx).ok_or_else(|| {
            Q3mError::CsvError(format!("Missing address column at index {}", addr_idx))
        })?;

        let cell = match Cell::from_address(raw) {
            Ok(cell) => Some(cell),
            Err(e) if config.skip_invalid => {
                warn!(row = rows, error = %e, "address left undecoded");
                skipped += 1;
                None
            }
            Err(e) => return Err(e),
        };

        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        match cell {
            Some(cell) => {
                let coord = cell.to_wgs84();
                row.push(format!("{:.7}", coord.lat));
                row.push(format!("{:.7}", coord.lon));
                if config.include_lambert93 {
                    row.push(format!("{:.1}", cell.easting()));
                    row.push(format!("{:.1}", cell.northing()));
                }
            }
            None => {
                let blanks = if config.include_lambert93 { 4 } else { 2 };
                row.extend(std::iter::repeat_n(String::new(), blanks));
            }
        }
        writer
            .write_record(&row)
            .map_err(|e| Q3mError::CsvError(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| Q3mError::CsvError(e.to_string()))?;

    info!(rows, skipped, "decoded CSV");
    Ok(())
}
