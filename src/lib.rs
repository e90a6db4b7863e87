//! # q3m-rs
//!
//! Three-word addresses for every square metre of metropolitan France.
//!
//! Positions are projected to Lambert93, snapped to a 1m grid, passed through
//! a keyed permutation so neighbouring cells get unrelated addresses, and
//! spelled with three words from a fixed dictionary.
//!
//! There are currently three main entry points.
//!
//! ### 1. `encode` / `decode` - Single Addresses
//!
//! ```
//! use q3m_rs::{decode, encode};
//!
//! # fn main() -> Result<(), q3m_rs::Q3mError> {
//! let addr = encode(48.8584, 2.2945)?;
//! println!("{}", addr);
//!
//! let coord = decode(&addr.to_string())?;
//! assert!((coord.lat - 48.8584).abs() < 0.00002);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `Cell` and batches
//!
//! ```
//! use q3m_rs::{Cell, Coordinate, CoordinatesToAddresses};
//!
//! # fn main() -> Result<(), q3m_rs::Q3mError> {
//! let cell = Cell::from_lambert93(&(652469.0, 6862035.0))?;
//! let polygon = cell.to_polygon();
//! assert_eq!(polygon.exterior().coords().count(), 5);
//!
//! let coords = vec![Coordinate::new(45.7640, 4.8357), Coordinate::new(43.6047, 1.4442)];
//! for addr in coords.to_addresses() {
//!     println!("{}", addr?);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `CsvToAddress` - CSV File Conversion
//!
//! ```no_run
//! use q3m_rs::{CsvAddressConfig, CsvToAddress, Crs, GeometryFormat};
//!
//! let config = CsvAddressConfig::new("geometry")
//!     .exclude(vec!["Geo Point".into()])
//!     .crs(Crs::Wgs84)
//!     .with_cell_geometry(GeometryFormat::Wkt);
//!
//! "input.csv".to_address_csv("output.csv", &config).unwrap();
//! ```
//!

pub mod api;
pub mod core;
pub mod geom;
pub mod util;

pub use api::{
    Address, AddressesToCoordinates, Cell, Coordinate, CoordinateSource, CoordinatesToAddresses,
    Crs, CsvAddressConfig, CsvDecodeConfig, CsvToAddress, GeometryFormat, GridInfo,
    csv_decode_addresses, csv_to_address_csv, decode, decode_lambert93, encode, encode_lambert93,
    grid_info,
};
pub use core::{
    ADDRESS_SEPARATOR, DICT_SIZE, Dictionary, EMAX, EMIN, FORMAT_VERSION, GRID_HEIGHT,
    GRID_WIDTH, NMAX, NMIN, TOTAL_CELLS, W, dictionary, from_lambert93, index_of, shuffle,
    to_lambert93, unshuffle, word_at,
};
pub use util::{Position, Q3mError};

pub use geo_types;
