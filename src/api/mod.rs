pub mod address;
pub mod address_csv;
pub mod batch;
pub mod cell;
pub mod codec;
pub mod info;

pub use address::{Address, Coordinate};
pub use address_csv::{
    CoordinateSource, Crs, CsvAddressConfig, CsvDecodeConfig, CsvToAddress, GeometryFormat,
    csv_decode_addresses, csv_to_address_csv,
};
pub use batch::{AddressesToCoordinates, CoordinatesToAddresses};
pub use cell::Cell;
pub use codec::{decode, decode_lambert93, encode, encode_lambert93};
pub use info::{GridInfo, grid_info};
