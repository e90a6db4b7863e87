use crate::api::address::{Address, Coordinate};
use crate::api::cell::Cell;
use crate::api::codec::{decode, encode};
use crate::util::error::Q3mError;
use rayon::prelude::*;

/// Trait for encoding collections of [`Coordinate`]s in parallel.
///
/// Results keep the input order; one bad coordinate does not fail the batch.
pub trait CoordinatesToAddresses {
    /// Encodes every coordinate to its address.
    fn to_addresses(&self) -> Vec<Result<Address, Q3mError>>;
    /// Encodes every coordinate to its full [`Cell`].
    fn to_cells(&self) -> Vec<Result<Cell, Q3mError>>;
}

impl CoordinatesToAddresses for [Coordinate] {
    fn to_addresses(&self) -> Vec<Result<Address, Q3mError>> {
        self.par_iter().map(|c| encode(c.lat, c.lon)).collect()
    }

    fn to_cells(&self) -> Vec<Result<Cell, Q3mError>> {
        self.par_iter().map(|c| Cell::from_wgs84(c)).collect()
    }
}

/// Trait for decoding collections of address strings in parallel.
///
/// Implemented for slices of anything string-like (`&str`, `String`).
pub trait AddressesToCoordinates {
    /// Decodes every address to the WGS84 centre of its cell.
    fn to_coordinates(&self) -> Vec<Result<Coordinate, Q3mError>>;
}

impl<S: AsRef<str> + Sync> AddressesToCoordinates for [S] {
    fn to_coordinates(&self) -> Vec<Result<Coordinate, Q3mError>> {
        self.par_iter().map(|a| decode(a.as_ref())).collect()
    }
}
