use crate::api::address::{Address, Coordinate};
use crate::core::constants::TOTAL_CELLS;
use crate::core::grid::{cell_center, cell_index};
use crate::core::projection::{from_lambert93, to_lambert93};
use crate::core::shuffle::{shuffle, unshuffle};
use crate::util::error::Q3mError;

/// Maps a grid cell index to its address.
pub(crate) fn cell_to_address(idx: u64) -> Result<Address, Q3mError> {
    if idx >= TOTAL_CELLS {
        return Err(Q3mError::InvalidCell(idx));
    }
    Address::from_index(shuffle(idx)?)
}

/// Maps an address back to its grid cell index.
///
/// Word triples whose shuffled index is at or above `TOTAL_CELLS` fill the
/// unused part of the `W^3` address space and are rejected.
pub(crate) fn address_to_cell(address: &Address) -> Result<u64, Q3mError> {
    let shuffled = address.to_index()?;
    if shuffled >= TOTAL_CELLS {
        return Err(Q3mError::InvalidCell(shuffled));
    }
    let idx = unshuffle(shuffled)?;
    if idx >= TOTAL_CELLS {
        return Err(Q3mError::InvalidCell(idx));
    }
    Ok(idx)
}

/// Encodes WGS84 coordinates (degrees) as a three-word address.
///
/// # Example
/// ```
/// use q3m_rs::{decode, encode};
///
/// # fn main() -> Result<(), q3m_rs::Q3mError> {
/// let addr = encode(48.8584, 2.2945)?;
/// let coord = decode(&addr.to_string())?;
///
/// assert!((coord.lat - 48.8584).abs() < 0.00002);
/// assert!((coord.lon - 2.2945).abs() < 0.00002);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`Q3mError::OutOfRegion`] - the point projects outside the grid
pub fn encode(lat: f64, lon: f64) -> Result<Address, Q3mError> {
    let (e, n) = to_lambert93(lat, lon);
    let idx = cell_index(e, n).ok_or(Q3mError::OutOfRegion { lat, lon })?;
    cell_to_address(idx)
}

/// Encodes a Lambert93 easting/northing (metres) as a three-word address.
pub fn encode_lambert93(e: f64, n: f64) -> Result<Address, Q3mError> {
    let idx = cell_index(e, n).ok_or_else(|| {
        let (lat, lon) = from_lambert93(e, n);
        Q3mError::OutOfRegion { lat, lon }
    })?;
    cell_to_address(idx)
}

/// Decodes a `w1.w2.w3` address to the WGS84 centre of its 1m cell.
///
/// # Errors
///
/// - [`Q3mError::BadFormat`] - not exactly three non-empty words
/// - [`Q3mError::UnknownWord`] - a word is not in the dictionary
/// - [`Q3mError::InvalidCell`] - the words address no cell of the grid
pub fn decode(address: &str) -> Result<Coordinate, Q3mError> {
    let (e, n) = decode_lambert93(address)?;
    let (lat, lon) = from_lambert93(e, n);
    Ok(Coordinate { lat, lon })
}

/// Decodes a `w1.w2.w3` address to the Lambert93 centre of its 1m cell.
pub fn decode_lambert93(address: &str) -> Result<(f64, f64), Q3mError> {
    let parsed: Address = address.parse()?;
    let idx = address_to_cell(&parsed)?;
    Ok(cell_center(idx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::W;

    const PLACES: [(&str, f64, f64); 6] = [
        ("Tour Eiffel", 48.8584, 2.2945),
        ("Notre-Dame", 48.8530, 2.3499),
        ("Marseille Vieux-Port", 43.2951, 5.3743),
        ("Mont Saint-Michel", 48.6361, -1.5115),
        ("Bastia", 42.6970, 9.4503),
        ("Strasbourg Cathedrale", 48.5819, 7.7510),
    ];

    #[test]
    fn test_encode_decode_known_places() -> Result<(), Q3mError> {
        for (name, lat, lon) in PLACES {
            let addr = encode(lat, lon)?;
            let coord = decode(&addr.to_string())?;

            assert!(
                (coord.lat - lat).abs() < 0.00002 && (coord.lon - lon).abs() < 0.00002,
                "{}: ({}, {}) -> {} -> ({}, {})",
                name,
                lat,
                lon,
                addr,
                coord.lat,
                coord.lon
            );
        }
        Ok(())
    }

    #[test]
    fn test_tour_eiffel_address_is_stable() -> Result<(), Q3mError> {
        let addr = encode(48.8584, 2.2945)?;
        assert_eq!(addr.to_string(), "showy.unasked.swacked");
        Ok(())
    }

    #[test]
    fn test_decode_returns_cell_center() -> Result<(), Q3mError> {
        let addr = encode_lambert93(652469.02, 6862035.26)?;
        let (e, n) = decode_lambert93(&addr.to_string())?;

        assert_eq!((e, n), (652469.5, 6862035.5));
        Ok(())
    }

    #[test]
    fn test_decode_is_case_insensitive() -> Result<(), Q3mError> {
        let addr = encode(48.8584, 2.2945)?;
        let lower = decode(&addr.to_string())?;
        let upper = decode(&addr.to_string().to_uppercase())?;

        assert_eq!(lower, upper);
        Ok(())
    }

    #[test]
    fn test_adjacent_points_differ() -> Result<(), Q3mError> {
        let a1 = encode(48.8584, 2.2945)?;
        let a2 = encode(48.8585, 2.2945)?;
        assert_ne!(a1, a2);
        Ok(())
    }

    #[test]
    fn test_decode_bad_format() {
        assert!(matches!(decode("one.two"), Err(Q3mError::BadFormat(_))));
    }

    #[test]
    fn test_decode_unknown_word() {
        assert_eq!(
            decode("xyzzy.hello.world"),
            Err(Q3mError::UnknownWord("xyzzy".to_string()))
        );
    }

    #[test]
    fn test_encode_out_of_region() {
        assert_eq!(
            encode(0.0, 0.0),
            Err(Q3mError::OutOfRegion { lat: 0.0, lon: 0.0 })
        );
    }

    #[test]
    fn test_encode_lambert93_out_of_region() {
        assert!(matches!(
            encode_lambert93(99_999.0, 6_500_000.0),
            Err(Q3mError::OutOfRegion { .. })
        ));
    }

    #[test]
    fn test_padding_address_is_invalid_cell() -> Result<(), Q3mError> {
        for shuffled in [TOTAL_CELLS, W * W * W - 1] {
            let addr = Address::from_index(shuffled)?;
            assert_eq!(
                decode(&addr.to_string()),
                Err(Q3mError::InvalidCell(shuffled))
            );
        }
        Ok(())
    }

    #[test]
    fn test_cell_to_address_rejects_out_of_range() {
        assert_eq!(
            cell_to_address(TOTAL_CELLS),
            Err(Q3mError::InvalidCell(TOTAL_CELLS))
        );
    }

    #[test]
    fn test_cell_address_roundtrip() -> Result<(), Q3mError> {
        for idx in [0, 1, 934_112_198_237, TOTAL_CELLS - 1] {
            let addr = cell_to_address(idx)?;
            assert_eq!(address_to_cell(&addr)?, idx);
        }
        Ok(())
    }
}
