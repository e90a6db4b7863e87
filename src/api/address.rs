use crate::core::constants::{ADDRESS_SEPARATOR, W};
use crate::core::dictionary::dictionary;
use crate::util::coord::Position;
use crate::util::error::Q3mError;
use geo_types::Point;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A WGS84 position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Returns the coordinate as a lon/lat point.
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

impl Position for Coordinate {
    fn x(&self) -> f64 {
        self.lon
    }
    fn y(&self) -> f64 {
        self.lat
    }
}

/// A three-word address.
///
/// Words are borrowed from the process-wide dictionary, so an `Address` is
/// `Copy` and never allocates. The canonical text form is `w1.w2.w3` in
/// lowercase; parsing ignores case and surrounding whitespace.
///
/// # Example
/// ```
/// use q3m_rs::Address;
///
/// # fn main() -> Result<(), q3m_rs::Q3mError> {
/// let addr = Address::from_index(0)?;
/// let parsed: Address = addr.to_string().to_uppercase().parse()?;
/// assert_eq!(addr, parsed);
/// assert_eq!(parsed.to_index()?, 0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    pub w1: &'static str,
    pub w2: &'static str,
    pub w3: &'static str,
}

impl Address {
    /// Splits a shuffled index into three base-`W` digits, most significant first.
    pub fn from_index(shuffled: u64) -> Result<Self, Q3mError> {
        if shuffled >= W * W * W {
            return Err(Q3mError::InvalidCell(shuffled));
        }
        let dict = dictionary();
        let word = |digit: u64| {
            dict.word_at(digit as usize)
                .ok_or(Q3mError::InvalidCell(shuffled))
        };

        Ok(Self {
            w1: word(shuffled / (W * W))?,
            w2: word((shuffled / W) % W)?,
            w3: word(shuffled % W)?,
        })
    }

    /// Recomposes the shuffled index `i1*W^2 + i2*W + i3`.
    pub fn to_index(&self) -> Result<u64, Q3mError> {
        let dict = dictionary();
        let digit = |word: &str| {
            dict.index_of(word)
                .map(|i| i as u64)
                .ok_or_else(|| Q3mError::UnknownWord(word.to_string()))
        };

        Ok(digit(self.w1)? * W * W + digit(self.w2)? * W + digit(self.w3)?)
    }

    pub fn words(&self) -> [&'static str; 3] {
        [self.w1, self.w2, self.w3]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            self.w1,
            self.w2,
            self.w3,
            sep = ADDRESS_SEPARATOR
        )
    }
}

impl FromStr for Address {
    type Err = Q3mError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(ADDRESS_SEPARATOR).collect();
        if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
            return Err(Q3mError::BadFormat(s.to_string()));
        }

        let dict = dictionary();
        let mut words = [""; 3];
        for (slot, part) in words.iter_mut().zip(&parts) {
            let idx = dict
                .index_of(part)
                .ok_or_else(|| Q3mError::UnknownWord(part.to_string()))?;
            *slot = dict
                .word_at(idx)
                .ok_or_else(|| Q3mError::UnknownWord(part.to_string()))?;
        }

        Ok(Self {
            w1: words[0],
            w2: words[1],
            w3: words[2],
        })
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Address", 4)?;
        state.serialize_field("address", &self.to_string())?;
        state.serialize_field("w1", self.w1)?;
        state.serialize_field("w2", self.w2)?;
        state.serialize_field("w3", self.w3)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::TOTAL_CELLS;

    #[test]
    fn test_from_index_digits() -> Result<(), Q3mError> {
        let dict = dictionary();
        let addr = Address::from_index(7750 * W * W + 9132 * W + 8511)?;

        assert_eq!(addr.w1, dict.word_at(7750).unwrap());
        assert_eq!(addr.w2, dict.word_at(9132).unwrap());
        assert_eq!(addr.w3, dict.word_at(8511).unwrap());
        Ok(())
    }

    #[test]
    fn test_index_roundtrip_edges() -> Result<(), Q3mError> {
        for idx in [0, 1, W - 1, W, W * W, TOTAL_CELLS - 1, W * W * W - 1] {
            assert_eq!(Address::from_index(idx)?.to_index()?, idx);
        }
        Ok(())
    }

    #[test]
    fn test_from_index_beyond_capacity() {
        assert_eq!(
            Address::from_index(W * W * W),
            Err(Q3mError::InvalidCell(W * W * W))
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() -> Result<(), Q3mError> {
        let addr = Address::from_index(123_456_789)?;
        let shouted = format!("  {}  ", addr.to_string().to_uppercase());

        assert_eq!(shouted.parse::<Address>()?, addr);
        Ok(())
    }

    #[test]
    fn test_parse_bad_format() {
        for bad in ["one.two", "a.b.c.d", "", "..", "showy..swacked"] {
            assert!(
                matches!(bad.parse::<Address>(), Err(Q3mError::BadFormat(_))),
                "{:?}",
                bad
            );
        }
    }

    #[test]
    fn test_parse_unknown_word_names_token() {
        let result = "xyzzy.hello.world".parse::<Address>();
        assert_eq!(result, Err(Q3mError::UnknownWord("xyzzy".to_string())));
    }

    #[test]
    fn test_to_index_rejects_foreign_word() {
        let addr = Address {
            w1: "xyzzy",
            w2: "xyzzy",
            w3: "xyzzy",
        };
        assert!(matches!(addr.to_index(), Err(Q3mError::UnknownWord(_))));
    }

    #[test]
    fn test_serialize_address() -> Result<(), Q3mError> {
        let addr = Address::from_index(0)?;
        let json = serde_json::to_value(addr).map_err(|e| Q3mError::IoError(e.to_string()))?;

        assert_eq!(json["address"], addr.to_string());
        assert_eq!(json["w1"], addr.w1);
        assert_eq!(json["w3"], addr.w3);
        Ok(())
    }

    #[test]
    fn test_coordinate_position_is_lon_lat() {
        let c = Coordinate::new(48.8584, 2.2945);
        assert_eq!(Position::x(&c), 2.2945);
        assert_eq!(Position::y(&c), 48.8584);
        assert_eq!(c.to_point(), Point::new(2.2945, 48.8584));
    }
}
