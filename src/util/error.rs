/// Error type for q3m-rs operations.
#[derive(Debug, PartialEq)]
pub enum Q3mError {
    /// The coordinate projects outside the Lambert93 grid.
    OutOfRegion { lat: f64, lon: f64 },
    /// The address does not split into exactly three words.
    BadFormat(String),
    /// A word of the address is not in the dictionary.
    UnknownWord(String),
    /// The three words address the unused padding above `TOTAL_CELLS`.
    InvalidCell(u64),
    /// The embedded word list does not hold exactly `DICT_SIZE` words.
    DictionaryMismatch { expected: usize, found: usize },
    /// The embedded word list is malformed (length, charset or ordering).
    InvalidDictionary(String),
    /// The permutation cycle walk did not land back in the grid domain.
    CycleWalkExceeded(u64),
    /// File I/O or serialization error.
    IoError(String),
    /// CSV parsing or reading error.
    CsvError(String),
    /// Failed to parse geometry from string (GeoJSON or WKT).
    GeometryParseError(String),
}

impl std::fmt::Display for Q3mError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Q3mError::OutOfRegion { lat, lon } => write!(
                f,
                "Coordinates ({}, {}) are outside the Lambert93 grid",
                lat, lon
            ),
            Q3mError::BadFormat(addr) => {
                write!(f, "Invalid address format {:?} (expected w1.w2.w3)", addr)
            }
            Q3mError::UnknownWord(word) => write!(f, "Unknown word: {:?}", word),
            Q3mError::InvalidCell(idx) => {
                write!(f, "Address maps to invalid cell index: {}", idx)
            }
            Q3mError::DictionaryMismatch { expected, found } => write!(
                f,
                "Dictionary has {} words, expected {}",
                found, expected
            ),
            Q3mError::InvalidDictionary(msg) => write!(f, "Invalid dictionary: {}", msg),
            Q3mError::CycleWalkExceeded(idx) => {
                write!(f, "Cycle walk did not terminate for index {}", idx)
            }
            Q3mError::IoError(msg) => write!(f, "IO error: {}", msg),
            Q3mError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            Q3mError::GeometryParseError(msg) => write!(f, "Geometry parse error: {}", msg),
        }
    }
}

impl std::error::Error for Q3mError {}
