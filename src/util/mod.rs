pub mod coord;
pub mod error;

pub use coord::{Position, lambert93_to_wgs84, wgs84_to_lambert93};
pub use error::Q3mError;
