//! geo-polyline
//!
//! Encoded polyline codec, path length and polyline merging.

pub mod error;
pub mod varint;
pub mod delta;
pub mod polyline;
pub mod traits;
pub mod haversine;
pub mod length;
pub mod merge;
pub mod value;

pub use error::{ErrorKind, PolylineError, Result};
pub use haversine::{EARTH_RADIUS_KM, Haversine, haversine, haversine_distance};
pub use length::{Flat, LengthOptions, Unit, length, length_with};
pub use merge::{merge_polylines, merge_two_polylines};
pub use polyline::{
    Coordinate, DEFAULT_PRECISION, ENCODE_PRECISION, Polyline, decode, decode_with_precision,
    encode,
};
