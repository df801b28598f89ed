//! Polyline representation and the encoded-polyline text codec.
//!
//! Decoding accepts a caller-chosen precision; encoding always writes the
//! canonical 1e5 scale. Callers holding text written at another scale must
//! decode it with the matching precision.

use serde::{Deserialize, Serialize};

use crate::delta;
use crate::error::{PolylineError, Result};
use crate::length::{self, LengthOptions};

/// A (latitude, longitude) pair in degrees.
pub type Coordinate = (f64, f64);

/// Number of decimal digits used when no precision is supplied to a decoder.
pub const DEFAULT_PRECISION: u32 = 5;

/// Number of decimal digits the encoder always writes.
pub const ENCODE_PRECISION: u32 = 5;

/// Largest precision whose scale factor `10^precision` is a finite `f64`.
pub const MAX_PRECISION: u32 = 308;

/// Largest scaled magnitude an `f64` holds exactly (2^53).
const MAX_SCALED: f64 = 9_007_199_254_740_992.0;

/// A polyline as decoded coordinates.
///
/// Order is significant and duplicates are allowed. Serializes as a list of
/// `[lat, lon]` arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Decodes encoded text at [`DEFAULT_PRECISION`].
    pub fn decode(text: &str) -> Result<Self> {
        decode(text).map(Self::new)
    }

    pub fn decode_with_precision(text: &str, precision: u32) -> Result<Self> {
        decode_with_precision(text, precision).map(Self::new)
    }

    /// Encodes the points at [`ENCODE_PRECISION`].
    pub fn encode(&self) -> Result<String> {
        encode(&self.points)
    }

    /// Total path length, see [`crate::length::length_of`].
    pub fn length(&self, options: &LengthOptions) -> Result<f64> {
        length::length_of(&self.points, options)
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Coordinate> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Coordinate> {
        self.points.last().copied()
    }
}

impl From<Vec<Coordinate>> for Polyline {
    fn from(points: Vec<Coordinate>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Coordinate> for Polyline {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Decodes encoded text at [`DEFAULT_PRECISION`].
pub fn decode(text: &str) -> Result<Vec<Coordinate>> {
    decode_with_precision(text, DEFAULT_PRECISION)
}

/// Decodes encoded text, dividing the accumulated integers by `10^precision`.
///
/// Fails with a malformed-encoding error if the text ends inside a varint,
/// ends after a latitude delta without its longitude delta, or contains a
/// byte outside `63..=126`. A precision above [`MAX_PRECISION`] is an
/// invalid input. No partial result is returned.
pub fn decode_with_precision(text: &str, precision: u32) -> Result<Vec<Coordinate>> {
    if precision > MAX_PRECISION {
        return Err(PolylineError::invalid_input(
            "precision",
            precision,
            "scale factor must be a finite number",
        ));
    }
    let factor = scale_factor(precision);
    let bytes = text.as_bytes();
    let mut cursor = 0;
    let mut lat: i64 = 0;
    let mut lon: i64 = 0;
    let mut points = Vec::new();

    while cursor < bytes.len() {
        lat = lat.wrapping_add(delta::decode_signed(bytes, &mut cursor)?);
        if cursor >= bytes.len() {
            return Err(PolylineError::malformed(cursor, "latitude without longitude"));
        }
        lon = lon.wrapping_add(delta::decode_signed(bytes, &mut cursor)?);
        points.push((lat as f64 / factor, lon as f64 / factor));
    }

    tracing::trace!(points = points.len(), precision, "decoded polyline");
    Ok(points)
}

/// Encodes coordinates at [`ENCODE_PRECISION`].
///
/// Every delta is taken between rounded scaled values, so rounding error
/// never accumulates along the path.
pub fn encode(points: &[Coordinate]) -> Result<String> {
    let factor = scale_factor(ENCODE_PRECISION);
    let mut out = String::with_capacity(points.len() * 8);
    let mut prev_lat: i64 = 0;
    let mut prev_lon: i64 = 0;

    for (index, &(lat, lon)) in points.iter().enumerate() {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(PolylineError::invalid_input(
                "points",
                format!("[{lat}, {lon}] at index {index}"),
                "coordinates must be finite numbers",
            ));
        }
        let (Some(lat_scaled), Some(lon_scaled)) = (scale(lat, factor), scale(lon, factor))
        else {
            return Err(PolylineError::invalid_input(
                "points",
                format!("[{lat}, {lon}] at index {index}"),
                "coordinates exceed the encodable range",
            ));
        };

        delta::encode_signed(lat_scaled.wrapping_sub(prev_lat), &mut out);
        delta::encode_signed(lon_scaled.wrapping_sub(prev_lon), &mut out);

        prev_lat = lat_scaled;
        prev_lon = lon_scaled;
    }

    tracing::trace!(points = points.len(), bytes = out.len(), "encoded polyline");
    Ok(out)
}

// callers keep precision <= MAX_PRECISION
fn scale_factor(precision: u32) -> f64 {
    10f64.powi(precision as i32)
}

fn scale(degrees: f64, factor: f64) -> Option<i64> {
    let scaled = (degrees * factor).round();
    (scaled.abs() <= MAX_SCALED).then_some(scaled as i64)
}
