//! Path length of an encoded polyline.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PolylineError, Result};
use crate::haversine::{self, Haversine};
use crate::polyline::{self, Coordinate};
use crate::traits::SegmentDistance;

/// Output unit of a length computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Kilometer,
    Meter,
}

impl Unit {
    fn convert(self, kilometers: f64) -> f64 {
        match self {
            Unit::Kilometer => kilometers,
            Unit::Meter => kilometers * 1000.0,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Kilometer => f.write_str("kilometer"),
            Unit::Meter => f.write_str("meter"),
        }
    }
}

impl FromStr for Unit {
    type Err = PolylineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "kilometer" => Ok(Unit::Kilometer),
            "meter" => Ok(Unit::Meter),
            other => Err(PolylineError::invalid_input(
                "unit",
                other,
                "expected \"meter\" or \"kilometer\"",
            )),
        }
    }
}

/// Options for [`length_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LengthOptions {
    /// Sphere radius in kilometers. When set, segments are measured as
    /// great-circle distances; otherwise the flat metric is used.
    #[serde(alias = "radius")]
    pub radius_km: Option<f64>,
    pub unit: Unit,
}

impl LengthOptions {
    pub fn on_sphere(radius_km: f64) -> Self {
        Self {
            radius_km: Some(radius_km),
            ..Self::default()
        }
    }

    pub fn on_earth() -> Self {
        Self::on_sphere(haversine::EARTH_RADIUS_KM)
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }
}

/// Flat segment metric: straight-line distance over raw degree differences.
///
/// Not a true planar distance, since degrees of longitude shrink away from
/// the equator. Kept as the metric used when no sphere is given.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Flat;

impl SegmentDistance for Flat {
    fn segment_distance(&self, from: (f64, f64), to: (f64, f64)) -> f64 {
        let delta_lat = to.0 - from.0;
        let delta_lon = to.1 - from.1;
        (delta_lat.powi(2) + delta_lon.powi(2)).sqrt()
    }
}

/// Length of an encoded polyline with default options (flat, kilometers).
pub fn length(text: &str) -> Result<f64> {
    length_with(text, &LengthOptions::default())
}

/// Length of an encoded polyline decoded at the default precision.
pub fn length_with(text: &str, options: &LengthOptions) -> Result<f64> {
    let points = polyline::decode(text)?;
    length_of(&points, options)
}

/// Length of an already decoded path.
pub fn length_of(points: &[Coordinate], options: &LengthOptions) -> Result<f64> {
    let distance = match options.radius_km {
        Some(radius_km) => path_length(points, &Haversine::new(radius_km)?),
        None => path_length(points, &Flat),
    };

    tracing::debug!(
        points = points.len(),
        radius_km = ?options.radius_km,
        unit = %options.unit,
        distance,
        "computed path length"
    );
    Ok(options.unit.convert(distance))
}

/// Sums `metric` over every consecutive pair; zero or one point yields 0.
pub fn path_length<M: SegmentDistance>(points: &[Coordinate], metric: &M) -> f64 {
    points
        .windows(2)
        .map(|pair| metric.segment_distance(pair[0], pair[1]))
        .sum()
}
