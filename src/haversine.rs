//! Great-circle distance on a sphere.
//!
//! Used by the length calculator when a sphere radius is supplied.

use crate::error::{PolylineError, Result};
use crate::traits::SegmentDistance;

/// Earth mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine segment metric on a sphere of the given radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Haversine {
    /// Sphere radius in kilometers; distances come out in the same unit.
    pub radius_km: f64,
}

impl Default for Haversine {
    fn default() -> Self {
        Self {
            radius_km: EARTH_RADIUS_KM,
        }
    }
}

impl Haversine {
    pub fn new(radius_km: f64) -> Result<Self> {
        check_radius(radius_km)?;
        Ok(Self { radius_km })
    }

    /// Calculate haversine distance between two points given in degrees.
    fn distance(&self, from: (f64, f64), to: (f64, f64)) -> f64 {
        let (lat1, lng1) = from;
        let (lat2, lng2) = to;

        let lat1_rad = lat1.to_radians();
        let lat2_rad = lat2.to_radians();
        let delta_lat = (lat2 - lat1).to_radians();
        let delta_lng = (lng2 - lng1).to_radians();

        let a = haversine(delta_lat) + lat1_rad.cos() * lat2_rad.cos() * haversine(delta_lng);
        // clamp guards against a > 1 from rounding on antipodal points
        let c = 2.0 * a.sqrt().min(1.0).asin();

        self.radius_km * c
    }
}

impl SegmentDistance for Haversine {
    fn segment_distance(&self, from: (f64, f64), to: (f64, f64)) -> f64 {
        self.distance(from, to)
    }
}

/// Half-versed sine: `sin²(θ / 2)`.
pub fn haversine(angle_radians: f64) -> f64 {
    (angle_radians / 2.0).sin().powi(2)
}

/// Great-circle distance between two `(lat, lon)` points in degrees.
///
/// `radius_km` defaults to [`EARTH_RADIUS_KM`]; the result is in the unit of
/// the radius.
pub fn haversine_distance(
    point1: (f64, f64),
    point2: (f64, f64),
    radius_km: Option<f64>,
) -> Result<f64> {
    check_point("point1", point1)?;
    check_point("point2", point2)?;
    let metric = match radius_km {
        Some(radius_km) => Haversine::new(radius_km)?,
        None => Haversine::default(),
    };
    Ok(metric.distance(point1, point2))
}

fn check_point(argument: &'static str, (lat, lon): (f64, f64)) -> Result<()> {
    if lat.is_finite() && lon.is_finite() {
        Ok(())
    } else {
        Err(PolylineError::invalid_input(
            argument,
            format!("[{lat}, {lon}]"),
            "coordinates must be finite numbers",
        ))
    }
}

pub(crate) fn check_radius(radius_km: f64) -> Result<()> {
    if radius_km.is_finite() && radius_km > 0.0 {
        Ok(())
    } else {
        Err(PolylineError::invalid_input(
            "radius",
            radius_km,
            "radius must be a positive number",
        ))
    }
}
