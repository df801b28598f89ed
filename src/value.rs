//! Loosely typed entry points over JSON values.
//!
//! For callers that receive polylines, points and options as untyped JSON
//! (request bodies, scripting bridges). Every argument is checked for shape
//! before the typed operation runs, and failures name the argument and echo
//! the offending value.

use serde_json::Value;

use crate::error::{PolylineError, Result};
use crate::haversine;
use crate::length::{self, LengthOptions, Unit};
use crate::merge;
use crate::polyline::{self, Coordinate, DEFAULT_PRECISION, MAX_PRECISION};

/// Decodes `polyline` at `precision`; `null` precision means the default.
pub fn decode(polyline: &Value, precision: &Value) -> Result<Vec<Coordinate>> {
    let text = as_polyline("polyline", polyline)?;
    let precision = match precision {
        Value::Null => DEFAULT_PRECISION,
        other => as_precision(other)?,
    };
    polyline::decode_with_precision(text, precision)
}

/// Encodes a JSON array of `[lat, lon]` pairs.
pub fn encode(points: &Value) -> Result<String> {
    let items = points
        .as_array()
        .ok_or_else(|| PolylineError::invalid_input("points", points, "expected an array"))?;
    let coordinates = items
        .iter()
        .map(|item| as_point("points", item))
        .collect::<Result<Vec<_>>>()?;
    polyline::encode(&coordinates)
}

/// Length of `polyline`; `options` is `null` or `{"radius": km, "unit": name}`.
///
/// Unit names other than `"meter"` measure in kilometers.
pub fn length(polyline: &Value, options: &Value) -> Result<f64> {
    let text = as_polyline("polyline", polyline)?;
    let options = as_length_options(options)?;
    length::length_with(text, &options)
}

pub fn merge_two_polylines(first: &Value, second: &Value) -> Result<String> {
    let first = as_polyline("first", first)?;
    let second = as_polyline("second", second)?;
    merge::merge_two_polylines(first, second)
}

/// Merges a JSON array of polyline strings.
pub fn merge_polylines(polylines: &Value) -> Result<String> {
    let items = polylines
        .as_array()
        .ok_or_else(|| PolylineError::invalid_input("polylines", polylines, "expected an array"))?;
    let texts = items
        .iter()
        .map(|item| as_polyline("polylines", item))
        .collect::<Result<Vec<_>>>()?;
    merge::merge_polylines(&texts)
}

/// Great-circle distance between two `[lat, lon]` arrays; `null` radius
/// means the Earth radius.
pub fn haversine_distance(point1: &Value, point2: &Value, radius: &Value) -> Result<f64> {
    let point1 = as_point("point1", point1)?;
    let point2 = as_point("point2", point2)?;
    let radius = match radius {
        Value::Null => None,
        other => Some(as_number("radius", other)?),
    };
    haversine::haversine_distance(point1, point2, radius)
}

fn as_polyline<'a>(argument: &'static str, value: &'a Value) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| PolylineError::invalid_input(argument, value, "expected a string"))
}

fn as_number(argument: &'static str, value: &Value) -> Result<f64> {
    value
        .as_f64()
        .ok_or_else(|| PolylineError::invalid_input(argument, value, "expected a number"))
}

fn as_precision(value: &Value) -> Result<u32> {
    let invalid = || {
        PolylineError::invalid_input("precision", value, "expected a non-negative integer")
    };
    let digits = match (value.as_u64(), value.as_f64()) {
        (Some(digits), _) => digits,
        (None, Some(digits)) if digits >= 0.0 && digits.fract() == 0.0 => digits as u64,
        _ => return Err(invalid()),
    };
    if digits > u64::from(MAX_PRECISION) {
        return Err(PolylineError::invalid_input(
            "precision",
            value,
            "scale factor must be a finite number",
        ));
    }
    Ok(digits as u32)
}

fn as_point(argument: &'static str, value: &Value) -> Result<Coordinate> {
    match value.as_array().map(Vec::as_slice) {
        Some([lat, lon]) => match (lat.as_f64(), lon.as_f64()) {
            (Some(lat), Some(lon)) => Ok((lat, lon)),
            _ => Err(PolylineError::invalid_input(
                argument,
                value,
                "coordinates must be numbers",
            )),
        },
        _ => Err(PolylineError::invalid_input(
            argument,
            value,
            "expected a [lat, lon] pair",
        )),
    }
}

fn as_length_options(value: &Value) -> Result<LengthOptions> {
    let fields = match value {
        Value::Null => return Ok(LengthOptions::default()),
        Value::Object(fields) => fields,
        other => {
            return Err(PolylineError::invalid_input(
                "options",
                other,
                "expected an object",
            ));
        }
    };

    // a zero radius selects the flat metric, like an absent one
    let radius_km = match fields.get("radius") {
        None | Some(Value::Null) => None,
        Some(radius) => Some(as_number("radius", radius)?).filter(|&km| km != 0.0),
    };
    let unit = match fields.get("unit") {
        None | Some(Value::Null) => Unit::default(),
        Some(Value::String(name)) => name.parse().unwrap_or_default(),
        Some(other) => {
            return Err(PolylineError::invalid_input(
                "unit",
                other,
                "expected a unit name",
            ));
        }
    };

    Ok(LengthOptions { radius_km, unit })
}
