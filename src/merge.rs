//! Stitching encoded polylines into one continuous path.
//!
//! Each polyline after the first is expected to start at the point where the
//! previous one ends. That junction point is kept once: a following
//! polyline's leading coordinate is dropped when it equals the previous end
//! point, then the sequences are concatenated and encoded again. A leading
//! coordinate that differs from the previous end point is kept.

use rayon::prelude::*;

use crate::error::{PolylineError, Result};
use crate::polyline::{self, Coordinate};

/// Merges `second` onto the end of `first`.
pub fn merge_two_polylines(first: &str, second: &str) -> Result<String> {
    merge_polylines(&[first, second])
}

/// Merges polylines left to right.
///
/// A single polyline is returned unchanged. An empty list is rejected.
pub fn merge_polylines<S>(polylines: &[S]) -> Result<String>
where
    S: AsRef<str> + Sync,
{
    if polylines.is_empty() {
        return Err(PolylineError::invalid_input(
            "polylines",
            "[]",
            "at least one polyline is required",
        ));
    }

    let mut decoded = polylines
        .par_iter()
        .map(|text| polyline::decode(text.as_ref()))
        .collect::<Result<Vec<_>>>()?
        .into_iter();

    if polylines.len() == 1 {
        return Ok(polylines[0].as_ref().to_string());
    }

    let mut path = decoded.next().unwrap_or_default();
    for (index, next) in decoded.enumerate() {
        stitch(&mut path, next, index + 1);
    }

    tracing::debug!(
        polylines = polylines.len(),
        points = path.len(),
        "merged polylines"
    );
    polyline::encode(&path)
}

fn stitch(path: &mut Vec<Coordinate>, next: Vec<Coordinate>, index: usize) {
    let Some(&junction) = path.last() else {
        path.extend(next);
        return;
    };
    match next.first().copied() {
        Some(start) if start == junction => {
            tracing::trace!(index, ?junction, "shared junction point elided");
            path.extend_from_slice(&next[1..]);
        }
        Some(start) => {
            tracing::warn!(
                index,
                ?junction,
                ?start,
                "polyline does not start at the previous end point, keeping its first point"
            );
            path.extend(next);
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_merge_shared_junction() {
        let first = polyline::encode(&[(1.0, 1.0), (2.0, 2.0)]).unwrap();
        let second = polyline::encode(&[(2.0, 2.0), (3.0, 3.0), (4.0, 4.0)]).unwrap();

        let merged = merge_two_polylines(&first, &second).unwrap();
        assert_eq!(
            polyline::decode(&merged).unwrap(),
            vec![(1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0)]
        );
    }

    #[test]
    fn test_merge_keeps_first_text_as_prefix() {
        let first = "_p~iF~ps|U_ulLnnqC";
        let second = polyline::encode(&[(40.7, -120.95), (43.252, -126.453)]).unwrap();
        let merged = merge_two_polylines(first, &second).unwrap();
        assert_eq!(merged, "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
    }

    #[test]
    fn test_single_polyline_unchanged() {
        assert_eq!(merge_polylines(&["_p~iF~ps|U"]).unwrap(), "_p~iF~ps|U");
    }

    #[test]
    fn test_empty_list_rejected() {
        let empty: [&str; 0] = [];
        let err = merge_polylines(&empty).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_empty_second_keeps_first() {
        let first = polyline::encode(&[(1.0, 1.0), (2.0, 2.0)]).unwrap();
        assert_eq!(merge_two_polylines(&first, "").unwrap(), first);
    }

    #[test]
    fn test_empty_first_takes_second() {
        let second = polyline::encode(&[(1.0, 1.0), (2.0, 2.0)]).unwrap();
        assert_eq!(merge_two_polylines("", &second).unwrap(), second);
    }

    #[test]
    fn test_mismatched_junction_keeps_leading_point() {
        let first = polyline::encode(&[(1.0, 1.0)]).unwrap();
        let second = polyline::encode(&[(5.0, 5.0), (6.0, 6.0)]).unwrap();
        let merged = merge_two_polylines(&first, &second).unwrap();
        assert_eq!(
            polyline::decode(&merged).unwrap(),
            vec![(1.0, 1.0), (5.0, 5.0), (6.0, 6.0)]
        );
    }

    #[test]
    fn test_repeated_junction_elided_once() {
        let first = polyline::encode(&[(1.0, 1.0), (2.0, 2.0)]).unwrap();
        let second = polyline::encode(&[(2.0, 2.0), (2.0, 2.0), (3.0, 3.0)]).unwrap();
        let merged = merge_two_polylines(&first, &second).unwrap();
        assert_eq!(
            polyline::decode(&merged).unwrap(),
            vec![(1.0, 1.0), (2.0, 2.0), (2.0, 2.0), (3.0, 3.0)]
        );
    }

    #[test]
    fn test_malformed_input_fails_whole_merge() {
        let first = polyline::encode(&[(1.0, 1.0)]).unwrap();
        let err = merge_polylines(&[first.as_str(), "_p~iF"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedEncoding);
    }

    #[test]
    fn test_merge_many_matches_pairwise_fold() {
        let parts = [
            polyline::encode(&[(0.0, 0.0), (0.1, 0.1)]).unwrap(),
            polyline::encode(&[(0.1, 0.1), (0.2, 0.3)]).unwrap(),
            polyline::encode(&[(0.2, 0.3), (0.25, 0.35), (0.4, 0.5)]).unwrap(),
        ];
        let folded = merge_two_polylines(
            &merge_two_polylines(&parts[0], &parts[1]).unwrap(),
            &parts[2],
        )
        .unwrap();
        assert_eq!(merge_polylines(&parts).unwrap(), folded);
        assert_eq!(polyline::decode(&folded).unwrap().len(), 5);
    }
}
