//! Seams between the path length calculator and its distance collaborators.

/// Distance between two consecutive coordinates of a path.
///
/// Implementations must be pure; the length calculator sums the values
/// returned for every consecutive pair.
pub trait SegmentDistance {
    fn segment_distance(&self, from: (f64, f64), to: (f64, f64)) -> f64;
}
