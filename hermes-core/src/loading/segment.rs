//! Straight-line track geometry subdivided into fixed-length blocks

use geo::Point;

use crate::geometry::interpolate;

/// Length of one signalling block in metres
pub const BLOCK_LENGTH_M: f64 = 6.0;

/// Number of blocks a segment of `length_m` is divided into, at least one
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn block_count(length_m: f64) -> usize {
    let blocks = (length_m / BLOCK_LENGTH_M).floor();
    if blocks.is_finite() && blocks >= 1.0 {
        blocks as usize
    } else {
        1
    }
}

/// Generates the points of a straight segment, one per block boundary.
///
/// The result always contains both endpoints, so it has `block_count + 1`
/// points.
#[allow(clippy::cast_precision_loss)]
pub fn segment_geometry(from: Point<f64>, to: Point<f64>, length_m: f64) -> Vec<Point<f64>> {
    let steps = block_count(length_m);
    (0..=steps)
        .map(|i| interpolate(from, to, i as f64 / steps as f64))
        .collect()
}
