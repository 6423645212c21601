//! Distance and interpolation helpers shared by graph building and animation.
//!
//! Points follow the `geo` convention: `x` is longitude and `y` is latitude,
//! both in degrees. Every length in the crate is a haversine arc length in
//! metres, so edge costs and animation distances are directly comparable.

use geo::{Distance, HaversineMeasure, Point};
use itertools::Itertools;

/// Sphere radius used for every arc length
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Builds a point from a `(lat, lon)` pair
pub fn lat_lon(lat: f64, lon: f64) -> Point<f64> {
    Point::new(lon, lat)
}

/// Converts `(lat, lon)` pairs to points
pub fn points_from_lat_lon(pairs: &[(f64, f64)]) -> Vec<Point<f64>> {
    pairs.iter().map(|&(lat, lon)| lat_lon(lat, lon)).collect()
}

/// Converts points back to `(lat, lon)` pairs
pub fn points_to_lat_lon(points: &[Point<f64>]) -> Vec<(f64, f64)> {
    points.iter().map(|p| (p.y(), p.x())).collect()
}

/// Great-circle distance between two points in metres
pub fn haversine_distance(a: Point<f64>, b: Point<f64>) -> f64 {
    HaversineMeasure::new(EARTH_RADIUS_M).distance(a, b)
}

/// Total length of a polyline in metres, `0.0` for fewer than two points
pub fn polyline_length(points: &[Point<f64>]) -> f64 {
    points
        .iter()
        .tuple_windows()
        .map(|(a, b)| haversine_distance(*a, *b))
        .sum()
}

/// Linear interpolation of latitude and longitude between `a` and `b`
pub fn interpolate(a: Point<f64>, b: Point<f64>, fraction: f64) -> Point<f64> {
    Point::new(
        a.x() + (b.x() - a.x()) * fraction,
        a.y() + (b.y() - a.y()) * fraction,
    )
}

/// Direction of travel from `a` to `b` in radians.
///
/// Computed as `atan2(Δlat, Δlon)`: `0` points east and angles grow
/// counter-clockwise, the way a planar map widget draws them.
pub fn heading(a: Point<f64>, b: Point<f64>) -> f64 {
    (b.y() - a.y()).atan2(b.x() - a.x())
}
