use geo::Point;
use itertools::Itertools;

use crate::geometry::{haversine_distance, heading, interpolate};

/// Position and direction of travel of a vehicle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// `x` is longitude, `y` is latitude
    pub position: Point<f64>,
    /// Radians, `atan2(Δlat, Δlon)`: `0` is east, counter-clockwise
    pub heading: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Pose {
            position: Point::new(0.0, 0.0),
            heading: 0.0,
        }
    }
}

impl Pose {
    pub fn heading_degrees(&self) -> f64 {
        self.heading.to_degrees()
    }

    /// Compass bearing in degrees: `0` is north, clockwise, in `[0, 360)`
    pub fn compass_bearing(&self) -> f64 {
        (90.0 - self.heading_degrees()).rem_euclid(360.0)
    }
}

/// Cumulative arc length of a path and its total length in metres.
///
/// `cumulative[i]` is the distance from the first point to point `i`, so the
/// sequence has one entry per point, starts at `0` and never decreases.
/// An empty path yields an empty sequence and a total of `0`.
pub fn precompute(path: &[Point<f64>]) -> (Vec<f64>, f64) {
    if path.is_empty() {
        return (Vec::new(), 0.0);
    }

    let mut cumulative = Vec::with_capacity(path.len());
    cumulative.push(0.0);
    let mut total = 0.0;
    for (a, b) in path.iter().tuple_windows() {
        total += haversine_distance(*a, *b);
        cumulative.push(total);
    }

    (cumulative, total)
}

/// A polyline prepared for animation
#[derive(Debug, Clone, Default)]
pub struct PathProfile {
    points: Vec<Point<f64>>,
    cumulative: Vec<f64>,
    total_length: f64,
}

impl PathProfile {
    pub fn new(points: Vec<Point<f64>>) -> Self {
        let (cumulative, total_length) = precompute(&points);
        PathProfile {
            points,
            cumulative,
            total_length,
        }
    }

    pub fn points(&self) -> &[Point<f64>] {
        &self.points
    }

    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether a vehicle can actually move along this path
    pub fn is_animatable(&self) -> bool {
        self.total_length.is_finite() && self.total_length > 0.0
    }

    /// Folds a travelled distance back onto the loop `[0, total_length)`
    pub fn wrap(&self, distance: f64) -> f64 {
        if self.is_animatable() && distance.is_finite() {
            distance.rem_euclid(self.total_length)
        } else {
            0.0
        }
    }

    /// Arc length at a point index, wrapping indices past the end
    pub fn distance_at_point(&self, index: usize) -> f64 {
        if self.cumulative.is_empty() {
            0.0
        } else {
            self.cumulative[index % self.cumulative.len()]
        }
    }

    /// Interpolated pose `distance` metres from the start of the path.
    ///
    /// Degenerate paths (no points, a single point, zero length) give the
    /// first point, or the origin when there is none, with heading `0`.
    pub fn pose_at(&self, distance: f64) -> Pose {
        let Some(&first) = self.points.first() else {
            return Pose::default();
        };
        if self.points.len() < 2 || !self.is_animatable() {
            return Pose {
                position: first,
                heading: 0.0,
            };
        }

        let last = self.points.len() - 1;
        let idx = self
            .cumulative
            .partition_point(|&c| c < distance)
            .clamp(1, last);

        let start = self.points[idx - 1];
        let end = self.points[idx];
        let direction = heading(start, end);
        let segment_length = self.cumulative[idx] - self.cumulative[idx - 1];

        if segment_length <= 0.0 {
            return Pose {
                position: start,
                heading: direction,
            };
        }

        let fraction = ((distance - self.cumulative[idx - 1]) / segment_length).clamp(0.0, 1.0);
        Pose {
            position: interpolate(start, end, fraction),
            heading: direction,
        }
    }
}
