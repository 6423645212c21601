use geo::Point;

use super::segment::segment_geometry;
use crate::{Error, geometry::haversine_distance};

/// Source of guideway geometry for edges configured without a path.
///
/// Implementations typically call an external routing service. A failure
/// only removes the edge being resolved.
pub trait RouteProvider {
    /// Polyline from `from` to `to`, both endpoints included
    ///
    /// # Errors
    ///
    /// Returns an error if no route exists or the service can not be reached
    fn route(&self, from: Point<f64>, to: Point<f64>) -> Result<Vec<Point<f64>>, Error>;
}

impl<F> RouteProvider for F
where
    F: Fn(Point<f64>, Point<f64>) -> Result<Vec<Point<f64>>, Error>,
{
    fn route(&self, from: Point<f64>, to: Point<f64>) -> Result<Vec<Point<f64>>, Error> {
        self(from, to)
    }
}

/// Offline provider producing straight block geometry between the endpoints
#[derive(Debug, Clone, Copy, Default)]
pub struct StraightLineProvider;

impl RouteProvider for StraightLineProvider {
    fn route(&self, from: Point<f64>, to: Point<f64>) -> Result<Vec<Point<f64>>, Error> {
        Ok(segment_geometry(from, to, haversine_distance(from, to)))
    }
}
