//! Vehicle marker outlines in map coordinates.
//!
//! Sizes are given in degrees, matching the coordinates they are added to.

use std::f64::consts::TAU;

use geo::{Point, Polygon};

use super::Pose;

/// Circumradius of the pentagon marker (about 2.4 m)
pub const PENTAGON_RADIUS_DEG: f64 = 0.000_022;
/// Length of the rectangular marker (about 2.4 m)
pub const VEHICLE_LENGTH_DEG: f64 = 0.000_022;
/// Width of the rectangular marker (about 1.1 m)
pub const VEHICLE_WIDTH_DEG: f64 = 0.000_01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Footprint {
    Pentagon { radius: f64 },
    Rectangle { length: f64, width: f64 },
}

impl Default for Footprint {
    fn default() -> Self {
        Footprint::Pentagon {
            radius: PENTAGON_RADIUS_DEG,
        }
    }
}

impl Footprint {
    pub fn rectangle() -> Self {
        Footprint::Rectangle {
            length: VEHICLE_LENGTH_DEG,
            width: VEHICLE_WIDTH_DEG,
        }
    }

    pub fn polygon(&self, pose: &Pose) -> Polygon<f64> {
        match *self {
            Footprint::Pentagon { radius } => pentagon(pose.position, pose.heading, radius),
            Footprint::Rectangle { length, width } => {
                rectangle(pose.position, pose.heading, length, width)
            }
        }
    }
}

/// Regular pentagon centred on `center` with its first vertex pointing along `heading`
pub fn pentagon(center: Point<f64>, heading: f64, radius: f64) -> Polygon<f64> {
    let vertices: Vec<Point<f64>> = (0..5)
        .map(|i| {
            let theta = heading + TAU / 5.0 * f64::from(i);
            Point::new(
                center.x() + theta.cos() * radius,
                center.y() + theta.sin() * radius,
            )
        })
        .collect();
    Polygon::new(vertices.into(), Vec::new())
}

/// Rectangle centred on `center` with its long side along `heading`
pub fn rectangle(center: Point<f64>, heading: f64, length: f64, width: f64) -> Polygon<f64> {
    let (sin, cos) = heading.sin_cos();
    let (dx, dy) = (cos * length / 2.0, sin * length / 2.0);
    let (wx, wy) = (sin * width / 2.0, -cos * width / 2.0);
    let (lon, lat) = (center.x(), center.y());

    let corners = vec![
        Point::new(lon - dx - wx, lat - dy - wy),
        Point::new(lon - dx + wx, lat - dy + wy),
        Point::new(lon + dx + wx, lat + dy + wy),
        Point::new(lon + dx - wx, lat + dy - wy),
    ];
    Polygon::new(corners.into(), Vec::new())
}
