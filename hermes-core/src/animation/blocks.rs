//! Discrete block-by-block vehicle stepping over track segments

use geo::Point;
use log::warn;

use crate::{
    EdgeKind, Station, StationId,
    loading::segment::{block_count, segment_geometry},
};

/// A straight piece of track between two stations, subdivided into blocks
#[derive(Debug, Clone, PartialEq)]
pub struct TrackSegment {
    pub id: String,
    pub kind: EdgeKind,
    pub from: StationId,
    pub to: StationId,
    pub length_m: f64,
    pub blocks: usize,
    /// One point per block boundary, both ends included
    pub geometry: Vec<Point<f64>>,
}

impl TrackSegment {
    pub fn between(from: &Station, to: &Station, kind: EdgeKind, length_m: f64) -> Self {
        TrackSegment {
            id: format!("{}-{}", from.id, to.id),
            kind,
            from: from.id.clone(),
            to: to.id.clone(),
            length_m,
            blocks: block_count(length_m),
            geometry: segment_geometry(from.position, to.position, length_m),
        }
    }
}

/// Steps a vehicle one block point at a time along a looped route
#[derive(Debug, Clone)]
pub struct BlockSimulator {
    id: String,
    route: Vec<TrackSegment>,
    segment_index: usize,
    block_index: usize,
}

impl BlockSimulator {
    /// Segments without geometry are left out of the route
    pub fn new(id: impl Into<String>, route: Vec<TrackSegment>) -> Self {
        let id = id.into();
        let route: Vec<TrackSegment> = route
            .into_iter()
            .filter(|segment| {
                let usable = !segment.geometry.is_empty();
                if !usable {
                    warn!("Vehicle {id}: segment {} has no geometry - skipping", segment.id);
                }
                usable
            })
            .collect();

        BlockSimulator {
            id,
            route,
            segment_index: 0,
            block_index: 0,
        }
    }

    /// Moves one block forward, continuing on the next segment and looping
    /// back to the first segment at the end of the route
    pub fn step(&mut self) -> Option<Point<f64>> {
        let len = self.current()?.geometry.len();

        self.block_index += 1;
        if self.block_index >= len {
            self.block_index = 0;
            self.segment_index = (self.segment_index + 1) % self.route.len();
        }

        self.position()
    }

    pub fn position(&self) -> Option<Point<f64>> {
        self.current()?.geometry.get(self.block_index).copied()
    }

    /// Short status such as `car-1: cp-indiaGate Block 2/5`
    pub fn label(&self) -> String {
        match self.current() {
            Some(segment) => format!(
                "{}: {} Block {}/{}",
                self.id,
                segment.id,
                self.block_index + 1,
                segment.geometry.len()
            ),
            None => format!("{}: idle", self.id),
        }
    }

    pub fn current(&self) -> Option<&TrackSegment> {
        self.route.get(self.segment_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::lat_lon;

    fn route() -> Vec<TrackSegment> {
        let cp = Station::new("cp", "Connaught Place", lat_lon(28.6315, 77.2167));
        let gate = Station::new("indiaGate", "India Gate", lat_lon(28.6129, 77.2295));
        let khan = Station::new("khanMarket", "Khan Market", lat_lon(28.6006, 77.2270));
        vec![
            TrackSegment::between(&cp, &gate, EdgeKind::Straight, 24.0),
            TrackSegment::between(&gate, &khan, EdgeKind::Straight, 12.0),
        ]
    }

    #[test]
    fn steps_through_blocks_and_loops() {
        let mut car = BlockSimulator::new("car-1", route());
        assert_eq!(car.label(), "car-1: cp-indiaGate Block 1/5");

        for _ in 0..4 {
            car.step();
        }
        assert_eq!(car.label(), "car-1: cp-indiaGate Block 5/5");

        car.step();
        assert_eq!(car.label(), "car-1: indiaGate-khanMarket Block 1/3");

        for _ in 0..3 {
            car.step();
        }
        assert_eq!(car.label(), "car-1: cp-indiaGate Block 1/5");
        assert_eq!(car.position(), Some(lat_lon(28.6315, 77.2167)));
    }

    #[test]
    fn empty_route_is_idle() {
        let mut car = BlockSimulator::new("car-2", Vec::new());
        assert_eq!(car.step(), None);
        assert_eq!(car.position(), None);
        assert_eq!(car.label(), "car-2: idle");
    }
}
