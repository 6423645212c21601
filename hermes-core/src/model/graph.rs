//! Routable station graph

use hashbrown::HashMap;
use log::warn;

use super::{GuidewayEdge, Station};
use crate::StationId;

/// Station graph with every directed guideway edge.
///
/// `neighbors` keeps, per station, the positions in `edges` of its outgoing
/// edges in insertion order. A station only gets a neighbor bucket when it is
/// registered through [`HermesGraph::with_stations`].
#[derive(Debug, Clone, Default)]
pub struct HermesGraph {
    pub(crate) stations: HashMap<StationId, Station>,
    pub(crate) neighbors: HashMap<StationId, Vec<usize>>,
    pub(crate) edges: Vec<GuidewayEdge>,
}

impl HermesGraph {
    /// Creates a graph with the given stations and no edges.
    /// Duplicate ids keep the first station.
    pub fn with_stations(stations: impl IntoIterator<Item = Station>) -> Self {
        let mut graph = HermesGraph::default();
        for station in stations {
            if graph.stations.contains_key(&station.id) {
                warn!("Duplicate station id {} - keeping the first", station.id);
                continue;
            }
            graph.neighbors.insert(station.id.clone(), Vec::new());
            graph.stations.insert(station.id.clone(), station);
        }
        graph
    }

    /// Inserts a directed edge.
    ///
    /// Unknown endpoints are reported but only an edge without a neighbor
    /// bucket for its source is dropped. Returns whether the edge was inserted.
    pub fn insert_edge(&mut self, edge: GuidewayEdge) -> bool {
        if !self.stations.contains_key(&edge.from) {
            warn!("Edge {} -> {} references missing FROM station", edge.from, edge.to);
        }
        if !self.stations.contains_key(&edge.to) {
            warn!("Edge {} -> {} references missing TO station", edge.from, edge.to);
        }

        let Some(bucket) = self.neighbors.get_mut(&edge.from) else {
            warn!("No neighbor bucket for {} - dropping edge to {}", edge.from, edge.to);
            return false;
        };

        bucket.push(self.edges.len());
        self.edges.push(edge);
        true
    }

    pub fn station(&self, id: &str) -> Option<&Station> {
        self.stations.get(id)
    }

    pub fn contains_station(&self, id: &str) -> bool {
        self.stations.contains_key(id)
    }

    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    /// All inserted directed edges
    pub fn edges(&self) -> &[GuidewayEdge] {
        &self.edges
    }

    /// Outgoing edges of a station in insertion order
    pub fn neighbors<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a GuidewayEdge> + 'a {
        self.neighbors
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|&idx| &self.edges[idx])
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::lat_lon;

    fn stations() -> Vec<Station> {
        vec![
            Station::new("a", "A", lat_lon(0.0, 0.0)),
            Station::new("b", "B", lat_lon(0.0, 0.01)),
        ]
    }

    #[test]
    fn duplicate_station_keeps_first() {
        let mut list = stations();
        list.push(Station::new("a", "Other A", lat_lon(5.0, 5.0)));

        let graph = HermesGraph::with_stations(list);
        assert_eq!(graph.station_count(), 2);
        assert_eq!(graph.station("a").map(|s| s.name.as_str()), Some("A"));
    }

    #[test]
    fn edge_to_unknown_station_is_kept() {
        let mut graph = HermesGraph::with_stations(stations());
        let edge = GuidewayEdge::new("a", "ghost", vec![lat_lon(0.0, 0.0), lat_lon(1.0, 1.0)]);

        assert!(graph.insert_edge(edge));
        assert_eq!(graph.neighbors("a").count(), 1);
    }

    #[test]
    fn edge_from_unknown_station_is_dropped() {
        let mut graph = HermesGraph::with_stations(stations());
        let edge = GuidewayEdge::new("ghost", "a", vec![lat_lon(1.0, 1.0), lat_lon(0.0, 0.0)]);

        assert!(!graph.insert_edge(edge));
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.neighbors("ghost").count(), 0);
    }
}
