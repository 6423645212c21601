use super::{HermesGraph, RawEdge};

/// Routable graph together with the geometry the rendering layer draws
#[derive(Debug, Clone, Default)]
pub struct HermesNetwork {
    pub graph: HermesGraph,
    /// Resolved undirected edges, one polyline per configured edge
    pub edges: Vec<RawEdge>,
    /// Straight platform lines for edges typed `station`
    pub station_links: Vec<RawEdge>,
}

impl HermesNetwork {
    /// Every resolved edge polyline joined in configuration order
    pub fn full_polyline(&self) -> Vec<geo::Point<f64>> {
        crate::routing::join_polylines(self.edges.iter().map(|edge| edge.path.as_slice()))
    }
}
