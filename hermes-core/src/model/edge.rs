//! Guideway edges - raw undirected input and directed routable segments

use geo::{LineString, Point};
use serde::{Deserialize, Serialize};

use crate::{StationId, geometry::polyline_length};

/// Weight substituted for edge costs that are not a finite, non-negative number
pub const FALLBACK_COST: f64 = 1.0;

/// Normalizes an edge cost so Dijkstra only ever sees non-negative weights
pub fn normalize_cost(cost: f64) -> f64 {
    if cost.is_finite() && cost >= 0.0 {
        cost
    } else {
        FALLBACK_COST
    }
}

/// Track geometry class of a guideway segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Straight,
    Curve20,
    Curve30,
    /// Segment running along a station platform
    Station,
}

impl EdgeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeKind::Straight => "straight",
            EdgeKind::Curve20 => "curve20",
            EdgeKind::Curve30 => "curve30",
            EdgeKind::Station => "station",
        }
    }
}

/// Undirected edge between two stations with its resolved geometry
#[derive(Debug, Clone, PartialEq)]
pub struct RawEdge {
    pub from: StationId,
    pub to: StationId,
    /// Geometry ordered from `from` to `to`
    pub path: Vec<Point<f64>>,
    pub kind: Option<EdgeKind>,
}

impl RawEdge {
    pub fn new(from: impl Into<StationId>, to: impl Into<StationId>, path: Vec<Point<f64>>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            path,
            kind: None,
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: EdgeKind) -> Self {
        self.kind = Some(kind);
        self
    }
}

/// Directed traversable guideway segment
#[derive(Debug, Clone, PartialEq)]
pub struct GuidewayEdge {
    pub from: StationId,
    pub to: StationId,
    /// Rendered geometry ordered in the direction of travel
    pub path: Vec<Point<f64>>,
    /// Length of `path` in metres
    pub cost: f64,
    pub kind: Option<EdgeKind>,
}

impl GuidewayEdge {
    /// Creates an edge whose cost is the haversine length of `path`
    pub fn new(from: impl Into<StationId>, to: impl Into<StationId>, path: Vec<Point<f64>>) -> Self {
        let cost = polyline_length(&path);
        Self {
            from: from.into(),
            to: to.into(),
            path,
            cost,
            kind: None,
        }
    }

    #[must_use]
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: Option<EdgeKind>) -> Self {
        self.kind = kind;
        self
    }

    /// Forward edge of a raw edge
    pub fn forward(raw: &RawEdge) -> Self {
        GuidewayEdge::new(raw.from.clone(), raw.to.clone(), raw.path.clone()).with_kind(raw.kind)
    }

    /// Reverse edge of a raw edge, with the point sequence reversed
    pub fn reverse(raw: &RawEdge) -> Self {
        let path = raw.path.iter().rev().copied().collect();
        GuidewayEdge::new(raw.to.clone(), raw.from.clone(), path).with_kind(raw.kind)
    }

    /// Cost as seen by the router
    pub fn routing_cost(&self) -> f64 {
        normalize_cost(self.cost)
    }

    pub fn geometry(&self) -> LineString<f64> {
        self.path.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::lat_lon;

    #[test]
    fn reverse_edge_swaps_endpoints_and_geometry() {
        let raw = RawEdge::new(
            "a",
            "b",
            vec![lat_lon(0.0, 0.0), lat_lon(0.0, 0.001), lat_lon(0.001, 0.002)],
        )
        .with_kind(EdgeKind::Curve20);

        let forward = GuidewayEdge::forward(&raw);
        let reverse = GuidewayEdge::reverse(&raw);

        assert_eq!((reverse.from.as_str(), reverse.to.as_str()), ("b", "a"));
        assert_eq!(reverse.path.first(), forward.path.last());
        assert_eq!(reverse.path.last(), forward.path.first());
        assert_eq!(reverse.kind, Some(EdgeKind::Curve20));
        assert!((forward.cost - reverse.cost).abs() < 1e-9);
    }

    #[test]
    fn malformed_costs_are_normalized() {
        assert_eq!(normalize_cost(f64::NAN), FALLBACK_COST);
        assert_eq!(normalize_cost(f64::INFINITY), FALLBACK_COST);
        assert_eq!(normalize_cost(-3.0), FALLBACK_COST);
        assert_eq!(normalize_cost(0.0), 0.0);
        assert_eq!(normalize_cost(42.5), 42.5);
    }

    #[test]
    fn edge_kind_uses_config_spelling() {
        let kind: EdgeKind = serde_json::from_str("\"curve30\"").unwrap();
        assert_eq!(kind, EdgeKind::Curve30);
        assert_eq!(kind.as_str(), "curve30");
    }
}
