use hashbrown::HashMap;
use log::{debug, warn};

use super::{EdgeConfig, RouteProvider};
use crate::{EdgeKind, RawEdge, Station, StationId, geometry::lat_lon};

/// Outcome of resolving configured edges into geometry
#[derive(Debug, Clone, Default)]
pub struct ResolvedEdges {
    /// Edges with usable geometry, in configuration order
    pub edges: Vec<RawEdge>,
    /// Straight platform lines for edges typed `station`
    pub station_links: Vec<RawEdge>,
    /// Edges that could not be resolved
    pub failed: Vec<(StationId, StationId)>,
}

/// Resolves the geometry of every configured edge.
///
/// Edges carrying a precomputed path use it as-is; the others are requested
/// from `provider`. Each edge is resolved independently: an unknown station
/// or a provider failure is logged and drops only that edge.
pub fn resolve_edges<P: RouteProvider + ?Sized>(
    stations: &[Station],
    edges: &[EdgeConfig],
    provider: &P,
) -> ResolvedEdges {
    let positions: HashMap<&str, _> = stations
        .iter()
        .map(|station| (station.id.as_str(), station.position))
        .collect();

    let mut resolved = ResolvedEdges::default();

    for edge in edges {
        let (Some(&start), Some(&end)) = (
            positions.get(edge.from.as_str()),
            positions.get(edge.to.as_str()),
        ) else {
            warn!("Edge {} -> {} references an unknown station", edge.from, edge.to);
            resolved.failed.push((edge.from.clone(), edge.to.clone()));
            continue;
        };

        if edge.kind == Some(EdgeKind::Station) {
            resolved.station_links.push(
                RawEdge::new(edge.from.clone(), edge.to.clone(), vec![start, end])
                    .with_kind(EdgeKind::Station),
            );
        }

        let path = if edge.path.is_empty() {
            match provider.route(start, end) {
                Ok(path) => path,
                Err(e) => {
                    warn!("No route from {} to {}: {e}", edge.from, edge.to);
                    resolved.failed.push((edge.from.clone(), edge.to.clone()));
                    continue;
                }
            }
        } else {
            edge.path.iter().map(|&[lat, lon]| lat_lon(lat, lon)).collect()
        };

        debug!(
            "Resolved edge {} -> {} with {} points",
            edge.from,
            edge.to,
            path.len()
        );

        let mut raw = RawEdge::new(edge.from.clone(), edge.to.clone(), path);
        raw.kind = edge.kind;
        resolved.edges.push(raw);
    }

    resolved
}

#[cfg(test)]
mod tests {
    use geo::Point;

    use super::*;
    use crate::{Error, loading::StraightLineProvider};

    fn stations() -> Vec<Station> {
        vec![
            Station::new("cp", "Connaught Place", lat_lon(28.6315, 77.2167)),
            Station::new("indiaGate", "India Gate", lat_lon(28.6129, 77.2295)),
            Station::new("khanMarket", "Khan Market", lat_lon(28.6006, 77.2270)),
        ]
    }

    fn edge(from: &str, to: &str, kind: Option<EdgeKind>) -> EdgeConfig {
        EdgeConfig {
            from: from.to_string(),
            to: to.to_string(),
            kind,
            path: Vec::new(),
        }
    }

    #[test]
    fn provider_failure_drops_only_that_edge() {
        let stations = stations();
        let khan_market = stations[2].position;
        let provider = move |from: Point<f64>, to: Point<f64>| {
            if to == khan_market {
                Err(Error::NoRouteFound)
            } else {
                Ok(vec![from, to])
            }
        };

        let edges = [
            edge("cp", "indiaGate", None),
            edge("indiaGate", "khanMarket", None),
            edge("khanMarket", "cp", None),
        ];
        let resolved = resolve_edges(&stations, &edges, &provider);

        assert_eq!(resolved.edges.len(), 2);
        assert_eq!(
            resolved.failed,
            vec![("indiaGate".to_string(), "khanMarket".to_string())]
        );
    }

    #[test]
    fn unknown_station_is_skipped() {
        let edges = [edge("cp", "nowhere", None), edge("cp", "indiaGate", None)];
        let resolved = resolve_edges(&stations(), &edges, &StraightLineProvider);

        assert_eq!(resolved.edges.len(), 1);
        assert_eq!(resolved.failed.len(), 1);
    }

    #[test]
    fn precomputed_path_bypasses_provider() {
        let provider = |_: Point<f64>, _: Point<f64>| -> Result<Vec<Point<f64>>, Error> {
            Err(Error::ProviderError("offline".to_string()))
        };
        let mut configured = edge("cp", "indiaGate", Some(EdgeKind::Station));
        configured.path = vec![[28.6315, 77.2167], [28.62, 77.22], [28.6129, 77.2295]];

        let resolved = resolve_edges(&stations(), &[configured], &provider);

        assert_eq!(resolved.edges.len(), 1);
        assert_eq!(resolved.edges[0].path[1], lat_lon(28.62, 77.22));
        assert_eq!(resolved.edges[0].kind, Some(EdgeKind::Station));
        assert_eq!(resolved.station_links.len(), 1);
        assert_eq!(resolved.station_links[0].path.len(), 2);
    }
}
