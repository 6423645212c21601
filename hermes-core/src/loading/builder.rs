use log::{debug, info, warn};

use super::{NetworkConfig, RouteProvider, resolve_edges};
use crate::{
    Error, GuidewayEdge, HermesGraph, HermesNetwork, RawEdge, Station, model::FALLBACK_COST,
};

/// What to do with an edge whose computed length is not a valid number
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidCostPolicy {
    /// Keep the edge with this weight
    Fallback(f64),
    /// Leave the edge out of the graph
    Exclude,
}

impl Default for InvalidCostPolicy {
    fn default() -> Self {
        InvalidCostPolicy::Fallback(FALLBACK_COST)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GraphBuildOptions {
    pub invalid_cost: InvalidCostPolicy,
}

/// Builds a bidirectional graph with the default options
pub fn build_graph(stations: &[Station], raw_edges: &[RawEdge]) -> HermesGraph {
    build_graph_with(stations, raw_edges, &GraphBuildOptions::default())
}

/// Builds a bidirectional graph from stations and undirected edges.
///
/// Every raw edge yields a forward and a reverse directed edge. Edges whose
/// geometry has fewer than two points are skipped. Nothing here is fatal:
/// malformed input only makes the graph smaller.
pub fn build_graph_with(
    stations: &[Station],
    raw_edges: &[RawEdge],
    options: &GraphBuildOptions,
) -> HermesGraph {
    let mut graph = HermesGraph::with_stations(stations.iter().cloned());

    let directed = raw_edges
        .iter()
        .map(GuidewayEdge::forward)
        .chain(raw_edges.iter().map(GuidewayEdge::reverse));

    for mut edge in directed {
        if edge.path.len() < 2 {
            warn!(
                "Skipping edge {} -> {} due to insufficient path length ({} points)",
                edge.from,
                edge.to,
                edge.path.len()
            );
            continue;
        }

        if !edge.cost.is_finite() {
            match options.invalid_cost {
                InvalidCostPolicy::Fallback(weight) => {
                    warn!(
                        "Edge {} -> {} has invalid distance, using weight {weight}",
                        edge.from, edge.to
                    );
                    edge.cost = weight;
                }
                InvalidCostPolicy::Exclude => {
                    warn!(
                        "Edge {} -> {} has invalid distance, excluding it",
                        edge.from, edge.to
                    );
                    continue;
                }
            }
        }

        debug!("Adding edge {} -> {} cost: {:.1}", edge.from, edge.to, edge.cost);
        graph.insert_edge(edge);
    }

    graph
}

/// Creates a network with the default graph options
///
/// # Errors
///
/// Returns an error if the configuration is invalid
pub fn create_network<P: RouteProvider + ?Sized>(
    config: &NetworkConfig,
    provider: &P,
) -> Result<HermesNetwork, Error> {
    create_network_with(config, provider, &GraphBuildOptions::default())
}

/// Creates a routable network from a configuration.
///
/// Edge geometry is resolved through `provider` where the configuration has
/// none; edges that fail to resolve are left out.
///
/// # Errors
///
/// Returns an error if the configuration is invalid
pub fn create_network_with<P: RouteProvider + ?Sized>(
    config: &NetworkConfig,
    provider: &P,
    options: &GraphBuildOptions,
) -> Result<HermesNetwork, Error> {
    config.validate()?;

    let stations = config.stations();
    info!(
        "Resolving geometry of {} edges between {} stations",
        config.edges.len(),
        stations.len()
    );

    let resolved = resolve_edges(&stations, &config.edges, provider);
    if !resolved.failed.is_empty() {
        warn!(
            "{} of {} edges could not be resolved and were omitted",
            resolved.failed.len(),
            config.edges.len()
        );
    }

    let graph = build_graph_with(&stations, &resolved.edges, options);
    info!(
        "Network created with {} stations and {} directed edges",
        graph.station_count(),
        graph.edge_count()
    );

    Ok(HermesNetwork {
        graph,
        edges: resolved.edges,
        station_links: resolved.station_links,
    })
}
