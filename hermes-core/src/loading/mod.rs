//! This module is responsible for loading the static network configuration,
//! resolving edge geometry and building a routable graph.

mod builder;
mod config;
pub mod osrm;
mod provider;
mod resolve;
pub mod segment;

pub use builder::{
    GraphBuildOptions, InvalidCostPolicy, build_graph, build_graph_with, create_network,
    create_network_with,
};
pub use config::{EdgeConfig, NetworkConfig, StationConfig};
pub use provider::{RouteProvider, StraightLineProvider};
pub use resolve::{ResolvedEdges, resolve_edges};
