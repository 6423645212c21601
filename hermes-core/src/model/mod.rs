//! Data model of a guideway network
//!
//! Contains stations, directed guideway edges and the routable graph built
//! from them.

pub mod edge;
pub mod graph;
pub mod network;
pub mod station;

pub use edge::{EdgeKind, FALLBACK_COST, GuidewayEdge, RawEdge, normalize_cost};
pub use graph::HermesGraph;
pub use network::HermesNetwork;
pub use station::Station;
