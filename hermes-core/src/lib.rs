//! Routing and vehicle animation core for guideway networks.
//!
//! The crate has two leaf components: a shortest-path router over a small
//! station graph ([`routing`]) and a continuous-time path animator
//! ([`animation`]). The [`loading`] module turns a static network
//! configuration into a routable [`HermesGraph`], and [`export`] renders
//! results as `GeoJSON` for map front-ends.

pub mod animation;
pub mod error;
pub mod export;
pub mod geometry;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use model::{EdgeKind, GuidewayEdge, HermesGraph, HermesNetwork, RawEdge, Station};

/// Identifier of a station as given in the network configuration
pub type StationId = String;

/// Speed in kilometres per hour
pub type Kmh = f64;
