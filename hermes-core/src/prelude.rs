// Re-export key components
pub use crate::animation::{
    Animation, AnimationConfig, Frame, PathProfile, Pose, Ticker, TickerHandle, VehicleOffset,
    VehicleState, precompute,
};
pub use crate::export::{frame_to_geojson, route_to_geojson};
pub use crate::loading::{
    GraphBuildOptions, InvalidCostPolicy, NetworkConfig, RouteProvider, StraightLineProvider,
    build_graph, build_graph_with, create_network,
};
pub use crate::model::{EdgeKind, GuidewayEdge, HermesGraph, HermesNetwork, RawEdge, Station};
pub use crate::routing::{concatenate_paths, find_path, find_paths, path_cost};

pub use crate::Error;
pub use crate::Kmh;
pub use crate::StationId;
