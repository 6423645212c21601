//! Shortest-path search over the station graph and helpers to turn the
//! resulting edges into a single drawable, animatable path.

mod batch;
pub mod dijkstra;
mod path;

pub use batch::find_paths;
pub use dijkstra::find_path;
pub use path::{concatenate_paths, join_polylines, path_cost};
