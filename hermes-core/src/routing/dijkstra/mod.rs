mod shortest_path;
mod state;

pub use shortest_path::find_path;
