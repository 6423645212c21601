//! Continuous-time vehicle animation along a polyline.
//!
//! A [`PathProfile`] precomputes cumulative arc lengths once per path.
//! Every vehicle keeps only its own [`VehicleState`]; an [`Animation`] owns
//! the vehicles of one path and advances them on every tick, and a
//! [`Ticker`] drives an animation from a background thread.

pub mod blocks;
mod config;
mod driver;
pub mod footprint;
mod profile;
mod ticker;
mod vehicle;

pub use config::{AnimationConfig, VehicleOffset};
pub use driver::{Animation, Frame};
pub use footprint::Footprint;
pub use profile::{PathProfile, Pose, precompute};
pub use ticker::{MIN_TICK_INTERVAL, Ticker, TickerHandle};
pub use vehicle::{VehicleState, kmh_to_mps};
