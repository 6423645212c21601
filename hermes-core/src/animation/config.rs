use std::time::Duration;

use serde::Deserialize;

use super::PathProfile;
use crate::{Error, Kmh};

/// Where a vehicle starts on the looped path
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleOffset {
    /// Metres from the start of the path
    Meters(f64),
    /// Index of a path point, wrapping past the end
    Point(usize),
}

impl VehicleOffset {
    pub fn distance(self, profile: &PathProfile) -> f64 {
        match self {
            VehicleOffset::Meters(meters) => profile.wrap(meters),
            VehicleOffset::Point(index) => profile.distance_at_point(index),
        }
    }
}

/// Animation parameters, loadable from JSON with defaults for missing keys
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub default_speed_kmh: Kmh,
    pub min_speed_kmh: Kmh,
    pub max_speed_kmh: Kmh,
    /// Increment of the speed up/down controls
    pub speed_step_kmh: Kmh,
    pub tick_interval_ms: u64,
    pub vehicle_offsets: Vec<VehicleOffset>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            default_speed_kmh: 45.0,
            min_speed_kmh: 5.0,
            max_speed_kmh: 120.0,
            speed_step_kmh: 5.0,
            tick_interval_ms: 120,
            vehicle_offsets: vec![
                VehicleOffset::Point(0),
                VehicleOffset::Point(20),
                VehicleOffset::Point(40),
            ],
        }
    }
}

impl AnimationConfig {
    /// Parses and validates an animation configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the values are inconsistent
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let config: AnimationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] if the speed bounds are not finite,
    /// negative or inverted, or the tick interval is zero
    pub fn validate(&self) -> Result<(), Error> {
        let bounds_ok = self.min_speed_kmh.is_finite()
            && self.max_speed_kmh.is_finite()
            && self.min_speed_kmh >= 0.0
            && self.min_speed_kmh <= self.max_speed_kmh;
        if !bounds_ok {
            return Err(Error::InvalidData(format!(
                "Invalid speed bounds: {} - {} km/h",
                self.min_speed_kmh, self.max_speed_kmh
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(Error::InvalidData(
                "Tick interval must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Clamps a requested speed into the configured bounds.
    /// A non-finite request falls back to the default speed.
    pub fn clamp_speed(&self, speed: Kmh) -> Kmh {
        let speed = if speed.is_finite() {
            speed
        } else {
            self.default_speed_kmh
        };
        speed.max(self.min_speed_kmh).min(self.max_speed_kmh)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
