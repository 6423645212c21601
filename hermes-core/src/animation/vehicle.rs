use super::{PathProfile, Pose};
use crate::Kmh;

pub fn kmh_to_mps(speed: Kmh) -> f64 {
    speed * 1000.0 / 3600.0
}

/// Per-vehicle animation state: how far along the looped path it is
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VehicleState {
    /// Metres from the start of the path, kept in `[0, total_length)`
    pub distance_traveled: f64,
}

impl VehicleState {
    pub fn at(distance: f64) -> Self {
        VehicleState {
            distance_traveled: distance,
        }
    }

    /// Moves the vehicle by `speed * elapsed` and returns its new pose.
    ///
    /// The distance wraps at the end of the path so the animation loops.
    /// Negative or non-finite progress is ignored.
    pub fn advance(&mut self, profile: &PathProfile, elapsed_seconds: f64, speed: Kmh) -> Pose {
        let delta = kmh_to_mps(speed) * elapsed_seconds;
        if delta.is_finite() && delta > 0.0 {
            self.distance_traveled += delta;
        }
        self.distance_traveled = profile.wrap(self.distance_traveled);
        profile.pose_at(self.distance_traveled)
    }

    pub fn pose(&self, profile: &PathProfile) -> Pose {
        profile.pose_at(self.distance_traveled)
    }
}
