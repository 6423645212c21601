use std::sync::Arc;
use std::time::{Duration, Instant};

use geo::Point;
use log::{debug, warn};

use super::{AnimationConfig, PathProfile, Pose, VehicleOffset, VehicleState};
use crate::Kmh;

/// Vehicle poses produced by one tick
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub poses: Vec<Pose>,
    pub speed_kmh: Kmh,
    pub paused: bool,
}

/// Vehicles looping along one shared path.
///
/// The animation is clock driven: every [`tick`](Animation::tick) measures
/// the time since the previous one and moves all vehicles by
/// `speed * elapsed`, unless paused. While paused ticks still run and keep
/// the clock current, so resuming never produces a jump.
#[derive(Debug, Clone)]
pub struct Animation {
    profile: Arc<PathProfile>,
    vehicles: Vec<VehicleState>,
    speed_kmh: Kmh,
    paused: bool,
    last_tick: Option<Instant>,
    config: AnimationConfig,
}

impl Animation {
    /// Creates an animation over `points` with one vehicle per configured offset
    pub fn new(points: Vec<Point<f64>>, config: AnimationConfig) -> Self {
        Self::with_profile(Arc::new(PathProfile::new(points)), config)
    }

    /// Creates an animation over an already prepared, possibly shared path
    pub fn with_profile(profile: Arc<PathProfile>, config: AnimationConfig) -> Self {
        if !profile.is_animatable() {
            warn!(
                "Animating a degenerate path ({} points, {:.1} m) - vehicles will stay put",
                profile.points().len(),
                profile.total_length()
            );
        }

        let vehicles = config
            .vehicle_offsets
            .iter()
            .map(|offset| VehicleState::at(offset.distance(&profile)))
            .collect();
        let speed_kmh = config.clamp_speed(config.default_speed_kmh);

        Animation {
            profile,
            vehicles,
            speed_kmh,
            paused: false,
            last_tick: None,
            config,
        }
    }

    pub fn add_vehicle(&mut self, offset: VehicleOffset) {
        self.vehicles
            .push(VehicleState::at(offset.distance(&self.profile)));
    }

    /// Replaces the vehicles with `count` vehicles spaced evenly along the loop
    #[allow(clippy::cast_precision_loss)]
    pub fn spread_evenly(&mut self, count: usize) {
        let spacing = if count == 0 {
            0.0
        } else {
            self.profile.total_length() / count as f64
        };
        self.vehicles = (0..count)
            .map(|i| VehicleState::at(self.profile.wrap(spacing * i as f64)))
            .collect();
    }

    /// Advances by the wall-clock time since the previous tick.
    /// The first tick only starts the clock.
    pub fn tick(&mut self, now: Instant) -> Frame {
        let elapsed = self
            .last_tick
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last_tick = Some(now);
        self.advance_by(elapsed)
    }

    /// Advances by an explicit elapsed time
    pub fn advance_by(&mut self, elapsed: Duration) -> Frame {
        let seconds = if self.paused {
            0.0
        } else {
            elapsed.as_secs_f64()
        };

        let poses = self
            .vehicles
            .iter_mut()
            .map(|vehicle| vehicle.advance(&self.profile, seconds, self.speed_kmh))
            .collect();

        Frame {
            poses,
            speed_kmh: self.speed_kmh,
            paused: self.paused,
        }
    }

    /// Current poses without advancing
    pub fn frame(&self) -> Frame {
        Frame {
            poses: self
                .vehicles
                .iter()
                .map(|vehicle| vehicle.pose(&self.profile))
                .collect(),
            speed_kmh: self.speed_kmh,
            paused: self.paused,
        }
    }

    pub fn pause(&mut self) {
        if !self.paused {
            debug!("Animation paused");
        }
        self.paused = true;
    }

    /// Resumes motion; the next tick restarts the clock
    pub fn resume(&mut self) {
        if self.paused {
            debug!("Animation resumed");
        }
        self.paused = false;
        self.last_tick = None;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn speed_kmh(&self) -> Kmh {
        self.speed_kmh
    }

    /// Sets the speed, clamped into the configured bounds. Returns the
    /// speed actually applied.
    pub fn set_speed(&mut self, speed: Kmh) -> Kmh {
        self.speed_kmh = self.config.clamp_speed(speed);
        debug!("Animation speed set to {} km/h", self.speed_kmh);
        self.speed_kmh
    }

    pub fn adjust_speed(&mut self, delta: Kmh) -> Kmh {
        self.set_speed(self.speed_kmh + delta)
    }

    pub fn speed_up(&mut self) -> Kmh {
        self.adjust_speed(self.config.speed_step_kmh)
    }

    pub fn slow_down(&mut self) -> Kmh {
        self.adjust_speed(-self.config.speed_step_kmh)
    }

    pub fn profile(&self) -> &Arc<PathProfile> {
        &self.profile
    }

    pub fn vehicles(&self) -> &[VehicleState] {
        &self.vehicles
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::lat_lon;

    fn points() -> Vec<Point<f64>> {
        (0..=50).map(|i| lat_lon(0.0, f64::from(i) * 0.0001)).collect()
    }

    fn config() -> AnimationConfig {
        AnimationConfig {
            default_speed_kmh: 36.0,
            ..AnimationConfig::default()
        }
    }

    #[test]
    fn vehicles_start_at_their_offsets() {
        let animation = Animation::new(points(), config());
        let profile = animation.profile().clone();

        let distances: Vec<f64> = animation
            .vehicles()
            .iter()
            .map(|v| v.distance_traveled)
            .collect();
        assert_eq!(
            distances,
            vec![0.0, profile.cumulative()[20], profile.cumulative()[40]]
        );
    }

    #[test]
    fn first_tick_starts_the_clock() {
        let mut animation = Animation::new(points(), config());
        let before = animation.frame();

        let now = Instant::now();
        assert_eq!(animation.tick(now), before);

        let frame = animation.tick(now + Duration::from_secs(2));
        assert_relative_eq!(animation.vehicles()[0].distance_traveled, 20.0, epsilon = 1e-9);
        assert_ne!(frame.poses[0], before.poses[0]);
    }

    #[test]
    fn paused_animation_is_frozen() {
        let mut animation = Animation::new(points(), config());
        let start = Instant::now();
        animation.tick(start);
        animation.pause();

        let first = animation.tick(start + Duration::from_secs(1));
        let second = animation.tick(start + Duration::from_secs(30));
        assert_eq!(first.poses, second.poses);
        assert!(second.paused);
    }

    #[test]
    fn resume_does_not_jump() {
        let mut animation = Animation::new(points(), config());
        let start = Instant::now();
        animation.tick(start);
        animation.pause();
        animation.resume();

        // long gap between resume and the next tick is not accumulated
        let frame = animation.tick(start + Duration::from_secs(60));
        assert_eq!(frame, animation.frame());
        assert_eq!(animation.vehicles()[0].distance_traveled, 0.0);

        animation.tick(start + Duration::from_secs(61));
        assert_relative_eq!(animation.vehicles()[0].distance_traveled, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn speed_controls_are_bounded() {
        let mut animation = Animation::new(points(), AnimationConfig::default());
        assert_eq!(animation.speed_kmh(), 45.0);

        assert_eq!(animation.speed_up(), 50.0);
        assert_eq!(animation.set_speed(1_000.0), 120.0);
        assert_eq!(animation.speed_up(), 120.0);
        assert_eq!(animation.set_speed(0.0), 5.0);
        assert_eq!(animation.slow_down(), 5.0);
    }

    #[test]
    fn spread_evenly_spaces_vehicles() {
        let mut animation = Animation::new(points(), config());
        animation.spread_evenly(4);

        let total = animation.profile().total_length();
        let distances: Vec<f64> = animation
            .vehicles()
            .iter()
            .map(|v| v.distance_traveled)
            .collect();
        assert_eq!(distances.len(), 4);
        for (i, d) in distances.iter().enumerate() {
            assert_relative_eq!(*d, total * i as f64 / 4.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn empty_path_produces_default_poses() {
        let mut animation = Animation::new(Vec::new(), config());
        let frame = animation.advance_by(Duration::from_secs(5));
        assert_eq!(frame.poses, vec![Pose::default(); 3]);
    }
}
