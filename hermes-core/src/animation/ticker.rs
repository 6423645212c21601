use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{debug, warn};

use super::{Animation, AnimationConfig, Frame};
use crate::{Error, Kmh};

enum Command {
    Pause,
    Resume,
    SetSpeed(Kmh),
    AdjustSpeed(Kmh),
    Stop,
}

/// Shortest accepted tick interval
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Periodic scheduler driving an [`Animation`] on its own thread
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    interval: Duration,
}

impl Ticker {
    /// Intervals below [`MIN_TICK_INTERVAL`] are raised to it
    pub fn new(interval: Duration) -> Self {
        if interval < MIN_TICK_INTERVAL {
            warn!("Tick interval {interval:?} is too short, using {MIN_TICK_INTERVAL:?}");
        }
        Ticker {
            interval: interval.max(MIN_TICK_INTERVAL),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn from_config(config: &AnimationConfig) -> Self {
        Ticker::new(config.tick_interval())
    }

    /// Moves `animation` to a background thread and ticks it every interval,
    /// handing each frame to `sink`.
    ///
    /// The animation is only reachable through the returned handle, which
    /// forwards control commands to the tick thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the thread can not be spawned
    pub fn spawn<F>(self, mut animation: Animation, mut sink: F) -> Result<TickerHandle, Error>
    where
        F: FnMut(&Frame) + Send + 'static,
    {
        let (commands, inbox) = mpsc::channel();
        let interval = self.interval;

        let thread = thread::Builder::new()
            .name("hermes-ticker".to_string())
            .spawn(move || {
                let mut next_tick = Instant::now();
                loop {
                    let now = Instant::now();
                    if now >= next_tick {
                        let frame = animation.tick(now);
                        sink(&frame);
                        next_tick = now + interval;
                    }

                    match inbox.recv_timeout(next_tick.saturating_duration_since(Instant::now())) {
                        Ok(Command::Pause) => animation.pause(),
                        Ok(Command::Resume) => animation.resume(),
                        Ok(Command::SetSpeed(speed)) => {
                            animation.set_speed(speed);
                        }
                        Ok(Command::AdjustSpeed(delta)) => {
                            animation.adjust_speed(delta);
                        }
                        Ok(Command::Stop) | Err(RecvTimeoutError::Disconnected) => break,
                        Err(RecvTimeoutError::Timeout) => {}
                    }
                }
                debug!("Ticker stopped");
                animation
            })?;

        Ok(TickerHandle {
            commands,
            thread: Some(thread),
        })
    }
}

/// Control handle of a running [`Ticker`].
///
/// Dropping the handle stops the ticker and waits for its thread.
pub struct TickerHandle {
    commands: Sender<Command>,
    thread: Option<JoinHandle<Animation>>,
}

impl TickerHandle {
    pub fn pause(&self) {
        self.send(Command::Pause);
    }

    pub fn resume(&self) {
        self.send(Command::Resume);
    }

    pub fn set_speed(&self, speed: Kmh) {
        self.send(Command::SetSpeed(speed));
    }

    pub fn adjust_speed(&self, delta: Kmh) {
        self.send(Command::AdjustSpeed(delta));
    }

    /// Stops ticking and returns the animation in its final state.
    /// No frame is delivered after this returns.
    pub fn stop(mut self) -> Option<Animation> {
        self.shutdown()
    }

    fn send(&self, command: Command) {
        if self.commands.send(command).is_err() {
            warn!("Ticker thread is gone, command ignored");
        }
    }

    fn shutdown(&mut self) -> Option<Animation> {
        let thread = self.thread.take()?;
        // The thread may already have exited; joining is enough then
        let _ = self.commands.send(Command::Stop);
        match thread.join() {
            Ok(animation) => Some(animation),
            Err(_) => {
                warn!("Ticker thread panicked");
                None
            }
        }
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}
