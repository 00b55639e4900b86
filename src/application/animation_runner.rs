//! AnimationRunner - the single tick source for animation drivers.
//!
//! Drives one [`AnimationDriver`] from a tokio interval until it finishes or
//! the cancel signal fires. Cancellation aborts the driver (a terminal
//! state) and no further ticks are delivered, so a stale winner can never
//! be revealed after the host has moved on.
//!
//! ## Configuration
//!
//! | Setting | Default | Description |
//! |---------|---------|-------------|
//! | `tick_interval` | 16ms | Time between driver ticks |

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, warn};

use crate::config::AnimationConfig;
use crate::domain::animation::{AnimationDriver, AnimationFrame, AnimationPhase, StartOutcome};
use crate::domain::options::Choice;
use crate::ports::RandomSource;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The driver reached `Done` with the winner on display.
    Completed,
    /// Cancelled before `Done`.
    Aborted,
    /// The driver could not animate this option set.
    Placeholder,
}

/// Ticks a driver on a fixed interval.
#[derive(Debug, Clone, Copy)]
pub struct AnimationRunner {
    tick_interval: Duration,
}

impl AnimationRunner {
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            tick_interval: tick_interval.max(Duration::from_millis(1)),
        }
    }

    pub fn from_config(config: &AnimationConfig) -> Self {
        Self::new(config.tick_interval())
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Starts `driver` on `winner` and ticks it until it settles or `cancel`
    /// becomes `true`. Every rendered state is passed to `on_frame`.
    ///
    /// A dropped cancel sender means the run can no longer be cancelled.
    pub async fn run<F>(
        &self,
        driver: &mut dyn AnimationDriver,
        options: &[Choice],
        winner: &Choice,
        rng: &dyn RandomSource,
        mut cancel: watch::Receiver<bool>,
        mut on_frame: F,
    ) -> RunOutcome
    where
        F: FnMut(&AnimationFrame),
    {
        let kind = driver.kind();
        if *cancel.borrow() {
            driver.abort();
            debug!(method = %kind, "Animation cancelled before start");
            return RunOutcome::Aborted;
        }

        if driver.start(options, winner, rng) == StartOutcome::Placeholder {
            debug!(method = %kind, options = options.len(), "Animation shows placeholder");
            on_frame(&driver.frame());
            return RunOutcome::Placeholder;
        }
        debug!(method = %kind, winner = %winner.text, "Animation started");
        on_frame(&driver.frame());

        let mut interval = time::interval(self.tick_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        interval.tick().await;
        let mut last = Instant::now();
        let mut cancellable = true;

        loop {
            tokio::select! {
                changed = cancel.changed(), if cancellable => {
                    if changed.is_err() {
                        cancellable = false;
                        continue;
                    }
                    if *cancel.borrow() && driver.abort() {
                        warn!(method = %kind, "Animation aborted");
                        on_frame(&driver.frame());
                        return RunOutcome::Aborted;
                    }
                }

                _ = interval.tick() => {
                    let now = Instant::now();
                    let phase = driver.tick(now - last, rng);
                    last = now;
                    on_frame(&driver.frame());

                    match phase {
                        AnimationPhase::Done => {
                            debug!(method = %kind, "Animation finished");
                            return RunOutcome::Completed;
                        }
                        AnimationPhase::Aborted | AnimationPhase::Idle => {
                            return RunOutcome::Aborted;
                        }
                        AnimationPhase::Running | AnimationPhase::Settling => {}
                    }
                }
            }
        }
    }
}

impl Default for AnimationRunner {
    fn default() -> Self {
        Self::from_config(&AnimationConfig::default())
    }
}
