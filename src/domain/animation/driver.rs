//! The common driver contract and the per-kind factory.

use std::time::Duration;

use super::coin::CoinDriver;
use super::dice::DiceDriver;
use super::eight_ball::EightBallDriver;
use super::frame::AnimationFrame;
use super::kind::AnimationKind;
use super::phase::AnimationPhase;
use super::wheel::WheelDriver;
use crate::domain::options::Choice;
use crate::ports::RandomSource;

/// Result of arming a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// The sequence is running and will settle on the winner.
    Started,
    /// The option set does not suit this driver (or the winner is not in
    /// it); the driver shows its placeholder and stays idle.
    Placeholder,
}

/// A state machine that dramatizes an already-chosen winner.
///
/// Drivers never pick the winner and never fail: an unsuitable option set
/// degrades to the placeholder frame. Time only moves through [`tick`],
/// so the host decides the tick source and cancellation is an
/// [`abort`] transition rather than timer teardown.
///
/// [`tick`]: AnimationDriver::tick
/// [`abort`]: AnimationDriver::abort
pub trait AnimationDriver: Send {
    fn kind(&self) -> AnimationKind;

    fn phase(&self) -> AnimationPhase;

    /// Arms the driver for `winner` among `options`, replacing any previous run.
    fn start(&mut self, options: &[Choice], winner: &Choice, rng: &dyn RandomSource)
        -> StartOutcome;

    /// Advances by `dt` and returns the phase reached.
    fn tick(&mut self, dt: Duration, rng: &dyn RandomSource) -> AnimationPhase;

    /// Moves to `Aborted` unless already finished. Returns whether it did.
    fn abort(&mut self) -> bool;

    /// What to draw right now.
    fn frame(&self) -> AnimationFrame;
}

/// Builds a fresh idle driver for `kind`.
pub fn driver_for(kind: AnimationKind) -> Box<dyn AnimationDriver> {
    match kind {
        AnimationKind::Wheel => Box::new(WheelDriver::new()),
        AnimationKind::Dice => Box::new(DiceDriver::new()),
        AnimationKind::EightBall => Box::new(EightBallDriver::new()),
        AnimationKind::Coin => Box::new(CoinDriver::new()),
    }
}
