//! Animation drivers.
//!
//! Each method is an explicit state machine advanced by `tick(dt)` from a
//! single external tick source:
//!
//! ```text
//! Idle ──start──▶ Running ──▶ Settling ──▶ Done
//!   │               │            │
//!   └───────────────┴────abort───┴──▶ Aborted
//! ```
//!
//! The winner is chosen before a driver starts; drivers only dramatize it.

mod coin;
mod dice;
mod driver;
mod easing;
mod eight_ball;
mod frame;
mod kind;
mod phase;
mod timeline;
mod wheel;

pub use coin::{CoinDriver, CoinFace, CoinFrame, FLIP_INTERVAL, MAX_FLIPS, MIN_FLIPS};
pub use dice::{DiceDriver, DiceFrame, DieFace, LegendEntry, FACE_GLYPHS, MAX_DICE, REROLL_INTERVAL};
pub use driver::{driver_for, AnimationDriver, StartOutcome};
pub use easing::{ease_out_cubic, lerp, progress, sample_keyframes};
pub use eight_ball::{EightBallDriver, EightBallFrame, ANSWER_MAX_CHARS, REVEAL_WINDOW};
pub use frame::{placeholder_message, AnimationFrame};
pub use kind::{AnimationKind, Availability, Recommendation};
pub use phase::AnimationPhase;
pub use timeline::{Step, Timeline};
pub use wheel::{
    final_rotation, WheelDriver, WheelFrame, WheelGeometry, LABEL_MAX_CHARS, MAX_EXTRA_TURNS,
    MIN_EXTRA_TURNS,
};
