//! Render-ready snapshots produced by the drivers.

use serde::Serialize;

use super::coin::CoinFrame;
use super::dice::DiceFrame;
use super::eight_ball::EightBallFrame;
use super::kind::AnimationKind;
use super::wheel::WheelFrame;

/// One renderable state of a driver.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnimationFrame {
    /// Shown when the driver cannot dramatize the current option set.
    Placeholder {
        method: AnimationKind,
        message: &'static str,
    },
    Wheel(WheelFrame),
    Dice(DiceFrame),
    Coin(CoinFrame),
    EightBall(EightBallFrame),
}

impl AnimationFrame {
    pub fn placeholder(method: AnimationKind) -> Self {
        AnimationFrame::Placeholder {
            method,
            message: placeholder_message(method),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, AnimationFrame::Placeholder { .. })
    }
}

pub fn placeholder_message(method: AnimationKind) -> &'static str {
    match method {
        AnimationKind::Wheel => "Add options to see the wheel",
        AnimationKind::Dice => "Add options to see the dice",
        AnimationKind::EightBall => "Add options to see the Magic 8-Ball",
        AnimationKind::Coin => "Coin flip requires exactly 2 options",
    }
}
