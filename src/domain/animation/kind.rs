//! The four reveal methods and their catalogue metadata.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::foundation::ValidationError;

/// Visual randomization method. Persisted as `wheel`, `dice`, `eightball`, `coin`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AnimationKind {
    #[default]
    Wheel,
    Dice,
    EightBall,
    Coin,
}

/// Whether a method can be picked for the current option count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Disabled,
    Available,
    Selected,
}

/// How well a method suits the current option count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Perfect,
    Recommended,
    Normal,
}

impl AnimationKind {
    pub const ALL: [AnimationKind; 4] = [
        AnimationKind::Wheel,
        AnimationKind::Dice,
        AnimationKind::EightBall,
        AnimationKind::Coin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationKind::Wheel => "wheel",
            AnimationKind::Dice => "dice",
            AnimationKind::EightBall => "eightball",
            AnimationKind::Coin => "coin",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AnimationKind::Wheel => "Spinning Wheel",
            AnimationKind::Dice => "Dice Roll",
            AnimationKind::EightBall => "Magic 8-Ball",
            AnimationKind::Coin => "Coin Flip",
        }
    }

    /// Label for the trigger button.
    pub fn action_label(&self) -> &'static str {
        match self {
            AnimationKind::Wheel => "Spin the Wheel",
            AnimationKind::Dice => "Roll the Dice",
            AnimationKind::EightBall => "Shake the 8-Ball",
            AnimationKind::Coin => "Flip the Coin",
        }
    }

    pub fn min_options(&self) -> usize {
        2
    }

    /// Upper bound shown by the method picker; `None` means unbounded.
    pub fn max_options(&self) -> Option<usize> {
        match self {
            AnimationKind::Dice => Some(6),
            AnimationKind::Coin => Some(2),
            AnimationKind::Wheel | AnimationKind::EightBall => None,
        }
    }

    /// Length of the cosmetic sequence before the winner is shown.
    pub fn duration(&self) -> Duration {
        match self {
            AnimationKind::Wheel => Duration::from_millis(4000),
            AnimationKind::Dice => Duration::from_millis(2500),
            AnimationKind::EightBall | AnimationKind::Coin => Duration::from_millis(2000),
        }
    }

    /// Whether the driver itself can dramatize `count` options.
    ///
    /// Looser than [`AnimationKind::availability`]: dice still roll six dice
    /// for larger sets, only the coin insists on an exact count.
    pub fn driver_accepts(&self, count: usize) -> bool {
        match self {
            AnimationKind::Coin => count == 2,
            _ => count >= self.min_options(),
        }
    }

    pub fn availability(&self, count: usize, selected: AnimationKind) -> Availability {
        if count < self.min_options() {
            return Availability::Disabled;
        }
        if matches!(self.max_options(), Some(max) if count > max) {
            return Availability::Disabled;
        }
        if *self == selected {
            Availability::Selected
        } else {
            Availability::Available
        }
    }

    pub fn recommendation(&self, count: usize) -> Recommendation {
        match self {
            AnimationKind::Coin if count == 2 => Recommendation::Perfect,
            AnimationKind::Dice if count <= 6 => Recommendation::Recommended,
            AnimationKind::Wheel if count > 6 => Recommendation::Recommended,
            _ => Recommendation::Normal,
        }
    }

    /// Method suggested for `count` valid options: 2 → coin, ≤6 → dice, else wheel.
    pub fn recommended_for(count: usize) -> AnimationKind {
        if count == 2 {
            AnimationKind::Coin
        } else if count <= 6 {
            AnimationKind::Dice
        } else {
            AnimationKind::Wheel
        }
    }

    /// Hint shown on a disabled picker card.
    pub fn requirement_hint(&self) -> String {
        match self.max_options() {
            Some(max) if max == self.min_options() => format!("Need exactly {} options", max),
            Some(max) => format!("Need {}-{} options", self.min_options(), max),
            None => format!("Need {}+ options", self.min_options()),
        }
    }
}

impl fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AnimationKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnimationKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                ValidationError::invalid_format("method", format!("unknown animation '{}'", s))
            })
    }
}
