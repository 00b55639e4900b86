//! Canned option lists for quick entry.

use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// A predefined set of labels that can be dropped into the option form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuickPreset {
    YesNo,
    Food,
    Activity,
    Weekend,
}

impl QuickPreset {
    pub const ALL: [QuickPreset; 4] = [
        QuickPreset::YesNo,
        QuickPreset::Food,
        QuickPreset::Activity,
        QuickPreset::Weekend,
    ];

    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            QuickPreset::YesNo => &["Yes", "No"],
            QuickPreset::Food => &["Pizza", "Burgers", "Sushi", "Tacos", "Pasta"],
            QuickPreset::Activity => &["Movie Night", "Go Out", "Stay Home", "Exercise", "Read a Book"],
            QuickPreset::Weekend => &["Beach", "Mountains", "City Trip", "Stay Local", "Visit Friends"],
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            QuickPreset::YesNo => "yesno",
            QuickPreset::Food => "food",
            QuickPreset::Activity => "activity",
            QuickPreset::Weekend => "weekend",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            QuickPreset::YesNo => "Yes/No",
            QuickPreset::Food => "Food",
            QuickPreset::Activity => "Activities",
            QuickPreset::Weekend => "Weekend",
        }
    }
}

impl fmt::Display for QuickPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for QuickPreset {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuickPreset::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::invalid_format("preset", format!("unknown preset '{}'", s)))
    }
}
