//! A single candidate entered by the user.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::OptionId;

/// Weight assigned to new options. Selection ignores it.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Suffix appended to labels that had to be shortened for display.
pub const ELLIPSIS: &str = "...";

/// One candidate among which a winner is chosen.
///
/// Serialized as `{ "id", "text", "color", "weight" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub id: OptionId,
    pub text: String,
    pub color: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

impl Choice {
    /// Creates a choice with the default weight.
    pub fn new(id: impl Into<OptionId>, text: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            color: color.into(),
            weight: DEFAULT_WEIGHT,
        }
    }

    /// A choice is eligible for selection once its label has visible text.
    pub fn is_valid(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Label shortened to `max_chars` characters, with an ellipsis when cut.
    pub fn display_label(&self, max_chars: usize) -> String {
        truncate_label(&self.text, max_chars)
    }
}

/// Shortens `text` to `max_chars` characters, appending [`ELLIPSIS`] when cut.
pub fn truncate_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push_str(ELLIPSIS);
    cut
}

/// Finds the position of `winner` in `options` by id.
pub fn position_of(options: &[Choice], winner: &Choice) -> Option<usize> {
    options.iter().position(|c| c.id == winner.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_whitespace_labels_are_not_valid() {
        assert!(!Choice::new("1", "", "#FF006E").is_valid());
        assert!(!Choice::new("1", "   ", "#FF006E").is_valid());
        assert!(Choice::new("1", " Pizza ", "#FF006E").is_valid());
    }

    #[test]
    fn truncate_label_leaves_short_text_alone() {
        assert_eq!(truncate_label("Tacos", 10), "Tacos");
        assert_eq!(truncate_label("abcdefghij", 10), "abcdefghij");
    }

    #[test]
    fn truncate_label_counts_characters_not_bytes() {
        assert_eq!(truncate_label("Crème brûlée tonight", 10), "Crème brûl...");
    }

    #[test]
    fn missing_weight_defaults_on_deserialize() {
        let json = r##"{"id":"1","text":"Pizza","color":"#FF006E"}"##;
        let choice: Choice = serde_json::from_str(json).unwrap();
        assert_eq!(choice.weight, DEFAULT_WEIGHT);
    }

    #[test]
    fn position_of_matches_by_id() {
        let options = vec![
            Choice::new("a", "Pizza", "#FF006E"),
            Choice::new("b", "Tacos", "#8338EC"),
        ];
        let renamed = Choice::new("b", "Renamed", "#000000");
        assert_eq!(position_of(&options, &renamed), Some(1));
        assert_eq!(position_of(&options, &Choice::new("z", "x", "y")), None);
    }
}
