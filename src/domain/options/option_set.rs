//! The editable, ordered list of candidates behind the option form.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use super::choice::Choice;
use super::palette::{color_for_index, next_color};
use super::presets::QuickPreset;
use crate::domain::animation::AnimationKind;
use crate::domain::foundation::{ErrorCode, OptionId};

/// Most entries the form accepts.
pub const MAX_OPTIONS: usize = 20;

/// Entries the form never drops below.
pub const MIN_OPTIONS: usize = 2;

/// Longest label accepted; longer input is cut.
pub const MAX_TEXT_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionSetError {
    #[error("Option set is full ({max} options)")]
    Full { max: usize },

    #[error("Option set must keep at least {min} options")]
    MinimumReached { min: usize },

    #[error("Option not found: {0}")]
    NotFound(OptionId),

    #[error("Duplicate option id: {0}")]
    DuplicateId(OptionId),
}

impl OptionSetError {
    pub fn code(&self) -> ErrorCode {
        match self {
            OptionSetError::NotFound(_) => ErrorCode::OptionNotFound,
            _ => ErrorCode::ValidationFailed,
        }
    }
}

/// Live option-availability signal for the trigger and method picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionAvailability {
    pub total: usize,
    pub valid: usize,
    pub can_spin: bool,
    pub recommended: AnimationKind,
}

/// Ordered candidates with unique ids.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionSet {
    entries: Vec<Choice>,
}

impl OptionSet {
    /// Two blank entries, ready for input.
    pub fn new() -> Self {
        Self {
            entries: vec![
                Choice::new("1", "", color_for_index(0)),
                Choice::new("2", "", color_for_index(1)),
            ],
        }
    }

    /// Builds a set from existing choices, e.g. a decision being repeated.
    pub fn from_choices(choices: Vec<Choice>) -> Result<Self, OptionSetError> {
        if choices.len() > MAX_OPTIONS {
            return Err(OptionSetError::Full { max: MAX_OPTIONS });
        }
        let mut seen = HashSet::new();
        for choice in &choices {
            if !seen.insert(choice.id.clone()) {
                return Err(OptionSetError::DuplicateId(choice.id.clone()));
            }
        }
        let mut set = Self { entries: choices };
        while set.entries.len() < MIN_OPTIONS {
            let index = set.entries.len();
            set.entries
                .push(Choice::new(OptionId::generate(), "", color_for_index(index)));
        }
        Ok(set)
    }

    pub fn entries(&self) -> &[Choice] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &OptionId) -> Option<&Choice> {
        self.entries.iter().find(|c| &c.id == id)
    }

    /// Appends a blank entry coloured by its position.
    pub fn add_blank(&mut self) -> Result<&Choice, OptionSetError> {
        if self.entries.len() >= MAX_OPTIONS {
            return Err(OptionSetError::Full { max: MAX_OPTIONS });
        }
        let index = self.entries.len();
        self.entries
            .push(Choice::new(OptionId::generate(), "", color_for_index(index)));
        Ok(&self.entries[index])
    }

    pub fn remove(&mut self, id: &OptionId) -> Result<Choice, OptionSetError> {
        let index = self.index_of(id)?;
        if self.entries.len() <= MIN_OPTIONS {
            return Err(OptionSetError::MinimumReached { min: MIN_OPTIONS });
        }
        Ok(self.entries.remove(index))
    }

    /// Replaces a label, keeping at most [`MAX_TEXT_CHARS`] characters.
    pub fn set_text(&mut self, id: &OptionId, text: &str) -> Result<(), OptionSetError> {
        let index = self.index_of(id)?;
        self.entries[index].text = text.chars().take(MAX_TEXT_CHARS).collect();
        Ok(())
    }

    pub fn cycle_color(&mut self, id: &OptionId) -> Result<&str, OptionSetError> {
        let index = self.index_of(id)?;
        let color = next_color(&self.entries[index].color);
        self.entries[index].color = color.to_string();
        Ok(color)
    }

    /// Blanks every label; entries and colours stay.
    pub fn clear_texts(&mut self) {
        for entry in &mut self.entries {
            entry.text.clear();
        }
    }

    /// Writes the preset labels over the leading entries, appending while room remains.
    pub fn apply_preset(&mut self, preset: QuickPreset) {
        for (index, label) in preset.labels().iter().enumerate() {
            if let Some(entry) = self.entries.get_mut(index) {
                entry.text = label.to_string();
            } else if self.entries.len() < MAX_OPTIONS {
                self.entries
                    .push(Choice::new(OptionId::generate(), *label, color_for_index(index)));
            }
        }
    }

    /// Snapshot of the entries eligible for selection, in order.
    pub fn valid_choices(&self) -> Vec<Choice> {
        self.entries.iter().filter(|c| c.is_valid()).cloned().collect()
    }

    pub fn availability(&self) -> OptionAvailability {
        let valid = self.entries.iter().filter(|c| c.is_valid()).count();
        OptionAvailability {
            total: self.entries.len(),
            valid,
            can_spin: valid >= MIN_OPTIONS,
            recommended: AnimationKind::recommended_for(valid),
        }
    }

    fn index_of(&self, id: &OptionId) -> Result<usize, OptionSetError> {
        self.entries
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| OptionSetError::NotFound(id.clone()))
    }
}

impl Default for OptionSet {
    fn default() -> Self {
        Self::new()
    }
}
