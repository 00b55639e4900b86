//! The finalized record of one decision cycle.

use serde::{Deserialize, Serialize};

use crate::domain::animation::AnimationKind;
use crate::domain::foundation::{DecisionId, Timestamp, ValidationError};
use crate::domain::options::{position_of, Choice};

/// Fewest options a recorded decision may carry.
pub const MIN_DECISION_OPTIONS: usize = 2;

/// A completed decision.
///
/// Persisted as `{id, options, winner, method, timestamp}` with an optional
/// `updatedAt`; timestamps are ISO-8601 strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub id: DecisionId,
    pub options: Vec<Choice>,
    pub winner: Choice,
    #[serde(default)]
    pub method: AnimationKind,
    pub timestamp: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl Decision {
    /// Checks the option count and that the winner is one of the options.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_parts(&self.options, Some(&self.winner))
    }

    /// Position of the winner among the options.
    pub fn winner_index(&self) -> Option<usize> {
        position_of(&self.options, &self.winner)
    }
}

fn validate_parts(options: &[Choice], winner: Option<&Choice>) -> Result<(), ValidationError> {
    if options.len() < MIN_DECISION_OPTIONS {
        return Err(ValidationError::too_few(
            "options",
            MIN_DECISION_OPTIONS,
            options.len(),
        ));
    }
    let winner = winner.ok_or_else(|| ValidationError::missing_field("winner"))?;
    if position_of(options, winner).is_none() {
        return Err(ValidationError::invalid_format(
            "winner",
            format!("'{}' is not one of the options", winner.id),
        ));
    }
    Ok(())
}

/// A decision as submitted for recording; missing parts get defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionDraft {
    #[serde(default)]
    pub id: Option<DecisionId>,
    #[serde(default)]
    pub options: Vec<Choice>,
    #[serde(default)]
    pub winner: Option<Choice>,
    #[serde(default)]
    pub method: Option<AnimationKind>,
    #[serde(default)]
    pub timestamp: Option<Timestamp>,
}

impl DecisionDraft {
    pub fn new(options: Vec<Choice>, winner: Choice) -> Self {
        Self {
            options,
            winner: Some(winner),
            ..Self::default()
        }
    }

    pub fn with_method(mut self, method: AnimationKind) -> Self {
        self.method = Some(method);
        self
    }

    pub fn with_id(mut self, id: DecisionId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_parts(&self.options, self.winner.as_ref())
    }

    /// Fills in id, timestamp and method, then returns the record.
    pub fn into_decision(self) -> Result<Decision, ValidationError> {
        self.validate()?;
        let winner = self
            .winner
            .ok_or_else(|| ValidationError::missing_field("winner"))?;
        Ok(Decision {
            id: self.id.unwrap_or_else(DecisionId::generate),
            options: self.options,
            winner,
            method: self.method.unwrap_or_default(),
            timestamp: self.timestamp.unwrap_or_else(Timestamp::now),
            updated_at: None,
        })
    }
}

/// Partial update for a stored decision. The id is never patched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionPatch {
    #[serde(default)]
    pub options: Option<Vec<Choice>>,
    #[serde(default)]
    pub winner: Option<Choice>,
    #[serde(default)]
    pub method: Option<AnimationKind>,
}

impl DecisionPatch {
    pub fn is_empty(&self) -> bool {
        self.options.is_none() && self.winner.is_none() && self.method.is_none()
    }

    /// Returns `current` with the patch applied and `updatedAt` stamped.
    pub fn apply(&self, current: &Decision, now: Timestamp) -> Result<Decision, ValidationError> {
        let mut next = current.clone();
        if let Some(options) = &self.options {
            next.options = options.clone();
        }
        if let Some(winner) = &self.winner {
            next.winner = winner.clone();
        }
        if let Some(method) = self.method {
            next.method = method;
        }
        next.updated_at = Some(now);
        next.validate()?;
        Ok(next)
    }
}
