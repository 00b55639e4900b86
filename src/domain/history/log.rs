//! Bounded, newest-first sequence of decisions.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use super::decision::{Decision, DecisionPatch};
use crate::domain::animation::AnimationKind;
use crate::domain::foundation::{
    DecisionId, DomainError, ErrorCode, Timestamp, ValidationError,
};

/// Decisions kept before the oldest are dropped.
pub const DEFAULT_CAPACITY: usize = 50;

/// Entries listed under `recent_activity` in [`DecisionStats`].
pub const RECENT_ACTIVITY_LEN: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("Invalid decision: {0}")]
    Validation(#[from] ValidationError),

    #[error("Decision not found: {0}")]
    NotFound(DecisionId),
}

impl HistoryError {
    pub fn code(&self) -> ErrorCode {
        match self {
            HistoryError::Validation(_) => ErrorCode::ValidationFailed,
            HistoryError::NotFound(_) => ErrorCode::DecisionNotFound,
        }
    }
}

impl From<HistoryError> for DomainError {
    fn from(err: HistoryError) -> Self {
        match err {
            HistoryError::Validation(inner) => inner.into(),
            HistoryError::NotFound(id) => {
                DomainError::new(ErrorCode::DecisionNotFound, format!("Decision not found: {}", id))
                    .with_detail("id", id.as_str())
            }
        }
    }
}

/// Summary of one recent decision.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub id: DecisionId,
    pub winner: String,
    pub method: AnimationKind,
    pub timestamp: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionStats {
    pub total: usize,
    pub by_method: BTreeMap<AnimationKind, usize>,
    pub recent_activity: Vec<RecentActivity>,
}

/// In-memory history. Index 0 is the newest entry.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionLog {
    entries: Vec<Decision>,
    capacity: usize,
}

impl DecisionLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Wraps previously persisted entries, dropping any beyond `capacity`.
    pub fn from_entries(mut entries: Vec<Decision>, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        entries.truncate(capacity);
        Self { entries, capacity }
    }

    pub fn entries(&self) -> &[Decision] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Puts `decision` first. Returns how many old entries were dropped.
    pub fn prepend(&mut self, decision: Decision) -> usize {
        self.entries.insert(0, decision);
        let dropped = self.entries.len().saturating_sub(self.capacity);
        self.entries.truncate(self.capacity);
        dropped
    }

    pub fn find(&self, id: &DecisionId) -> Option<&Decision> {
        self.entries.iter().find(|d| &d.id == id)
    }

    pub fn get(&self, id: &DecisionId) -> Result<&Decision, HistoryError> {
        self.find(id)
            .ok_or_else(|| HistoryError::NotFound(id.clone()))
    }

    /// Applies `patch` in place and returns the updated copy.
    pub fn update(
        &mut self,
        id: &DecisionId,
        patch: &DecisionPatch,
        now: Timestamp,
    ) -> Result<Decision, HistoryError> {
        let slot = self
            .entries
            .iter_mut()
            .find(|d| &d.id == id)
            .ok_or_else(|| HistoryError::NotFound(id.clone()))?;
        let next = patch.apply(slot, now)?;
        *slot = next.clone();
        Ok(next)
    }

    pub fn remove(&mut self, id: &DecisionId) -> Result<Decision, HistoryError> {
        let index = self
            .entries
            .iter()
            .position(|d| &d.id == id)
            .ok_or_else(|| HistoryError::NotFound(id.clone()))?;
        Ok(self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn recent(&self, limit: usize) -> Vec<Decision> {
        self.entries.iter().take(limit).cloned().collect()
    }

    pub fn by_method(&self, method: AnimationKind) -> Vec<Decision> {
        self.entries
            .iter()
            .filter(|d| d.method == method)
            .cloned()
            .collect()
    }

    pub fn stats(&self) -> DecisionStats {
        let mut by_method = BTreeMap::new();
        for decision in &self.entries {
            *by_method.entry(decision.method).or_insert(0) += 1;
        }
        DecisionStats {
            total: self.entries.len(),
            by_method,
            recent_activity: self
                .entries
                .iter()
                .take(RECENT_ACTIVITY_LEN)
                .map(|d| RecentActivity {
                    id: d.id.clone(),
                    winner: d.winner.text.clone(),
                    method: d.method,
                    timestamp: d.timestamp,
                })
                .collect(),
        }
    }
}

impl Default for DecisionLog {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::history::DecisionDraft;
    use crate::domain::options::Choice;

    fn decision(n: usize, method: AnimationKind) -> Decision {
        let opts = vec![
            Choice::new("1", format!("A{}", n), "#FF006E"),
            Choice::new("2", format!("B{}", n), "#8338EC"),
        ];
        DecisionDraft::new(opts.clone(), opts[0].clone())
            .with_id(DecisionId::new(format!("decision_{}", n)))
            .with_method(method)
            .into_decision()
            .unwrap()
    }

    #[test]
    fn prepend_keeps_newest_first_and_caps_length() {
        let mut log = DecisionLog::default();
        let mut dropped = 0;
        for n in 0..51 {
            dropped += log.prepend(decision(n, AnimationKind::Wheel));
        }
        assert_eq!(log.len(), 50);
        assert_eq!(dropped, 1);
        assert_eq!(log.entries()[0].id.as_str(), "decision_50");
        assert_eq!(log.entries()[49].id.as_str(), "decision_1");
        assert!(log.find(&DecisionId::new("decision_0")).is_none());
    }

    #[test]
    fn from_entries_truncates_to_capacity() {
        let entries = (0..5).map(|n| decision(n, AnimationKind::Dice)).collect();
        let log = DecisionLog::from_entries(entries, 3);
        assert_eq!(log.len(), 3);
        assert_eq!(log.entries()[0].id.as_str(), "decision_0");
    }

    #[test]
    fn update_and_remove_unknown_ids_fail() {
        let mut log = DecisionLog::default();
        log.prepend(decision(1, AnimationKind::Wheel));
        let missing = DecisionId::new("decision_missing");

        assert_eq!(
            log.update(&missing, &DecisionPatch::default(), Timestamp::now()),
            Err(HistoryError::NotFound(missing.clone()))
        );
        assert_eq!(log.remove(&missing), Err(HistoryError::NotFound(missing)));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn invalid_update_leaves_the_entry_untouched() {
        let mut log = DecisionLog::default();
        let original = decision(1, AnimationKind::Wheel);
        log.prepend(original.clone());

        let patch = DecisionPatch {
            winner: Some(Choice::new("9", "Elsewhere", "#000000")),
            ..DecisionPatch::default()
        };
        let err = log.update(&original.id, &patch, Timestamp::now()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert_eq!(log.entries()[0], original);
    }

    #[test]
    fn stats_count_methods_and_list_recent_activity() {
        let mut log = DecisionLog::default();
        for n in 0..4 {
            log.prepend(decision(n, AnimationKind::Coin));
        }
        for n in 4..7 {
            log.prepend(decision(n, AnimationKind::Dice));
        }

        let stats = log.stats();
        assert_eq!(stats.total, 7);
        assert_eq!(stats.by_method.get(&AnimationKind::Coin), Some(&4));
        assert_eq!(stats.by_method.get(&AnimationKind::Dice), Some(&3));
        assert_eq!(stats.by_method.get(&AnimationKind::Wheel), None);
        assert_eq!(stats.recent_activity.len(), RECENT_ACTIVITY_LEN);
        assert_eq!(stats.recent_activity[0].winner, "A6");

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["byMethod"]["coin"], 4);
        assert!(json["recentActivity"].is_array());
    }

    #[test]
    fn recent_and_by_method_filter_without_mutating() {
        let mut log = DecisionLog::default();
        log.prepend(decision(1, AnimationKind::Wheel));
        log.prepend(decision(2, AnimationKind::Coin));
        log.prepend(decision(3, AnimationKind::Wheel));

        assert_eq!(log.recent(2).len(), 2);
        assert_eq!(log.recent(2)[0].id.as_str(), "decision_3");
        assert_eq!(log.by_method(AnimationKind::Wheel).len(), 2);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn not_found_converts_to_domain_error() {
        let err: DomainError = HistoryError::NotFound(DecisionId::new("decision_x")).into();
        assert_eq!(err.code, ErrorCode::DecisionNotFound);
        assert_eq!(err.details.get("id").map(String::as_str), Some("decision_x"));
    }
}
