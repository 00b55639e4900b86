//! HistoryStore - the decision history service.
//!
//! Owns the in-memory [`DecisionLog`] and mirrors it to a [`KeyValueStore`]
//! as one JSON array under one key. The in-memory log is authoritative:
//! storage failures are logged and swallowed, never returned.
//!
//! Constructed once by the host and shared behind an `Arc`.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::config::HistoryConfig;
use crate::domain::animation::AnimationKind;
use crate::domain::foundation::{DecisionId, Timestamp};
use crate::domain::history::{
    Decision, DecisionDraft, DecisionLog, DecisionPatch, DecisionStats, HistoryError,
};
use crate::ports::KeyValueStore;

/// Entries returned by [`HistoryStore::recent`] when no limit is given.
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Bounded, persisted decision history.
pub struct HistoryStore {
    log: Mutex<DecisionLog>,
    store: Arc<dyn KeyValueStore>,
    config: HistoryConfig,
}

impl HistoryStore {
    /// Loads any persisted history and returns the ready service.
    ///
    /// A missing key starts an empty history. Unreadable or corrupt data is
    /// logged and also starts empty; the next write replaces it.
    pub async fn open(store: Arc<dyn KeyValueStore>, config: HistoryConfig) -> Self {
        let log = Self::load(store.as_ref(), &config).await;
        debug!(
            key = %config.storage_key,
            entries = log.len(),
            capacity = log.capacity(),
            "Decision history loaded"
        );
        Self {
            log: Mutex::new(log),
            store,
            config,
        }
    }

    async fn load(store: &dyn KeyValueStore, config: &HistoryConfig) -> DecisionLog {
        let raw = match store.get(&config.storage_key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return DecisionLog::new(config.capacity),
            Err(e) => {
                warn!(key = %config.storage_key, error = %e, "Failed to read decision history");
                return DecisionLog::new(config.capacity);
            }
        };

        match serde_json::from_str::<Vec<Decision>>(&raw) {
            Ok(entries) => DecisionLog::from_entries(entries, config.capacity),
            Err(e) => {
                warn!(key = %config.storage_key, error = %e, "Discarding corrupt decision history");
                DecisionLog::new(config.capacity)
            }
        }
    }

    /// Writes the whole log. Failures are logged only.
    async fn persist(&self, log: &DecisionLog) {
        let json = match serde_json::to_string(log.entries()) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "Failed to serialize decision history");
                return;
            }
        };
        if let Err(e) = self.store.set(&self.config.storage_key, &json).await {
            warn!(
                key = %self.config.storage_key,
                entries = log.len(),
                error = %e,
                "Failed to persist decision history"
            );
        }
    }

    async fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Snapshot of every entry, newest first.
    pub async fn get_all(&self) -> Vec<Decision> {
        self.pause(self.config.latency().read).await;
        self.log.lock().await.entries().to_vec()
    }

    pub async fn get_by_id(&self, id: &DecisionId) -> Result<Decision, HistoryError> {
        self.pause(self.config.latency().read).await;
        self.log.lock().await.get(id).cloned()
    }

    /// Validates, fills defaults, prepends and persists. Returns the stored copy.
    ///
    /// A rejected draft leaves the history untouched.
    pub async fn create(&self, draft: DecisionDraft) -> Result<Decision, HistoryError> {
        self.pause(self.config.latency().write).await;
        let decision = draft.into_decision()?;

        let mut log = self.log.lock().await;
        let dropped = log.prepend(decision.clone());
        if dropped > 0 {
            debug!(dropped, capacity = log.capacity(), "Oldest decisions dropped");
        }
        self.persist(&log).await;

        info!(
            decision_id = %decision.id,
            method = %decision.method,
            winner = %decision.winner.text,
            "Decision recorded"
        );
        Ok(decision)
    }

    /// Applies `patch`, stamps `updatedAt`, persists and returns the new copy.
    pub async fn update(
        &self,
        id: &DecisionId,
        patch: DecisionPatch,
    ) -> Result<Decision, HistoryError> {
        self.pause(self.config.latency().write).await;
        let mut log = self.log.lock().await;
        let updated = log.update(id, &patch, Timestamp::now())?;
        self.persist(&log).await;
        debug!(decision_id = %id, "Decision updated");
        Ok(updated)
    }

    /// Removes and returns the entry.
    pub async fn delete(&self, id: &DecisionId) -> Result<Decision, HistoryError> {
        self.pause(self.config.latency().delete).await;
        let mut log = self.log.lock().await;
        let removed = log.remove(id)?;
        self.persist(&log).await;
        debug!(decision_id = %id, "Decision deleted");
        Ok(removed)
    }

    /// Empties the history and returns the (empty) snapshot.
    pub async fn clear_all(&self) -> Vec<Decision> {
        self.pause(self.config.latency().write).await;
        let mut log = self.log.lock().await;
        log.clear();
        self.persist(&log).await;
        debug!("Decision history cleared");
        log.entries().to_vec()
    }

    /// The newest `limit` entries; [`DEFAULT_RECENT_LIMIT`] when `None`.
    pub async fn recent(&self, limit: Option<usize>) -> Vec<Decision> {
        self.pause(self.config.latency().read).await;
        self.log
            .lock()
            .await
            .recent(limit.unwrap_or(DEFAULT_RECENT_LIMIT))
    }

    pub async fn by_method(&self, method: AnimationKind) -> Vec<Decision> {
        self.pause(self.config.latency().read).await;
        self.log.lock().await.by_method(method)
    }

    pub async fn stats(&self) -> DecisionStats {
        self.pause(self.config.latency().stats).await;
        self.log.lock().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.log.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.log.lock().await.is_empty()
    }
}
