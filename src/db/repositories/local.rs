//! In-memory repository implementation.
//!
//! [`LocalRepository`] backs unit tests and local development. It reproduces
//! the semantics the remote data service guarantees: upsert keyed on the
//! composite pick identity, all-or-nothing batch writes, `locked` forced to
//! `false` on write, and the delete precondition (unlocked, ungraded picks
//! only). A fail-next-write switch lets tests exercise the failure paths
//! without a network.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use super::super::repository::{
    ErrorContext, PickRepository, RepositoryError, RepositoryResult,
};
use crate::api::{LeagueId, Pick, PickKey, PickWriteRequest, SessionScope};
use crate::models::league::LeagueConfig;

#[derive(Default)]
struct Store {
    picks: HashMap<PickKey, Pick>,
    configs: HashMap<LeagueId, LeagueConfig>,
    fail_next_write: bool,
}

/// In-memory pick repository.
#[derive(Clone, Default)]
pub struct LocalRepository {
    store: Arc<RwLock<Store>>,
}

impl LocalRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a league configuration.
    pub fn insert_league_config(&self, league: LeagueId, config: LeagueConfig) {
        self.store.write().configs.insert(league, config);
    }

    /// Insert a durable pick directly, bypassing the write path.
    ///
    /// Intended for seeding state in tests and local development.
    pub fn seed_pick(&self, pick: Pick) {
        self.store.write().picks.insert(pick.key, pick);
    }

    /// Seed durable picks from a JSON array of [`Pick`] records.
    pub fn seed_picks_json(&self, json: &str) -> RepositoryResult<usize> {
        let picks: Vec<Pick> = serde_json::from_str(json).map_err(|e| {
            RepositoryError::validation_with_context(
                format!("Failed to parse pick seed data: {}", e),
                ErrorContext::new("seed_picks_json").with_entity("pick"),
            )
        })?;
        let count = picks.len();
        let mut store = self.store.write();
        for pick in picks {
            store.picks.insert(pick.key, pick);
        }
        Ok(count)
    }

    /// Make the next write operation fail with a retryable transaction error.
    pub fn fail_next_write(&self) {
        self.store.write().fail_next_write = true;
    }

    /// Look up a single pick by key.
    pub fn pick(&self, key: &PickKey) -> Option<Pick> {
        self.store.read().picks.get(key).cloned()
    }

    /// Total number of durable picks held.
    pub fn pick_count(&self) -> usize {
        self.store.read().picks.len()
    }
}

#[async_trait]
impl PickRepository for LocalRepository {
    async fn fetch_durable_picks(&self, scope: &SessionScope) -> RepositoryResult<Vec<Pick>> {
        let store = self.store.read();
        let mut picks: Vec<Pick> = store
            .picks
            .values()
            .filter(|p| p.key.scope() == *scope)
            .cloned()
            .collect();
        // Deterministic order for callers and tests.
        picks.sort_by_key(|p| p.key.game);
        Ok(picks)
    }

    async fn upsert_picks(&self, requests: &[PickWriteRequest]) -> RepositoryResult<usize> {
        let mut store = self.store.write();
        if store.fail_next_write {
            store.fail_next_write = false;
            return Err(RepositoryError::transaction_with_context(
                "Injected write failure",
                ErrorContext::new("upsert_picks").with_entity("pick"),
            ));
        }

        let now = Utc::now();
        // Stage the full batch before touching the map so a bad request
        // leaves the store untouched.
        let mut staged = Vec::with_capacity(requests.len());
        for request in requests {
            if !request.line_value.is_finite() {
                return Err(RepositoryError::validation_with_context(
                    format!("line_value must be finite, got {}", request.line_value),
                    ErrorContext::new("upsert_picks")
                        .with_entity("pick")
                        .with_entity_id(request.key),
                ));
            }
            let created_at = store
                .picks
                .get(&request.key)
                .map(|existing| existing.created_at)
                .unwrap_or(now);
            staged.push(Pick {
                key: request.key,
                side: request.side,
                line_value: request.line_value,
                // Locking is applied by an external process, never by a write.
                locked: false,
                unlock_at: request.unlock_at,
                result: None,
                points: None,
                created_at,
                updated_at: now,
            });
        }

        let count = staged.len();
        for pick in staged {
            store.picks.insert(pick.key, pick);
        }
        log::debug!("upserted {} picks", count);
        Ok(count)
    }

    async fn fetch_league_config(&self, league: LeagueId) -> RepositoryResult<LeagueConfig> {
        let store = self.store.read();
        let config = store.configs.get(&league).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("No configuration for league {}", league),
                ErrorContext::new("fetch_league_config")
                    .with_entity("league_config")
                    .with_entity_id(league),
            )
        })?;
        config.validate().map_err(|message| {
            RepositoryError::validation_with_context(
                message,
                ErrorContext::new("fetch_league_config")
                    .with_entity("league_config")
                    .with_entity_id(league),
            )
        })?;
        Ok(config)
    }

    async fn delete_pick(&self, key: &PickKey) -> RepositoryResult<()> {
        let mut store = self.store.write();
        let pick = store.picks.get(key).ok_or_else(|| {
            RepositoryError::not_found_with_context(
                "Pick does not exist",
                ErrorContext::new("delete_pick")
                    .with_entity("pick")
                    .with_entity_id(key),
            )
        })?;
        if pick.locked {
            return Err(RepositoryError::validation_with_context(
                "Locked picks cannot be deleted",
                ErrorContext::new("delete_pick")
                    .with_entity("pick")
                    .with_entity_id(key),
            ));
        }
        if pick.is_graded() {
            return Err(RepositoryError::validation_with_context(
                "Graded picks cannot be deleted",
                ErrorContext::new("delete_pick")
                    .with_entity("pick")
                    .with_entity_id(key),
            ));
        }
        store.picks.remove(key);
        Ok(())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
