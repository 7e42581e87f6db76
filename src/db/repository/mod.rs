//! Repository trait for pick storage operations.
//!
//! The trait mirrors the abstract operations the external data service
//! exposes: fetching durable picks, transactional upsert of a pick batch,
//! league configuration reads, and deletion of unlocked picks. No transport
//! detail belongs here.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::api::{LeagueId, Pick, PickKey, PickWriteRequest, SessionScope};
use crate::models::league::LeagueConfig;

/// Repository trait for pick storage operations.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait PickRepository: Send + Sync {
    /// Fetch the durable (already-submitted) picks for a session scope.
    ///
    /// # Arguments
    /// * `scope` - The (league, user, season, week) scope to read
    ///
    /// # Returns
    /// * `Ok(Vec<Pick>)` - All durable picks in the scope, possibly empty
    /// * `Err(RepositoryError)` - If the read fails
    async fn fetch_durable_picks(&self, scope: &SessionScope) -> RepositoryResult<Vec<Pick>>;

    /// Atomically upsert a batch of picks.
    ///
    /// The write is keyed on the composite identity
    /// `(league, user, season, week, game)`: a pick already present for a key
    /// is overwritten, never duplicated. `locked` is forced to `false` on
    /// write; locking is applied by an external process. Either every request
    /// in the batch persists or none does.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of picks written
    /// * `Err(RepositoryError)` - If the transaction fails (nothing written)
    async fn upsert_picks(&self, requests: &[PickWriteRequest]) -> RepositoryResult<usize>;

    /// Fetch league configuration.
    ///
    /// Implementations validate dynamic optional fields at this boundary so
    /// callers never see a structurally invalid configuration.
    async fn fetch_league_config(&self, league: LeagueId) -> RepositoryResult<LeagueConfig>;

    /// Delete a single pick.
    ///
    /// Only unlocked, ungraded picks may be deleted; the precondition is
    /// enforced by the storage side and mirrored by implementations here.
    async fn delete_pick(&self, key: &PickKey) -> RepositoryResult<()>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
