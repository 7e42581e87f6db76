//! Pick-session management.
//!
//! [`PickSessionManager`] mediates every mutation of the in-progress pick set
//! for a single (league, user, season, week) scope and commits it atomically
//! through the repository. It owns the client-side rules: the per-week pick
//! limit, immutability of already-submitted picks, the kickoff guard, and the
//! visibility-unlock timestamp stamped on each staged pick.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::api::{GameId, Pick, PickWriteRequest, SessionScope, Side};
use crate::db::repo_config::SessionSettings;
use crate::db::repository::{PickRepository, RepositoryError};
use crate::models::league::{GameInfo, LeagueConfig};
use crate::models::time::unlock_at_for;
use crate::services::visibility::pick_window_open;

/// Default deadline for the remote submission call.
pub const DEFAULT_SUBMIT_TIMEOUT: Duration = Duration::from_secs(15);

/// Errors returned by session operations.
///
/// All variants are local, recoverable conditions: none is fatal, and a
/// failed submission always leaves the staged picks intact for retry.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A durable pick already exists for this game; submitted picks are
    /// immutable from the client.
    #[error("Pick for game {game} was already submitted and cannot be changed")]
    AlreadySubmitted { game: GameId },

    /// The session already holds `limit` picks and this game is not among
    /// them.
    #[error("Pick limit of {limit} reached")]
    LimitReached { limit: usize },

    /// Submission attempted with nothing staged; no repository call is made.
    #[error("No picks staged; nothing to submit")]
    EmptySession,

    /// The game has kicked off; picks for it are closed.
    #[error("Game {game} has kicked off; picks are closed")]
    GameLocked { game: GameId },

    /// A submission is suspended on the repository; mutation is blocked
    /// until it resolves.
    #[error("A submission is already in flight")]
    SubmissionInFlight,

    /// League configuration (or the durable pick state) could not be loaded.
    /// The session fails closed: no `select_side` is possible without a
    /// known pick limit. Defaulting is the caller's explicit choice via
    /// [`PickSessionManager::with_config`].
    #[error("League configuration unavailable: {0}")]
    ConfigUnavailable(#[source] RepositoryError),

    /// The durable write failed or timed out; the staged picks are retained
    /// verbatim so the user may retry.
    #[error("Submission failed: {0}")]
    SubmissionFailed(#[source] RepositoryError),
}

/// Observable state of a pick session.
///
/// `Idle → Selecting → Complete → Submitting → Submitted`, with failure
/// returning to `Selecting`/`Complete` and `clear_session` returning to
/// `Idle` from any non-`Submitting` state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing staged.
    Idle,
    /// Staged picks below the limit.
    Selecting,
    /// Staged pick count equals the limit.
    Complete,
    /// A submission is suspended on the repository.
    Submitting,
    /// The last submission succeeded and the session was cleared.
    Submitted,
}

/// Internal lifecycle marker; counts refine `Editing` into
/// Idle/Selecting/Complete.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Phase {
    Editing,
    Submitting,
    Submitted,
}

/// Result of a successful `select_side`, reported back to the caller.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SessionUpdate {
    /// Number of staged picks after the update.
    pub count: usize,
    /// The league's per-week pick limit.
    pub limit: usize,
    /// `count == limit`. When set, the caller should prompt for submission;
    /// that prompt is policy for the UI, the signal is computed here.
    pub complete: bool,
}

/// Session-scoped service owning the in-progress pick set.
///
/// One manager exists per (league, user, season, week) scope and is edited
/// serially by one interactive actor; methods take `&mut self`, so mutation
/// cannot overlap the suspended submission call. The explicit
/// [`SessionState::Submitting`] guard makes the re-entrancy rule observable
/// and blocks all mutation while a submission is in flight (the simpler of
/// the two documented choices). A submission future dropped before it
/// resolves restores the editable state, so staged picks always remain
/// retryable.
pub struct PickSessionManager {
    repo: Arc<dyn PickRepository>,
    scope: SessionScope,
    config: LeagueConfig,
    submit_timeout: Duration,
    /// Games already covered by a durable pick; never stageable again.
    durable_games: HashSet<GameId>,
    /// Kickoff times from the published slate, when attached.
    slate: HashMap<GameId, DateTime<Utc>>,
    /// Ordered by first selection; upsert-by-game keeps one entry per game.
    staged: Vec<PickWriteRequest>,
    phase: Phase,
}

impl PickSessionManager {
    /// Construct a manager for a scope, loading league configuration and
    /// durable picks through the repository.
    ///
    /// # Arguments
    /// * `repo` - Repository backing durable storage
    /// * `scope` - The (league, user, season, week) the session operates in
    ///
    /// # Returns
    /// * `Ok(PickSessionManager)` ready for selection
    /// * `Err(SessionError::ConfigUnavailable)` if configuration or durable
    ///   state cannot be loaded (fail closed)
    pub async fn for_scope(
        repo: Arc<dyn PickRepository>,
        scope: SessionScope,
    ) -> Result<Self, SessionError> {
        let config = repo
            .fetch_league_config(scope.league)
            .await
            .map_err(SessionError::ConfigUnavailable)?;
        let durable = repo
            .fetch_durable_picks(&scope)
            .await
            .map_err(SessionError::ConfigUnavailable)?;
        Ok(Self::with_config(repo, scope, config, durable))
    }

    /// Construct a manager from state the caller already holds.
    ///
    /// The caller owns the validity of `config` (including any defaulting)
    /// and the completeness of `durable`.
    pub fn with_config(
        repo: Arc<dyn PickRepository>,
        scope: SessionScope,
        config: LeagueConfig,
        durable: Vec<Pick>,
    ) -> Self {
        let durable_games = durable.iter().map(|p| p.key.game).collect();
        Self {
            repo,
            scope,
            config,
            submit_timeout: DEFAULT_SUBMIT_TIMEOUT,
            durable_games,
            slate: HashMap::new(),
            staged: Vec::new(),
            phase: Phase::Editing,
        }
    }

    /// Attach the published slate so the kickoff guard can be enforced.
    ///
    /// Games the slate does not know are not guarded here; slate integrity
    /// belongs to the external service.
    pub fn with_slate(mut self, games: &[GameInfo]) -> Self {
        self.slate = games
            .iter()
            .map(|g| (g.game_id, g.kickoff_at))
            .collect();
        self
    }

    /// Override the submission deadline.
    pub fn with_submit_timeout(mut self, timeout: Duration) -> Self {
        self.submit_timeout = timeout;
        self
    }

    /// Apply session tuning loaded from configuration
    /// (see [`RepositoryConfig`](crate::db::RepositoryConfig)).
    pub fn with_settings(mut self, settings: &SessionSettings) -> Self {
        self.submit_timeout = settings.submit_timeout();
        self
    }

    /// The deadline applied to the remote submission call.
    pub fn submit_timeout(&self) -> Duration {
        self.submit_timeout
    }

    /// Stage a side for a game, evaluated at an injected instant.
    ///
    /// Preconditions, in order: the game must not have kicked off
    /// (`GameLocked`), must not already be durably picked
    /// (`AlreadySubmitted`), and staging a new game must not exceed the pick
    /// limit (`LimitReached`). Staging the same game again replaces the
    /// earlier selection in place rather than appending.
    ///
    /// The staged pick's `unlock_at` is recomputed fresh from `now`, never
    /// inherited from a prior selection.
    pub fn select_side_at(
        &mut self,
        game: GameId,
        side: Side,
        line_value: f64,
        now: DateTime<Utc>,
    ) -> Result<SessionUpdate, SessionError> {
        if self.phase == Phase::Submitting {
            return Err(SessionError::SubmissionInFlight);
        }
        if let Some(&kickoff_at) = self.slate.get(&game) {
            if !pick_window_open(kickoff_at, now) {
                return Err(SessionError::GameLocked { game });
            }
        }
        if self.durable_games.contains(&game) {
            return Err(SessionError::AlreadySubmitted { game });
        }

        let existing = self.staged.iter().position(|r| r.key.game == game);
        if existing.is_none() && self.staged.len() >= self.config.pick_limit {
            return Err(SessionError::LimitReached {
                limit: self.config.pick_limit,
            });
        }

        let unlock_at = unlock_at_for(now);
        match existing {
            Some(index) => {
                let request = &mut self.staged[index];
                request.side = side;
                request.line_value = line_value;
                request.unlock_at = Some(unlock_at);
            }
            None => {
                self.staged.push(PickWriteRequest::new(
                    self.scope.key_for(game),
                    side,
                    line_value,
                    unlock_at,
                ));
            }
        }

        // A selection after a successful submit begins a new staging round.
        self.phase = Phase::Editing;

        let update = self.summary();
        log::debug!(
            "staged pick for game {} ({}/{} picks)",
            game,
            update.count,
            update.limit
        );
        if update.complete {
            log::info!("pick session complete at {} picks", update.limit);
        }
        Ok(update)
    }

    /// Stage a side for a game, evaluated at the current wall clock.
    pub fn select_side(
        &mut self,
        game: GameId,
        side: Side,
        line_value: f64,
    ) -> Result<SessionUpdate, SessionError> {
        self.select_side_at(game, side, line_value, Utc::now())
    }

    /// Commit every staged pick to durable storage in a single transactional
    /// call.
    ///
    /// On success the staged set is cleared and the submitted count is
    /// returned. On failure — including a timeout, which is treated
    /// identically — the staged set is left verbatim so the user may retry.
    pub async fn submit_all(&mut self) -> Result<usize, SessionError> {
        if self.phase == Phase::Submitting {
            return Err(SessionError::SubmissionInFlight);
        }
        if self.staged.is_empty() {
            return Err(SessionError::EmptySession);
        }

        self.phase = Phase::Submitting;
        let submit_timeout = self.submit_timeout;
        let repo = Arc::clone(&self.repo);
        // If the caller drops this future at the await point, the guard puts
        // the session back into an editable phase with the staged picks
        // intact, so a cancelled submission never strands the user.
        let guard = PhaseReset { manager: self };
        let write = repo.upsert_picks(&guard.manager.staged);
        let outcome = tokio::time::timeout(submit_timeout, write).await;

        match outcome {
            Ok(Ok(count)) => {
                let manager = &mut *guard.manager;
                manager
                    .durable_games
                    .extend(manager.staged.iter().map(|r| r.key.game));
                manager.staged.clear();
                manager.phase = Phase::Submitted;
                log::info!("submitted {} picks for {}", count, manager.scope_label());
                Ok(count)
            }
            Ok(Err(err)) => {
                guard.manager.phase = Phase::Editing;
                log::warn!("submission failed, session retained: {}", err);
                Err(SessionError::SubmissionFailed(err))
            }
            Err(_elapsed) => {
                guard.manager.phase = Phase::Editing;
                let err = RepositoryError::timeout(format!(
                    "Submission deadline of {:?} elapsed",
                    submit_timeout
                ))
                .with_operation("upsert_picks");
                log::warn!("submission timed out, session retained: {}", err);
                Err(SessionError::SubmissionFailed(err))
            }
        }
    }

    /// Discard every staged pick. Durable picks are untouched.
    pub fn clear_session(&mut self) -> Result<(), SessionError> {
        if self.phase == Phase::Submitting {
            return Err(SessionError::SubmissionInFlight);
        }
        self.staged.clear();
        self.phase = Phase::Editing;
        Ok(())
    }

    /// Current position in the session state machine.
    pub fn state(&self) -> SessionState {
        match self.phase {
            Phase::Submitting => SessionState::Submitting,
            Phase::Submitted => SessionState::Submitted,
            Phase::Editing => {
                if self.staged.is_empty() {
                    SessionState::Idle
                } else if self.staged.len() >= self.config.pick_limit {
                    SessionState::Complete
                } else {
                    SessionState::Selecting
                }
            }
        }
    }

    /// Count, limit, and completeness of the staged set.
    pub fn summary(&self) -> SessionUpdate {
        let count = self.staged.len();
        let limit = self.config.pick_limit;
        SessionUpdate {
            count,
            limit,
            complete: count == limit,
        }
    }

    /// The staged picks, in selection order.
    pub fn temporary_picks(&self) -> &[PickWriteRequest] {
        &self.staged
    }

    /// Whether the staged set has reached the pick limit.
    pub fn is_complete(&self) -> bool {
        self.summary().complete
    }

    /// The scope this session operates in.
    pub fn scope(&self) -> SessionScope {
        self.scope
    }

    /// The league configuration the session was constructed with.
    pub fn config(&self) -> &LeagueConfig {
        &self.config
    }

    fn scope_label(&self) -> String {
        format!(
            "league {} week {}/{}",
            self.scope.league, self.scope.week, self.scope.season
        )
    }
}

/// Restores an editable phase when a submission future is dropped mid-flight.
///
/// The success and failure arms of `submit_all` overwrite `Submitting`
/// themselves; the drop path only fires when the future is cancelled at the
/// await point, which must never leave the session stuck rejecting mutation.
struct PhaseReset<'a> {
    manager: &'a mut PickSessionManager,
}

impl Drop for PhaseReset<'_> {
    fn drop(&mut self) {
        if self.manager.phase == Phase::Submitting {
            self.manager.phase = Phase::Editing;
            log::warn!("submission dropped before resolving; session restored for retry");
        }
    }
}
