//! Pick entities and write shapes.
//!
//! A [`Pick`] is a user's selection for one game in one league/week: the
//! chosen side and the spread value captured at selection time. Picks are
//! identified by the composite key `(league, user, season, week, game)` and
//! are unique per user per game per week.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{GameId, LeagueId, Season, UserId, Week};

/// The side of a game a pick is placed on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Home,
    Away,
}

/// Graded outcome of a pick, produced by the external grading process.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PickResult {
    Win,
    Loss,
    Push,
}

/// The scope a pick session operates in: one user picking in one league for
/// one week of one season.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionScope {
    pub league: LeagueId,
    pub user: UserId,
    pub season: Season,
    pub week: Week,
}

impl SessionScope {
    pub fn new(league: LeagueId, user: UserId, season: Season, week: Week) -> Self {
        Self {
            league,
            user,
            season,
            week,
        }
    }

    /// Composite key for a game within this scope.
    pub fn key_for(&self, game: GameId) -> PickKey {
        PickKey {
            league: self.league,
            user: self.user,
            season: self.season,
            week: self.week,
            game,
        }
    }
}

/// Composite identity of a pick.
///
/// Durable storage upserts on this key; there is never more than one durable
/// pick per key.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PickKey {
    pub league: LeagueId,
    pub user: UserId,
    pub season: Season,
    pub week: Week,
    pub game: GameId,
}

impl PickKey {
    pub fn scope(&self) -> SessionScope {
        SessionScope {
            league: self.league,
            user: self.user,
            season: self.season,
            week: self.week,
        }
    }
}

impl std::fmt::Display for PickKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "league={} user={} season={} week={} game={}",
            self.league, self.user, self.season, self.week, self.game
        )
    }
}

/// A durable pick as read back from storage.
///
/// Once submitted, `side`/`line_value`/`locked` are immutable from the
/// client's perspective; only the external grading process later populates
/// `result` and `points`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pick {
    pub key: PickKey,
    pub side: Side,
    /// Spread value captured at selection time, never recomputed.
    pub line_value: f64,
    pub locked: bool,
    /// When the pick becomes visible to non-owning league members.
    /// `None` means no visibility restriction is configured.
    pub unlock_at: Option<DateTime<Utc>>,
    pub result: Option<PickResult>,
    pub points: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Pick {
    /// Whether the external grading process has produced a result.
    pub fn is_graded(&self) -> bool {
        self.result.is_some()
    }
}

/// Write shape for the repository upsert.
///
/// Omits `locked`, `result`, `points`, and timestamps: those are managed by
/// the storage side (`locked` is forced to `false` on write, locking is
/// applied by an external process).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickWriteRequest {
    pub key: PickKey,
    pub side: Side,
    pub line_value: f64,
    pub unlock_at: Option<DateTime<Utc>>,
}

impl PickWriteRequest {
    pub fn new(key: PickKey, side: Side, line_value: f64, unlock_at: DateTime<Utc>) -> Self {
        Self {
            key,
            side,
            line_value,
            unlock_at: Some(unlock_at),
        }
    }
}
