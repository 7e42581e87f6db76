//! League configuration and slate entities.
//!
//! [`LeagueConfig`] is owned by the external data service and read-only to
//! this crate. Dynamic optional fields (`lines_available`, `publish_window`)
//! are explicit schema fields with documented defaults and are validated at
//! the repository boundary, not cast loosely at use sites.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::GameId;

/// Default number of picks a member may stage per week.
pub const DEFAULT_PICK_LIMIT: usize = 5;

fn default_pick_limit() -> usize {
    DEFAULT_PICK_LIMIT
}

fn default_push_points() -> f64 {
    0.5
}

/// League scoring and session configuration, supplied by the data service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueConfig {
    /// Maximum number of picks per user per week.
    #[serde(default = "default_pick_limit")]
    pub pick_limit: usize,
    /// Points awarded when a game lands exactly on the spread.
    #[serde(default = "default_push_points")]
    pub push_points: f64,
    /// Whether spreads have been published for the current week.
    /// `None` means the service did not report it; treated as available.
    #[serde(default)]
    pub lines_available: Option<bool>,
    /// When the commissioner published (or will publish) the current slate.
    #[serde(default)]
    pub publish_window: Option<DateTime<Utc>>,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            pick_limit: DEFAULT_PICK_LIMIT,
            push_points: default_push_points(),
            lines_available: None,
            publish_window: None,
        }
    }
}

impl LeagueConfig {
    /// Validate configuration as it crosses the repository boundary.
    ///
    /// A zero pick limit would make every `select_side` fail and almost
    /// certainly indicates a broken row rather than an intentional setting.
    pub fn validate(&self) -> Result<(), String> {
        if self.pick_limit == 0 {
            return Err("pick_limit must be at least 1".to_string());
        }
        if self.push_points < 0.0 {
            return Err(format!(
                "push_points must be non-negative, got {}",
                self.push_points
            ));
        }
        Ok(())
    }
}

/// A game on the published slate, as needed by the pick-window guard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameInfo {
    pub game_id: GameId,
    pub home_team: String,
    pub away_team: String,
    pub kickoff_at: DateTime<Utc>,
}
