//! Pick visibility policy.
//!
//! Decides, for a given pick and viewing user, whether selection details
//! (side, value, result, points) may be disclosed, versus only a redacted
//! "locked" placeholder. Every function here is pure: time is injected, never
//! read from the wall clock, so the policy is deterministic and testable
//! without a rendering surface.

use chrono::{DateTime, Utc};

use crate::api::{Pick, PickResult, Side, UserId};

/// Whether `viewer` may see the selection details of `pick` at `now`.
///
/// - Owners always see their own picks regardless of lock state.
/// - A pick without an `unlock_at` carries no visibility restriction.
/// - Otherwise the pick is visible once `now` reaches `unlock_at`.
pub fn is_visible(pick: &Pick, viewer: UserId, now: DateTime<Utc>) -> bool {
    if viewer == pick.key.user {
        return true;
    }
    match pick.unlock_at {
        None => true,
        Some(unlock_at) => now >= unlock_at,
    }
}

/// Render-safe view of a pick for a given viewer.
///
/// Callers must render from this view rather than the raw [`Pick`]: a
/// `Locked` view exposes only the unlock timestamp, never the side, value,
/// result, or points.
#[derive(Debug, Clone, PartialEq)]
pub enum PickView {
    Visible {
        side: Side,
        line_value: f64,
        result: Option<PickResult>,
        points: Option<f64>,
    },
    Locked {
        unlock_at: DateTime<Utc>,
    },
}

/// Apply the visibility policy and produce the matching [`PickView`].
pub fn pick_view(pick: &Pick, viewer: UserId, now: DateTime<Utc>) -> PickView {
    match pick.unlock_at {
        // A hidden pick always has an unlock timestamp to show.
        Some(unlock_at) if !is_visible(pick, viewer, now) => PickView::Locked { unlock_at },
        _ => PickView::Visible {
            side: pick.side,
            line_value: pick.line_value,
            result: pick.result,
            points: pick.points,
        },
    }
}

/// Whether picks are still open for a game kicking off at `kickoff_at`.
///
/// The rule the session manager enforces before staging a pick; the UI
/// merely reflects it (for example by disabling a button).
pub fn pick_window_open(kickoff_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now < kickoff_at
}
