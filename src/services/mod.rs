//! Service layer for business logic.
//!
//! This module sits between the domain models and the repository layer and
//! owns the rules of the game client: how picks accumulate against the weekly
//! limit, when a pick becomes immutable, and when a pick becomes visible to
//! other league members. UI surfaces reflect these decisions; they never
//! re-implement them.

pub mod pick_session;
pub mod visibility;


#[cfg(test)]
#[path = "visibility_tests.rs"]
mod visibility_tests;

pub use pick_session::{PickSessionManager, SessionError, SessionState, SessionUpdate};
pub use visibility::{is_visible, pick_view, pick_window_open, PickView};
