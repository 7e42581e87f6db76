//! # Pick'em Rust Core
//!
//! Core library for a college-football pick'em client. Users pick sides
//! against a point spread for weekly games, subject to a per-week pick limit;
//! picks become immutable once durably submitted and become visible to other
//! league members at a computed unlock time.
//!
//! Persistent storage, the weekly slate publish, authentication, and scoring
//! are external collaborators reached through the repository abstraction in
//! [`db`]. This crate owns the pick-session and visibility logic only.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Strongly typed identifiers and the public DTO surface
//! - [`models`]: Domain entities (picks, league configuration) and time math
//! - [`db`]: Repository pattern and storage-facing operations
//! - [`services`]: Business logic — the pick-session manager and the
//!   visibility policy

pub mod api;
pub mod db;
pub mod models;
pub mod services;

pub use db::repository::{PickRepository, RepositoryError, RepositoryResult};
pub use services::pick_session::{PickSessionManager, SessionError, SessionState};
pub use services::visibility::{is_visible, pick_view, PickView};
