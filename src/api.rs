//! Public API surface for the pick'em core.
//!
//! This file consolidates the strongly typed identifiers used across the
//! crate and re-exports the DTO types. All types derive Serialize/Deserialize
//! for JSON serialization.

pub use crate::models::league::{GameInfo, LeagueConfig};
pub use crate::models::pick::{Pick, PickKey, PickResult, PickWriteRequest, Side};
pub use crate::models::SessionScope;
pub use crate::services::pick_session::{SessionState, SessionUpdate};
pub use crate::services::visibility::PickView;

use serde::{Deserialize, Serialize};

/// League identifier (database primary key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LeagueId(pub i64);

/// User identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

/// Game identifier within a published slate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameId(pub i64);

/// Season year (e.g. 2025).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Season(pub i32);

/// Week number within a season (1-based).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Week(pub i32);

impl LeagueId {
    pub fn new(value: i64) -> Self {
        LeagueId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl UserId {
    pub fn new(value: i64) -> Self {
        UserId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl GameId {
    pub fn new(value: i64) -> Self {
        GameId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl Season {
    pub fn new(value: i32) -> Self {
        Season(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl Week {
    pub fn new(value: i32) -> Self {
        Week(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for LeagueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for Week {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
