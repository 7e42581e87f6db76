//! Domain entities and time math for the pick'em core.

pub mod league;
pub mod pick;
pub mod time;

#[cfg(test)]
#[path = "time_tests.rs"]
mod time_tests;

pub use pick::SessionScope;
