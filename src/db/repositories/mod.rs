//! Repository implementations module.
//!
//! This module contains implementations of the `PickRepository` trait:
//! - `local`: In-memory implementation for unit testing and local development
//!
//! A remote-backed implementation lives with the deployment that owns the
//! data service credentials; it is not part of this crate.

pub mod local;

pub use local::LocalRepository;
