//! Storage-facing module for pick data.
//!
//! This module provides abstractions over the external data service via the
//! Repository pattern, allowing different storage backends to be swapped
//! easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (mobile screens, CLI tooling, ...)   │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services/) - Business Logic             │
//! │  - Pick-session staging and submission                  │
//! │  - Visibility policy                                    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! The remote data service (tables, row policies, the publish function) is an
//! external collaborator; production deployments plug a remote-backed
//! implementation of [`PickRepository`] in through the factory, while the
//! [`LocalRepository`] serves unit testing and local development.

pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;

pub use factory::{RepositoryFactory, RepositoryType};
pub use repo_config::{RepositoryConfig, SessionSettings};
pub use repositories::LocalRepository;
pub use repository::{ErrorContext, PickRepository, RepositoryError, RepositoryResult};

use anyhow::{Context, Result};
use std::sync::{Arc, OnceLock};

/// Global repository instance initialized once per process.
static REPOSITORY: OnceLock<Arc<dyn PickRepository>> = OnceLock::new();

/// Initialize the global repository singleton for the selected backend.
///
/// Reads the backend selection from configuration (file, then environment).
/// Subsequent calls are no-ops.
pub fn init_repository() -> Result<()> {
    if REPOSITORY.get().is_some() {
        return Ok(());
    }

    let repo_type = RepositoryConfig::from_default_location()
        .and_then(|config| {
            config
                .repository_type()
                .map_err(RepositoryError::configuration)
        })
        .unwrap_or_else(|_| RepositoryType::from_env());

    let repo = RepositoryFactory::create(repo_type)
        .context("Failed to create repository for configured backend")?;
    let _ = REPOSITORY.set(repo);
    Ok(())
}

/// Get the global repository instance.
///
/// Returns `None` if [`init_repository`] has not been called.
pub fn get_repository() -> Option<Arc<dyn PickRepository>> {
    REPOSITORY.get().cloned()
}
