//! Database module for user account storage.
//!
//! This module provides abstractions for persistence via the Repository
//! pattern, allowing the storage backend to be swapped:
//!
//! - `services`: High-level business-logic functions (use these in handlers)
//! - `repository`: Trait definition for persistence operations
//! - `repositories::mongo`: MongoDB implementation (official driver)
//! - `repositories::local`: In-memory implementation for tests and local runs
//! - `factory`: Factory for creating repository instances
//!
//! The process holds one repository instance in a `OnceLock`, shared across
//! all in-flight requests; concurrency safety below the trait is delegated to
//! the backend driver.

// Feature flag priority: mongo > local.
// When multiple features are enabled (e.g., --all-features), mongo takes precedence.
#[cfg(not(any(feature = "mongo-repo", feature = "local-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod models;
pub mod repositories;
pub mod repository;
pub mod services;

pub use factory::{RepositoryFactory, RepositoryType};
pub use models::{AccountAction, AccountStatus, NewUser, User};
pub use repositories::LocalRepository;
#[cfg(feature = "mongo-repo")]
pub use repositories::{MongoConfig, MongoRepository};
pub use repository::{ErrorContext, RepositoryError, RepositoryResult, UserRepository};

use anyhow::{Context, Result};
use std::sync::{Arc, OnceLock};

/// Global repository instance initialized once per process.
static REPOSITORY: OnceLock<Arc<dyn UserRepository>> = OnceLock::new();

// Priority: mongo > local (when --all-features is used)
#[cfg(feature = "mongo-repo")]
async fn create_selected_repository() -> RepositoryResult<Arc<dyn UserRepository>> {
    match RepositoryType::from_env() {
        RepositoryType::Mongo => RepositoryFactory::create_mongo().await,
        RepositoryType::Local => Ok(RepositoryFactory::create_local()),
    }
}

#[cfg(all(feature = "local-repo", not(feature = "mongo-repo")))]
async fn create_selected_repository() -> RepositoryResult<Arc<dyn UserRepository>> {
    Ok(RepositoryFactory::create_local())
}

/// Initialize the global repository singleton for the selected backend.
///
/// Connecting happens once at process start; requests share the resulting
/// handle. Idempotent: subsequent calls are no-ops.
pub async fn init_repository() -> Result<()> {
    if REPOSITORY.get().is_some() {
        return Ok(());
    }

    let repo = create_selected_repository()
        .await
        .context("Failed to initialize repository backend")?;
    let _ = REPOSITORY.set(repo);
    Ok(())
}

/// Get a reference to the global repository instance.
pub fn get_repository() -> Result<&'static Arc<dyn UserRepository>> {
    REPOSITORY
        .get()
        .context("Repository not initialized. Call init_repository() first.")
}
