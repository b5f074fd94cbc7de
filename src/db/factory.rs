//! Repository factory for dependency injection.
//!
//! Creates repository instances based on runtime configuration, so the binary
//! and the tests can pick a backend without touching handler code.

use std::env;
use std::str::FromStr;
use std::sync::Arc;

use super::repositories::LocalRepository;
#[cfg(feature = "mongo-repo")]
use super::repositories::{MongoConfig, MongoRepository};
use super::repository::UserRepository;
#[cfg(feature = "mongo-repo")]
use super::repository::RepositoryResult;

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// MongoDB implementation
    Mongo,
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(Self::Mongo),
            "local" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get the repository type from the environment.
    ///
    /// Reads `REPOSITORY_TYPE`. Defaults to Mongo when the mongo backend is
    /// compiled in, otherwise Local.
    pub fn from_env() -> Self {
        env::var("REPOSITORY_TYPE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(Self::default_for_build())
    }

    #[cfg(feature = "mongo-repo")]
    fn default_for_build() -> Self {
        Self::Mongo
    }

    #[cfg(not(feature = "mongo-repo"))]
    fn default_for_build() -> Self {
        Self::Local
    }
}

/// Factory for creating repository instances.
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create an in-memory repository.
    pub fn create_local() -> Arc<dyn UserRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create a MongoDB repository from environment configuration.
    #[cfg(feature = "mongo-repo")]
    pub async fn create_mongo() -> RepositoryResult<Arc<dyn UserRepository>> {
        let config = MongoConfig::from_env()?;
        let repo = MongoRepository::connect(&config).await?;
        Ok(Arc::new(repo))
    }
}
