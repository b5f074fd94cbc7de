//! Repository trait for user persistence.
//!
//! The trait is the seam between the HTTP/service layers and the concrete
//! storage backends. Handlers receive an `Arc<dyn UserRepository>` and never
//! see driver types, so they can be exercised against the in-memory
//! implementation in tests.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use super::models::{AccountStatus, User};

/// Abstract interface over the `users` collection.
///
/// One method per persistence operation the service performs; every operation
/// is a single round-trip with no transaction scope. Concurrent calls against
/// the same record race at the store level (last write wins) — the service
/// configures no optimistic-concurrency check.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user record and return its identifier.
    ///
    /// No uniqueness is enforced on email or mobile number; duplicate
    /// registrations create distinct records.
    async fn insert_user(&self, user: &User) -> RepositoryResult<String>;

    /// Find the record whose email OR mobile number equals `identifier` and
    /// whose stored PIN equals `pin` exactly.
    async fn find_by_credentials(
        &self,
        identifier: &str,
        pin: &str,
    ) -> RepositoryResult<Option<User>>;

    /// Return every user record, unfiltered and unpaginated.
    async fn list_users(&self) -> RepositoryResult<Vec<User>>;

    /// Case-insensitive literal substring match against `name`.
    ///
    /// The fragment is treated as literal text: regex metacharacters in user
    /// input must not change matching semantics. An empty fragment matches
    /// every record.
    async fn search_users_by_name(&self, fragment: &str) -> RepositoryResult<Vec<User>>;

    /// Set `account_status` on the record with the given identifier.
    ///
    /// Returns the modified count: 0 when no record matched the identifier or
    /// the record was already in the target status (the two are not
    /// distinguishable). A malformed identifier surfaces as a
    /// [`RepositoryError::QueryError`].
    async fn set_account_status(
        &self,
        user_id: &str,
        status: AccountStatus,
    ) -> RepositoryResult<u64>;

    /// Connectivity probe for the health endpoint.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
