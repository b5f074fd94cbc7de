//! In-memory repository implementation.
//!
//! Backs the test suite and local development runs. Records live in a
//! `parking_lot::RwLock<Vec<User>>`; identifiers are v4 UUIDs assigned at
//! insert time. Semantics mirror the MongoDB implementation: no uniqueness
//! checks, modified-count update results, literal case-insensitive search.

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::db::models::{AccountStatus, User};
use crate::db::repository::{RepositoryResult, UserRepository};

/// In-memory implementation of [`UserRepository`].
#[derive(Default)]
pub struct LocalRepository {
    users: RwLock<Vec<User>>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records. Test helper.
    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }

    /// Fetch a record by identifier. Test helper.
    pub fn get(&self, user_id: &str) -> Option<User> {
        self.users
            .read()
            .iter()
            .find(|u| u.id.as_deref() == Some(user_id))
            .cloned()
    }
}

#[async_trait]
impl UserRepository for LocalRepository {
    async fn insert_user(&self, user: &User) -> RepositoryResult<String> {
        let id = Uuid::new_v4().to_string();
        let mut stored = user.clone();
        stored.id = Some(id.clone());
        self.users.write().push(stored);
        Ok(id)
    }

    async fn find_by_credentials(
        &self,
        identifier: &str,
        pin: &str,
    ) -> RepositoryResult<Option<User>> {
        let users = self.users.read();
        Ok(users
            .iter()
            .find(|u| (u.email == identifier || u.mobile_number == identifier) && u.pin == pin)
            .cloned())
    }

    async fn list_users(&self) -> RepositoryResult<Vec<User>> {
        Ok(self.users.read().clone())
    }

    async fn search_users_by_name(&self, fragment: &str) -> RepositoryResult<Vec<User>> {
        let needle = fragment.to_lowercase();
        let users = self.users.read();
        Ok(users
            .iter()
            .filter(|u| u.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn set_account_status(
        &self,
        user_id: &str,
        status: AccountStatus,
    ) -> RepositoryResult<u64> {
        let mut users = self.users.write();
        match users
            .iter_mut()
            .find(|u| u.id.as_deref() == Some(user_id))
        {
            Some(user) if user.account_status != status => {
                user.account_status = status;
                Ok(1)
            }
            // Already in the target status: modified count is zero, same as
            // the document store reports it.
            Some(_) => Ok(0),
            None => Ok(0),
        }
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
