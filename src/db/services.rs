//! High-level business-logic functions over the repository trait.
//!
//! Handlers call these instead of the repository directly; each function is a
//! single persistence round-trip plus the small amount of domain logic the
//! endpoint needs (lifecycle defaults, action-to-status mapping).

use super::models::{AccountAction, NewUser, User};
use super::repository::{RepositoryResult, UserRepository};

/// Register a new user.
///
/// Applies the registration defaults (status `pending`, balance 0,
/// transaction counter 0) and inserts the record. No duplicate detection:
/// repeating a registration creates a second distinct record.
pub async fn register_user(
    repo: &dyn UserRepository,
    new_user: NewUser,
) -> RepositoryResult<String> {
    let user = new_user.into_user();
    repo.insert_user(&user).await
}

/// Check the supplied credentials against the store.
///
/// Returns `true` only when a record matches the identifier (email or mobile
/// number) and the exact PIN. Unknown identifier and wrong PIN are not
/// distinguished.
pub async fn authenticate(
    repo: &dyn UserRepository,
    identifier: &str,
    pin: &str,
) -> RepositoryResult<bool> {
    let user = repo.find_by_credentials(identifier, pin).await?;
    Ok(user.is_some())
}

/// List every user record.
pub async fn list_users(repo: &dyn UserRepository) -> RepositoryResult<Vec<User>> {
    repo.list_users().await
}

/// Case-insensitive literal substring search on user names.
pub async fn search_users(
    repo: &dyn UserRepository,
    fragment: &str,
) -> RepositoryResult<Vec<User>> {
    repo.search_users_by_name(fragment).await
}

/// Apply an account action (activate/block) to the record with the given
/// identifier. Returns the modified count; 0 means no record matched or the
/// record was already in the target status.
///
/// Any record can move to `active` or `blocked` regardless of its current
/// status; there is no transition back to `pending`.
pub async fn apply_account_action(
    repo: &dyn UserRepository,
    user_id: &str,
    action: AccountAction,
) -> RepositoryResult<u64> {
    repo.set_account_status(user_id, action.target_status()).await
}

/// Probe store connectivity.
pub async fn health_check(repo: &dyn UserRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}
