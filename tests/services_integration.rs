//! Service-layer tests against the in-memory repository.

use mkash_backend::db::models::{AccountAction, AccountStatus, NewUser};
use mkash_backend::db::repositories::LocalRepository;
use mkash_backend::db::services;

fn new_user(name: &str, email: &str, mobile: &str, pin: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
        mobile_number: mobile.to_string(),
        pin: pin.to_string(),
        account_type: "user".to_string(),
    }
}

#[tokio::test]
async fn register_applies_lifecycle_defaults() {
    let repo = LocalRepository::new();
    let id = services::register_user(&repo, new_user("Alice", "a@x.com", "01712345678", "12345"))
        .await
        .unwrap();

    let stored = repo.get(&id).unwrap();
    assert_eq!(stored.account_status, AccountStatus::Pending);
    assert_eq!(stored.balance, 0.0);
    assert_eq!(stored.total_transaction_made, 0);
}

#[tokio::test]
async fn register_does_not_enforce_uniqueness() {
    let repo = LocalRepository::new();
    let payload = new_user("Alice", "a@x.com", "01712345678", "12345");

    let id1 = services::register_user(&repo, payload.clone()).await.unwrap();
    let id2 = services::register_user(&repo, payload).await.unwrap();

    assert_ne!(id1, id2);
    assert_eq!(services::list_users(&repo).await.unwrap().len(), 2);
}

#[tokio::test]
async fn authenticate_requires_exact_pin() {
    let repo = LocalRepository::new();
    services::register_user(&repo, new_user("Alice", "a@x.com", "01712345678", "12345"))
        .await
        .unwrap();

    assert!(services::authenticate(&repo, "a@x.com", "12345").await.unwrap());
    assert!(services::authenticate(&repo, "01712345678", "12345").await.unwrap());
    assert!(!services::authenticate(&repo, "a@x.com", "12346").await.unwrap());
    assert!(!services::authenticate(&repo, "b@x.com", "12345").await.unwrap());
}

#[tokio::test]
async fn search_matches_substrings_case_insensitively() {
    let repo = LocalRepository::new();
    services::register_user(&repo, new_user("Alice", "a@x.com", "01712345678", "12345"))
        .await
        .unwrap();
    services::register_user(&repo, new_user("Alicia", "c@x.com", "01912345678", "12345"))
        .await
        .unwrap();
    services::register_user(&repo, new_user("Bob", "b@x.com", "01812345678", "12345"))
        .await
        .unwrap();

    let hits = services::search_users(&repo, "ALI").await.unwrap();
    assert_eq!(hits.len(), 2);

    let hits = services::search_users(&repo, "").await.unwrap();
    assert_eq!(hits.len(), 3);
}

#[tokio::test]
async fn account_actions_ignore_source_state() {
    let repo = LocalRepository::new();
    let id = services::register_user(&repo, new_user("Alice", "a@x.com", "01712345678", "12345"))
        .await
        .unwrap();

    // pending -> blocked directly, then blocked -> active: no restriction on
    // the source state.
    assert_eq!(
        services::apply_account_action(&repo, &id, AccountAction::Block).await.unwrap(),
        1
    );
    assert_eq!(repo.get(&id).unwrap().account_status, AccountStatus::Blocked);

    assert_eq!(
        services::apply_account_action(&repo, &id, AccountAction::Activate).await.unwrap(),
        1
    );
    assert_eq!(repo.get(&id).unwrap().account_status, AccountStatus::Active);
}

#[tokio::test]
async fn account_action_on_missing_record_modifies_nothing() {
    let repo = LocalRepository::new();
    let modified = services::apply_account_action(&repo, "missing", AccountAction::Activate)
        .await
        .unwrap();
    assert_eq!(modified, 0);
}

#[tokio::test]
async fn health_check_reports_local_store_up() {
    let repo = LocalRepository::new();
    assert!(services::health_check(&repo).await.unwrap());
}
