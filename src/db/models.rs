//! Domain types for the user collection.
//!
//! Field serialization names follow the document schema used by the frontend
//! (`mobileNumber`, `accountType`, `account_status`), so API responses carry
//! the documents as stored.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a user account.
///
/// Every account starts as `Pending`; the account-action endpoint moves it to
/// `Active` or `Blocked`. There is no transition back to `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Pending,
    Active,
    Blocked,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Pending => "pending",
            AccountStatus::Active => "active",
            AccountStatus::Blocked => "blocked",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Administrative action on an account, parsed from the request path.
///
/// Parsing happens before any persistence call; an unknown token is rejected
/// with 400 without touching the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountAction {
    Activate,
    Block,
}

impl AccountAction {
    /// Target status this action moves the account to.
    pub fn target_status(&self) -> AccountStatus {
        match self {
            AccountAction::Activate => AccountStatus::Active,
            AccountAction::Block => AccountStatus::Blocked,
        }
    }
}

impl FromStr for AccountAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "activate" => Ok(AccountAction::Activate),
            "block" => Ok(AccountAction::Block),
            other => Err(format!("Unknown account action: {}", other)),
        }
    }
}

/// A user record as stored in the `users` collection.
///
/// The identifier is an opaque string assigned by the storage backend
/// (ObjectId hex for MongoDB, UUID for the in-memory repository). `None`
/// means the record has not been persisted yet.
///
/// The PIN is stored and compared in clear text for parity with the existing
/// collection contents; see DESIGN.md before pointing this at real users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    #[serde(rename = "mobileNumber")]
    pub mobile_number: String,
    pub pin: String,
    #[serde(rename = "accountType")]
    pub account_type: String,
    pub account_status: AccountStatus,
    pub balance: f64,
    pub total_transaction_made: u64,
}

/// Registration payload before the service layer fills in the lifecycle
/// defaults (status `pending`, balance 0, transaction counter 0).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(rename = "mobileNumber")]
    pub mobile_number: String,
    pub pin: String,
    #[serde(rename = "accountType")]
    pub account_type: String,
}

impl NewUser {
    /// Build the full record to persist, applying registration defaults.
    pub fn into_user(self) -> User {
        User {
            id: None,
            name: self.name,
            email: self.email,
            mobile_number: self.mobile_number,
            pin: self.pin,
            account_type: self.account_type,
            account_status: AccountStatus::Pending,
            balance: 0.0,
            total_transaction_made: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_status_serializes_lowercase() {
        let json = serde_json::to_string(&AccountStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
        let status: AccountStatus = serde_json::from_str("\"blocked\"").unwrap();
        assert_eq!(status, AccountStatus::Blocked);
    }

    #[test]
    fn account_action_parses_known_tokens_only() {
        assert_eq!("activate".parse::<AccountAction>().unwrap(), AccountAction::Activate);
        assert_eq!("block".parse::<AccountAction>().unwrap(), AccountAction::Block);
        assert!("dance".parse::<AccountAction>().is_err());
        // No case folding: the route contract is lowercase tokens.
        assert!("Activate".parse::<AccountAction>().is_err());
    }

    #[test]
    fn action_target_statuses() {
        assert_eq!(AccountAction::Activate.target_status(), AccountStatus::Active);
        assert_eq!(AccountAction::Block.target_status(), AccountStatus::Blocked);
    }

    #[test]
    fn new_user_defaults() {
        let user = NewUser {
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            mobile_number: "01712345678".to_string(),
            pin: "12345".to_string(),
            account_type: "user".to_string(),
        }
        .into_user();

        assert!(user.id.is_none());
        assert_eq!(user.account_status, AccountStatus::Pending);
        assert_eq!(user.balance, 0.0);
        assert_eq!(user.total_transaction_made, 0);
    }

    #[test]
    fn user_json_uses_collection_field_names() {
        let user = User {
            id: Some("abc".to_string()),
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            mobile_number: "01712345678".to_string(),
            pin: "12345".to_string(),
            account_type: "user".to_string(),
            account_status: AccountStatus::Pending,
            balance: 0.0,
            total_transaction_made: 0,
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["_id"], "abc");
        assert_eq!(value["mobileNumber"], "01712345678");
        assert_eq!(value["accountType"], "user");
        assert_eq!(value["account_status"], "pending");
    }
}
