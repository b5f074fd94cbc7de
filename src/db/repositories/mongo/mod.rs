//! MongoDB repository implementation using the official driver.
//!
//! One client is created at process start and shared across all requests; the
//! driver owns pooling, timeouts, and reconnection. This module configures no
//! transaction scope and creates no indexes — in particular there is no
//! unique index on `email` or `mobileNumber`, matching the live collection.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `MONGODB_URI`: Full connection string (takes precedence)
//! - `DB_USER` / `DB_PASS`: Credentials for the default Atlas cluster URI
//! - `MONGODB_DATABASE`: Database name (default: `mkash`)

use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};
use std::env;

use crate::db::models::{AccountStatus, User};
use crate::db::repository::{
    ErrorContext, RepositoryError, RepositoryResult, UserRepository,
};

mod models {
    use super::*;

    /// Wire representation of a user document in the `users` collection.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct UserDocument {
        #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
        pub id: Option<ObjectId>,
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

    impl From<&User> for UserDocument {
        fn from(user: &User) -> Self {
            Self {
                // Let the store assign the identifier on insert.
                id: user.id.as_deref().and_then(|s| ObjectId::parse_str(s).ok()),
                name: user.name.clone(),
                email: user.email.clone(),
                mobile_number: user.mobile_number.clone(),
                pin: user.pin.clone(),
                account_type: user.account_type.clone(),
                account_status: user.account_status,
                balance: user.balance,
                total_transaction_made: user.total_transaction_made,
            }
        }
    }

    impl From<UserDocument> for User {
        fn from(doc: UserDocument) -> Self {
            Self {
                id: doc.id.map(|oid| oid.to_hex()),
                name: doc.name,
                email: doc.email,
                mobile_number: doc.mobile_number,
                pin: doc.pin,
                account_type: doc.account_type,
                account_status: doc.account_status,
                balance: doc.balance,
                total_transaction_made: doc.total_transaction_made,
            }
        }
    }
}

use models::UserDocument;

/// Configuration for connecting to MongoDB.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

impl MongoConfig {
    /// Read connection settings from the environment.
    ///
    /// `MONGODB_URI` wins when set; otherwise `DB_USER`/`DB_PASS` are
    /// interpolated into the Atlas cluster URI the deployment uses.
    pub fn from_env() -> RepositoryResult<Self> {
        let uri = match env::var("MONGODB_URI") {
            Ok(uri) => uri,
            Err(_) => {
                let user = env::var("DB_USER").map_err(|_| {
                    RepositoryError::configuration("DB_USER not set (and no MONGODB_URI)")
                })?;
                let pass = env::var("DB_PASS").map_err(|_| {
                    RepositoryError::configuration("DB_PASS not set (and no MONGODB_URI)")
                })?;
                format!(
                    "mongodb+srv://{}:{}@cluster0.o4eqbyc.mongodb.net/?retryWrites=true&w=majority&appName=Cluster0",
                    user, pass
                )
            }
        };

        let database = env::var("MONGODB_DATABASE").unwrap_or_else(|_| "mkash".to_string());

        Ok(Self { uri, database })
    }
}

/// MongoDB implementation of [`UserRepository`].
pub struct MongoRepository {
    client: Client,
    users: Collection<UserDocument>,
}

impl MongoRepository {
    /// Connect to the cluster and bind the `users` collection handle.
    pub async fn connect(config: &MongoConfig) -> RepositoryResult<Self> {
        let client = Client::with_uri_str(&config.uri).await?;
        let users = client
            .database(&config.database)
            .collection::<UserDocument>("users");
        Ok(Self { client, users })
    }
}

#[async_trait]
impl UserRepository for MongoRepository {
    async fn insert_user(&self, user: &User) -> RepositoryResult<String> {
        let document = UserDocument::from(user);
        let result = self
            .users
            .insert_one(&document)
            .await
            .map_err(|e| RepositoryError::from(e).with_operation("insert_user"))?;

        result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .ok_or_else(|| {
                RepositoryError::internal("insert_one returned a non-ObjectId identifier")
            })
    }

    async fn find_by_credentials(
        &self,
        identifier: &str,
        pin: &str,
    ) -> RepositoryResult<Option<User>> {
        let filter = doc! {
            "$or": [
                { "email": identifier },
                { "mobileNumber": identifier },
            ],
            "pin": pin,
        };

        let found = self
            .users
            .find_one(filter)
            .await
            .map_err(|e| RepositoryError::from(e).with_operation("find_by_credentials"))?;

        Ok(found.map(User::from))
    }

    async fn list_users(&self) -> RepositoryResult<Vec<User>> {
        let cursor = self
            .users
            .find(doc! {})
            .await
            .map_err(|e| RepositoryError::from(e).with_operation("list_users"))?;

        let documents: Vec<UserDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::from(e).with_operation("list_users"))?;

        Ok(documents.into_iter().map(User::from).collect())
    }

    async fn search_users_by_name(&self, fragment: &str) -> RepositoryResult<Vec<User>> {
        // Escape the fragment so user input is matched as literal text; the
        // original frontend contract is a substring search, not a pattern.
        let filter = doc! {
            "name": { "$regex": regex::escape(fragment), "$options": "i" },
        };

        let cursor = self
            .users
            .find(filter)
            .await
            .map_err(|e| RepositoryError::from(e).with_operation("search_users_by_name"))?;

        let documents: Vec<UserDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::from(e).with_operation("search_users_by_name"))?;

        Ok(documents.into_iter().map(User::from).collect())
    }

    async fn set_account_status(
        &self,
        user_id: &str,
        status: AccountStatus,
    ) -> RepositoryResult<u64> {
        // A malformed identifier is a query error, not a not-found: it maps
        // to 500 at the HTTP boundary, matching the deployed behavior.
        let oid = ObjectId::parse_str(user_id).map_err(|e| {
            RepositoryError::query_with_context(
                format!("Invalid record identifier: {}", e),
                ErrorContext::new("set_account_status").with_entity_id(user_id),
            )
        })?;

        let result = self
            .users
            .update_one(
                doc! { "_id": oid },
                doc! { "$set": { "account_status": status.as_str() } },
            )
            .await
            .map_err(|e| RepositoryError::from(e).with_operation("set_account_status"))?;

        Ok(result.modified_count)
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| RepositoryError::from(e).with_operation("health_check"))?;
        Ok(true)
    }
}
