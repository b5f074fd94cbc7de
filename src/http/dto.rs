//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! User records are serialized with the domain type directly (see
//! `db::models::User`), so list/search responses carry the documents as
//! stored.

use serde::{Deserialize, Serialize};

use crate::db::models::NewUser;

/// Request body for the registration endpoint.
///
/// Every field defaults to the empty string so that a missing field fails the
/// shape validation with 400 rather than being rejected by the JSON
/// deserializer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "mobileNumber", default)]
    pub mobile_number: String,
    #[serde(default)]
    pub pin: String,
    #[serde(rename = "accountType", default)]
    pub account_type: String,
}

impl From<RegisterRequest> for NewUser {
    fn from(request: RegisterRequest) -> Self {
        NewUser {
            name: request.name,
            email: request.email,
            mobile_number: request.mobile_number,
            pin: request.pin,
            account_type: request.account_type,
        }
    }
}

/// Response body for a successful registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// Message about the operation
    pub message: String,
    /// Identifier the store assigned to the new record
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Request body for the login endpoint.
///
/// `identifier` may be an email address or a mobile number. Missing fields
/// default to empty strings, which simply fail the credential lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub pin: String,
}

/// Response body for the login endpoint.
///
/// Success and failure share this one shape; the failure path does not reveal
/// whether the identifier or the PIN was wrong.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
}

/// Query parameters for the user search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    /// Name fragment, matched case-insensitively as literal text.
    #[serde(default)]
    pub search: String,
}

/// Response body for the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: String,
}
