//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to one endpoint and composes three steps:
//! validate input, issue a single persistence operation through the service
//! layer, map the outcome to a status/body. Repository errors never propagate
//! past this layer.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    HealthResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, SearchQuery,
};
use super::error::AppError;
use super::state::AppState;
use crate::db::models::{AccountAction, NewUser, User};
use crate::db::services as db_services;
use crate::validation;

// =============================================================================
// Liveness
// =============================================================================

/// GET /
///
/// Plain liveness probe used by the frontend during development.
pub async fn root() -> &'static str {
    "server is running"
}

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is
/// reachable.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database,
    })
}

// =============================================================================
// Registration and login
// =============================================================================

/// POST /register
///
/// Validate the payload shape, then insert the new record with the
/// registration defaults. Duplicate emails or mobile numbers are not
/// rejected; each call creates a distinct record.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let new_user = NewUser::from(request);
    validation::validate_registration(&new_user).map_err(AppError::invalid_input)?;

    let user_id = db_services::register_user(state.repository.as_ref(), new_user)
        .await
        .map_err(|e| AppError::persistence("Error registering user", e))?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            user_id,
        }),
    ))
}

/// POST /login
///
/// Exact credential match against the store; success and failure responses
/// share one shape so unknown identifiers and wrong PINs are
/// indistinguishable. No session or token is issued.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<(StatusCode, Json<LoginResponse>), AppError> {
    let authenticated =
        db_services::authenticate(state.repository.as_ref(), &request.identifier, &request.pin)
            .await
            .map_err(|e| AppError::persistence("Error during login", e))?;

    if authenticated {
        Ok((
            StatusCode::OK,
            Json(LoginResponse {
                success: true,
                message: "Login successful".to_string(),
            }),
        ))
    } else {
        Ok((
            StatusCode::UNAUTHORIZED,
            Json(LoginResponse {
                success: false,
                message: "Invalid credentials".to_string(),
            }),
        ))
    }
}

// =============================================================================
// User listing and search
// =============================================================================

/// GET /users
///
/// Every record, unfiltered and unpaginated.
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = db_services::list_users(state.repository.as_ref())
        .await
        .map_err(|e| AppError::persistence("Error fetching users", e))?;

    Ok(Json(users))
}

/// GET /users/search?search=
///
/// Case-insensitive substring match on `name`. The fragment is matched as
/// literal text; an empty fragment returns the full set.
pub async fn search_users(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<User>>, AppError> {
    let users = db_services::search_users(state.repository.as_ref(), &query.search)
        .await
        .map_err(|e| AppError::persistence("Error searching users", e))?;

    Ok(Json(users))
}

// =============================================================================
// Account actions
// =============================================================================

/// PUT /users/{user_id}/{action}
///
/// Move the account to `active` or `blocked`. Unknown action tokens are
/// rejected before any persistence call. A modified count of zero — unknown
/// identifier or already in the target status — maps to 404; a malformed
/// identifier surfaces as a repository error and maps to 500.
pub async fn account_action(
    State(state): State<AppState>,
    Path((user_id, action)): Path<(String, String)>,
) -> Result<&'static str, AppError> {
    let action: AccountAction = action.parse().map_err(AppError::invalid_action)?;

    let modified = db_services::apply_account_action(state.repository.as_ref(), &user_id, action)
        .await
        .map_err(|e| AppError::persistence("Error updating user account", e))?;

    if modified > 0 {
        Ok("User account updated successfully")
    } else {
        Err(AppError::NotFound("User not found"))
    }
}
