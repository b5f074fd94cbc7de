//! HTTP error handling and response types.
//!
//! Client-visible error bodies are deliberately generic plain text — the
//! frontend contract distinguishes outcomes by status code only. Underlying
//! detail (validation reason, repository error) is logged server-side and
//! never propagates past the handler boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::db::RepositoryError;

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Malformed or missing input (400). `public` is the response body;
    /// `detail` is logged only.
    BadRequest {
        public: &'static str,
        detail: String,
    },
    /// No record matched an identifier-scoped update (404).
    NotFound(&'static str),
    /// Any persistence-layer failure (500). The client sees only the generic
    /// per-endpoint message.
    Persistence {
        public: &'static str,
        source: RepositoryError,
    },
}

impl AppError {
    /// 400 with the registration endpoint's generic body.
    pub fn invalid_input(detail: impl Into<String>) -> Self {
        Self::BadRequest {
            public: "Invalid input",
            detail: detail.into(),
        }
    }

    /// 400 with the account-action endpoint's generic body.
    pub fn invalid_action(detail: impl Into<String>) -> Self {
        Self::BadRequest {
            public: "Invalid action",
            detail: detail.into(),
        }
    }

    /// 500 wrapping a repository error behind a generic public message.
    pub fn persistence(public: &'static str, source: RepositoryError) -> Self {
        Self::Persistence { public, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest { public, detail } => {
                tracing::warn!(%detail, "request rejected: {}", public);
                (StatusCode::BAD_REQUEST, public).into_response()
            }
            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, message).into_response()
            }
            AppError::Persistence { public, source } => {
                tracing::error!(error = %source, "{}", public);
                (StatusCode::INTERNAL_SERVER_ERROR, public).into_response()
            }
        }
    }
}
