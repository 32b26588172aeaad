// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Service error types.
//!
//! Gate decisions are never errors; denial is a redirect, not a fault.
//! This type covers the remaining surface: construction-time failures and
//! the handlers' own error responses, mapped to HTTP status codes and a
//! JSON error body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for gate operations.
pub type GateResult<T> = Result<T, GateError>;

// =============================================================================
// GateError
// =============================================================================

/// Error type with HTTP status code mapping.
#[derive(Debug, Error)]
pub enum GateError {
    /// Resource not found (404).
    #[error("Resource not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// Bad request (400).
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Unauthorized (401).
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Error message.
        message: String,
    },

    /// Internal server error (500).
    #[error("Internal error: {message}")]
    Internal {
        /// Error message (for logging, not user-facing).
        message: String,
    },
}

impl GateError {
    /// Creates a not found error.
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Creates a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Creates an unauthorized error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            GateError::NotFound { .. } => StatusCode::NOT_FOUND,
            GateError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            GateError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            GateError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the error code for categorization.
    pub fn error_code(&self) -> &'static str {
        match self {
            GateError::NotFound { .. } => "NOT_FOUND",
            GateError::BadRequest { .. } => "BAD_REQUEST",
            GateError::Unauthorized { .. } => "UNAUTHORIZED",
            GateError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Returns a message safe to show to clients.
    ///
    /// Internal details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            GateError::NotFound { resource } => format!("{} not found", resource),
            GateError::BadRequest { message } => message.clone(),
            GateError::Unauthorized { .. } => "Authentication required".to_string(),
            GateError::Internal { .. } => "An internal error occurred".to_string(),
        }
    }

    /// Returns `true` if this error should be logged at error level.
    pub fn is_server_error(&self) -> bool {
        matches!(self, GateError::Internal { .. })
    }
}

// =============================================================================
// IntoResponse Implementation
// =============================================================================

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();

        if self.is_server_error() {
            tracing::error!(error = %self, error_code, status = %status, "server error");
        } else {
            tracing::debug!(error = %self, error_code, status = %status, "client error");
        }

        let body = ErrorBody {
            error: ErrorDetails {
                code: error_code.to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Error Body
// =============================================================================

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error details.
    pub error: ErrorDetails,
}

/// Error details within the response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            GateError::not_found("event").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            GateError::bad_request("nope").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GateError::unauthorized("no session").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            GateError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(GateError::not_found("x").error_code(), "NOT_FOUND");
        assert_eq!(GateError::unauthorized("x").error_code(), "UNAUTHORIZED");
    }

    #[test]
    fn test_internal_message_is_not_leaked() {
        let err = GateError::internal("secret connection string");
        assert!(!err.user_message().contains("secret"));
    }
}
