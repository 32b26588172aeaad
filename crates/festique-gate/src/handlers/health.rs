// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Health check handlers.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::response::{ComponentStatus, HealthResponse, ReadinessResponse};
use crate::state::AppState;

/// GET /health
///
/// Simple liveness check. Returns 200 OK if the service is running.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse::healthy())
}

/// GET /ready
///
/// Readiness check reporting the state of the gate's components.
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let policy = state.gate.policy();

    let components = vec![
        ComponentStatus {
            name: "route_policy".to_string(),
            healthy: true,
            message: Some(format!(
                "{} public paths, restricted prefix {}",
                policy.public_paths().len(),
                policy.restricted_prefix()
            )),
        },
        ComponentStatus {
            name: "session_verifier".to_string(),
            healthy: true,
            message: None,
        },
    ];

    (
        StatusCode::OK,
        Json(ReadinessResponse {
            ready: true,
            components,
        }),
    )
}

// =============================================================================
// Tests
// =============================================================================
