// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Public marketing page handlers.

use axum::{response::IntoResponse, Json};

use crate::extract::OptionalSession;

/// GET /
pub async fn home(OptionalSession(ctx): OptionalSession) -> impl IntoResponse {
    Json(serde_json::json!({
        "page": "home",
        "signed_in": ctx.is_some(),
    }))
}

/// GET /about
pub async fn about() -> impl IntoResponse {
    Json(serde_json::json!({
        "page": "about",
        "description": "Festique is the easiest way to discover and host events.",
    }))
}

/// GET /login
///
/// Credential issuance lives in the identity service; this page only
/// points clients at it.
pub async fn login() -> impl IntoResponse {
    Json(serde_json::json!({
        "page": "login",
        "identity_endpoint": "/api/v1/auth/login",
    }))
}
