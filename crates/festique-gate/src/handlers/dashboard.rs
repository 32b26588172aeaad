// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Dashboard handlers.
//!
//! `/dashboard` accepts any authenticated session; everything under
//! `/dashboard/organizer` is reachable only with an organizer role. The
//! gate enforces both before these handlers run.

use axum::{extract::Path, response::IntoResponse, Json};
use serde::Serialize;

use crate::extract::Session;

/// Dashboard overview response.
#[derive(Debug, Serialize)]
pub struct DashboardOverview {
    /// Signed-in user.
    pub user_id: String,
    /// Role claim of the session.
    pub role: Option<String>,
    /// Display name, if the credential carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// GET /dashboard
pub async fn overview(Session(ctx): Session) -> impl IntoResponse {
    Json(DashboardOverview {
        user_id: ctx.user_id,
        role: ctx.role,
        name: ctx.name,
    })
}

/// GET /dashboard/organizer
pub async fn organizer_overview(Session(ctx): Session) -> impl IntoResponse {
    Json(serde_json::json!({
        "page": "organizer",
        "user_id": ctx.user_id,
    }))
}

/// GET /dashboard/organizer/{section}
pub async fn organizer_section(
    Session(ctx): Session,
    Path(section): Path<String>,
) -> impl IntoResponse {
    Json(serde_json::json!({
        "page": "organizer",
        "section": section,
        "user_id": ctx.user_id,
    }))
}
