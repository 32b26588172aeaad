// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Event browsing and management handlers.
//!
//! These endpoints serve the data behind the public listing/detail pages
//! and the gated edit/registration flows. Storage is not wired up yet;
//! responses come from a fixed sample catalog.

use axum::{extract::Path, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::error::{GateError, GateResult};
use crate::extract::{OptionalSession, Session};

// =============================================================================
// Event Types
// =============================================================================

/// Summary of an event as shown on listing pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSummary {
    /// Event identifier (URL slug).
    pub id: String,
    /// Event title.
    pub title: String,
    /// Venue name.
    pub venue: String,
    /// ISO 8601 start date.
    pub starts_at: String,
    /// Total spots.
    pub spots_total: u32,
}

// TODO: replace the sample catalog with the events service client once the
// data layer lands.
fn sample_catalog() -> Vec<EventSummary> {
    vec![
        EventSummary {
            id: "summer-fest-2025".to_string(),
            title: "Summer Fest 2025".to_string(),
            venue: "Riverside Park".to_string(),
            starts_at: "2025-07-18T18:00:00Z".to_string(),
            spots_total: 500,
        },
        EventSummary {
            id: "indie-nights".to_string(),
            title: "Indie Nights".to_string(),
            venue: "The Warehouse".to_string(),
            starts_at: "2025-09-03T20:00:00Z".to_string(),
            spots_total: 120,
        },
    ]
}

fn find_event(event_id: &str) -> GateResult<EventSummary> {
    sample_catalog()
        .into_iter()
        .find(|e| e.id == event_id)
        .ok_or_else(|| GateError::not_found("event"))
}

// =============================================================================
// Public Pages
// =============================================================================

/// GET /events
///
/// Public listing page data.
pub async fn list_events() -> impl IntoResponse {
    Json(sample_catalog())
}

/// GET /events/{event_id}
///
/// Public detail page data.
pub async fn event_detail(Path(event_id): Path<String>) -> GateResult<impl IntoResponse> {
    Ok(Json(find_event(&event_id)?))
}

// =============================================================================
// Gated Pages
// =============================================================================

/// GET /events/{event_id}/edit
///
/// Edit page data; the gate requires an authenticated session.
pub async fn edit_event(
    Session(ctx): Session,
    Path(event_id): Path<String>,
) -> GateResult<impl IntoResponse> {
    let event = find_event(&event_id)?;

    Ok(Json(serde_json::json!({
        "event": event,
        "editor": ctx.user_id,
    })))
}

/// GET /events/{event_id}/register
///
/// Registration page data. The path sits inside the public listing
/// namespace, so the page itself is reachable anonymously; submitting a
/// registration is handled elsewhere.
pub async fn register(
    OptionalSession(ctx): OptionalSession,
    Path(event_id): Path<String>,
) -> GateResult<impl IntoResponse> {
    let event = find_event(&event_id)?;

    // TODO: spot availability and registration persistence are not
    // implemented; this only confirms the page is reachable.
    Ok(Json(serde_json::json!({
        "event": event,
        "attendee": ctx.map(|c| c.user_id),
        "registered": false,
    })))
}

// =============================================================================
// API
// =============================================================================

/// GET /api/v1/events
///
/// Machine-facing listing. API routes bypass the gate by path pattern.
pub async fn api_list_events() -> impl IntoResponse {
    Json(sample_catalog())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_event() {
        assert!(find_event("summer-fest-2025").is_ok());
        assert!(find_event("no-such-event").is_err());
    }
}
