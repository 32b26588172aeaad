// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # HTTP Integration Tests
//!
//! Drives the assembled router through tower to verify the gate at the
//! HTTP boundary:
//!
//! - Redirect status codes and Location headers
//! - Cookie and bearer credential extraction
//! - Exempt path bypass
//! - Handler behavior behind the gate

use axum::http::{header, StatusCode};
use axum::Router;
use tower::ServiceExt;

use festique_gate::GateServer;
use festique_tests::common::builders::RequestBuilder;
use festique_tests::common::fixtures::{GateFixtures, TokenFixtures};

fn router() -> Router {
    GateServer::new(GateFixtures::app_state()).router()
}

fn location(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("Location header")
        .to_str()
        .unwrap()
}

// =============================================================================
// Public Surface
// =============================================================================

#[tokio::test]
async fn test_home_is_reachable_without_credential() {
    let response = router()
        .oneshot(RequestBuilder::get("/").build())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_event_detail_is_reachable_without_credential() {
    let response = router()
        .oneshot(RequestBuilder::get("/events/summer-fest-2025").build())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_public_page_ignores_invalid_credential() {
    let response = router()
        .oneshot(
            RequestBuilder::get("/events")
                .with_session_cookie(TokenFixtures::tampered())
                .build(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================================
// Redirects
// =============================================================================

#[tokio::test]
async fn test_gated_page_without_credential_redirects_to_login() {
    let response = router()
        .oneshot(RequestBuilder::get("/dashboard").build())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_event_edit_without_credential_redirects_to_login() {
    let response = router()
        .oneshot(RequestBuilder::get("/events/123/edit").build())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_expired_credential_redirects_to_login() {
    let response = router()
        .oneshot(
            RequestBuilder::get("/dashboard")
                .with_session_cookie(TokenFixtures::expired(festique_gate::Role::Attendee))
                .build(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_attendee_on_organizer_dashboard_redirects_home() {
    let response = router()
        .oneshot(
            RequestBuilder::get("/dashboard/organizer/events")
                .with_session_cookie(TokenFixtures::attendee())
                .build(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/");
}

// =============================================================================
// Authenticated Access
// =============================================================================

#[tokio::test]
async fn test_attendee_cookie_reaches_dashboard() {
    let response = router()
        .oneshot(
            RequestBuilder::get("/dashboard")
                .with_session_cookie(TokenFixtures::attendee())
                .build(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_organizer_cookie_reaches_organizer_dashboard() {
    let response = router()
        .oneshot(
            RequestBuilder::get("/dashboard/organizer/events")
                .with_session_cookie(TokenFixtures::organizer())
                .build(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_bearer_header_is_accepted() {
    let response = router()
        .oneshot(
            RequestBuilder::get("/dashboard")
                .with_bearer(TokenFixtures::attendee())
                .build(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_register_page_is_inside_the_public_namespace() {
    // /events/{id}/register carries no edit marker, so it classifies as
    // public: reachable anonymously and with a credential alike.
    let anonymous = router()
        .oneshot(RequestBuilder::get("/events/summer-fest-2025/register").build())
        .await
        .unwrap();
    assert_eq!(anonymous.status(), StatusCode::OK);

    let signed_in = router()
        .oneshot(
            RequestBuilder::get("/events/summer-fest-2025/register")
                .with_session_cookie(TokenFixtures::attendee())
                .build(),
        )
        .await
        .unwrap();
    assert_eq!(signed_in.status(), StatusCode::OK);
}

// =============================================================================
// Exemptions
// =============================================================================

#[tokio::test]
async fn test_api_route_bypasses_the_gate() {
    let response = router()
        .oneshot(RequestBuilder::get("/api/v1/events").build())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_endpoints_bypass_the_gate() {
    for path in ["/health", "/ready"] {
        let response = router()
            .oneshot(RequestBuilder::get(path).build())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "{path}");
    }
}

// =============================================================================
// Not Found Behind the Gate
// =============================================================================

#[tokio::test]
async fn test_unknown_event_is_404_for_authenticated_user() {
    let response = router()
        .oneshot(
            RequestBuilder::get("/events/no-such-event/edit")
                .with_session_cookie(TokenFixtures::organizer())
                .build(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unrouted_path_redirects_before_404() {
    // Classification happens before routing: an unknown path is
    // protected, so the anonymous client is redirected, not 404'd.
    let response = router()
        .oneshot(RequestBuilder::get("/no/such/page").build())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/login");
}
