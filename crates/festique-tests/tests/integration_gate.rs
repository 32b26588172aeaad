// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # Gate Decision Integration Tests
//!
//! Exercises the full decision matrix of the access gate:
//!
//! - Public paths never redirect, with or without credentials
//! - Listing-namespace detail vs edit classification
//! - Missing and invalid credentials are indistinguishable
//! - Organizer-restricted routes honor the role claim

use festique_gate::{Decision, Role};
use festique_tests::common::fixtures::{GateFixtures, TokenFixtures};

// =============================================================================
// Public Paths
// =============================================================================

#[test]
fn test_public_static_paths_allow_regardless_of_credential() {
    let gate = GateFixtures::gate();

    for path in ["/", "/login", "/about", "/events"] {
        assert_eq!(gate.decide(path, None), Decision::Allow, "{path} without");
        assert_eq!(
            gate.decide(path, Some(&TokenFixtures::attendee())),
            Decision::Allow,
            "{path} with valid"
        );
        assert_eq!(
            gate.decide(path, Some("garbage")),
            Decision::Allow,
            "{path} with garbage"
        );
        assert_eq!(
            gate.decide(path, Some(&TokenFixtures::expired(Role::Attendee))),
            Decision::Allow,
            "{path} with expired"
        );
    }
}

#[test]
fn test_event_detail_allows_without_credential() {
    let gate = GateFixtures::gate();

    assert_eq!(gate.decide("/events/123", None), Decision::Allow);
    assert_eq!(gate.decide("/events/summer-fest-2025", None), Decision::Allow);
}

#[test]
fn test_event_edit_requires_credential() {
    let gate = GateFixtures::gate();

    assert_eq!(
        gate.decide("/events/123/edit", None),
        Decision::RedirectToLogin
    );
    assert_eq!(
        gate.decide("/events/123/edit", Some(&TokenFixtures::attendee())),
        Decision::Allow
    );
}

#[test]
fn test_edit_marker_is_a_substring_match() {
    // Slugs containing "edit" anywhere are pulled out of the public
    // class, exactly as shipped.
    let gate = GateFixtures::gate();

    assert_eq!(
        gate.decide("/events/unedited-memories", None),
        Decision::RedirectToLogin
    );
    assert_eq!(
        gate.decide("/events/editors-picks", None),
        Decision::RedirectToLogin
    );
}

// =============================================================================
// Protected Paths
// =============================================================================

#[test]
fn test_protected_path_without_credential_redirects_to_login() {
    let gate = GateFixtures::gate();

    for path in ["/dashboard", "/settings", "/account/tickets"] {
        assert_eq!(gate.decide(path, None), Decision::RedirectToLogin, "{path}");
    }
}

#[test]
fn test_invalid_credentials_match_missing_outcome() {
    let gate = GateFixtures::gate();
    let baseline = gate.decide("/dashboard", None);

    let rejected = [
        TokenFixtures::expired(Role::Attendee),
        TokenFixtures::wrong_secret(Role::Organizer),
        TokenFixtures::tampered(),
        "definitely-not-a-jwt".to_string(),
        String::new(),
    ];

    for token in &rejected {
        assert_eq!(
            gate.decide("/dashboard", Some(token)),
            baseline,
            "token {token:.12} should be indistinguishable from missing"
        );
    }
}

#[test]
fn test_protected_path_accepts_any_authenticated_role() {
    let gate = GateFixtures::gate();

    assert_eq!(
        gate.decide("/dashboard", Some(&TokenFixtures::attendee())),
        Decision::Allow
    );
    assert_eq!(
        gate.decide("/dashboard", Some(&TokenFixtures::organizer())),
        Decision::Allow
    );
    // Even an unrecognized role claim is still an authenticated session.
    assert_eq!(
        gate.decide("/dashboard", Some(&TokenFixtures::unknown_role("u"))),
        Decision::Allow
    );
}

// =============================================================================
// Role-Restricted Paths
// =============================================================================

#[test]
fn test_organizer_route_with_attendee_redirects_home() {
    let gate = GateFixtures::gate();

    assert_eq!(
        gate.decide("/dashboard/organizer/x", Some(&TokenFixtures::attendee())),
        Decision::RedirectToHome
    );
}

#[test]
fn test_organizer_route_with_organizer_allows() {
    let gate = GateFixtures::gate();

    assert_eq!(
        gate.decide("/dashboard/organizer/x", Some(&TokenFixtures::organizer())),
        Decision::Allow
    );
}

#[test]
fn test_organizer_route_with_unknown_role_redirects_home() {
    let gate = GateFixtures::gate();

    assert_eq!(
        gate.decide(
            "/dashboard/organizer/x",
            Some(&TokenFixtures::unknown_role("u"))
        ),
        Decision::RedirectToHome
    );
}

#[test]
fn test_organizer_route_authentication_precedes_role_check() {
    let gate = GateFixtures::gate();

    // A bad credential on an organizer route goes to login, not home.
    assert_eq!(
        gate.decide("/dashboard/organizer/x", None),
        Decision::RedirectToLogin
    );
    assert_eq!(
        gate.decide(
            "/dashboard/organizer/x",
            Some(&TokenFixtures::expired(Role::Organizer))
        ),
        Decision::RedirectToLogin
    );
}

// =============================================================================
// Verdict Claims
// =============================================================================

#[test]
fn test_verdict_claims_only_present_after_verification() {
    let gate = GateFixtures::gate();

    // Public: no verification, no claims.
    let public = gate.evaluate("/events/123", Some(&TokenFixtures::attendee()));
    assert!(public.claims.is_none());

    // Gated allow: claims from the verified credential.
    let gated = gate.evaluate("/dashboard", Some(&TokenFixtures::attendee()));
    assert_eq!(gated.claims.unwrap().sub, "attendee-001");

    // Denied: no claims.
    let denied = gate.evaluate("/dashboard", Some(&TokenFixtures::tampered()));
    assert!(denied.claims.is_none());
}
