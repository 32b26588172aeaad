// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # Test Fixtures
//!
//! Pre-built test data for consistent and reproducible testing.
//!
//! ## Design Principles
//!
//! - Fixtures are immutable and thread-safe
//! - Each fixture represents a realistic scenario
//! - Fixtures can be composed for complex test scenarios

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use festique_config::FestiqueConfig;
use festique_gate::{
    AccessGate, AppState, GateConfig, Role, RoutePolicy, SessionClaims, SessionConfig,
    SessionVerifier,
};

/// Signing secret shared by all fixtures.
pub const TEST_SECRET: &str = "integration-test-secret-key-32-bytes-long!";

/// A different secret, for forged-credential scenarios.
pub const OTHER_SECRET: &str = "another-secret-entirely-also-32-bytes-long";

// =============================================================================
// Token Fixtures
// =============================================================================

/// Fixture providing session credentials in various states.
pub struct TokenFixtures;

impl TokenFixtures {
    fn sign(claims: &SessionClaims, secret: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("token encoding")
    }

    /// A valid credential for the given user and role.
    pub fn valid(user_id: &str, role: Role) -> String {
        Self::sign(&SessionClaims::new(user_id, role, 3600), TEST_SECRET)
    }

    /// A valid organizer credential.
    pub fn organizer() -> String {
        Self::valid("organizer-001", Role::Organizer)
    }

    /// A valid attendee credential.
    pub fn attendee() -> String {
        Self::valid("attendee-001", Role::Attendee)
    }

    /// An expired credential (signed correctly, past its expiry).
    pub fn expired(role: Role) -> String {
        Self::sign(&SessionClaims::new("user-expired", role, -3600), TEST_SECRET)
    }

    /// A credential signed with the wrong secret.
    pub fn wrong_secret(role: Role) -> String {
        Self::sign(&SessionClaims::new("user-forged", role, 3600), OTHER_SECRET)
    }

    /// A structurally valid credential with its payload swapped out.
    pub fn tampered() -> String {
        let token = Self::attendee();
        let parts: Vec<&str> = token.split('.').collect();
        format!("{}.eyJzdWIiOiJldmlsIiwicm9sZSI6Im9yZ2FuaXplciJ9.{}", parts[0], parts[2])
    }

    /// A credential whose role claim names no known role.
    pub fn unknown_role(user_id: &str) -> String {
        let mut claims = SessionClaims::new(user_id, Role::Attendee, 3600);
        claims.role = "superuser".to_string();
        Self::sign(&claims, TEST_SECRET)
    }
}

// =============================================================================
// Gate Fixtures
// =============================================================================

/// Fixture providing assembled gate components.
pub struct GateFixtures;

impl GateFixtures {
    /// Session configuration using the test secret.
    pub fn session_config() -> SessionConfig {
        SessionConfig::new(TEST_SECRET)
    }

    /// A verifier using the test secret.
    pub fn verifier() -> SessionVerifier {
        SessionVerifier::new(Self::session_config()).expect("verifier construction")
    }

    /// A gate with the stock route policy and the test secret.
    pub fn gate() -> AccessGate {
        AccessGate::new(RoutePolicy::default(), Self::verifier())
    }

    /// Gate server configuration using the test secret.
    pub fn gate_config() -> GateConfig {
        GateConfig::default().with_session(Self::session_config())
    }

    /// Application state ready for router construction.
    pub fn app_state() -> AppState {
        AppState::builder()
            .config(Self::gate_config())
            .build()
            .expect("state construction")
    }
}

// =============================================================================
// Config Fixtures
// =============================================================================

/// Fixture providing file-level configurations.
pub struct ConfigFixtures;

impl ConfigFixtures {
    /// A valid file-level configuration with the test secret set.
    pub fn valid() -> FestiqueConfig {
        let mut config = FestiqueConfig::default();
        config.session.secret = TEST_SECRET.to_string();
        config
    }

    /// YAML source for a minimal valid config file.
    pub fn yaml_source() -> String {
        format!(
            r#"server:
  port: 8080
session:
  secret: "{TEST_SECRET}"
"#
        )
    }
}
