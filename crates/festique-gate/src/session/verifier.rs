// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Session credential verification.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::SessionClaims;
use crate::error::{GateError, GateResult};

// =============================================================================
// CredentialError
// =============================================================================

/// Why a credential could not be accepted.
///
/// `Missing` and `Invalid` normalize to the same routing outcome; the
/// distinction exists only for internal logging and never reaches a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// No credential was presented.
    #[error("no session credential presented")]
    Missing,
    /// The credential failed verification (expired, malformed, or tampered).
    #[error("session credential failed verification")]
    Invalid,
}

// =============================================================================
// SessionConfig
// =============================================================================

/// Verification settings for session credentials.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Shared secret for signature verification. Supplied via the process
    /// environment; never serialized or logged.
    #[serde(skip_serializing)]
    pub secret: String,
    /// Expected issuer. Issuer validation is skipped when unset.
    pub issuer: Option<String>,
    /// Clock skew tolerance in seconds.
    pub leeway_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: String::new(), // Must be set by the operator
            issuer: None,
            leeway_secs: 60,
        }
    }
}

impl SessionConfig {
    /// Creates a configuration with the given secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Sets the expected issuer.
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> GateResult<()> {
        if self.secret.is_empty() {
            return Err(GateError::internal("session secret is not configured"));
        }
        if self.secret.len() < 32 {
            tracing::warn!("session secret is shorter than recommended (32 bytes)");
        }
        Ok(())
    }
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("secret", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("leeway_secs", &self.leeway_secs)
            .finish()
    }
}

// =============================================================================
// SessionVerifier
// =============================================================================

/// Verifies signed session credentials against the shared secret.
///
/// The verifier only decodes; issuing credentials is the identity
/// service's job. Verification is a pure CPU-bound check with no I/O,
/// safe to share across concurrent requests.
#[derive(Clone)]
pub struct SessionVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: Option<String>,
}

impl SessionVerifier {
    /// Creates a verifier from the given configuration.
    pub fn new(config: SessionConfig) -> GateResult<Self> {
        config.validate()?;

        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.leeway_secs;
        validation.validate_aud = false;
        if let Some(ref issuer) = config.issuer {
            validation.set_issuer(&[issuer]);
        }

        Ok(Self {
            decoding_key,
            validation,
            issuer: config.issuer,
        })
    }

    /// Verifies a credential and returns its claims.
    ///
    /// Every failure kind collapses into [`CredentialError::Invalid`]; the
    /// caller cannot tell an expired credential from a tampered one.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, CredentialError> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(kind = ?e.kind(), "credential verification failed");
                CredentialError::Invalid
            })
    }
}

impl std::fmt::Debug for SessionVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionVerifier")
            .field("algorithm", &Algorithm::HS256)
            .field("issuer", &self.issuer)
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "test-secret-key-that-is-long-enough-for-testing";

    fn mint(claims: &SessionClaims, secret: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn verifier() -> SessionVerifier {
        SessionVerifier::new(SessionConfig::new(SECRET)).unwrap()
    }

    #[test]
    fn test_verify_valid_credential() {
        let claims = SessionClaims::new("user-001", Role::Organizer, 3600);
        let token = mint(&claims, SECRET);

        let verified = verifier().verify(&token).unwrap();
        assert_eq!(verified.sub, "user-001");
        assert_eq!(verified.role(), Some(Role::Organizer));
    }

    #[test]
    fn test_expired_credential_is_invalid() {
        let claims = SessionClaims::new("user", Role::Attendee, -3600);
        let token = mint(&claims, SECRET);

        assert_eq!(verifier().verify(&token), Err(CredentialError::Invalid));
    }

    #[test]
    fn test_malformed_credential_is_invalid() {
        assert_eq!(
            verifier().verify("not.a.credential"),
            Err(CredentialError::Invalid)
        );
        assert_eq!(verifier().verify(""), Err(CredentialError::Invalid));
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let claims = SessionClaims::new("user", Role::Attendee, 3600);
        let token = mint(&claims, "a-completely-different-signing-secret!!");

        assert_eq!(verifier().verify(&token), Err(CredentialError::Invalid));
    }

    #[test]
    fn test_tampered_credential_is_invalid() {
        let claims = SessionClaims::new("user", Role::Attendee, 3600);
        let token = mint(&claims, SECRET);
        let parts: Vec<&str> = token.split('.').collect();
        let tampered = format!("{}.eyJzdWIiOiJldmlsIn0.{}", parts[0], parts[2]);

        assert_eq!(verifier().verify(&tampered), Err(CredentialError::Invalid));
    }

    #[test]
    fn test_issuer_mismatch_is_invalid() {
        let config = SessionConfig::new(SECRET).with_issuer("festique-identity");
        let strict = SessionVerifier::new(config).unwrap();

        let claims = SessionClaims::new("user", Role::Attendee, 3600).with_issuer("elsewhere");
        let token = mint(&claims, SECRET);

        assert_eq!(strict.verify(&token), Err(CredentialError::Invalid));

        let claims = SessionClaims::new("user", Role::Attendee, 3600)
            .with_issuer("festique-identity");
        let token = mint(&claims, SECRET);
        assert!(strict.verify(&token).is_ok());
    }

    #[test]
    fn test_empty_secret_is_rejected() {
        assert!(SessionVerifier::new(SessionConfig::default()).is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = SessionConfig::new("super-secret-value-goes-here-123456");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret-value"));
        assert!(rendered.contains("<redacted>"));
    }
}
