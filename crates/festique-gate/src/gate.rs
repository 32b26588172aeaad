// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! The access decision core.
//!
//! [`AccessGate`] is a pure function over `(path, optional credential)`,
//! independent of any request/response object model; the HTTP adapter in
//! [`crate::middleware`] maps its decisions onto responses. The gate is
//! stateless and side-effect free, so a single instance is shared across
//! all concurrent requests without coordination.

use crate::routes::{RouteClass, RoutePolicy};
use crate::session::{CredentialError, SessionClaims, SessionVerifier};

// =============================================================================
// Decision
// =============================================================================

/// The routing decision for a request.
///
/// Exactly one decision is produced per request; there is no error
/// outcome. Anything that goes wrong during verification lands on
/// `RedirectToLogin`, never on `Allow`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Forward the request unchanged.
    Allow,
    /// Send the client to the login page.
    RedirectToLogin,
    /// Send the client to the home page.
    RedirectToHome,
}

/// A decision together with the claims that produced it.
///
/// Claims are present only when a credential was actually verified;
/// public paths skip verification entirely and carry no claims.
#[derive(Debug, Clone)]
pub struct Verdict {
    /// The routing decision.
    pub decision: Decision,
    /// Verified claims, when a credential was checked and accepted.
    pub claims: Option<SessionClaims>,
}

impl Verdict {
    fn allow(claims: Option<SessionClaims>) -> Self {
        Self {
            decision: Decision::Allow,
            claims,
        }
    }

    fn deny(decision: Decision) -> Self {
        Self {
            decision,
            claims: None,
        }
    }
}

// =============================================================================
// AccessGate
// =============================================================================

/// Decides whether a request may pass, per path and credential.
#[derive(Debug, Clone)]
pub struct AccessGate {
    policy: RoutePolicy,
    verifier: SessionVerifier,
}

impl AccessGate {
    /// Creates a gate from a route policy and a credential verifier.
    pub fn new(policy: RoutePolicy, verifier: SessionVerifier) -> Self {
        Self { policy, verifier }
    }

    /// Returns the route policy.
    pub fn policy(&self) -> &RoutePolicy {
        &self.policy
    }

    /// Evaluates a request and returns the decision with any verified claims.
    ///
    /// Classification runs before any credential work: a public path never
    /// redirects, no matter what credential (or garbage) accompanies it.
    /// Missing and invalid credentials produce identical outcomes.
    pub fn evaluate(&self, path: &str, credential: Option<&str>) -> Verdict {
        let class = self.policy.classify(path);

        if class == RouteClass::Public {
            return Verdict::allow(None);
        }

        let claims = match credential {
            None => {
                tracing::debug!(path, "no credential on gated path");
                return Verdict::deny(Decision::RedirectToLogin);
            }
            Some(token) => match self.verifier.verify(token) {
                Ok(claims) => claims,
                Err(CredentialError::Missing | CredentialError::Invalid) => {
                    tracing::debug!(path, "credential rejected on gated path");
                    return Verdict::deny(Decision::RedirectToLogin);
                }
            },
        };

        if let RouteClass::RoleRestricted { role } = class {
            if !claims.has_role(role) {
                tracing::warn!(
                    path,
                    user_id = %claims.sub,
                    required_role = %role,
                    "role claim does not satisfy restricted route"
                );
                return Verdict::deny(Decision::RedirectToHome);
            }
        }

        Verdict::allow(Some(claims))
    }

    /// Evaluates a request and returns only the decision.
    pub fn decide(&self, path: &str, credential: Option<&str>) -> Decision {
        self.evaluate(path, credential).decision
    }
}

// =============================================================================
// Tests
// =============================================================================
