// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Request-scoped session identity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Role, SessionClaims};

/// Identity attached to a request after the gate has run.
///
/// Public paths carry an anonymous context; gated paths carry the
/// verified credential's identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionContext {
    /// User ID.
    pub user_id: String,
    /// Role claim, if authenticated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// User's display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Request ID for tracing.
    pub request_id: Uuid,
}

impl SessionContext {
    /// Creates a context from verified claims.
    pub fn from_claims(claims: &SessionClaims) -> Self {
        Self {
            user_id: claims.sub.clone(),
            role: Some(claims.role.clone()),
            name: claims.name.clone(),
            request_id: Uuid::now_v7(),
        }
    }

    /// Creates an anonymous context for ungated requests.
    pub fn anonymous() -> Self {
        Self {
            user_id: "anonymous".to_string(),
            role: None,
            name: None,
            request_id: Uuid::now_v7(),
        }
    }

    /// Sets the request ID.
    pub fn with_request_id(mut self, request_id: Uuid) -> Self {
        self.request_id = request_id;
        self
    }

    /// Returns the parsed role, if it names a known role.
    pub fn role(&self) -> Option<Role> {
        self.role.as_deref().and_then(Role::parse)
    }

    /// Returns `true` if this is an anonymous context.
    pub fn is_anonymous(&self) -> bool {
        self.user_id == "anonymous"
    }

    /// Returns `true` if the context carries the organizer role.
    pub fn is_organizer(&self) -> bool {
        self.role() == Some(Role::Organizer)
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::anonymous()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_from_claims() {
        let claims = SessionClaims::new("user-001", Role::Organizer, 3600).with_name("Dana");
        let ctx = SessionContext::from_claims(&claims);

        assert_eq!(ctx.user_id, "user-001");
        assert_eq!(ctx.role(), Some(Role::Organizer));
        assert!(ctx.is_organizer());
        assert!(!ctx.is_anonymous());
        assert_eq!(ctx.name.as_deref(), Some("Dana"));
    }

    #[test]
    fn test_anonymous_context() {
        let ctx = SessionContext::anonymous();

        assert!(ctx.is_anonymous());
        assert!(!ctx.is_organizer());
        assert!(ctx.role.is_none());
    }
}
