// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Session credential claims.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Role
// =============================================================================

/// Roles a session credential can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Can manage events and access the organizer dashboard.
    Organizer,
    /// Can browse and register for events.
    Attendee,
}

impl Role {
    /// Returns the role name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Organizer => "organizer",
            Role::Attendee => "attendee",
        }
    }

    /// Parses a role from a claim string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "organizer" => Some(Role::Organizer),
            "attendee" => Some(Role::Attendee),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// SessionClaims
// =============================================================================

/// Claims embedded in the signed session credential.
///
/// Credentials are issued by the identity service at login; the gate only
/// ever decodes and verifies them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject, the user ID.
    pub sub: String,

    /// Expiration time (Unix timestamp).
    pub exp: i64,

    /// Issued at time (Unix timestamp).
    pub iat: i64,

    /// Not before time (Unix timestamp).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,

    /// Issuer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,

    /// Role claim.
    pub role: String,

    /// User's display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl SessionClaims {
    /// Creates claims for a user.
    pub fn new(user_id: impl Into<String>, role: Role, expires_in_secs: i64) -> Self {
        let now = Utc::now().timestamp();

        Self {
            sub: user_id.into(),
            exp: now + expires_in_secs,
            iat: now,
            nbf: Some(now),
            iss: None,
            role: role.as_str().to_string(),
            name: None,
        }
    }

    /// Returns the user ID.
    pub fn user_id(&self) -> &str {
        &self.sub
    }

    /// Returns the parsed role claim, if it names a known role.
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    /// Returns `true` if the role claim equals the given role.
    pub fn has_role(&self, role: Role) -> bool {
        self.role() == Some(role)
    }

    /// Returns `true` if the credential has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Returns the expiration time as a `DateTime`.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Sets the issuer.
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.iss = Some(issuer.into());
        self
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_creation() {
        let claims = SessionClaims::new("user-001", Role::Attendee, 3600);

        assert_eq!(claims.user_id(), "user-001");
        assert_eq!(claims.role(), Some(Role::Attendee));
        assert!(claims.has_role(Role::Attendee));
        assert!(!claims.has_role(Role::Organizer));
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_unknown_role_claim() {
        let mut claims = SessionClaims::new("user-001", Role::Attendee, 3600);
        claims.role = "superuser".to_string();

        assert_eq!(claims.role(), None);
        assert!(!claims.has_role(Role::Organizer));
    }

    #[test]
    fn test_claims_expiration() {
        let claims = SessionClaims::new("user", Role::Attendee, -100);
        assert!(claims.is_expired());

        let claims = SessionClaims::new("user", Role::Attendee, 3600);
        assert!(!claims.is_expired());
        assert!(claims.expires_at().is_some());
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("organizer"), Some(Role::Organizer));
        assert_eq!(Role::parse("attendee"), Some(Role::Attendee));
        assert_eq!(Role::parse("Organizer"), None);
        assert_eq!(Role::parse(""), None);
    }
}
