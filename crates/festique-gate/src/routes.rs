// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Static route classification.
//!
//! Every request path maps to exactly one [`RouteClass`] before any
//! credential is inspected. The rules are fixed at policy construction
//! time; classification reads no request state other than the path.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::session::Role;

// =============================================================================
// RouteClass
// =============================================================================

/// The access class of a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteClass {
    /// Reachable without a credential.
    Public,
    /// Requires a valid credential with any role.
    Protected,
    /// Requires a valid credential carrying a specific role claim.
    RoleRestricted {
        /// The role the credential must carry.
        role: Role,
    },
}

impl RouteClass {
    /// Returns `true` if this class requires a credential.
    pub fn requires_credential(&self) -> bool {
        !matches!(self, RouteClass::Public)
    }
}

// =============================================================================
// RoutePolicy
// =============================================================================

/// Path classification rules for the gate.
///
/// The policy is evaluated allow-list first with a fail-closed fallthrough:
/// anything not explicitly public is `Protected`, and the organizer
/// dashboard prefix additionally pins the role claim.
#[derive(Debug, Clone)]
pub struct RoutePolicy {
    /// Exact public paths (case-sensitive).
    public_paths: HashSet<String>,
    /// Namespace whose nested detail pages are public.
    listing_prefix: String,
    /// Marker excluding a listing-namespace path from the public class.
    edit_marker: String,
    /// Prefix of the role-restricted dashboard namespace.
    restricted_prefix: String,
    /// Role required under the restricted prefix.
    required_role: Role,
}

impl RoutePolicy {
    /// Creates the policy with the stock Festique rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a policy builder.
    pub fn builder() -> RoutePolicyBuilder {
        RoutePolicyBuilder::new()
    }

    /// Classifies a request path.
    ///
    /// Public checks run first; a path that classifies as `Public` must
    /// never trigger a credential check downstream.
    pub fn classify(&self, path: &str) -> RouteClass {
        if self.public_paths.contains(path) {
            return RouteClass::Public;
        }

        // Detail pages under the listing namespace are public. The edit
        // marker is a substring containment check over the whole path, not
        // a segment match: a slug that merely contains "edit" is excluded
        // from the public class as well.
        if path.starts_with(&self.listing_prefix) && !path.contains(&self.edit_marker) {
            return RouteClass::Public;
        }

        if path.starts_with(&self.restricted_prefix) {
            return RouteClass::RoleRestricted {
                role: self.required_role,
            };
        }

        RouteClass::Protected
    }

    /// Returns the exact public paths.
    pub fn public_paths(&self) -> &HashSet<String> {
        &self.public_paths
    }

    /// Returns the role-restricted prefix.
    pub fn restricted_prefix(&self) -> &str {
        &self.restricted_prefix
    }

    /// Returns the role required under the restricted prefix.
    pub fn required_role(&self) -> Role {
        self.required_role
    }
}

impl Default for RoutePolicy {
    fn default() -> Self {
        Self {
            public_paths: ["/", "/login", "/about", "/events"]
                .into_iter()
                .map(String::from)
                .collect(),
            listing_prefix: "/events/".to_string(),
            edit_marker: "edit".to_string(),
            restricted_prefix: "/dashboard/organizer".to_string(),
            required_role: Role::Organizer,
        }
    }
}

// =============================================================================
// RoutePolicyBuilder
// =============================================================================

/// Builder for constructing route policies.
#[derive(Debug)]
pub struct RoutePolicyBuilder {
    policy: RoutePolicy,
}

impl RoutePolicyBuilder {
    /// Creates a builder seeded with the stock rules.
    pub fn new() -> Self {
        Self {
            policy: RoutePolicy::default(),
        }
    }

    /// Replaces the exact public path set.
    pub fn public_paths(mut self, paths: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.policy.public_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a single exact public path.
    pub fn add_public_path(mut self, path: impl Into<String>) -> Self {
        self.policy.public_paths.insert(path.into());
        self
    }

    /// Sets the listing namespace prefix.
    pub fn listing_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.policy.listing_prefix = prefix.into();
        self
    }

    /// Sets the edit marker.
    pub fn edit_marker(mut self, marker: impl Into<String>) -> Self {
        self.policy.edit_marker = marker.into();
        self
    }

    /// Sets the role-restricted prefix and its required role.
    pub fn restricted_prefix(mut self, prefix: impl Into<String>, role: Role) -> Self {
        self.policy.restricted_prefix = prefix.into();
        self.policy.required_role = role;
        self
    }

    /// Builds the policy.
    pub fn build(self) -> RoutePolicy {
        self.policy
    }
}

impl Default for RoutePolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
