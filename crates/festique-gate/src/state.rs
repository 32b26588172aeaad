// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::GateConfig;
use crate::gate::AccessGate;
use crate::routes::RoutePolicy;
use crate::session::SessionVerifier;

// =============================================================================
// AppState
// =============================================================================

/// State shared by all handlers and the gate layer.
#[derive(Clone)]
pub struct AppState {
    /// Gate configuration.
    pub config: Arc<GateConfig>,
    /// The access gate.
    pub gate: Arc<AccessGate>,
}

impl AppState {
    /// Creates a state builder.
    pub fn builder() -> AppStateBuilder {
        AppStateBuilder::new()
    }
}

// =============================================================================
// AppStateBuilder
// =============================================================================

/// Builder for constructing [`AppState`].
#[derive(Default)]
pub struct AppStateBuilder {
    config: Option<GateConfig>,
    policy: Option<RoutePolicy>,
}

impl AppStateBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    pub fn config(mut self, config: GateConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the route policy. Defaults to the stock Festique rules.
    pub fn policy(mut self, policy: RoutePolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Builds the state, constructing the verifier from the session
    /// configuration.
    pub fn build(self) -> crate::error::GateResult<AppState> {
        let config = self.config.unwrap_or_default();
        let policy = self.policy.unwrap_or_default();
        let verifier = SessionVerifier::new(config.session.clone())?;

        Ok(AppState {
            config: Arc::new(config),
            gate: Arc::new(AccessGate::new(policy, verifier)),
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
