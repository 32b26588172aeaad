// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Gate runtime orchestration.
//!
//! Wires the loaded configuration into the gate components and runs the
//! server until shutdown:
//!
//! - Configuration loading and validation
//! - Route policy and session verifier construction
//! - HTTP server with the gate middleware
//! - Graceful shutdown coordination

use std::path::Path;
use std::time::Duration;

use tracing::info;

use festique_config::{load_config, FestiqueConfig, RouteSettings};
use festique_gate::{
    AppState, ExemptionConfig, GateConfig, GateServer, RedirectConfig, RoutePolicy, SessionConfig,
};

use crate::error::{BinError, BinResult};
use crate::shutdown::ShutdownCoordinator;

// =============================================================================
// GateRuntime
// =============================================================================

/// The runtime that assembles and runs the gate server.
pub struct GateRuntime {
    config: FestiqueConfig,
    shutdown: ShutdownCoordinator,
    port_override: Option<u16>,
}

impl GateRuntime {
    /// Creates a runtime from a loaded configuration.
    pub fn new(config: FestiqueConfig) -> Self {
        Self {
            config,
            shutdown: ShutdownCoordinator::new(),
            port_override: None,
        }
    }

    /// Overrides the configured bind port.
    pub fn with_port_override(mut self, port: Option<u16>) -> Self {
        self.port_override = port;
        self
    }

    /// Runs the gate until shutdown is signaled.
    pub async fn run(self) -> BinResult<()> {
        info!("Starting Festique gate v{}", festique_gate::VERSION);

        let state = self.build_state()?;
        let server = GateServer::new(state);
        let addr = server.addr();

        let signal = self.shutdown.shutdown_signal();
        let server_task = tokio::spawn(server.run_with_shutdown(signal.wait()));

        info!("Festique gate is ready on {}", addr);
        self.shutdown.wait_for_shutdown().await;

        info!("Shutdown initiated, waiting for in-flight requests...");
        server_task
            .await
            .map_err(|e| BinError::runtime(format!("Server task panicked: {}", e)))??;

        info!("Festique gate shutdown complete");
        Ok(())
    }

    /// Builds the application state from the configuration.
    fn build_state(&self) -> BinResult<AppState> {
        let gate_config = build_gate_config(&self.config, self.port_override);
        let policy = build_route_policy(&self.config.routes);

        AppState::builder()
            .config(gate_config)
            .policy(policy)
            .build()
            .map_err(|e| BinError::init(format!("Failed to build gate state: {}", e)))
    }

    /// Returns the shutdown coordinator.
    pub fn shutdown(&self) -> &ShutdownCoordinator {
        &self.shutdown
    }
}

// =============================================================================
// Configuration Mapping
// =============================================================================

/// Maps the file-level configuration onto the gate server configuration.
pub fn build_gate_config(config: &FestiqueConfig, port_override: Option<u16>) -> GateConfig {
    GateConfig {
        host: config.server.host,
        port: port_override.unwrap_or(config.server.port),
        cookie_name: config.session.cookie_name.clone(),
        redirects: RedirectConfig {
            login_path: config.redirects.login_path.clone(),
            home_path: config.redirects.home_path.clone(),
        },
        exemptions: ExemptionConfig {
            prefixes: config.routes.exempt_prefixes.clone(),
            paths: config.routes.exempt_paths.clone(),
        },
        session: SessionConfig {
            secret: config.session.secret.clone(),
            issuer: config.session.issuer.clone(),
            leeway_secs: config.session.leeway_secs,
        },
        request_timeout: Duration::from_secs(config.server.request_timeout_secs),
        shutdown_timeout: Duration::from_secs(config.server.shutdown_timeout_secs),
    }
}

/// Maps the route settings onto a route policy.
pub fn build_route_policy(routes: &RouteSettings) -> RoutePolicy {
    RoutePolicy::builder()
        .public_paths(routes.public_paths.iter().cloned())
        .listing_prefix(routes.listing_prefix.clone())
        .edit_marker(routes.edit_marker.clone())
        .restricted_prefix(
            routes.organizer_prefix.clone(),
            festique_gate::Role::Organizer,
        )
        .build()
}

// =============================================================================
// RuntimeBuilder
// =============================================================================

/// Builder for constructing the gate runtime.
pub struct RuntimeBuilder {
    config_path: Option<std::path::PathBuf>,
    config: Option<FestiqueConfig>,
    port_override: Option<u16>,
}

impl RuntimeBuilder {
    /// Creates a new runtime builder.
    pub fn new() -> Self {
        Self {
            config_path: None,
            config: None,
            port_override: None,
        }
    }

    /// Sets the configuration file path.
    pub fn config_path(mut self, path: impl AsRef<Path>) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the configuration directly.
    pub fn config(mut self, config: FestiqueConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Overrides the configured bind port.
    pub fn port_override(mut self, port: Option<u16>) -> Self {
        self.port_override = port;
        self
    }

    /// Builds the runtime.
    pub fn build(self) -> BinResult<GateRuntime> {
        let config = match self.config {
            Some(cfg) => cfg,
            None => {
                let path = self
                    .config_path
                    .ok_or_else(|| BinError::config("No configuration provided"))?;

                load_config(&path).map_err(|e| {
                    BinError::config(format!("Failed to load config from {:?}: {}", path, e))
                })?
            }
        };

        Ok(GateRuntime::new(config).with_port_override(self.port_override))
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
