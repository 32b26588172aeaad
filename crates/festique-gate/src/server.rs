// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Gate server implementation.

use std::net::SocketAddr;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use tracing::info;

use crate::error::{GateError, GateResult};
use crate::handlers;
use crate::middleware::GateLayer;
use crate::state::AppState;

// =============================================================================
// GateServer
// =============================================================================

/// The gate server.
///
/// Fronts the routed surface with the access gate and serves it over HTTP.
pub struct GateServer {
    state: AppState,
}

impl GateServer {
    /// Creates a server from application state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Creates the router with all routes and middleware.
    pub fn router(&self) -> Router {
        let config = &self.state.config;

        let gate = GateLayer::new(self.state.gate.clone())
            .with_cookie_name(&config.cookie_name)
            .with_redirects(config.redirects.clone())
            .with_exemptions(config.exemptions.clone());

        let middleware_stack = ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CompressionLayer::new())
            .layer(TimeoutLayer::new(config.request_timeout))
            .layer(gate);

        Router::new()
            // Infrastructure (exempt from the gate)
            .route("/health", get(handlers::health))
            .route("/ready", get(handlers::ready))
            // Public pages
            .route("/", get(handlers::home))
            .route("/about", get(handlers::about))
            .route("/login", get(handlers::login))
            .route("/events", get(handlers::list_events))
            .route("/events/{event_id}", get(handlers::event_detail))
            // Gated pages
            .route("/events/{event_id}/edit", get(handlers::edit_event))
            .route("/events/{event_id}/register", get(handlers::register))
            .route("/dashboard", get(handlers::overview))
            .route("/dashboard/organizer", get(handlers::organizer_overview))
            .route(
                "/dashboard/organizer/{section}",
                get(handlers::organizer_section),
            )
            // API (exempt from the gate)
            .route("/api/v1/events", get(handlers::api_list_events))
            // Apply middleware and state
            .layer(middleware_stack)
            .with_state(self.state.clone())
    }

    /// Runs the server.
    pub async fn run(self) -> GateResult<()> {
        let addr = self.state.config.socket_addr();
        let router = self.router();

        info!("Starting gate server on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| GateError::internal(format!("Failed to bind: {}", e)))?;

        axum::serve(listener, router)
            .await
            .map_err(|e| GateError::internal(format!("Server error: {}", e)))?;

        Ok(())
    }

    /// Runs the server with graceful shutdown.
    pub async fn run_with_shutdown(
        self,
        shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
    ) -> GateResult<()> {
        let addr = self.state.config.socket_addr();
        let router = self.router();

        info!("Starting gate server on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| GateError::internal(format!("Failed to bind: {}", e)))?;

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(|e| GateError::internal(format!("Server error: {}", e)))?;

        info!("Gate server shutdown complete");

        Ok(())
    }

    /// Returns the server address.
    pub fn addr(&self) -> SocketAddr {
        self.state.config.socket_addr()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GateConfig;
    use crate::session::SessionConfig;

    fn test_state() -> AppState {
        let config = GateConfig::default()
            .with_session(SessionConfig::new("test-secret-key-that-is-long-enough"));
        AppState::builder().config(config).build().unwrap()
    }

    #[test]
    fn test_server_addr() {
        let server = GateServer::new(test_state());
        assert_eq!(server.addr().port(), 8080);
    }

    #[test]
    fn test_router_creation() {
        let server = GateServer::new(test_state());
        let _router = server.router();
    }
}
