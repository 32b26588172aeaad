// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Gate server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::session::SessionConfig;

// =============================================================================
// GateConfig
// =============================================================================

/// Configuration for the gate server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Server host address.
    pub host: IpAddr,
    /// Server port.
    pub port: u16,
    /// Name of the session cookie.
    pub cookie_name: String,
    /// Redirect targets for denied requests.
    pub redirects: RedirectConfig,
    /// Paths the gate never inspects.
    pub exemptions: ExemptionConfig,
    /// Session credential verification settings.
    pub session: SessionConfig,
    /// Request timeout.
    #[serde(with = "duration_secs")]
    pub request_timeout: Duration,
    /// Graceful shutdown timeout.
    #[serde(with = "duration_secs")]
    pub shutdown_timeout: Duration,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
            port: 8080,
            cookie_name: "festique_session".to_string(),
            redirects: RedirectConfig::default(),
            exemptions: ExemptionConfig::default(),
            session: SessionConfig::default(),
            request_timeout: Duration::from_secs(30),
            shutdown_timeout: Duration::from_secs(30),
        }
    }
}

impl GateConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Sets the host address.
    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    /// Sets the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the session configuration.
    pub fn with_session(mut self, session: SessionConfig) -> Self {
        self.session = session;
        self
    }
}

// =============================================================================
// RedirectConfig
// =============================================================================

/// Where denied requests are sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RedirectConfig {
    /// Target for unauthenticated requests.
    pub login_path: String,
    /// Target for authenticated requests that fail a role check.
    pub home_path: String,
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            login_path: "/login".to_string(),
            home_path: "/".to_string(),
        }
    }
}

// =============================================================================
// ExemptionConfig
// =============================================================================

/// Request paths that bypass the gate entirely.
///
/// Static assets, API routes and the service's own infrastructure
/// endpoints are matched here before any classification happens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExemptionConfig {
    /// Path prefixes that bypass the gate.
    pub prefixes: Vec<String>,
    /// Exact paths that bypass the gate.
    pub paths: Vec<String>,
}

impl Default for ExemptionConfig {
    fn default() -> Self {
        Self {
            prefixes: vec!["/api/".to_string(), "/assets/".to_string()],
            paths: vec![
                "/favicon.ico".to_string(),
                "/health".to_string(),
                "/ready".to_string(),
            ],
        }
    }
}

impl ExemptionConfig {
    /// Returns `true` if the path bypasses the gate.
    pub fn is_exempt(&self, path: &str) -> bool {
        if self.paths.iter().any(|p| p == path) {
            return true;
        }
        self.prefixes.iter().any(|prefix| path.starts_with(prefix))
    }
}

// =============================================================================
// duration_secs serde module
// =============================================================================

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GateConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.cookie_name, "festique_session");
        assert_eq!(config.redirects.login_path, "/login");
        assert_eq!(config.redirects.home_path, "/");
    }

    #[test]
    fn test_socket_addr() {
        let config = GateConfig::default().with_port(9000);
        assert_eq!(config.socket_addr().port(), 9000);
    }

    #[test]
    fn test_default_exemptions() {
        let exemptions = ExemptionConfig::default();

        assert!(exemptions.is_exempt("/api/v1/events"));
        assert!(exemptions.is_exempt("/assets/logo.svg"));
        assert!(exemptions.is_exempt("/favicon.ico"));
        assert!(exemptions.is_exempt("/health"));
        assert!(!exemptions.is_exempt("/dashboard"));
        assert!(!exemptions.is_exempt("/healthcheck")); // exact, not prefix
    }
}
