// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Configuration schema definitions.
//!
//! # Schema Structure
//!
//! ```text
//! FestiqueConfig
//! ├── server: ServerConfig
//! ├── session: SessionSettings
//! ├── redirects: RedirectSettings
//! └── routes: RouteSettings
//! ```

use std::net::{IpAddr, Ipv4Addr};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

// =============================================================================
// Constants
// =============================================================================

/// Default server port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default graceful shutdown timeout in seconds.
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// Default clock skew tolerance for credential verification, in seconds.
pub const DEFAULT_LEEWAY_SECS: u64 = 60;

/// Default session cookie name.
pub const DEFAULT_COOKIE_NAME: &str = "festique_session";

// =============================================================================
// Top-Level Configuration
// =============================================================================

/// The root configuration structure for the Festique gate.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields, default)]
pub struct FestiqueConfig {
    /// Server configuration.
    pub server: ServerConfig,

    /// Session credential settings.
    pub session: SessionSettings,

    /// Redirect targets for denied requests.
    pub redirects: RedirectSettings,

    /// Route classification rules.
    pub routes: RouteSettings,
}

impl FestiqueConfig {
    /// Validates the entire configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        self.server.validate()?;
        self.session.validate()?;
        self.redirects.validate()?;
        self.routes.validate()?;
        Ok(())
    }
}

// =============================================================================
// ServerConfig
// =============================================================================

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ServerConfig {
    /// Bind address.
    pub host: IpAddr,
    /// Bind port.
    pub port: u16,
    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Graceful shutdown timeout in seconds.
    pub shutdown_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
            port: DEFAULT_PORT,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            shutdown_timeout_secs: DEFAULT_SHUTDOWN_TIMEOUT_SECS,
        }
    }
}

impl ServerConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.port == 0 {
            return Err(ConfigError::validation("server.port must be non-zero"));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::validation(
                "server.request_timeout_secs must be non-zero",
            ));
        }
        Ok(())
    }
}

// =============================================================================
// SessionSettings
// =============================================================================

/// Session credential verification settings.
///
/// The secret is sourced from the `FESTIQUE_SESSION_SECRET` environment
/// variable and never serialized.
#[derive(Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SessionSettings {
    /// Shared signing secret. Environment-sourced; never written out.
    #[serde(skip_serializing)]
    pub secret: String,
    /// Name of the session cookie.
    pub cookie_name: String,
    /// Expected credential issuer, if issuer validation is wanted.
    pub issuer: Option<String>,
    /// Clock skew tolerance in seconds.
    pub leeway_secs: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            secret: String::new(),
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            issuer: None,
            leeway_secs: DEFAULT_LEEWAY_SECS,
        }
    }
}

impl SessionSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.secret.is_empty() {
            return Err(ConfigError::MissingSecret);
        }
        if self.cookie_name.is_empty() {
            return Err(ConfigError::validation(
                "session.cookie_name must not be empty",
            ));
        }
        Ok(())
    }
}

impl std::fmt::Debug for SessionSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionSettings")
            .field("secret", &"<redacted>")
            .field("cookie_name", &self.cookie_name)
            .field("issuer", &self.issuer)
            .field("leeway_secs", &self.leeway_secs)
            .finish()
    }
}

// =============================================================================
// RedirectSettings
// =============================================================================

/// Redirect targets for denied requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct RedirectSettings {
    /// Target for unauthenticated requests.
    pub login_path: String,
    /// Target for authenticated requests failing a role check.
    pub home_path: String,
}

impl Default for RedirectSettings {
    fn default() -> Self {
        Self {
            login_path: "/login".to_string(),
            home_path: "/".to_string(),
        }
    }
}

impl RedirectSettings {
    fn validate(&self) -> ConfigResult<()> {
        for (key, path) in [("login_path", &self.login_path), ("home_path", &self.home_path)] {
            if !path.starts_with('/') {
                return Err(ConfigError::validation(format!(
                    "redirects.{key} must be an absolute path"
                )));
            }
        }
        Ok(())
    }
}

// =============================================================================
// RouteSettings
// =============================================================================

/// Route classification rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct RouteSettings {
    /// Exact public paths.
    pub public_paths: Vec<String>,
    /// Namespace whose nested detail pages are public.
    pub listing_prefix: String,
    /// Marker excluding a listing-namespace path from the public class.
    pub edit_marker: String,
    /// Prefix of the organizer-restricted namespace.
    pub organizer_prefix: String,
    /// Path prefixes the gate never inspects.
    pub exempt_prefixes: Vec<String>,
    /// Exact paths the gate never inspects.
    pub exempt_paths: Vec<String>,
}

impl Default for RouteSettings {
    fn default() -> Self {
        Self {
            public_paths: vec![
                "/".to_string(),
                "/login".to_string(),
                "/about".to_string(),
                "/events".to_string(),
            ],
            listing_prefix: "/events/".to_string(),
            edit_marker: "edit".to_string(),
            organizer_prefix: "/dashboard/organizer".to_string(),
            exempt_prefixes: vec!["/api/".to_string(), "/assets/".to_string()],
            exempt_paths: vec![
                "/favicon.ico".to_string(),
                "/health".to_string(),
                "/ready".to_string(),
            ],
        }
    }
}

impl RouteSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.listing_prefix.is_empty() || !self.listing_prefix.starts_with('/') {
            return Err(ConfigError::validation(
                "routes.listing_prefix must be an absolute path prefix",
            ));
        }
        if self.edit_marker.is_empty() {
            return Err(ConfigError::validation(
                "routes.edit_marker must not be empty",
            ));
        }
        if !self.organizer_prefix.starts_with('/') {
            return Err(ConfigError::validation(
                "routes.organizer_prefix must be an absolute path prefix",
            ));
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> FestiqueConfig {
        let mut config = FestiqueConfig::default();
        config.session.secret = "test-secret-key-that-is-long-enough".to_string();
        config
    }

    #[test]
    fn test_default_validation_fails_without_secret() {
        let config = FestiqueConfig::default();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingSecret)
        ));
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_port_zero_is_rejected() {
        let mut config = valid_config();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_relative_redirect_is_rejected() {
        let mut config = valid_config();
        config.redirects.login_path = "login".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_edit_marker_is_rejected() {
        let mut config = valid_config();
        config.routes.edit_marker = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = valid_config();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("test-secret-key"));
    }
}
