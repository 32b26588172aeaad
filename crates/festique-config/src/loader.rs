// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Configuration loading and processing.
//!
//! # Loading Pipeline
//!
//! 1. Parse the YAML/TOML file (if it exists)
//! 2. Apply `FESTIQUE_*` environment overrides
//! 3. Validate the merged configuration
//!
//! The session secret is deliberately environment-only by default
//! (`FESTIQUE_SESSION_SECRET`); a missing config file is not an error, so
//! the gate is runnable with nothing but the secret set.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{ConfigError, ConfigResult};
use crate::schema::FestiqueConfig;

// =============================================================================
// ConfigLoader
// =============================================================================

/// Configuration loader for the Festique gate.
///
/// # Examples
///
/// ```no_run
/// use festique_config::ConfigLoader;
///
/// let config = ConfigLoader::new().load("festique.yaml").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Environment variable prefix.
    env_prefix: String,
    /// Whether to apply environment overrides.
    apply_env: bool,
    /// Whether a missing file falls back to defaults.
    allow_missing: bool,
}

impl ConfigLoader {
    /// Creates a loader with default settings.
    pub fn new() -> Self {
        Self {
            env_prefix: "FESTIQUE".to_string(),
            apply_env: true,
            allow_missing: true,
        }
    }

    /// Sets the environment variable prefix.
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Enables or disables environment overrides.
    pub fn with_env(mut self, enabled: bool) -> Self {
        self.apply_env = enabled;
        self
    }

    /// Requires the config file to exist.
    pub fn require_file(mut self) -> Self {
        self.allow_missing = false;
        self
    }

    /// Loads, merges, and validates configuration from the given path.
    pub fn load(&self, path: impl AsRef<Path>) -> ConfigResult<FestiqueConfig> {
        let path = path.as_ref();

        let mut config = if path.exists() {
            debug!(path = %path.display(), "loading config file");
            self.parse_file(path)?
        } else if self.allow_missing {
            debug!(path = %path.display(), "config file missing, using defaults");
            FestiqueConfig::default()
        } else {
            return Err(ConfigError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
            ));
        };

        if self.apply_env {
            self.apply_env_overrides(&mut config)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parses a config file, choosing the format by extension.
    fn parse_file(&self, path: &Path) -> ConfigResult<FestiqueConfig> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::parse("YAML", e.to_string())),
            Some("toml") => {
                toml::from_str(&contents).map_err(|e| ConfigError::parse("TOML", e.to_string()))
            }
            _ => Err(ConfigError::UnsupportedFormat {
                path: PathBuf::from(path),
            }),
        }
    }

    /// Applies environment variable overrides to the configuration.
    fn apply_env_overrides(&self, config: &mut FestiqueConfig) -> ConfigResult<()> {
        if let Some(secret) = self.env_var("SESSION_SECRET") {
            config.session.secret = secret;
        }

        if let Some(host) = self.env_var("HOST") {
            config.server.host = host.parse().map_err(|_| {
                ConfigError::validation(format!(
                    "{}_HOST is not a valid IP address",
                    self.env_prefix
                ))
            })?;
        }

        if let Some(port) = self.env_var("PORT") {
            config.server.port = port.parse().map_err(|_| {
                ConfigError::validation(format!("{}_PORT is not a valid port", self.env_prefix))
            })?;
        }

        if let Some(issuer) = self.env_var("SESSION_ISSUER") {
            config.session.issuer = Some(issuer);
        }

        Ok(())
    }

    /// Reads a prefixed environment variable, ignoring empty values.
    fn env_var(&self, key: &str) -> Option<String> {
        let full_key = format!("{}_{}", self.env_prefix, key);
        match env::var(&full_key) {
            Ok(value) if !value.is_empty() => {
                debug!(key = %full_key, "applying environment override");
                Some(value)
            }
            Ok(_) => {
                warn!(key = %full_key, "ignoring empty environment override");
                None
            }
            Err(_) => None,
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Convenience Functions
// =============================================================================

/// Loads configuration from the given path with default loader settings.
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<FestiqueConfig> {
    ConfigLoader::new().load(path)
}

// =============================================================================
// Tests
// =============================================================================
