// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # festique-config
//!
//! Configuration schema and loader for the Festique access gate.
//!
//! Configuration is read from a YAML or TOML file, merged with
//! `FESTIQUE_*` environment overrides, and validated. The session signing
//! secret is environment-sourced (`FESTIQUE_SESSION_SECRET`) and redacted
//! from every serialized or debug-printed form.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod loader;
pub mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{load_config, ConfigLoader};
pub use schema::{
    FestiqueConfig, RedirectSettings, RouteSettings, ServerConfig, SessionSettings,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
