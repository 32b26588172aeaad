// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # festique-bin
//!
//! Binary crate for the Festique access gate: CLI parsing, logging setup,
//! runtime orchestration, and graceful shutdown.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod runtime;
pub mod shutdown;

pub use cli::{Cli, Commands};
pub use error::{BinError, BinResult};
pub use runtime::{GateRuntime, RuntimeBuilder};
pub use shutdown::ShutdownCoordinator;
