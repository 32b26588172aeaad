// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Implementation of the `version` command.

use crate::error::BinResult;

/// Executes the `version` command.
pub async fn version() -> BinResult<()> {
    println!("festique {}", festique_gate::VERSION);
    println!("  festique-gate   {}", festique_gate::VERSION);
    println!("  festique-config {}", festique_config::VERSION);
    Ok(())
}
