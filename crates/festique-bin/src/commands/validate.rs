// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Implementation of the `validate` command.

use festique_config::ConfigLoader;

use crate::cli::{Cli, ValidateArgs};
use crate::error::{BinError, BinResult};

/// Executes the `validate` command.
///
/// Parses and validates the configuration file without starting the
/// server. The secret is redacted from any printed output.
pub async fn validate(cli: &Cli, args: ValidateArgs) -> BinResult<()> {
    let config = ConfigLoader::new()
        .require_file()
        .load(&cli.config)
        .map_err(BinError::from)?;

    println!("Configuration OK: {}", cli.config.display());

    if args.show_config {
        // SessionSettings skips the secret on serialization.
        let rendered = serde_yaml::to_string(&config)
            .map_err(|e| BinError::runtime(format!("Failed to render config: {}", e)))?;
        println!("{rendered}");
    }

    Ok(())
}
