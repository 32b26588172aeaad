// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Festique access gate.
//!
//! Main binary entry point.

use festique_bin::cli::{Cli, Commands};
use festique_bin::error::report_error_and_exit;
use festique_bin::{commands, logging};

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    logging::init_logging(cli.effective_log_level(), cli.log_format);

    let result = match cli.effective_command() {
        Commands::Run(args) => commands::run(&cli, args).await,
        Commands::Validate(args) => commands::validate(&cli, args).await,
        Commands::Check(args) => commands::check(&cli, args).await,
        Commands::Version => commands::version().await,
    };

    if let Err(error) = result {
        report_error_and_exit(error);
    }
}
