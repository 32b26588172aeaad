// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Implementation of the `check` command.

use festique_config::load_config;
use festique_gate::{AccessGate, Decision, SessionVerifier};

use crate::cli::{CheckArgs, Cli, OutputFormat};
use crate::error::{BinError, BinResult};
use crate::runtime::build_route_policy;

/// Executes the `check` command.
///
/// Evaluates the decision the gate would make for a request path,
/// optionally presenting a credential. Useful for verifying route rules
/// before deploying them.
pub async fn check(cli: &Cli, args: CheckArgs) -> BinResult<()> {
    let config = load_config(&cli.config).map_err(BinError::from)?;

    let policy = build_route_policy(&config.routes);
    let class = policy.classify(&args.path);

    let verifier = SessionVerifier::new(festique_gate::SessionConfig {
        secret: config.session.secret.clone(),
        issuer: config.session.issuer.clone(),
        leeway_secs: config.session.leeway_secs,
    })?;

    let gate = AccessGate::new(policy, verifier);
    let verdict = gate.evaluate(&args.path, args.token.as_deref());

    match args.format {
        OutputFormat::Text => {
            println!("path:           {}", args.path);
            println!("classification: {}", describe_class(&class));
            println!("credential:     {}", describe_credential(&args, &verdict));
            println!("decision:       {}", describe_decision(verdict.decision));
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": args.path,
                "classification": class,
                "credential_presented": args.token.is_some(),
                "credential_accepted": verdict.claims.is_some(),
                "decision": describe_decision(verdict.decision),
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
        }
    }

    Ok(())
}

fn describe_class(class: &festique_gate::RouteClass) -> String {
    match class {
        festique_gate::RouteClass::Public => "public".to_string(),
        festique_gate::RouteClass::Protected => "protected".to_string(),
        festique_gate::RouteClass::RoleRestricted { role } => {
            format!("role-restricted ({role})")
        }
    }
}

fn describe_credential(args: &CheckArgs, verdict: &festique_gate::Verdict) -> &'static str {
    match (&args.token, &verdict.claims) {
        (None, _) => "none",
        (Some(_), Some(_)) => "valid",
        (Some(_), None) => "not verified",
    }
}

fn describe_decision(decision: Decision) -> &'static str {
    match decision {
        Decision::Allow => "allow",
        Decision::RedirectToLogin => "redirect to login",
        Decision::RedirectToHome => "redirect to home",
    }
}

// =============================================================================
// Tests
// =============================================================================
