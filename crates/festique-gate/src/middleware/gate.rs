// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! HTTP adapter for the access gate.
//!
//! Wraps [`AccessGate`] as a tower layer: extracts the credential from the
//! session cookie (or a bearer header), asks the gate for a decision, and
//! maps it onto forward-or-redirect responses.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::{
    body::Body,
    http::{header, Request},
    response::{IntoResponse, Redirect, Response},
};
use tower::{Layer, Service};

use crate::config::{ExemptionConfig, RedirectConfig};
use crate::gate::{AccessGate, Decision};
use crate::session::SessionContext;

// =============================================================================
// GateLayer
// =============================================================================

/// Layer applying the access gate to every request.
///
/// Requests matching the exemption rules (static assets, API routes,
/// infrastructure endpoints) pass through untouched; everything else is
/// classified and gated.
#[derive(Clone)]
pub struct GateLayer {
    gate: Arc<AccessGate>,
    cookie_name: Arc<str>,
    redirects: Arc<RedirectConfig>,
    exemptions: Arc<ExemptionConfig>,
}

impl GateLayer {
    /// Creates a gate layer with default cookie, redirect and exemption
    /// settings.
    pub fn new(gate: Arc<AccessGate>) -> Self {
        Self {
            gate,
            cookie_name: Arc::from("festique_session"),
            redirects: Arc::new(RedirectConfig::default()),
            exemptions: Arc::new(ExemptionConfig::default()),
        }
    }

    /// Sets the session cookie name.
    pub fn with_cookie_name(mut self, name: impl AsRef<str>) -> Self {
        self.cookie_name = Arc::from(name.as_ref());
        self
    }

    /// Sets the redirect targets.
    pub fn with_redirects(mut self, redirects: RedirectConfig) -> Self {
        self.redirects = Arc::new(redirects);
        self
    }

    /// Sets the exemption rules.
    pub fn with_exemptions(mut self, exemptions: ExemptionConfig) -> Self {
        self.exemptions = Arc::new(exemptions);
        self
    }
}

impl<S> Layer<S> for GateLayer {
    type Service = GateMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        GateMiddleware {
            inner,
            gate: self.gate.clone(),
            cookie_name: self.cookie_name.clone(),
            redirects: self.redirects.clone(),
            exemptions: self.exemptions.clone(),
        }
    }
}

// =============================================================================
// GateMiddleware
// =============================================================================

/// Middleware enforcing the access gate.
#[derive(Clone)]
pub struct GateMiddleware<S> {
    inner: S,
    gate: Arc<AccessGate>,
    cookie_name: Arc<str>,
    redirects: Arc<RedirectConfig>,
    exemptions: Arc<ExemptionConfig>,
}

impl<S> Service<Request<Body>> for GateMiddleware<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        let path = req.uri().path().to_string();
        let is_exempt = self.exemptions.is_exempt(&path);
        let credential = extract_credential(&req, &self.cookie_name);
        let gate = self.gate.clone();
        let redirects = self.redirects.clone();
        let mut inner = self.inner.clone();

        Box::pin(async move {
            // Static assets and API routes never see the gate.
            if is_exempt {
                return inner.call(req).await;
            }

            let verdict = gate.evaluate(&path, credential.as_deref());

            match verdict.decision {
                Decision::Allow => {
                    let ctx = match verdict.claims {
                        Some(ref claims) => SessionContext::from_claims(claims),
                        None => SessionContext::anonymous(),
                    };
                    req.extensions_mut().insert(ctx);
                    inner.call(req).await
                }
                Decision::RedirectToLogin => {
                    Ok(Redirect::temporary(&redirects.login_path).into_response())
                }
                Decision::RedirectToHome => {
                    Ok(Redirect::temporary(&redirects.home_path).into_response())
                }
            }
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Extracts the session credential from a request.
///
/// The session cookie is the primary carrier; `Authorization: Bearer` is
/// accepted as a fallback for non-browser clients.
fn extract_credential<B>(req: &Request<B>, cookie_name: &str) -> Option<String> {
    if let Some(token) = extract_session_cookie(req, cookie_name) {
        return Some(token);
    }

    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer ").map(|s| s.to_string()))
}

/// Extracts the named cookie's value from the `Cookie` header.
fn extract_session_cookie<B>(req: &Request<B>, cookie_name: &str) -> Option<String> {
    let header_value = req
        .headers()
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())?;

    for pair in header_value.split(';') {
        let mut parts = pair.trim().splitn(2, '=');
        if parts.next() == Some(cookie_name) {
            let value = parts.next().unwrap_or("");
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }

    None
}

// =============================================================================
// Tests
// =============================================================================
