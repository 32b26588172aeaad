// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Custom extractors for gate handlers.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::GateError;
use crate::session::SessionContext;

// =============================================================================
// Session Extractor
// =============================================================================

/// Extractor for authenticated requests.
///
/// Extracts the [`SessionContext`] attached by the gate layer. The layer
/// guarantees a context on every gated route; a missing or anonymous
/// context here means the route was mounted without the layer, and the
/// fail-closed answer is 401.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(Session(ctx): Session) -> impl IntoResponse {
///     format!("Hello, {}", ctx.user_id)
/// }
/// ```
pub struct Session(pub SessionContext);

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = GateError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionContext>()
            .cloned()
            .filter(|ctx| !ctx.is_anonymous())
            .map(Session)
            .ok_or_else(|| GateError::unauthorized("Authentication required"))
    }
}

// =============================================================================
// OptionalSession Extractor
// =============================================================================

/// Extractor for optionally authenticated requests.
///
/// Returns `None` for anonymous requests instead of rejecting.
pub struct OptionalSession(pub Option<SessionContext>);

impl<S> FromRequestParts<S> for OptionalSession
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ctx = parts
            .extensions
            .get::<SessionContext>()
            .cloned()
            .filter(|ctx| !ctx.is_anonymous());
        Ok(OptionalSession(ctx))
    }
}

// =============================================================================
// Tests
// =============================================================================
