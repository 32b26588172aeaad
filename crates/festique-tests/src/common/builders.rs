// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # Request Builders
//!
//! Helpers for constructing HTTP requests against the gate router.

use axum::body::Body;
use axum::http::{header, HeaderValue, Request};

/// Builder for test requests.
pub struct RequestBuilder {
    path: String,
    cookie: Option<String>,
    bearer: Option<String>,
}

impl RequestBuilder {
    /// Starts a GET request for the given path.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            cookie: None,
            bearer: None,
        }
    }

    /// Attaches a session cookie with the default cookie name.
    pub fn with_session_cookie(mut self, token: impl Into<String>) -> Self {
        self.cookie = Some(token.into());
        self
    }

    /// Attaches a bearer authorization header.
    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    /// Builds the request.
    pub fn build(self) -> Request<Body> {
        let mut request = Request::builder()
            .uri(&self.path)
            .body(Body::empty())
            .expect("request construction");

        if let Some(token) = self.cookie {
            request.headers_mut().insert(
                header::COOKIE,
                HeaderValue::from_str(&format!("festique_session={token}"))
                    .expect("cookie header"),
            );
        }

        if let Some(token) = self.bearer {
            request.headers_mut().insert(
                header::AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {token}")).expect("bearer header"),
            );
        }

        request
    }
}
