// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # festique-tests
//!
//! Integration tests and shared fixtures for the Festique access gate.
//!
//! The test suites live in `tests/`; this crate exports the common
//! fixtures and builders they share.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod common;
