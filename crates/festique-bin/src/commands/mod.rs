// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Command implementations for the Festique CLI.

mod check;
mod run;
mod validate;
mod version;

pub use check::check;
pub use run::run;
pub use validate::validate;
pub use version::version;
