// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Buildmail Authors

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! bm-core: build metadata and notification configuration shared across the
//! buildmail crates

pub mod macros;

pub mod build;
pub mod context;
pub mod defaults;
pub mod results;
pub mod status;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use build::BuildInfo;
pub use context::EvalContext;
pub use defaults::{GlobalDefaults, ProjectDefaults};
pub use results::TestCounts;
pub use status::BuildStatus;
