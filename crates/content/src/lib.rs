// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Buildmail Authors

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! bm-content: the built-in macro catalog for notification templates.
//!
//! Each provider here is a stateless function of (context, arguments) to
//! text, covering default configuration chains, build metadata, the captured
//! environment and test-result counts. Every built-in degrades to the empty
//! string on missing data; none of them errors.

pub mod build;
pub mod catalog;
pub mod defaults;
pub mod env;
pub mod test_counts;

pub use build::BuildContent;
pub use catalog::{builtin_registry, register_builtins};
pub use defaults::{DefaultsContent, ProjectDefaultsContent};
pub use env::EnvContent;
pub use test_counts::TestCountsContent;
