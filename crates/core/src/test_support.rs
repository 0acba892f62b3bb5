// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Buildmail Authors

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{BuildInfo, BuildStatus, TestCounts};

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for core types.
pub mod strategies {
    use super::*;
    use proptest::prelude::*;

    pub fn arb_build_status() -> impl Strategy<Value = BuildStatus> {
        prop_oneof![
            Just(BuildStatus::Success),
            Just(BuildStatus::Unstable),
            Just(BuildStatus::Failure),
            Just(BuildStatus::NotBuilt),
            Just(BuildStatus::Aborted),
        ]
    }

    pub fn arb_test_counts() -> impl Strategy<Value = TestCounts> {
        (0u32..1000, 0u32..1000, 0u32..1000)
            .prop_map(|(total, failed, skipped)| TestCounts::new(total, failed, skipped))
    }
}

// ── Fixture factories ───────────────────────────────────────────────────

/// A build with representative metadata filled in.
pub fn sample_build() -> BuildInfo {
    BuildInfo::new("website", 42)
        .project_url("https://ci.example.com/job/website/")
        .build_url("https://ci.example.com/job/website/42/")
        .status(BuildStatus::Success)
}

/// A build whose captured environment holds exactly `pairs`.
pub fn build_with_env(pairs: &[(&str, &str)]) -> BuildInfo {
    pairs.iter().fold(BuildInfo::new("website", 1), |build, (k, v)| build.env_var(*k, *v))
}

/// A build carrying a test-result summary.
pub fn build_with_tests(total: u32, failed: u32, skipped: u32) -> BuildInfo {
    sample_build().tests(TestCounts::new(total, failed, skipped))
}
