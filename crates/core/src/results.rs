// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Buildmail Authors

//! Test-result summary attached to a build.

use serde::{Deserialize, Serialize};

/// Aggregate test counts for one build.
///
/// The host reports totals and the two non-passing buckets; the passing count
/// is derived. Hosts that ran no tests attach no summary at all
/// (`BuildInfo::tests` is `None`) rather than an all-zero one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestCounts {
    pub total: u32,
    pub failed: u32,
    pub skipped: u32,
}

impl TestCounts {
    pub fn new(total: u32, failed: u32, skipped: u32) -> Self {
        Self { total, failed, skipped }
    }

    /// Tests that ran and passed. Saturates at zero if the host reports
    /// inconsistent buckets.
    pub fn passed(&self) -> u32 {
        self.total.saturating_sub(self.failed).saturating_sub(self.skipped)
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod tests;
