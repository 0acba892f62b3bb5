// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Buildmail Authors

//! Build outcome states as reported by the CI host.

use serde::{Deserialize, Serialize};

/// Final (or current) result of a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildStatus {
    /// Build completed with no failures
    Success,
    /// Build completed but some tests failed
    Unstable,
    /// Build failed outright
    Failure,
    /// Build was skipped or vetoed before it started
    NotBuilt,
    /// Build was cancelled while running
    Aborted,
}

crate::simple_display! {
    BuildStatus {
        Success => "Successful",
        Unstable => "Unstable",
        Failure => "Failed",
        NotBuilt => "Not built",
        Aborted => "Aborted",
    }
}

impl BuildStatus {
    /// Whether the build produced a usable result (ran to completion).
    pub fn completed(&self) -> bool {
        !matches!(self, BuildStatus::NotBuilt | BuildStatus::Aborted)
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
