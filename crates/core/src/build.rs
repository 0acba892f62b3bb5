// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Buildmail Authors

//! Snapshot of one build's metadata, taken by the host when notification
//! content is assembled.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::results::TestCounts;
use crate::status::BuildStatus;

/// Everything the content providers can ask about a build.
///
/// The environment map is a snapshot captured by the host for this build,
/// not the live process environment; insertion order is preserved so
/// diagnostics render deterministically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildInfo {
    pub project_name: String,
    pub project_url: String,
    pub build_number: u32,
    pub build_url: String,
    pub status: Option<BuildStatus>,
    pub cause: Option<String>,
    pub workspace: Option<PathBuf>,
    pub env: IndexMap<String, String>,
    pub tests: Option<TestCounts>,
}

impl BuildInfo {
    pub fn new(project_name: impl Into<String>, build_number: u32) -> Self {
        Self { project_name: project_name.into(), build_number, ..Self::default() }
    }

    crate::setters! {
        into {
            project_url: String,
            build_url: String,
        }
        option {
            status: BuildStatus,
            cause: String,
            workspace: PathBuf,
            tests: TestCounts,
        }
    }

    /// Add one captured environment variable.
    pub fn env_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
#[path = "build_tests.rs"]
mod tests;
