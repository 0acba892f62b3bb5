// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Buildmail Authors

//! Shared fixtures for the expansion specs.

pub use std::sync::Arc;

pub use bm_content::builtin_registry;
pub use bm_core::test_support::{build_with_env, build_with_tests, sample_build};
pub use bm_core::{BuildInfo, EvalContext, GlobalDefaults, ProjectDefaults};
pub use bm_token::{expand, expand_with, MacroProvider, StaticMacro, MAX_EXPANSION_DEPTH};
pub use similar_asserts::assert_eq;

/// Owns the three context inputs so a test can expand templates against
/// the built-in catalog the way the notification dispatcher would.
pub struct Host {
    pub build: BuildInfo,
    pub project: ProjectDefaults,
    pub global: GlobalDefaults,
}

impl Host {
    /// Sample build, nothing configured.
    pub fn bare() -> Self {
        Self {
            build: sample_build(),
            project: ProjectDefaults::new(),
            global: GlobalDefaults::new(),
        }
    }

    /// Sample build with defaults configured at both levels.
    pub fn configured() -> Self {
        Self {
            build: sample_build(),
            project: ProjectDefaults::new()
                .subject("How would you like your very own AWESOME-O 4000?")
                .content("For only 10 easy payment of $69.99 , AWESOME-O 4000 can be yours!"),
            global: GlobalDefaults::new()
                .subject("Nigerian needs your help!")
                .body("Give me $4000 and I'll mail you a check for $40,000!")
                .recipients("ashlux@gmail.com"),
        }
    }

    pub fn expand(&self, template: &str) -> String {
        let ctx = EvalContext::new(&self.build, &self.project, &self.global);
        expand(template, &ctx, &builtin_registry())
    }

    pub fn expand_with(&self, template: &str, extra: &[Arc<dyn MacroProvider>]) -> String {
        let ctx = EvalContext::new(&self.build, &self.project, &self.global);
        expand_with(template, &ctx, &builtin_registry(), extra)
    }
}
