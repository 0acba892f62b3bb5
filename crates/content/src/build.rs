// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Buildmail Authors

//! Build metadata macros.

use bm_core::EvalContext;
use bm_token::{Args, MacroError, MacroProvider};

/// Macros over the current build's metadata.
///
/// `$BUILD_NUMBER`, `$BUILD_STATUS`, `$BUILD_URL`, `$PROJECT_NAME`,
/// `$PROJECT_URL`, `$CAUSE` and `$WORKSPACE` read the matching
/// [`BuildInfo`](bm_core::BuildInfo) field. `BUILD_STATUS` renders the
/// status display string; absent optional fields read as the empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildContent;

impl MacroProvider for BuildContent {
    fn names(&self) -> Vec<String> {
        [
            "BUILD_NUMBER",
            "BUILD_STATUS",
            "BUILD_URL",
            "PROJECT_NAME",
            "PROJECT_URL",
            "CAUSE",
            "WORKSPACE",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }

    fn evaluate(
        &self,
        ctx: &EvalContext<'_>,
        name: &str,
        _args: &Args,
    ) -> Result<String, MacroError> {
        let build = ctx.build;
        let value = match name {
            "BUILD_NUMBER" => build.build_number.to_string(),
            "BUILD_STATUS" => build.status.map(|s| s.to_string()).unwrap_or_default(),
            "BUILD_URL" => build.build_url.clone(),
            "PROJECT_NAME" => build.project_name.clone(),
            "PROJECT_URL" => build.project_url.clone(),
            "CAUSE" => build.cause.clone().unwrap_or_default(),
            "WORKSPACE" => {
                build.workspace.as_deref().map(|p| p.display().to_string()).unwrap_or_default()
            }
            _ => String::new(),
        };
        Ok(value)
    }
}

#[cfg(test)]
#[path = "build_tests.rs"]
mod tests;
