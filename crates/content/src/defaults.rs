// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Buildmail Authors

//! Default-chain macros over host and project notification configuration.

use bm_core::EvalContext;
use bm_token::{Args, MacroError, MacroProvider};

/// Host-wide default configuration macros.
///
/// `$DEFAULT_SUBJECT`, `$DEFAULT_CONTENT`, `$DEFAULT_RECIPIENTS`,
/// `$DEFAULT_PRESEND_SCRIPT` and `$DEFAULT_POSTSEND_SCRIPT` read the
/// matching [`GlobalDefaults`](bm_core::GlobalDefaults) field; an unset
/// field reads as the empty string. `DEFAULT_CONTENT` maps to the body
/// field. Returned text goes back through the engine, so a configured
/// default may itself reference further macros.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultsContent;

impl MacroProvider for DefaultsContent {
    fn names(&self) -> Vec<String> {
        [
            "DEFAULT_SUBJECT",
            "DEFAULT_CONTENT",
            "DEFAULT_RECIPIENTS",
            "DEFAULT_PRESEND_SCRIPT",
            "DEFAULT_POSTSEND_SCRIPT",
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
        let value = match name {
            "DEFAULT_SUBJECT" => ctx.global.subject.as_deref(),
            "DEFAULT_CONTENT" => ctx.global.body.as_deref(),
            "DEFAULT_RECIPIENTS" => ctx.global.recipients.as_deref(),
            "DEFAULT_PRESEND_SCRIPT" => ctx.global.presend_script.as_deref(),
            "DEFAULT_POSTSEND_SCRIPT" => ctx.global.postsend_script.as_deref(),
            _ => None,
        };
        Ok(value.unwrap_or_default().to_string())
    }
}

/// Per-project default configuration macros.
///
/// `$PROJECT_DEFAULT_SUBJECT` and `$PROJECT_DEFAULT_CONTENT` read the
/// matching [`ProjectDefaults`](bm_core::ProjectDefaults) field; unset reads
/// as the empty string. Projects conventionally store `$DEFAULT_SUBJECT` /
/// `$DEFAULT_CONTENT` here to chain through to the host-wide defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectDefaultsContent;

impl MacroProvider for ProjectDefaultsContent {
    fn names(&self) -> Vec<String> {
        ["PROJECT_DEFAULT_SUBJECT", "PROJECT_DEFAULT_CONTENT"]
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
        let value = match name {
            "PROJECT_DEFAULT_SUBJECT" => ctx.project.subject.as_deref(),
            "PROJECT_DEFAULT_CONTENT" => ctx.project.content.as_deref(),
            _ => None,
        };
        Ok(value.unwrap_or_default().to_string())
    }
}

#[cfg(test)]
#[path = "defaults_tests.rs"]
mod tests;
