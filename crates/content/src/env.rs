// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Buildmail Authors

//! Environment variable macro.

use bm_core::EvalContext;
use bm_token::{Args, MacroError, MacroProvider};

/// `${ENV, var="NAME"}` over the build's captured environment.
///
/// Reads the snapshot in [`BuildInfo::env`](bm_core::BuildInfo), never the
/// live process environment. An absent variable or a missing `var` argument
/// reads as the empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvContent;

impl MacroProvider for EnvContent {
    fn names(&self) -> Vec<String> {
        vec!["ENV".to_string()]
    }

    fn evaluate(
        &self,
        ctx: &EvalContext<'_>,
        _name: &str,
        args: &Args,
    ) -> Result<String, MacroError> {
        let Some(var) = args.get("var") else {
            return Ok(String::new());
        };
        Ok(ctx.build.env.get(var).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
