// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Buildmail Authors

//! Test-result count macro.

use bm_core::EvalContext;
use bm_token::{Args, MacroError, MacroProvider};

/// `${TEST_COUNTS, var="..."}` over the build's test summary.
///
/// `var` selects one of `total`, `pass`, `fail` or `skip`, matched
/// case-insensitively, and defaults to `total`. A build without recorded
/// results, or an unrecognized `var`, reads as the empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct TestCountsContent;

impl MacroProvider for TestCountsContent {
    fn names(&self) -> Vec<String> {
        vec!["TEST_COUNTS".to_string()]
    }

    fn evaluate(
        &self,
        ctx: &EvalContext<'_>,
        _name: &str,
        args: &Args,
    ) -> Result<String, MacroError> {
        let Some(counts) = ctx.build.tests else {
            return Ok(String::new());
        };
        let var = args.get_or("var", "total").to_ascii_lowercase();
        let value = match var.as_str() {
            "total" => counts.total,
            "pass" => counts.passed(),
            "fail" => counts.failed,
            "skip" => counts.skipped,
            _ => return Ok(String::new()),
        };
        Ok(value.to_string())
    }
}

#[cfg(test)]
#[path = "test_counts_tests.rs"]
mod tests;
