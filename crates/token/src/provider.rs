// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Buildmail Authors

//! Macro provider capability and the fixed-text adapter.

use bm_core::EvalContext;

use crate::args::Args;
use crate::error::MacroError;

/// A named content capability consulted during expansion.
///
/// Providers are registered once and shared read-only across expansions,
/// so implementations must be `Send + Sync` and treat every call as
/// independent.
pub trait MacroProvider: Send + Sync {
    /// Macro names this provider answers to.
    fn names(&self) -> Vec<String>;

    /// Whether this provider handles `name`. Matching is case-sensitive.
    fn accepts(&self, name: &str) -> bool {
        self.names().iter().any(|n| n == name)
    }

    /// Produce the replacement text for `name` with the given arguments.
    fn evaluate(
        &self,
        ctx: &EvalContext<'_>,
        name: &str,
        args: &Args,
    ) -> Result<String, MacroError>;
}

/// Fixed-text macro, mainly for per-call runtime content.
///
/// `StaticMacro::new("CHECK_OUTPUT", report)` passed to
/// [`expand_with`](crate::expand::expand_with) makes `${CHECK_OUTPUT}`
/// expand to `report` for that call only.
#[derive(Debug, Clone)]
pub struct StaticMacro {
    name: String,
    text: String,
}

impl StaticMacro {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self { name: name.into(), text: text.into() }
    }

    /// The single name this macro answers to.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl MacroProvider for StaticMacro {
    fn names(&self) -> Vec<String> {
        vec![self.name.clone()]
    }

    fn evaluate(
        &self,
        _ctx: &EvalContext<'_>,
        _name: &str,
        _args: &Args,
    ) -> Result<String, MacroError> {
        Ok(self.text.clone())
    }
}
