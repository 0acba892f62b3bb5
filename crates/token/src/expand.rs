// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Buildmail Authors

//! Expansion engine: scan, resolve, evaluate, substitute.
//!
//! Expansion never fails. Tokens without a provider and tokens whose
//! provider errors are replaced by empty strings (with a log line), and
//! malformed syntax falls through the scanner as literal text, so a bad
//! template still yields a sendable message.

use std::sync::Arc;

use bm_core::EvalContext;

use crate::args::Args;
use crate::provider::MacroProvider;
use crate::registry::MacroRegistry;
use crate::scan::{Segment, TokenScanner};

/// Maximum nesting of re-expansion for macro output.
///
/// Replacement text containing further tokens is fed back through the
/// engine; output that still carries tokens at this depth is dropped and
/// the offending token contributes nothing.
pub const MAX_EXPANSION_DEPTH: usize = 10;

#[cfg(test)]
#[path = "expand_tests.rs"]
mod tests;

/// Expand every macro token in `template` against the registry.
pub fn expand(template: &str, ctx: &EvalContext<'_>, registry: &MacroRegistry) -> String {
    expand_with(template, ctx, registry, &[])
}

/// Expand with per-call providers layered over the registry.
///
/// The extra providers shadow registry entries for this call only, and the
/// shadowing stays in force through recursive re-expansion of macro output.
pub fn expand_with(
    template: &str,
    ctx: &EvalContext<'_>,
    registry: &MacroRegistry,
    extra: &[Arc<dyn MacroProvider>],
) -> String {
    let overlay = MacroRegistry::from_providers(extra.iter().cloned());
    expand_inner(template, ctx, &overlay, registry, 0)
}

fn expand_inner(
    template: &str,
    ctx: &EvalContext<'_>,
    overlay: &MacroRegistry,
    builtins: &MacroRegistry,
    depth: usize,
) -> String {
    let mut out = String::with_capacity(template.len());
    for segment in TokenScanner::new(template) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Token(token) => {
                let Some(provider) =
                    overlay.resolve(token.name).or_else(|| builtins.resolve(token.name))
                else {
                    tracing::debug!(macro_name = token.name, "no provider accepts macro");
                    continue;
                };
                let args = Args::parse(token.args_src);
                let value = match provider.evaluate(ctx, token.name, &args) {
                    Ok(value) => value,
                    Err(error) => {
                        tracing::warn!(
                            macro_name = token.name,
                            error = %error,
                            "macro evaluation failed",
                        );
                        continue;
                    }
                };
                if !value.contains('$') {
                    out.push_str(&value);
                } else if depth < MAX_EXPANSION_DEPTH {
                    out.push_str(&expand_inner(&value, ctx, overlay, builtins, depth + 1));
                } else {
                    tracing::warn!(
                        macro_name = token.name,
                        limit = MAX_EXPANSION_DEPTH,
                        "expansion depth exhausted, dropping macro output",
                    );
                }
            }
        }
    }
    out
}
