// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Buildmail Authors

//! Built-in provider catalog.

use bm_token::MacroRegistry;

use crate::build::BuildContent;
use crate::defaults::{DefaultsContent, ProjectDefaultsContent};
use crate::env::EnvContent;
use crate::test_counts::TestCountsContent;

/// Seed `registry` with every built-in content provider.
///
/// Built-ins go in a fixed order; anything registered before this call
/// shadows same-named built-ins under first-acceptor resolution.
pub fn register_builtins(registry: &mut MacroRegistry) {
    registry.register(DefaultsContent);
    registry.register(ProjectDefaultsContent);
    registry.register(BuildContent);
    registry.register(EnvContent);
    registry.register(TestCountsContent);
}

/// A fresh registry holding exactly the built-in catalog.
pub fn builtin_registry() -> MacroRegistry {
    let mut registry = MacroRegistry::new();
    register_builtins(&mut registry);
    registry
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
