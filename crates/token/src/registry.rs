// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Buildmail Authors

//! Ordered provider registry with first-acceptor resolution.

use std::sync::Arc;

use indexmap::IndexSet;

use crate::provider::MacroProvider;

/// Ordered collection of macro providers.
///
/// Registration order is resolution order: [`resolve`](Self::resolve)
/// returns the first registered provider that accepts a name, so an early
/// registration shadows later ones for any shared name. Registries clone
/// cheaply; providers themselves are shared.
#[derive(Clone, Default)]
pub struct MacroRegistry {
    providers: Vec<Arc<dyn MacroProvider>>,
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;

impl MacroRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from already-shared providers, preserving order.
    pub fn from_providers(providers: impl IntoIterator<Item = Arc<dyn MacroProvider>>) -> Self {
        Self { providers: providers.into_iter().collect() }
    }

    /// Append a provider; it serves every name in its accepted set.
    pub fn register(&mut self, provider: impl MacroProvider + 'static) {
        self.providers.push(Arc::new(provider));
    }

    /// Append an already-shared provider.
    pub fn register_arc(&mut self, provider: Arc<dyn MacroProvider>) {
        self.providers.push(provider);
    }

    /// The first registered provider accepting `name`, if any.
    pub fn resolve(&self, name: &str) -> Option<&dyn MacroProvider> {
        self.providers.iter().find(|p| p.accepts(name)).map(|p| p.as_ref())
    }

    /// Every accepted name, deduplicated, in first-registration order.
    pub fn names(&self) -> Vec<String> {
        let mut names = IndexSet::new();
        for provider in &self.providers {
            for name in provider.names() {
                names.insert(name);
            }
        }
        names.into_iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }
}

impl std::fmt::Debug for MacroRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MacroRegistry").field("names", &self.names()).finish()
    }
}
