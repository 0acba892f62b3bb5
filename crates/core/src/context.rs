// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Buildmail Authors

//! Evaluation context handed to macro providers.

use crate::build::BuildInfo;
use crate::defaults::{GlobalDefaults, ProjectDefaults};

/// Borrowed view of everything a macro may consult during one expansion.
///
/// The caller owns the underlying data for the duration of the call; the
/// engine and providers only ever hold this borrowed bundle. Each concurrent
/// expansion gets its own context.
#[derive(Debug, Clone, Copy)]
pub struct EvalContext<'a> {
    pub build: &'a BuildInfo,
    pub project: &'a ProjectDefaults,
    pub global: &'a GlobalDefaults,
}

impl<'a> EvalContext<'a> {
    pub fn new(
        build: &'a BuildInfo,
        project: &'a ProjectDefaults,
        global: &'a GlobalDefaults,
    ) -> Self {
        Self { build, project, global }
    }
}
