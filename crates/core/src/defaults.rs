// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Buildmail Authors

//! Notification default-value configuration.
//!
//! Two layers: [`GlobalDefaults`] is host-wide, [`ProjectDefaults`] is
//! per-project. Both are plain data passed explicitly into every expansion;
//! an unset field reads as the empty string. Project-level text commonly
//! embeds `$DEFAULT_*` tokens so it falls through to the global layer when
//! expanded.

use serde::{Deserialize, Serialize};

/// Host-wide notification defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalDefaults {
    pub subject: Option<String>,
    pub body: Option<String>,
    pub recipients: Option<String>,
    pub presend_script: Option<String>,
    pub postsend_script: Option<String>,
}

impl GlobalDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    crate::setters! {
        option {
            subject: String,
            body: String,
            recipients: String,
            presend_script: String,
            postsend_script: String,
        }
    }
}

/// Per-project notification defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectDefaults {
    pub subject: Option<String>,
    pub content: Option<String>,
}

impl ProjectDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    crate::setters! {
        option {
            subject: String,
            content: String,
        }
    }
}

#[cfg(test)]
#[path = "defaults_tests.rs"]
mod tests;
