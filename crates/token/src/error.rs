// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Buildmail Authors

//! Provider evaluation errors.

use thiserror::Error;

/// Failure reported by a macro provider.
///
/// Never escapes the engine: expansion substitutes an empty string for the
/// failing token and logs the error. Built-in providers degrade to empty
/// output themselves; this channel exists for external providers whose data
/// access can fail.
#[derive(Debug, Error)]
pub enum MacroError {
    /// The provider could not produce content for the macro.
    #[error("macro {name} failed: {message}")]
    Eval { name: String, message: String },
}

impl MacroError {
    pub fn eval(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Eval { name: name.into(), message: message.into() }
    }
}
