// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Buildmail Authors

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! bm-token: token scanning and macro expansion for notification templates.
//!
//! The scanner recognizes `$NAME` and `${NAME, key="value"}` tokens in
//! free-form text; the engine resolves each against a provider registry and
//! substitutes the produced content, re-expanding nested tokens up to a
//! fixed depth. Everything fails soft: text that does not form a token
//! passes through literally, and evaluation failures become empty strings.

pub mod args;
pub mod error;
pub mod expand;
pub mod provider;
pub mod registry;
pub mod scan;
pub mod span;

pub use args::Args;
pub use error::MacroError;
pub use expand::{expand, expand_with, MAX_EXPANSION_DEPTH};
pub use provider::{MacroProvider, StaticMacro};
pub use registry::MacroRegistry;
pub use scan::{Segment, Token, TokenScanner};
pub use span::Span;
