// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Buildmail Authors

//! Source location tracking for scanned tokens.

use serde::{Deserialize, Serialize};

/// A byte-offset range in the template text.
///
/// Uses byte offsets for efficient slicing with UTF-8 source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if `start <= pos < end`.
    #[inline]
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Extract the spanned text from source.
    ///
    /// Returns an empty string if the span is out of bounds or not on valid
    /// UTF-8 character boundaries.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
