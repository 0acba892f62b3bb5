// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Buildmail Authors

//! Argument parsing for the braced token form.
//!
//! The argument text of `${NAME, key="value", key2="v2"}` (everything after
//! the name) parses into an ordered list of pairs. Duplicate keys are kept:
//! [`Args::get`] returns the last occurrence, [`Args::all`] every occurrence
//! in order. Parsing never fails; on malformed input the pairs parsed so far
//! are kept and the unconsumed suffix is retained verbatim as
//! [`Args::remainder`].

use crate::scan::{is_name_char, is_name_start};

/// Parsed arguments of one token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    pairs: Vec<(String, String)>,
    remainder: Option<String>,
}

impl Args {
    /// Parse the raw argument text following a token name.
    ///
    /// Valid input is empty (no arguments) or a sequence of
    /// `, key="value"` groups; whitespace around `,` and `=` is
    /// insignificant.
    pub fn parse(src: &str) -> Args {
        let mut pairs = Vec::new();
        let mut chars = src.char_indices().peekable();
        skip_whitespace(&mut chars);
        while let Some(&(comma_pos, ch)) = chars.peek() {
            if ch != ',' {
                return Args { pairs, remainder: Some(src[comma_pos..].to_string()) };
            }
            chars.next();
            skip_whitespace(&mut chars);
            let Some(pair) = parse_pair(&mut chars) else {
                return Args { pairs, remainder: Some(src[comma_pos..].to_string()) };
            };
            pairs.push(pair);
            skip_whitespace(&mut chars);
        }
        Args { pairs, remainder: None }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty() && self.remainder.is_none()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Value for `key`; the last occurrence wins, matching map-overwrite
    /// semantics.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Value for `key`, or `default` when absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Every value for `key`, in source order.
    pub fn all(&self, key: &str) -> Vec<&str> {
        self.pairs.iter().filter(|(k, _)| k == key).map(|(_, v)| v.as_str()).collect()
    }

    /// All pairs in source order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Unparsed suffix of a malformed argument list, verbatim.
    pub fn remainder(&self) -> Option<&str> {
        self.remainder.as_deref()
    }
}

fn skip_whitespace(chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>) {
    while let Some(&(_, ch)) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
        } else {
            break;
        }
    }
}

/// Parse one `key="value"` group; the leading comma and surrounding
/// whitespace are already consumed. Returns None on any malformation.
fn parse_pair(
    chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
) -> Option<(String, String)> {
    let key = scan_key(chars);
    if key.is_empty() {
        return None;
    }
    skip_whitespace(chars);
    if !matches!(chars.next(), Some((_, '='))) {
        return None;
    }
    skip_whitespace(chars);
    if !matches!(chars.next(), Some((_, '"'))) {
        return None;
    }
    let value = scan_quoted_value(chars)?;
    Some((key, value))
}

/// Scan an identifier-shaped key; empty when the next character cannot
/// start one.
fn scan_key(chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>) -> String {
    let mut key = String::new();
    match chars.peek() {
        Some(&(_, ch)) if is_name_start(ch) => {}
        _ => return key,
    }
    while let Some(&(_, ch)) = chars.peek() {
        if is_name_char(ch) {
            key.push(ch);
            chars.next();
        } else {
            break;
        }
    }
    key
}

/// Scan a double-quoted value body; the opening quote is already consumed.
///
/// Only `\"` and `\\` are escape sequences; any other backslash sequence
/// passes through verbatim. Returns None when the closing quote is missing.
fn scan_quoted_value(
    chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
) -> Option<String> {
    let mut value = String::new();
    while let Some((_, ch)) = chars.next() {
        match ch {
            '"' => return Some(value),
            '\\' => match chars.next() {
                Some((_, '"')) => value.push('"'),
                Some((_, '\\')) => value.push('\\'),
                Some((_, other)) => {
                    value.push('\\');
                    value.push(other);
                }
                None => return None,
            },
            _ => value.push(ch),
        }
    }
    None
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
