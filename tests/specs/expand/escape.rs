// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Buildmail Authors

//! Escaping and literal-text behavior through the full engine.

use crate::prelude::*;
use crate::prelude::assert_eq;

/// A backslash before a token is kept while the token still expands
#[test]
fn backslash_is_preserved_and_token_expands() {
    let mut host = Host::bare();
    host.build = build_with_env(&[("FOO", "BAR")]);
    assert_eq!(host.expand(r#"\${ENV, var="FOO"}"#), r"\BAR");
}

/// Dollar signs before digits never start a token
#[test]
fn dollar_amounts_survive() {
    let host = Host::configured();
    let body = "Give me $4000 and I'll mail you a check for $40,000!";
    assert_eq!(host.expand(body), body);
    assert_eq!(host.expand("only $69.99"), "only $69.99");
}

/// An unterminated brace flows through as literal text
#[test]
fn unterminated_brace_is_literal() {
    let host = Host::configured();
    assert_eq!(host.expand("${DEFAULT_SUBJECT"), "${DEFAULT_SUBJECT");
}

/// Scanning resumes after an unterminated brace
#[test]
fn later_tokens_still_expand() {
    let host = Host::configured();
    assert_eq!(host.expand("${oops $DEFAULT_RECIPIENTS"), "${oops ashlux@gmail.com");
}

/// An unbalanced quote swallows the closing brace, so no token forms
#[test]
fn unbalanced_quote_stays_literal() {
    let mut host = Host::bare();
    host.build = build_with_env(&[("FOO", "BAR")]);
    let text = r#"${ENV, var="FOO}"#;
    assert_eq!(host.expand(text), text);
}

/// Unknown macros degrade to empty text instead of failing the send
#[test]
fn unresolved_macro_is_empty() {
    let host = Host::configured();
    assert_eq!(host.expand("$NOT_A_REAL_MACRO"), "");
    assert_eq!(host.expand("a ${ALSO_NOT_REAL} b"), "a  b");
}

/// A stray suffix in the argument list keeps the parsed prefix working
#[test]
fn malformed_arguments_degrade() {
    let mut host = Host::bare();
    host.build = build_with_env(&[("FOO", "BAR")]);
    assert_eq!(host.expand(r#"${ENV, var="FOO" title}"#), "BAR");
}
