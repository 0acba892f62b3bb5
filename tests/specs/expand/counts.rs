// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Buildmail Authors

//! Test-count reporting in templates.

use yare::parameterized;

use crate::prelude::*;
use crate::prelude::assert_eq;

// total=5, failed=2, skipped=1, so passed=2.
/// The var argument selects a bucket, case-insensitively
#[parameterized(
    total = { "total", "5" },
    pass = { "pass", "2" },
    fail = { "fail", "2" },
    skip = { "skip", "1" },
    shouting = { "SKIP", "1" },
    mixed = { "Fail", "2" },
)]
fn var_selects_bucket(var: &str, expected: &str) {
    let mut host = Host::bare();
    host.build = build_with_tests(5, 2, 1);
    let template = format!(r#"${{TEST_COUNTS, var="{var}"}}"#);
    similar_asserts::assert_eq!(host.expand(&template), expected);
}

/// Missing var argument counts everything
#[test]
fn defaults_to_total() {
    let mut host = Host::bare();
    host.build = build_with_tests(5, 2, 1);
    assert_eq!(host.expand("${TEST_COUNTS}"), "5");
    assert_eq!(host.expand("$TEST_COUNTS"), "5");
}

/// Unknown buckets and missing results read empty
#[test]
fn unknown_bucket_or_no_results() {
    let mut host = Host::bare();
    host.build = build_with_tests(5, 2, 1);
    assert_eq!(host.expand(r#"${TEST_COUNTS, var="flaky"}"#), "");

    let bare = Host::bare();
    assert_eq!(bare.expand("${TEST_COUNTS}"), "");
}

/// A full summary line composes from one build
#[test]
fn summary_line_composes() {
    let mut host = Host::bare();
    host.build = build_with_tests(10, 1, 2);
    assert_eq!(
        host.expand(concat!(
            "${TEST_COUNTS} run, ",
            r#"${TEST_COUNTS, var="pass"} passed, "#,
            r#"${TEST_COUNTS, var="fail"} failed, "#,
            r#"${TEST_COUNTS, var="skip"} skipped"#,
        )),
        "10 run, 7 passed, 1 failed, 2 skipped"
    );
}
