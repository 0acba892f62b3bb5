// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Buildmail Authors

//! Build metadata and environment macros end to end.

use crate::prelude::*;
use crate::prelude::assert_eq;

/// A subject line built from metadata macros
#[test]
fn status_subject_line() {
    let host = Host::bare();
    assert_eq!(
        host.expand("$PROJECT_NAME - Build # $BUILD_NUMBER - $BUILD_STATUS!"),
        "website - Build # 42 - Successful!"
    );
}

/// Cause and links compose into a body
#[test]
fn body_with_cause_and_links() {
    let mut host = Host::bare();
    host.build = sample_build().cause("Started by upstream project \"deploy\"");
    assert_eq!(
        host.expand("$CAUSE. See $BUILD_URL for details."),
        "Started by upstream project \"deploy\". \
         See https://ci.example.com/job/website/42/ for details."
    );
}

/// The environment snapshot drives the ENV macro
#[test]
fn env_macro_reads_snapshot() {
    let mut host = Host::bare();
    host.build = build_with_env(&[("GIT_BRANCH", "main"), ("GIT_COMMIT", "f3a9c11")]);
    assert_eq!(
        host.expand(r#"Branch ${ENV, var="GIT_BRANCH"} at ${ENV, var="GIT_COMMIT"}"#),
        "Branch main at f3a9c11"
    );
    assert_eq!(host.expand(r#"${ENV, var="GIT_TAG"}"#), "");
}

/// Metadata the host serialized expands after deserialization
#[test]
fn host_payload_expands() {
    let payload = serde_json::json!({
        "project_name": "api",
        "build_number": 7,
        "build_url": "https://ci.example.com/job/api/7/",
        "status": "failure",
        "tests": { "total": 12, "failed": 3, "skipped": 0 },
        "env": { "GIT_BRANCH": "release" },
    });
    let mut host = Host::bare();
    host.build = serde_json::from_value(payload).unwrap();
    assert_eq!(
        host.expand(concat!(
            "api build $BUILD_NUMBER: $BUILD_STATUS ",
            r#"(${TEST_COUNTS, var="fail"} failures on ${ENV, var="GIT_BRANCH"})"#,
        )),
        "api build 7: Failed (3 failures on release)"
    );
}
