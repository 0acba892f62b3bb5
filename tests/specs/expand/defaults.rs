// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Buildmail Authors

//! Default-chain expansion through project and host configuration.

use crate::prelude::*;
use crate::prelude::assert_eq;

/// Host-level defaults read back through their macros
#[test]
fn global_defaults_expand() {
    let host = Host::configured();
    assert_eq!(host.expand("$DEFAULT_SUBJECT"), "Nigerian needs your help!");
    assert_eq!(
        host.expand("$DEFAULT_CONTENT"),
        "Give me $4000 and I'll mail you a check for $40,000!"
    );
    assert_eq!(host.expand("$DEFAULT_RECIPIENTS"), "ashlux@gmail.com");
}

/// Project-level defaults read back through their macros
#[test]
fn project_defaults_expand() {
    let host = Host::configured();
    assert_eq!(
        host.expand("$PROJECT_DEFAULT_SUBJECT"),
        "How would you like your very own AWESOME-O 4000?"
    );
    assert_eq!(
        host.expand("$PROJECT_DEFAULT_CONTENT"),
        "For only 10 easy payment of $69.99 , AWESOME-O 4000 can be yours!"
    );
}

/// Unset configuration reads as empty text
#[test]
fn unset_defaults_expand_empty() {
    let host = Host::bare();
    assert_eq!(host.expand("$DEFAULT_SUBJECT"), "");
    assert_eq!(host.expand("$DEFAULT_CONTENT"), "");
    assert_eq!(host.expand("$PROJECT_DEFAULT_SUBJECT"), "");
    assert_eq!(host.expand("$PROJECT_DEFAULT_CONTENT"), "");
}

/// Project text chains to the host layer via an embedded token
#[test]
fn project_content_chains_to_global() {
    let mut host = Host::configured();
    host.project = ProjectDefaults::new().content("$DEFAULT_CONTENT");
    assert_eq!(
        host.expand("$PROJECT_DEFAULT_CONTENT"),
        "Give me $4000 and I'll mail you a check for $40,000!"
    );
}

/// A subject template mixing literal text and a default macro
#[test]
fn subject_template_composes() {
    let host = Host::configured();
    assert_eq!(
        host.expand("[website] $PROJECT_DEFAULT_SUBJECT"),
        "[website] How would you like your very own AWESOME-O 4000?"
    );
}

/// Presend and postsend script text rides the same chain
#[test]
fn script_defaults_expand() {
    let mut host = Host::bare();
    host.global = GlobalDefaults::new()
        .presend_script("cancel = build.failed")
        .postsend_script("log.close()");
    assert_eq!(host.expand("$DEFAULT_PRESEND_SCRIPT"), "cancel = build.failed");
    assert_eq!(host.expand("${DEFAULT_POSTSEND_SCRIPT}"), "log.close()");
}
