// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Buildmail Authors

//! End-to-end expansion specs against the built-in catalog.

mod prelude;

mod expand {
    mod counts;
    mod defaults;
    mod escape;
    mod metadata;
    mod recursion;
    mod runtime;
}
