// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Buildmail Authors

//! Declarative macros for reducing boilerplate.
//!
//! - [`simple_display!`] — `Display` impl mapping enum variants to string literals
//! - [`setters!`] — fluent setter methods for configuration structs

/// Generate a `Display` impl that maps unit enum variants to string literals.
///
/// ```ignore
/// crate::simple_display! {
///     BuildStatus {
///         Success => "Successful",
///         Failure => "Failed",
///     }
/// }
/// ```
#[macro_export]
macro_rules! simple_display {
    ($enum:ty { $( $variant:ident => $str:expr ),+ $(,)? }) => {
        impl std::fmt::Display for $enum {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(match self {
                    $( Self::$variant => $str, )+
                })
            }
        }
    };
}

/// Generate fluent setter methods inside an existing `impl` block.
///
/// Field groups:
/// - `into { field: Type }` — setter uses `impl Into<Type>`
/// - `option { field: Type }` — field is `Option<Type>`, setter wraps in
///   `Some(v.into())`
///
/// ```ignore
/// impl GlobalDefaults {
///     bm_core::setters! {
///         option { subject: String, body: String }
///     }
/// }
/// ```
#[macro_export]
macro_rules! setters {
    (
        $(into {
            $( $into_field:ident : $into_ty:ty ),* $(,)?
        })?
        $(option {
            $( $opt_field:ident : $opt_ty:ty ),* $(,)?
        })?
    ) => {
        $($(
            pub fn $into_field(mut self, v: impl Into<$into_ty>) -> Self {
                self.$into_field = v.into();
                self
            }
        )*)?

        $($(
            pub fn $opt_field(mut self, v: impl Into<$opt_ty>) -> Self {
                self.$opt_field = Some(v.into());
                self
            }
        )*)?
    };
}
