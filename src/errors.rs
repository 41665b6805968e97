//! Error types.
//!
//! Descriptor construction cannot fail at runtime: unsupported callables and unclassifiable types are rejected by the
//! compiler. The only runtime failure on a descriptor is an out-of-range parameter query. The registry and hook
//! layers add their own small error enums.

use miette::Diagnostic;
use thiserror::Error;

/// Errors reported by descriptor queries.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum FunctionError {
    #[error("parameter index {index} out of range: function takes {count} parameter(s)")]
    #[diagnostic(
        code(fnreflect::param_out_of_range),
        help("valid parameter indices are `0..param_count()`")
    )]
    OutOfRange { index: usize, count: usize },
}

/// Errors reported by [`crate::FunctionRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum RegistryError {
    #[error("a function named `{name}` is already registered")]
    #[diagnostic(
        code(fnreflect::duplicate_function),
        help("pick a distinct name or configure `DuplicatePolicy::Replace`")
    )]
    Duplicate { name: String },

    #[error("no function named `{name}` is registered")]
    #[diagnostic(code(fnreflect::unknown_function))]
    NotFound { name: String },
}

/// Errors reported by [`crate::HookRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum HookError {
    #[error("a hook module with id `{id}` is already registered")]
    #[diagnostic(code(fnreflect::duplicate_hook))]
    DuplicateModule { id: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_index_and_count() {
        let err = FunctionError::OutOfRange { index: 3, count: 2 };
        assert_eq!(
            err.to_string(),
            "parameter index 3 out of range: function takes 2 parameter(s)"
        );
    }

    #[test]
    fn diagnostic_codes() {
        let err = RegistryError::NotFound { name: "f".into() };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("fnreflect::unknown_function"));
    }
}
