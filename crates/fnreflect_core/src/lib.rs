//! Provide the shared, dependency-free vocabulary that fnreflect descriptors are expressed in.
//!
//! A descriptor never exposes concrete Rust types to its consumers. Instead it reports:
//! - a [`ValueCategory`] per parameter and for the return type, and
//! - a [`FunctionFamily`] describing the shape of the callable it was built from.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, no dependencies.
//! - Each vocabulary is a `const` registry table with canonical spellings, aliases and descriptions so that tooling
//!   (CLI output, generated reference docs, diagnostics) never hand-writes these strings.
//!
//! ## Examples
//! ```rust
//! use fnreflect_core::{FunctionFamily, ValueCategory, categories, families};
//!
//! assert_eq!(categories::from_str("float"), Some(ValueCategory::Real));
//! assert_eq!(families::as_str(FunctionFamily::MemberFunction), "member_function");
//! ```

pub mod categories;
pub mod families;
pub mod registry;

pub use categories::ValueCategory;
pub use families::FunctionFamily;
