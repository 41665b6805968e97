//! Bake compile-time function signatures into runtime-inspectable descriptors.
//!
//! Given a statically-typed callable and a name, [`new_function`] produces a `Box<dyn Function>` that reports the
//! function's family, parameter count, per-parameter [`ValueCategory`], return category and the payloads contributed
//! by extension hooks, without the consumer ever naming the callable's concrete type.
//!
//! The work is split into layers, leaves first:
//! - [`mod@classify`]: type to [`ValueCategory`] mapping, resolved by trait dispatch.
//! - [`params`]: tuple of parameter types to a fixed-size `[ParamInfo; N]`.
//! - [`signature`]: family/parameter/return analysis of free functions, methods and functors.
//! - [`function`]: the type-erased [`Function`] descriptor and its [`FunctionFactory`].
//! - [`hooks`]: pluggable per-function payloads ([`UserData`]).
//! - [`registry`]: an owning, name-indexed store of descriptors.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//! ```rust
//! use fnreflect::{Classify, FunctionFamily, ValueCategory, new_function};
//!
//! #[derive(Classify)]
//! struct Point {
//!     x: f64,
//!     y: f64,
//! }
//!
//! impl Point {
//!     fn scaled(&self, k: f64) -> Point {
//!         Point { x: self.x * k, y: self.y * k }
//!     }
//! }
//!
//! let f = new_function("scaled", Point::scaled);
//! assert_eq!(f.family(), FunctionFamily::MemberFunction);
//! assert_eq!(f.param_count(), 1);
//! assert_eq!(f.param_type(0), Ok(ValueCategory::Real));
//! assert_eq!(f.return_type(), ValueCategory::User);
//! ```

#![deny(clippy::unwrap_used)]

// Lets `#[derive(Classify)]` expand to `::fnreflect::...` inside this crate too.
extern crate self as fnreflect;

pub mod classify;
pub mod cli;
pub mod config;
pub mod errors;
pub mod function;
pub mod hooks;
pub mod params;
pub mod registry;
pub mod signature;
pub mod summary;

pub use fnreflect_core::{FunctionFamily, ValueCategory};
pub use fnreflect_derive::Classify;

pub use classify::{Class, Classify, TypeToken, classify};
pub use config::{DuplicatePolicy, RegistryConfig};
pub use errors::{FunctionError, HookError, RegistryError};
pub use function::{Function, FunctionFactory, new_function};
pub use hooks::{FunctionHook, HookRegistry, Payload, UserData, UserDataEntry, hook_fn};
pub use params::{MAX_ARITY, ParamInfo, ParamList};
pub use registry::FunctionRegistry;
pub use signature::{FunctionSignature, FunctionTraits, Functor};
pub use summary::{FunctionSummary, ParamSummary};
