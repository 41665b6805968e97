//! Type-erased function descriptors and the factory that builds them.
//!
//! [`Function`] is the non-generic interface the rest of a reflection system consumes. Each descriptor is a
//! `FunctionImpl` instantiated for one parameter-array shape and built from a callable whose full signature is known
//! at the call site. After construction nothing about the original callable type is visible: only the name, the
//! family, the categories and the extension payload remain.
//!
//! ## Examples
//! ```rust
//! use fnreflect::{FunctionFamily, ValueCategory, new_function};
//!
//! fn describe(flag: bool, count: i32, label: String) -> f64 {
//!     if flag { count as f64 } else { label.len() as f64 }
//! }
//!
//! let f = new_function("describe", describe);
//! assert_eq!(f.family(), FunctionFamily::Function);
//! assert_eq!(f.param_count(), 3);
//! assert_eq!(f.param_type(1), Ok(ValueCategory::Integer));
//! assert_eq!(f.return_type(), ValueCategory::Real);
//! assert!(f.param_type(3).is_err());
//! assert_eq!(f.to_string(), "describe(boolean, integer, string) -> real");
//! ```

use std::fmt;

use fnreflect_core::{FunctionFamily, ValueCategory};

use crate::classify::TypeToken;
use crate::errors::FunctionError;
use crate::hooks::{HookRegistry, UserData};
use crate::params::{ParamInfo, ParamList};
use crate::signature::{FunctionSignature, FunctionTraits, signature_of};

/// Runtime-polymorphic function descriptor.
///
/// Descriptors are immutable; every query is a constant-time read and may run concurrently from any thread.
pub trait Function: Send + Sync + fmt::Debug {
    /// Identity used for lookup.
    fn name(&self) -> &str;

    fn family(&self) -> FunctionFamily;

    /// Fixed arity decided at construction. Member functions do not count their receiver.
    fn param_count(&self) -> usize;

    /// Parameters in declaration order.
    fn params(&self) -> &[ParamInfo];

    fn return_info(&self) -> &ParamInfo;

    /// Receiver class of a member function; `None` for every other family.
    fn class_type(&self) -> Option<TypeToken>;

    /// Extension payload produced by the hook modules at construction time.
    ///
    /// Repeated calls return the same object; it is never rebuilt.
    fn user_data(&self) -> &UserData;

    /// Parameter descriptor at `index`.
    ///
    /// ## Errors
    /// - [`FunctionError::OutOfRange`] if `index >= self.param_count()`.
    fn param_info(&self, index: usize) -> Result<&ParamInfo, FunctionError> {
        self.params().get(index).ok_or(FunctionError::OutOfRange {
            index,
            count: self.param_count(),
        })
    }

    /// Value category of the parameter at `index`.
    ///
    /// ## Errors
    /// - [`FunctionError::OutOfRange`] if `index >= self.param_count()`.
    fn param_type(&self, index: usize) -> Result<ValueCategory, FunctionError> {
        self.param_info(index).map(ParamInfo::category)
    }

    fn return_type(&self) -> ValueCategory {
        self.return_info().category()
    }

    /// Borrowed runtime summary of the signature.
    fn signature(&self) -> FunctionSignature<'_> {
        FunctionSignature {
            family: self.family(),
            return_info: *self.return_info(),
            params: self.params(),
            class_type: self.class_type(),
        }
    }
}

impl fmt::Display for dyn Function + '_ {
    /// `Class::name(category, ..) -> category`; the class prefix only appears for member functions.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(class) = self.class_type() {
            write!(f, "{}::", class.short_name())?;
        }
        write!(f, "{}(", self.name())?;
        for (i, param) in self.params().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", param.category())?;
        }
        write!(f, ") -> {}", self.return_type())
    }
}

/// Concrete descriptor; `I` is the fixed-size parameter array of one signature shape.
#[derive(Debug)]
struct FunctionImpl<I> {
    name: String,
    family: FunctionFamily,
    return_info: ParamInfo,
    params: I,
    class_type: Option<TypeToken>,
    user_data: UserData,
}

impl<I> Function for FunctionImpl<I>
where
    I: AsRef<[ParamInfo]> + Send + Sync + fmt::Debug + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn family(&self) -> FunctionFamily {
        self.family
    }

    fn param_count(&self) -> usize {
        self.params.as_ref().len()
    }

    fn params(&self) -> &[ParamInfo] {
        self.params.as_ref()
    }

    fn return_info(&self) -> &ParamInfo {
        &self.return_info
    }

    fn class_type(&self) -> Option<TypeToken> {
        self.class_type
    }

    fn user_data(&self) -> &UserData {
        &self.user_data
    }
}

/// Builds descriptors, running the configured hook modules for each one.
#[derive(Debug, Default)]
pub struct FunctionFactory {
    hooks: HookRegistry,
}

impl FunctionFactory {
    /// A factory without hook modules; descriptors get an empty [`UserData`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hooks(hooks: HookRegistry) -> Self {
        Self { hooks }
    }

    pub fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }

    /// Describe `function` under `name`.
    ///
    /// Callables that are not a supported function, method or functor, or that use a parameter or return type
    /// without a value category, do not compile.
    pub fn new_function<F, M>(&self, name: impl Into<String>, function: F) -> Box<dyn Function>
    where
        F: FunctionTraits<M>,
    {
        new_function_with(name, function, &self.hooks)
    }
}

/// Describe `function` under `name` without running any hook modules.
pub fn new_function<F, M>(name: impl Into<String>, function: F) -> Box<dyn Function>
where
    F: FunctionTraits<M>,
{
    new_function_with(name, function, &HookRegistry::new())
}

pub(crate) fn new_function_with<F, M>(name: impl Into<String>, function: F, hooks: &HookRegistry) -> Box<dyn Function>
where
    F: FunctionTraits<M>,
{
    build::<F, M>(name.into(), function, hooks)
}

#[tracing::instrument(level = "debug", skip_all, fields(name = %name, hooks = hooks.len()))]
fn build<F, M>(name: String, function: F, hooks: &HookRegistry) -> Box<dyn Function>
where
    F: FunctionTraits<M>,
{
    let params = <F::Params as ParamList>::param_infos();
    let signature = signature_of::<F, M>(params.as_ref());
    let user_data = hooks.per_function(&name, &signature, &function);

    tracing::debug!(
        family = %signature.family,
        arity = signature.param_count(),
        returns = %signature.return_type(),
        "built function descriptor"
    );

    let FunctionSignature {
        family,
        return_info,
        class_type,
        ..
    } = signature;

    Box::new(FunctionImpl {
        name,
        family,
        return_info,
        params,
        class_type,
        user_data,
    })
}
