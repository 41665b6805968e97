//! Extension hooks: per-function payloads contributed by pluggable modules.
//!
//! A [`HookRegistry`] holds an ordered list of [`FunctionHook`] modules. While a descriptor is being built, every
//! module is invoked exactly once, in registration order, and its output is stored in the descriptor's [`UserData`].
//! The descriptor never interprets these payloads; each module downcasts its own entry by module id.
//!
//! ## Examples
//! ```rust
//! use fnreflect::{FunctionFactory, HookRegistry, hook_fn};
//!
//! let mut hooks = HookRegistry::new();
//! hooks
//!     .register(hook_fn("arity", |_name, sig, _function| sig.param_count()))
//!     .unwrap();
//!
//! let factory = FunctionFactory::with_hooks(hooks);
//! let add = factory.new_function("add", |a: i32, b: i32| a + b);
//! assert_eq!(add.user_data().get::<usize>("arity"), Some(&2));
//! ```

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

use crate::errors::HookError;
use crate::signature::FunctionSignature;

/// Erased payload produced by a hook.
pub type Payload = Box<dyn Any + Send + Sync>;

/// A module contributing one payload per described function.
pub trait FunctionHook: Send + Sync {
    /// Module identity; payload lookups are keyed by it.
    fn id(&self) -> &'static str;

    /// Build the payload for one function.
    ///
    /// `function` is the callable the descriptor is being built from; hooks that know its concrete type may
    /// downcast it.
    fn per_function(&self, name: &str, signature: &FunctionSignature<'_>, function: &dyn Any) -> Payload;
}

/// Closure-backed [`FunctionHook`], created by [`hook_fn`].
pub struct HookFn<F, T> {
    id: &'static str,
    f: F,
    _output: PhantomData<fn() -> T>,
}

/// Wrap a closure as a [`FunctionHook`] with the given module id.
pub fn hook_fn<F, T>(id: &'static str, f: F) -> HookFn<F, T>
where
    F: Fn(&str, &FunctionSignature<'_>, &dyn Any) -> T + Send + Sync,
    T: Any + Send + Sync,
{
    HookFn {
        id,
        f,
        _output: PhantomData,
    }
}

impl<F, T> FunctionHook for HookFn<F, T>
where
    F: Fn(&str, &FunctionSignature<'_>, &dyn Any) -> T + Send + Sync,
    T: Any + Send + Sync,
{
    fn id(&self) -> &'static str {
        self.id
    }

    fn per_function(&self, name: &str, signature: &FunctionSignature<'_>, function: &dyn Any) -> Payload {
        Box::new((self.f)(name, signature, function))
    }
}

/// Ordered set of hook modules with unique ids.
#[derive(Default)]
pub struct HookRegistry {
    hooks: Vec<Box<dyn FunctionHook>>,
}

impl HookRegistry {
    pub const fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Append a module. Fails if a module with the same id is already registered.
    pub fn register(&mut self, hook: impl FunctionHook + 'static) -> Result<&mut Self, HookError> {
        let id = hook.id();
        if self.hooks.iter().any(|h| h.id() == id) {
            return Err(HookError::DuplicateModule { id });
        }
        tracing::debug!(module = id, position = self.hooks.len(), "registered function hook");
        self.hooks.push(Box::new(hook));
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Module ids in invocation order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.hooks.iter().map(|h| h.id())
    }

    /// Run every module once, in order, collecting their payloads.
    pub(crate) fn per_function(&self, name: &str, signature: &FunctionSignature<'_>, function: &dyn Any) -> UserData {
        let entries = self
            .hooks
            .iter()
            .map(|hook| {
                tracing::trace!(module = hook.id(), function = name, "running function hook");
                UserDataEntry {
                    module: hook.id(),
                    payload: hook.per_function(name, signature, function),
                }
            })
            .collect();
        UserData { entries }
    }
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.ids()).finish()
    }
}

/// One module's payload.
pub struct UserDataEntry {
    module: &'static str,
    payload: Payload,
}

impl UserDataEntry {
    pub fn module(&self) -> &'static str {
        self.module
    }

    /// Raw, untyped view of the payload.
    pub fn payload(&self) -> &(dyn Any + Send + Sync) {
        &*self.payload
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }
}

/// Extension payload of a descriptor: one entry per hook module, in invocation order.
///
/// Built once during descriptor construction and never modified.
#[derive(Default)]
pub struct UserData {
    entries: Vec<UserDataEntry>,
}

impl UserData {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, module: &str) -> Option<&UserDataEntry> {
        self.entries.iter().find(|e| e.module == module)
    }

    /// Typed view of `module`'s payload; `None` if the module is absent or the type does not match.
    pub fn get<T: Any>(&self, module: &str) -> Option<&T> {
        self.entry(module).and_then(UserDataEntry::downcast_ref::<T>)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UserDataEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a UserData {
    type Item = &'a UserDataEntry;
    type IntoIter = std::slice::Iter<'a, UserDataEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Debug for UserData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.iter().map(|e| e.module)).finish()
    }
}
