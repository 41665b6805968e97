//! Owning store of function descriptors.
//!
//! The registry takes exclusive ownership of each `Box<dyn Function>`, keeps them in insertion order and resolves
//! them by name. Descriptors are never relocated out of their box, so references handed out by [`FunctionRegistry::get`]
//! stay valid for as long as the registry is borrowed.

use std::collections::HashMap;

use crate::config::{DuplicatePolicy, RegistryConfig};
use crate::errors::RegistryError;
use crate::function::{Function, FunctionFactory};
use crate::signature::FunctionTraits;

#[derive(Debug, Default)]
pub struct FunctionRegistry {
    config: RegistryConfig,
    functions: Vec<Box<dyn Function>>,
    by_name: HashMap<String, usize>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            functions: Vec::with_capacity(config.initial_capacity),
            by_name: HashMap::with_capacity(config.initial_capacity),
            config,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Take ownership of `function`.
    ///
    /// ## Returns
    /// - `Ok(None)` if the name was free.
    /// - `Ok(Some(previous))` if the name was taken and the policy is [`DuplicatePolicy::Replace`].
    ///
    /// ## Errors
    /// - [`RegistryError::Duplicate`] if the name was taken and the policy is [`DuplicatePolicy::Reject`].
    pub fn insert(&mut self, function: Box<dyn Function>) -> Result<Option<Box<dyn Function>>, RegistryError> {
        if let Some(&slot) = self.by_name.get(function.name()) {
            return match self.config.duplicate_policy {
                DuplicatePolicy::Reject => Err(RegistryError::Duplicate {
                    name: function.name().to_string(),
                }),
                DuplicatePolicy::Replace => {
                    tracing::warn!(name = function.name(), "replacing registered function");
                    Ok(Some(std::mem::replace(&mut self.functions[slot], function)))
                }
            };
        }

        tracing::debug!(name = function.name(), family = %function.family(), "registered function");
        self.by_name.insert(function.name().to_string(), self.functions.len());
        self.functions.push(function);
        Ok(None)
    }

    /// Build a descriptor with `factory` and insert it.
    pub fn register<F, M>(
        &mut self,
        factory: &FunctionFactory,
        name: impl Into<String>,
        function: F,
    ) -> Result<&dyn Function, RegistryError>
    where
        F: FunctionTraits<M>,
    {
        let descriptor = factory.new_function(name, function);
        let name = descriptor.name().to_string();
        self.insert(descriptor)?;
        self.require(&name)
    }

    pub fn get(&self, name: &str) -> Option<&dyn Function> {
        self.by_name.get(name).map(|&slot| self.functions[slot].as_ref())
    }

    /// Like [`FunctionRegistry::get`], but a missing name is an error.
    pub fn require(&self, name: &str) -> Result<&dyn Function, RegistryError> {
        self.get(name).ok_or_else(|| RegistryError::NotFound { name: name.to_string() })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Descriptors in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Function> {
        self.functions.iter().map(|f| f.as_ref())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.iter().map(|f| f.name())
    }
}
