//! Configuration for [`crate::FunctionRegistry`].

/// What a registry does when a descriptor's name is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Refuse the new descriptor with [`crate::RegistryError::Duplicate`].
    #[default]
    Reject,
    /// Replace the existing descriptor in place, keeping its position.
    Replace,
}

/// Registry configuration
#[derive(Debug, Clone, Default)]
pub struct RegistryConfig {
    /// Handling of name collisions
    pub duplicate_policy: DuplicatePolicy,
    /// Number of descriptors to reserve space for up front
    pub initial_capacity: usize,
}

impl RegistryConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duplicate-name policy
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Set the initial capacity
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Default config tests
    // ========================================

    #[test]
    fn test_default_rejects_duplicates() {
        let config = RegistryConfig::default();
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Reject);
    }

    #[test]
    fn test_default_capacity_is_zero() {
        assert_eq!(RegistryConfig::new().initial_capacity, 0);
    }

    // ========================================
    // Builder method tests
    // ========================================

    #[test]
    fn test_with_duplicate_policy() {
        let config = RegistryConfig::new().with_duplicate_policy(DuplicatePolicy::Replace);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Replace);
        // Other fields unchanged
        assert_eq!(config.initial_capacity, 0);
    }

    #[test]
    fn test_builder_override() {
        let config = RegistryConfig::new().with_initial_capacity(4).with_initial_capacity(32);
        assert_eq!(config.initial_capacity, 32); // Last value wins
    }
}
