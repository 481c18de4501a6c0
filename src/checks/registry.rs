//! Ordered registry of checks.
//!
//! Unlike a lookup table, the registry preserves registration order: that
//! order is the execution order and the 1-based index shown in reports.

use super::check::{CheckId, VerifyCheck};
use super::{
    DocumentationCheck, InstallerFilesCheck, InstallerFunctionsCheck, InstallerSyntaxCheck,
    PackageConfigCheck,
};

/// Registry of checks in execution order.
pub struct CheckRegistry {
    checks: Vec<Box<dyn VerifyCheck>>,
}

impl CheckRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Create a registry with the five built-in checks in their fixed order.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(InstallerFilesCheck));
        registry.register(Box::new(InstallerSyntaxCheck));
        registry.register(Box::new(InstallerFunctionsCheck));
        registry.register(Box::new(PackageConfigCheck));
        registry.register(Box::new(DocumentationCheck));
        registry
    }

    /// Append a check.
    pub fn register(&mut self, check: Box<dyn VerifyCheck>) {
        self.checks.push(check);
    }

    /// Get a check by ID.
    pub fn get(&self, id: &CheckId) -> Option<&dyn VerifyCheck> {
        self.checks
            .iter()
            .find(|c| &c.id() == id)
            .map(|c| c.as_ref())
    }

    /// Iterate over checks in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn VerifyCheck> {
        self.checks.iter().map(|c| c.as_ref())
    }

    /// Get the number of registered checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{CheckContext, CheckOutcome};

    struct MockCheck;

    impl VerifyCheck for MockCheck {
        fn id(&self) -> CheckId {
            CheckId::new("mock")
        }

        fn description(&self) -> &str {
            "Mock check"
        }

        fn check(&self, _ctx: &CheckContext<'_>) -> CheckOutcome {
            CheckOutcome::new(true, vec![])
        }
    }

    #[test]
    fn new_registry_is_empty() {
        let registry = CheckRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn builtins_are_registered_in_order() {
        let registry = CheckRegistry::with_builtins();
        let ids: Vec<String> = registry.iter().map(|c| c.id().0).collect();
        assert_eq!(
            ids,
            vec![
                "installer-files",
                "installer-syntax",
                "installer-functions",
                "package-config",
                "documentation",
            ]
        );
    }

    #[test]
    fn register_appends() {
        let mut registry = CheckRegistry::with_builtins();
        registry.register(Box::new(MockCheck));
        assert_eq!(registry.len(), 6);
        assert_eq!(registry.iter().last().unwrap().id(), CheckId::new("mock"));
    }

    #[test]
    fn get_finds_by_id() {
        let registry = CheckRegistry::with_builtins();
        let check = registry.get(&CheckId::new("package-config")).unwrap();
        assert_eq!(check.description(), "Checking package configuration");
        assert!(registry.get(&CheckId::new("nope")).is_none());
    }
}
