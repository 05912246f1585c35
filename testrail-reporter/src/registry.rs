use std::collections::HashMap;

/// Explicit table associating full test identifiers with TestRail case
/// ids, populated when the test suite is registered with the engine.
///
/// A test without an entry is simply not reported and not mapped.
#[derive(Debug, Clone)]
pub struct CaseRegistry {
    cases: HashMap<String, u64>,
}

impl CaseRegistry {
    pub fn new() -> Self {
        Self {
            cases: HashMap::new(),
        }
    }

    /// Associates a test with a TestRail case id. Registering the same
    /// test twice keeps the latest id.
    pub fn register(&mut self, test_id: impl Into<String>, case_id: u64) {
        self.cases.insert(test_id.into(), case_id);
    }

    /// Equivalent to [`CaseRegistry::register`].
    pub fn annotate(&mut self, test_id: impl Into<String>, case_id: u64) {
        self.register(test_id, case_id);
    }

    /// Builder form of [`CaseRegistry::register`].
    pub fn with_case(mut self, test_id: impl Into<String>, case_id: u64) -> Self {
        self.register(test_id, case_id);
        self
    }

    pub fn case_for(&self, test_id: &str) -> Option<u64> {
        self.cases.get(test_id).copied()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

impl Default for CaseRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = CaseRegistry::new();
        registry.register("tests.login.LoginTest.test_ok", 1001);
        registry.annotate("tests.login.LoginTest.test_bad_password", 1002);

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.case_for("tests.login.LoginTest.test_ok"),
            Some(1001)
        );
        assert_eq!(
            registry.case_for("tests.login.LoginTest.test_bad_password"),
            Some(1002)
        );
        assert_eq!(registry.case_for("tests.login.LoginTest.test_other"), None);
    }

    #[test]
    fn test_builder_form() {
        let registry = CaseRegistry::new()
            .with_case("suite.Class.test_a", 1)
            .with_case("suite.Class.test_b", 2);

        assert_eq!(registry.case_for("suite.Class.test_a"), Some(1));
        assert_eq!(registry.case_for("suite.Class.test_b"), Some(2));
    }

    #[test]
    fn test_reregistration_keeps_latest() {
        let mut registry = CaseRegistry::new();
        registry.register("suite.Class.test_a", 1);
        registry.register("suite.Class.test_a", 7);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.case_for("suite.Class.test_a"), Some(7));
    }

    #[test]
    fn test_empty_registry() {
        let registry = CaseRegistry::default();
        assert!(registry.is_empty());
        assert_eq!(registry.case_for("anything"), None);
    }
}
