use std::fmt;

/// Class and method names extracted from a fully-qualified test id.
///
/// The last two dot-separated segments are taken; leading module segments
/// are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestIdentity {
    class_name: String,
    method_name: String,
}

impl TestIdentity {
    /// Parses `tests.login.LoginTest.test_ok` into `LoginTest` /
    /// `test_ok`. Returns `None` when the id has fewer than two segments
    /// or either trailing segment is empty.
    pub fn parse(test_id: &str) -> Option<Self> {
        let mut segments = test_id.rsplit('.');
        let method_name = segments.next()?;
        let class_name = segments.next()?;

        if class_name.is_empty() || method_name.is_empty() {
            return None;
        }

        Some(Self {
            class_name: class_name.to_string(),
            method_name: method_name.to_string(),
        })
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn method_name(&self) -> &str {
        &self.method_name
    }
}

impl fmt::Display for TestIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.class_name, self.method_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fully_qualified_id() {
        let identity = TestIdentity::parse("tests.login.LoginTest.test_ok").unwrap();
        assert_eq!(identity.class_name(), "LoginTest");
        assert_eq!(identity.method_name(), "test_ok");
        assert_eq!(identity.to_string(), "LoginTest.test_ok");
    }

    #[test]
    fn test_parse_two_segments() {
        let identity = TestIdentity::parse("LoginTest.test_ok").unwrap();
        assert_eq!(identity.class_name(), "LoginTest");
        assert_eq!(identity.method_name(), "test_ok");
    }

    #[test]
    fn test_parse_single_segment_fails() {
        assert_eq!(TestIdentity::parse("test_ok"), None);
    }

    #[test]
    fn test_parse_empty_segments_fail() {
        assert_eq!(TestIdentity::parse(""), None);
        assert_eq!(TestIdentity::parse("LoginTest."), None);
        assert_eq!(TestIdentity::parse(".test_ok"), None);
    }
}
