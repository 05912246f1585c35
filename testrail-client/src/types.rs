use serde::{Deserialize, Serialize};

/// TestRail status id for a passing test.
pub const STATUS_PASSED: u8 = 1;
/// TestRail status id for a failing or erroring test.
pub const STATUS_FAILED: u8 = 5;

/// The per-test result record sent to `add_result_for_case`.
///
/// A record is built fresh for every test; nothing is carried over between
/// tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub status_id: u8,
    pub comment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed: Option<String>,
}

impl TestResult {
    pub fn passed() -> Self {
        Self {
            status_id: STATUS_PASSED,
            comment: "test PASS".to_string(),
            elapsed: None,
        }
    }

    pub fn failed(comment: impl Into<String>) -> Self {
        Self {
            status_id: STATUS_FAILED,
            comment: comment.into(),
            elapsed: None,
        }
    }

    pub fn with_elapsed(mut self, elapsed: impl Into<String>) -> Self {
        self.elapsed = Some(elapsed.into());
        self
    }

    pub fn is_pass(&self) -> bool {
        self.status_id == STATUS_PASSED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passed_record() {
        let result = TestResult::passed();
        assert_eq!(result.status_id, STATUS_PASSED);
        assert_eq!(result.comment, "test PASS");
        assert_eq!(result.elapsed, None);
        assert!(result.is_pass());
    }

    #[test]
    fn test_failed_record() {
        let result = TestResult::failed("AssertionError: 1 != 2");
        assert_eq!(result.status_id, STATUS_FAILED);
        assert_eq!(result.comment, "AssertionError: 1 != 2");
        assert!(!result.is_pass());
    }

    #[test]
    fn test_elapsed_omitted_when_absent() {
        let json = serde_json::to_string(&TestResult::passed()).unwrap();
        assert!(!json.contains("elapsed"));
        assert!(json.contains("\"status_id\":1"));
    }

    #[test]
    fn test_elapsed_serialized_when_present() {
        let result = TestResult::passed().with_elapsed("1m5s");
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"elapsed\":\"1m5s\""));
    }

    #[test]
    fn test_round_trip() {
        let result = TestResult::failed("boom").with_elapsed("2s");
        let json = serde_json::to_string(&result).unwrap();
        let back: TestResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
