//! Lifecycle contract between a test-execution engine and a reporter.
//!
//! The engine holds a [`TestEventHandler`] and invokes it directly: once
//! globally at run start, then per test in the order begin, exactly one of
//! pass/fail/error, end. All hooks run sequentially on the engine's
//! thread; no overlapping tests.

use std::fmt;
use testrail_client::TestRailError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReporterError {
    /// Appending to the mapping file failed.
    #[error("Mapping file write failed: {0}")]
    Mapping(#[from] std::io::Error),

    /// Sending the result to TestRail failed.
    #[error("Result reporting failed: {0}")]
    Report(#[from] TestRailError),
}

pub type ReporterResult<T> = Result<T, ReporterError>;

/// Engine-supplied handle for one test: a dot-separated fully-qualified
/// identifier whose final two segments are class and method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    id: String,
}

impl TestCase {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Engine-supplied failure detail: error kind, message, and trace frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestFailure {
    kind: String,
    message: String,
    trace: Vec<String>,
}

impl TestFailure {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            trace: Vec::new(),
        }
    }

    pub fn with_trace<I, S>(mut self, trace: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.trace = trace.into_iter().map(Into::into).collect();
        self
    }

    pub fn push_frame(&mut self, frame: impl Into<String>) {
        self.trace.push(frame.into());
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn trace(&self) -> &[String] {
        &self.trace
    }

    /// Newline-joined trace text: frames first, then `kind: message` as
    /// the final line. Used verbatim as the result comment.
    pub fn format(&self) -> String {
        let mut lines = self.trace.clone();
        lines.push(format!("{}: {}", self.kind, self.message));
        lines.join("\n")
    }
}

impl fmt::Display for TestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

/// The six lifecycle operations a test-execution engine drives.
pub trait TestEventHandler {
    /// Invoked once before the first test; establishes the elapsed-time
    /// baseline.
    fn on_run_begin(&mut self) -> ReporterResult<()>;

    /// Invoked before each test; resets all per-test state.
    fn on_test_begin(&mut self, test: &TestCase) -> ReporterResult<()>;

    fn on_test_pass(&mut self, test: &TestCase) -> ReporterResult<()>;

    fn on_test_fail(&mut self, test: &TestCase, failure: &TestFailure) -> ReporterResult<()>;

    fn on_test_error(&mut self, test: &TestCase, failure: &TestFailure) -> ReporterResult<()>;

    /// Invoked after each test; performs the mapping write and, when
    /// reporting is enabled, the network send. Failures propagate to the
    /// engine, which decides whether they are fatal.
    fn on_test_end(&mut self, test: &TestCase) -> ReporterResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_accessors() {
        let test = TestCase::new("tests.login.LoginTest.test_ok");
        assert_eq!(test.id(), "tests.login.LoginTest.test_ok");
        assert_eq!(test.to_string(), "tests.login.LoginTest.test_ok");
    }

    #[test]
    fn test_failure_format_without_trace() {
        let failure = TestFailure::new("AssertionError", "1 != 2");
        assert_eq!(failure.format(), "AssertionError: 1 != 2");
    }

    #[test]
    fn test_failure_format_with_trace() {
        let failure = TestFailure::new("AssertionError", "1 != 2").with_trace([
            "in test_addition",
            "in assert_equal",
        ]);

        assert_eq!(
            failure.format(),
            "in test_addition\nin assert_equal\nAssertionError: 1 != 2"
        );
        assert_eq!(failure.to_string(), failure.format());
    }

    #[test]
    fn test_failure_push_frame() {
        let mut failure = TestFailure::new("IoError", "connection reset");
        failure.push_frame("in setup");
        assert_eq!(failure.trace(), ["in setup"]);
        assert_eq!(failure.kind(), "IoError");
        assert_eq!(failure.message(), "connection reset");
    }
}
