//! The reporter wired into a test engine's lifecycle hooks.
//!
//! Per test it resolves the registered case id, appends a mapping line,
//! and, when credentials are configured, posts the result record to
//! TestRail. Everything runs synchronously on the engine's thread.

use crate::hooks::{ReporterResult, TestCase, TestEventHandler, TestFailure};
use crate::identity::TestIdentity;
use crate::mapping::MappingFile;
use crate::registry::CaseRegistry;
use chrono::{DateTime, Utc};
use testrail_client::{format_elapsed, TestRailClient, TestRailConfig, TestResult};
use tracing::{debug, warn};

/// Reports per-test outcomes to TestRail and records test-to-case
/// mappings.
///
/// The client is constructed once, only when the configuration enables
/// network reporting; otherwise every test still gets its mapping line
/// and the send step is skipped.
pub struct TestRailReporter {
    config: TestRailConfig,
    registry: CaseRegistry,
    client: Option<TestRailClient>,
    mapping: Option<MappingFile>,
    /// Baseline for the next test's elapsed time; advanced after each
    /// send so measurement is per-test, not cumulative.
    started_at: Option<DateTime<Utc>>,
    current_case: Option<u64>,
    outcome: Option<TestResult>,
}

impl TestRailReporter {
    pub fn new(config: TestRailConfig, registry: CaseRegistry) -> ReporterResult<Self> {
        let client = if config.reporting_enabled() {
            Some(TestRailClient::new(&config)?)
        } else {
            debug!("TestRail reporting disabled; results will not be sent");
            None
        };
        let mapping = config.mapping_file.clone().map(MappingFile::new);

        Ok(Self {
            config,
            registry,
            client,
            mapping,
            started_at: None,
            current_case: None,
            outcome: None,
        })
    }

    /// Builds a reporter from `TESTRAIL_*` environment variables.
    pub fn from_env(registry: CaseRegistry) -> ReporterResult<Self> {
        Self::new(TestRailConfig::from_env(), registry)
    }

    pub fn config(&self) -> &TestRailConfig {
        &self.config
    }

    pub fn registry(&self) -> &CaseRegistry {
        &self.registry
    }

    /// True when results will be sent over the network.
    pub fn is_reporting(&self) -> bool {
        self.client.is_some()
    }

    fn set_outcome(&mut self, test: &TestCase, outcome: TestResult) {
        if self.outcome.is_some() {
            warn!("Outcome for {} set more than once; keeping the latest", test.id());
        }
        self.outcome = Some(outcome);
    }
}

impl TestEventHandler for TestRailReporter {
    fn on_run_begin(&mut self) -> ReporterResult<()> {
        self.started_at = Some(Utc::now());
        Ok(())
    }

    fn on_test_begin(&mut self, test: &TestCase) -> ReporterResult<()> {
        self.current_case = self.registry.case_for(test.id());
        self.outcome = None;
        Ok(())
    }

    fn on_test_pass(&mut self, test: &TestCase) -> ReporterResult<()> {
        self.set_outcome(test, TestResult::passed());
        Ok(())
    }

    fn on_test_fail(&mut self, test: &TestCase, failure: &TestFailure) -> ReporterResult<()> {
        self.set_outcome(test, TestResult::failed(failure.format()));
        Ok(())
    }

    fn on_test_error(&mut self, test: &TestCase, failure: &TestFailure) -> ReporterResult<()> {
        self.set_outcome(test, TestResult::failed(failure.format()));
        Ok(())
    }

    fn on_test_end(&mut self, test: &TestCase) -> ReporterResult<()> {
        let outcome = self.outcome.take();
        let Some(case_id) = self.current_case.take() else {
            return Ok(());
        };

        if let Some(mapping) = &self.mapping {
            if let Some(identity) = TestIdentity::parse(test.id()) {
                mapping.append(&identity, case_id)?;
            }
        }

        let Some(client) = &self.client else {
            return Ok(());
        };
        let Some(outcome) = outcome else {
            warn!(
                "{} ended without an outcome; not reporting case {}",
                test.id(),
                case_id
            );
            return Ok(());
        };

        let now = Utc::now();
        let before = self.started_at.unwrap_or(now);
        let seconds = (now - before).num_seconds().max(0) as u64;
        self.started_at = Some(now);

        let result = outcome.with_elapsed(format_elapsed(seconds));
        client.add_result_for_case(case_id, &result)?;
        Ok(())
    }
}
