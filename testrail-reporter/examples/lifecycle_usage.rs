//! Example demonstrating a test engine driving the reporter lifecycle
//!
//! Run with: cargo run --package testrail-reporter --example lifecycle_usage
//!
//! The configuration is mapping-only, so no network traffic is produced;
//! set the TESTRAIL_* environment variables and drop `with_mapping_only`
//! to report against a real run.

use std::fs;
use testrail_client::TestRailConfig;
use testrail_reporter::{
    CaseRegistry, TestCase, TestEventHandler, TestFailure, TestRailReporter,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let registry = CaseRegistry::new()
        .with_case("demo.login.LoginTest.test_ok", 1001)
        .with_case("demo.login.LoginTest.test_bad_password", 1002);

    let config = TestRailConfig::from_env()
        .with_mapping_file("demo_mapping.csv")
        .with_mapping_only(true);
    let mut reporter = TestRailReporter::new(config, registry)?;

    println!("reporting over network: {}\n", reporter.is_reporting());

    // A minimal engine: one passing test, one failing test.
    reporter.on_run_begin()?;

    let passing = TestCase::new("demo.login.LoginTest.test_ok");
    reporter.on_test_begin(&passing)?;
    reporter.on_test_pass(&passing)?;
    reporter.on_test_end(&passing)?;
    println!("finished {}", passing);

    let failing = TestCase::new("demo.login.LoginTest.test_bad_password");
    let failure = TestFailure::new("AssertionError", "expected rejection, got session")
        .with_trace(["in test_bad_password", "in assert_rejected"]);
    reporter.on_test_begin(&failing)?;
    reporter.on_test_fail(&failing, &failure)?;
    reporter.on_test_end(&failing)?;
    println!("finished {}\n", failing);

    println!("mapping file contents:");
    print!("{}", fs::read_to_string("demo_mapping.csv")?);
    fs::remove_file("demo_mapping.csv")?;

    Ok(())
}
