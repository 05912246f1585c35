pub mod hooks;
pub mod identity;
pub mod mapping;
pub mod registry;
pub mod reporter;

pub use hooks::{ReporterError, ReporterResult, TestCase, TestEventHandler, TestFailure};
pub use identity::TestIdentity;
pub use mapping::MappingFile;
pub use registry::CaseRegistry;
pub use reporter::TestRailReporter;
