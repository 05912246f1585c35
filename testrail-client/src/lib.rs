pub mod api;
pub mod config;
pub mod elapsed;
pub mod types;

pub use api::{TestRailClient, TestRailError, TestRailResult};
pub use config::{TestRailConfig, DEFAULT_MAPPING_FILE};
pub use elapsed::{format_elapsed, format_elapsed_with};
pub use types::{TestResult, STATUS_FAILED, STATUS_PASSED};

pub mod prelude {
    pub use crate::api::*;
    pub use crate::config::*;
    pub use crate::elapsed::*;
    pub use crate::types::*;
}
