use crate::identity::TestIdentity;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Append-only writer for the local test-to-case mapping artifact.
///
/// One `Class.method,case_id` line per annotated test. The file is created
/// on first use and is never read back by this crate.
#[derive(Debug, Clone)]
pub struct MappingFile {
    path: PathBuf,
}

impl MappingFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one mapping line. The file handle is held only for the
    /// duration of the write and is released on every exit path.
    pub fn append(&self, identity: &TestIdentity, case_id: u64) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(
            file,
            "{}.{},{}",
            identity.class_name(),
            identity.method_name(),
            case_id
        )?;
        debug!("Recorded mapping {} -> {}", identity, case_id);
        Ok(())
    }
}
