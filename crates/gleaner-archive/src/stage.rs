use std::fs::File;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Fixed prefix for staged files in the process-wide temp area.
const STAGING_PREFIX: &str = "gleaner-stage-";

/// A uniquely named temporary file holding the raw bytes of one nested
/// archive.
///
/// The file exists for the duration of one recursive walk and is removed
/// when the guard is dropped, whether or not the recursion succeeded.
pub struct StagedArchive {
    inner: NamedTempFile,
}

/// Reserve a staging file carrying `suffix` (the nested archive's extension,
/// dot included), so downstream probing sees a realistically named file.
///
/// Allocation failure propagates: without a staging location no nested
/// recursion is possible.
pub fn stage(suffix: &str) -> Result<StagedArchive> {
    let inner = tempfile::Builder::new()
        .prefix(STAGING_PREFIX)
        .suffix(suffix)
        .tempfile()
        .map_err(|source| Error::Staging { source })?;
    Ok(StagedArchive { inner })
}

impl StagedArchive {
    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    pub fn as_file_mut(&mut self) -> &mut File {
        self.inner.as_file_mut()
    }
}
