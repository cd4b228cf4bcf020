//! Output directory provisioning and single-entry copying.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use tracing::warn;

/// Destination directory for extracted word-processor documents.
pub const REPORT_DIR: &str = "lab-reports";

/// Destination directory for extracted Python sources.
pub const SOURCE_DIR: &str = "student-works";

/// Best-effort, non-recursive directory creation.
///
/// An already existing directory is fine; any other failure is logged and
/// swallowed, and the subsequent copy will surface its own error.
pub fn ensure_dir(path: &Path) {
    if let Err(err) = fs::create_dir(path) {
        if err.kind() != io::ErrorKind::AlreadyExists {
            warn!(dir = %path.display(), error = %err, "could not create output directory");
        }
    }
}

/// Stream one archive entry to `dest`, truncating any previous file there.
///
/// Both handles are released on every exit path, and write-back failures
/// surface through the final sync rather than being lost in the implicit
/// close. A mid-stream failure may leave partial output behind; extraction
/// is logged, not transactional.
pub fn copy_entry(reader: &mut dyn Read, dest: &Path) -> io::Result<u64> {
    let mut out = File::create(dest)?;
    let copied = io::copy(reader, &mut out)?;
    out.sync_all()?;
    Ok(copied)
}
