//! The recursive archive walker.

use std::path::{Component, Path, PathBuf};

use gleaner_archive::{ArchiveSource, Result, stage};
use tracing::warn;

use crate::context::PathContext;
use crate::name::{base_name_no_ext, clean_identity};
use crate::output::{REPORT_DIR, SOURCE_DIR, copy_entry, ensure_dir};

/// Word-processor documents routed to the report directory.
const REPORT_EXTS: [&str; 2] = ["doc", "docx"];

/// Containers staged and recursed into. `rar` is listed so misnamed or
/// unsupported containers are at least probed instead of silently ignored.
const NESTED_EXTS: [&str; 5] = ["zip", "rar", "tar", "gz", "tgz"];

/// Source files routed to the student-works directory.
const SOURCE_EXTS: [&str; 1] = ["py"];

/// Version-control metadata pruned from every traversal.
const VCS_DIR: &str = ".git";

/// Walks submission archives and copies recognized artifacts into
/// categorized directories under `out_root`.
pub struct Harvester {
    out_root: PathBuf,
}

impl Harvester {
    pub fn new(out_root: impl AsRef<Path>) -> Self {
        Self {
            out_root: out_root.as_ref().to_path_buf(),
        }
    }

    /// Process one top-level submission archive with an empty path context.
    pub fn harvest(&self, archive: &Path) -> Result<()> {
        self.walk(archive, &PathContext::default())
    }

    /// Open `archive_path`, classify every entry, extract or recurse.
    ///
    /// Unreadable archives and individual bad entries are logged and
    /// skipped; the only error that propagates is a failed staging
    /// allocation, without which nested recursion is impossible.
    fn walk(&self, archive_path: &Path, ctx: &PathContext) -> Result<()> {
        let mut source = match ArchiveSource::open(archive_path) {
            Ok(source) => source,
            Err(err) => {
                warn!(archive = %archive_path.display(), error = %err, "skipping unreadable archive");
                return Ok(());
            }
        };

        // At the top level the context is empty; seed it with the archive's
        // own base name so the outermost element always identifies the
        // submission file given on the command line. Nested levels arrive
        // here under a staging name and keep the context they were given.
        let ctx = if ctx.is_empty() {
            ctx.extended(base_name_no_ext(archive_path))
        } else {
            ctx.clone()
        };

        let mut fatal = None;
        let traversal = source.for_each_entry(&mut |entry| {
            if fatal.is_some() {
                return;
            }
            let record = match entry {
                Ok(record) => record,
                Err(err) => {
                    warn!(archive = %archive_path.display(), error = %err, "skipping unreadable entry");
                    return;
                }
            };
            if record.is_dir || is_vcs_metadata(&record.path) {
                return;
            }
            let Some(ext) = record.path.extension().and_then(|e| e.to_str()) else {
                return;
            };

            if REPORT_EXTS.contains(&ext) {
                let student = clean_identity(ctx.outermost().unwrap_or_default());
                let dir = self.out_root.join(REPORT_DIR);
                ensure_dir(&dir);
                let dest = dir.join(format!("{student}.{ext}"));
                if let Err(err) = copy_entry(record.reader, &dest) {
                    warn!(
                        entry = %record.path.display(),
                        dest = %dest.display(),
                        error = %err,
                        "report extraction failed"
                    );
                }
            } else if NESTED_EXTS.contains(&ext) {
                let child_ctx = ctx.extended(base_name_no_ext(&record.path));
                let staged = match stage(&format!(".{ext}")) {
                    Ok(staged) => staged,
                    Err(err) => {
                        fatal = Some(err);
                        return;
                    }
                };
                match copy_entry(record.reader, staged.path()) {
                    Ok(_) => {
                        if let Err(err) = self.walk(staged.path(), &child_ctx) {
                            fatal = Some(err);
                        }
                    }
                    Err(err) => {
                        warn!(
                            entry = %record.path.display(),
                            staged = %staged.path().display(),
                            error = %err,
                            "staging copy failed, not recursing"
                        );
                    }
                }
                // `staged` drops here, removing the temporary file whether
                // or not the recursion succeeded.
            } else if SOURCE_EXTS.contains(&ext) {
                let label = base_name_no_ext(Path::new(ctx.outermost().unwrap_or_default()));
                let dir = self.out_root.join(SOURCE_DIR);
                ensure_dir(&dir);
                let dest = dir.join(format!("{label}.{ext}"));
                if let Err(err) = copy_entry(record.reader, &dest) {
                    warn!(
                        entry = %record.path.display(),
                        dest = %dest.display(),
                        error = %err,
                        "source extraction failed"
                    );
                }
            }
        });

        if let Some(err) = fatal {
            return Err(err);
        }
        if let Err(err) = traversal {
            // Container-level failure mid-walk; everything before it has
            // already been handled.
            warn!(archive = %archive_path.display(), error = %err, "archive traversal ended early");
        }
        Ok(())
    }
}

/// True for entries under a top-level `.git` directory, including the
/// `./`-prefixed form tar writers commonly emit.
fn is_vcs_metadata(path: &Path) -> bool {
    let mut components = path
        .components()
        .skip_while(|c| matches!(c, Component::CurDir));
    matches!(components.next(), Some(Component::Normal(name)) if name == VCS_DIR)
}
