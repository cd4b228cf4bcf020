//! Read-only, streaming views over submission archives.
//!
//! # Architecture
//!
//! - `format.rs` - Content-based format detection and tar codecs
//! - `source.rs` - Per-format entry sources behind one `ArchiveSource`
//! - `stage.rs` - Temporary materialization of nested archives
//!
//! [`ArchiveSource::open`] probes the leading bytes of a file and opens the
//! matching container (ZIP, tar, tar.gz). Entries are visited in archive
//! order; a corrupt or undecodable entry is reported to the visitor without
//! aborting the walk. [`stage`] reserves a uniquely named temporary file so
//! a nested archive can be copied out and opened as its own source.

pub use error::{Error, Result};
pub use source::{ArchiveSource, EntryRecord};
pub use stage::{StagedArchive, stage};

mod error;
pub mod format;
mod source;
mod stage;
