//! Batch extraction of student-submitted work from nested archives.
//!
//! Given a list of top-level submission archives, [`Harvester`] walks each
//! one recursively, staging nested archives to temporary files so they can
//! be opened in turn, and copies recognized artifacts (word-processor
//! documents, Python sources) into categorized output directories. Output
//! names are derived from the outermost archive's base name, which by the
//! submission convention encodes the student's identity.
//!
//! One corrupt archive or entry never aborts a run: failures are logged and
//! the affected subtree or entry is skipped.

pub use context::PathContext;
pub use walk::Harvester;

pub mod context;
pub mod name;
pub mod output;
mod walk;
