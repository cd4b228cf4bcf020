//! Pure helpers deriving display names and student identities from paths.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

/// Leading text, first parenthesized annotation, trailing text.
static ANNOTATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([^(]*)\([^)]*\)(.*)$").unwrap());

/// File name component of `path` with only the final extension removed.
pub fn base_name_no_ext(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Remove the first parenthesized annotation from a submission name, e.g.
/// `Alice(resubmit)` becomes `Alice`. Names without an annotation pass
/// through unchanged.
pub fn clean_identity(name: &str) -> String {
    ANNOTATION.replace(name, "${1}${2}").into_owned()
}
