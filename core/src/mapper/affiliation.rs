//! Author-label parsing.
//!
//! Two response shapes encode the author unit differently and each has its
//! own rule. They are intentionally not merged: notice rows carry
//! `"<writer>[<category>]"`, saved-notice rows carry a bare unit name.

use crate::entity::Association;

/// Split `"<writer>[<category>]"` into the trimmed writer and its category.
///
/// The bracket must close the string (trailing whitespace aside); the last
/// `[` before it starts the category. Otherwise the whole string is the
/// writer and the category is the student body.
pub fn parse_bracketed(raw: &str) -> (String, Association) {
    if let Some(inner) = raw.trim_end().strip_suffix(']') {
        if let Some(open) = inner.rfind('[') {
            let writer = inner[..open].trim().to_string();
            return (writer, Association::from_label(&inner[open + 1..]));
        }
    }
    (raw.to_string(), Association::GeneralStudents)
}

/// Classify a bare unit name by its last two characters, taken as is.
pub fn classify_by_suffix(raw: &str) -> Association {
    if raw.ends_with("학과") {
        Association::Major
    } else if raw.ends_with("대학") {
        Association::College
    } else {
        Association::GeneralStudents
    }
}
