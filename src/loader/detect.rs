//! Document type detection from file names.

use crate::document::DocumentKind;
use std::path::Path;

/// Detect the document kind from the base name of `path`.
///
/// Each kind matches `<kind>-*.md` or `*-<kind>.md`. Kinds are tried in the
/// order agent, command, memory, skill and the prefix form is tried before the
/// suffix form, so `agent-review-skill.md` is an agent. Matching is
/// case-sensitive and needs the exact `.md` extension. No file system access
/// happens here.
pub fn detect_type(path: impl AsRef<Path>) -> Option<DocumentKind> {
    let base = path.as_ref().file_name()?.to_str()?;
    let stem = base.strip_suffix(".md")?;

    DocumentKind::ALL.into_iter().find(|kind| {
        let kind = kind.as_str();
        let prefixed = stem
            .strip_prefix(kind)
            .is_some_and(|rest| rest.starts_with('-'));
        let suffixed = stem
            .strip_suffix(kind)
            .is_some_and(|rest| rest.ends_with('-'));
        prefixed || suffixed
    })
}
