//! Document loading
//!
//! Detection, frontmatter extraction and decoding, then validation against a
//! target platform.

pub mod detect;
pub mod frontmatter;
pub mod parser;

pub use detect::detect_type;
pub use frontmatter::{extract_frontmatter, Split};
pub use parser::{parse_document, parse_str};

use crate::document::Document;
use crate::error::{GerminatorError, Result};
use std::path::Path;
use tracing::{debug, warn};

/// Detect, parse and validate the file at `path` for `platform`.
///
/// A document with validation problems comes back as
/// [`GerminatorError::Validation`], which still carries the parsed document.
pub fn load_document(path: impl AsRef<Path>, platform: &str) -> Result<Document> {
    let path = path.as_ref();
    let kind =
        detect_type(path).ok_or_else(|| GerminatorError::UnrecognizedFilename(path.to_path_buf()))?;
    debug!(path = %path.display(), kind = %kind, platform, "loading document");

    let document = parse_document(path, kind)?;

    let errors = document.validate(platform);
    if !errors.is_empty() {
        warn!(
            path = %path.display(),
            platform,
            count = errors.len(),
            "document failed validation"
        );
        return Err(GerminatorError::Validation {
            document: Box::new(document),
            errors,
        });
    }

    Ok(document)
}
