//! Pipeline entry points: load, validate and transform documents on disk.

use crate::document::{Document, ValidationError};
use crate::error::{GerminatorError, Result};
use crate::loader::{detect_type, load_document, parse_document};
use crate::render::Renderer;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Runs the load, render and write pipeline with one renderer.
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    renderer: Renderer,
}

impl Transformer {
    pub fn new(renderer: Renderer) -> Self {
        Self { renderer }
    }

    /// A transformer that resolves templates under `templates_dir` first.
    pub fn with_templates_dir(templates_dir: Option<PathBuf>) -> Self {
        match templates_dir {
            Some(dir) => Self::new(Renderer::with_templates_dir(dir)),
            None => Self::default(),
        }
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Load `input`, render it for `platform` and write the result to
    /// `output`. On any failure `output` is left untouched.
    pub fn transform(&self, input: &Path, output: &Path, platform: &str) -> Result<()> {
        let document = load_document(input, platform)?;
        let rendered = self.renderer.render(&document, platform)?;
        write_atomic(output, &rendered)?;
        info!(
            input = %input.display(),
            output = %output.display(),
            platform,
            kind = %document.kind(),
            "document transformed"
        );
        Ok(())
    }
}

/// Transform with the built-in templates.
pub fn transform_document(input: &Path, output: &Path, platform: &str) -> Result<()> {
    Transformer::default().transform(input, output, platform)
}

/// Parse `path` and return its validation errors for `platform`.
///
/// Only detection and parse failures are `Err`; an invalid document is
/// `Ok` with a non-empty list.
pub fn validate_document(path: &Path, platform: &str) -> Result<Vec<ValidationError>> {
    let document = detect_and_parse(path)?;
    let errors = document.validate(platform);
    debug!(path = %path.display(), platform, count = errors.len(), "validated document");
    Ok(errors)
}

/// Detect and parse without validating.
pub fn detect_and_parse(path: &Path) -> Result<Document> {
    let kind =
        detect_type(path).ok_or_else(|| GerminatorError::UnrecognizedFilename(path.to_path_buf()))?;
    parse_document(path, kind)
}

/// Write through a temporary file in the destination directory, then rename
/// it over `path`.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let wrap = |source| GerminatorError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(wrap)?;
    tmp.write_all(contents.as_bytes()).map_err(wrap)?;
    tmp.persist(path).map_err(|e| wrap(e.error))?;
    Ok(())
}
