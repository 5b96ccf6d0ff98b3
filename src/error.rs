//! Error types for the germinator pipeline.
//!
//! Hard failures (detection, parsing, rendering, writing) stop the pipeline and
//! surface here. Validation problems are data: they travel as a list of
//! [`ValidationError`] and only become a [`GerminatorError`] when a caller asks
//! for a fully valid document.

use crate::document::{Document, ValidationError};
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the germinator pipeline
#[derive(Debug, Error)]
pub enum GerminatorError {
    #[error("unrecognizable filename: {} (expected: agent-*.md, *-agent.md, etc.)", .0.display())]
    UnrecognizedFilename(PathBuf),

    #[error("unsupported document type: {0}")]
    UnsupportedDocumentType(String),

    #[error("failed to read file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {kind}: {source}")]
    Frontmatter {
        kind: &'static str,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("validation failed: {}", format_validation_errors(errors))]
    Validation {
        document: Box<Document>,
        errors: Vec<ValidationError>,
    },

    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("failed to render template {name}: {source}")]
    Template {
        name: String,
        #[source]
        source: tera::Error,
    },

    #[error("failed to write output file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl GerminatorError {
    /// The validation errors carried by a `Validation` failure, if any.
    pub fn validation_errors(&self) -> Option<&[ValidationError]> {
        match self {
            GerminatorError::Validation { errors, .. } => Some(errors),
            _ => None,
        }
    }

    /// Take back the parsed document from a `Validation` failure.
    pub fn into_document(self) -> Option<Document> {
        match self {
            GerminatorError::Validation { document, .. } => Some(*document),
            _ => None,
        }
    }
}

impl From<config::ConfigError> for GerminatorError {
    fn from(err: config::ConfigError) -> Self {
        GerminatorError::ConfigError(err.to_string())
    }
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    format!("[{}]", messages.join("; "))
}

pub type Result<T> = std::result::Result<T, GerminatorError>;
