//! Memory documents: project context files with optional path references.

use super::validation::{validate_platform, ValidationError};
use super::PLATFORM_OPENCODE;
use serde::Serialize;
use std::path::PathBuf;

/// Memory has no name; it is a set of referenced paths and/or free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Memory {
    /// Glob patterns of files the memory refers to.
    pub paths: Vec<String>,
    pub file_path: PathBuf,
    pub content: String,
}

impl Memory {
    pub fn validate(&self, platform: &str) -> Vec<ValidationError> {
        let mut errs = validate_platform(platform);

        self.check_not_empty(&mut errs);
        if platform == PLATFORM_OPENCODE {
            self.check_not_empty(&mut errs);
        }

        errs
    }

    fn check_not_empty(&self, errs: &mut Vec<ValidationError>) {
        if self.paths.is_empty() && self.content.trim().is_empty() {
            errs.push(ValidationError::new("paths", "paths or content is required"));
        }
    }
}
