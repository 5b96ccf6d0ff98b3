//! Rendering
//!
//! Documents are rendered through Tera templates keyed by platform and kind.
//! Field omission lives in the templates; the helpers they call (YAML scalar
//! quoting, tool merging, the permission transform) live in [`filters`] and
//! [`permission`].

pub mod filters;
pub mod permission;
pub mod templates;

pub use permission::{transform_permission_mode, PermissionAction, PermissionPolicy};

use crate::document::Document;
use crate::error::{GerminatorError, Result};
use std::path::{Path, PathBuf};
use tera::{Context, Tera};
use tracing::debug;

/// Renders documents for a target platform.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    templates_dir: Option<PathBuf>,
}

impl Renderer {
    /// A renderer using only the built-in templates.
    pub fn new() -> Self {
        Self::default()
    }

    /// A renderer that prefers templates under `dir`.
    pub fn with_templates_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: Some(dir.into()),
        }
    }

    pub fn templates_dir(&self) -> Option<&Path> {
        self.templates_dir.as_deref()
    }

    /// Render `doc` for `platform`. Output is deterministic for a given
    /// document and template.
    pub fn render(&self, doc: &Document, platform: &str) -> Result<String> {
        let kind = doc.kind();
        let (name, source) = templates::resolve(self.templates_dir(), platform, kind)?;
        debug!(template = %name, "rendering document");

        let wrap = |source| GerminatorError::Template {
            name: name.clone(),
            source,
        };

        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        filters::register(&mut tera);
        tera.add_raw_template(&name, &source).map_err(wrap)?;

        let context = match doc {
            Document::Agent(agent) => Context::from_serialize(agent),
            Document::Command(command) => Context::from_serialize(command),
            Document::Memory(memory) => Context::from_serialize(memory),
            Document::Skill(skill) => Context::from_serialize(skill),
        }
        .map_err(wrap)?;

        tera.render(&name, &context).map_err(wrap)
    }
}

/// Render with the built-in templates.
pub fn render_document(doc: &Document, platform: &str) -> Result<String> {
    Renderer::new().render(doc, platform)
}
