//! Germinator: AI coding assistant document adapter
//!
//! Loads agent, command, memory and skill documents (markdown with YAML
//! frontmatter), validates them against a target platform and renders them in
//! that platform's format. Supported platforms are `claude-code` and
//! `opencode`.

pub mod config;
pub mod document;
pub mod error;
pub mod loader;
pub mod logging;
pub mod render;
pub mod service;
pub mod tooling;

pub use document::{Document, DocumentKind, Platform, ValidationError};
pub use error::{GerminatorError, Result};
pub use loader::{detect_type, load_document};
pub use render::{render_document, Renderer};
pub use service::{transform_document, validate_document, Transformer};
