//! Template lookup: override directory first, then the embedded built-ins.

use crate::document::DocumentKind;
use crate::error::{GerminatorError, Result};
use std::borrow::Cow;
use std::path::Path;
use tracing::debug;

/// File extension of template files in an override directory.
pub const TEMPLATE_EXTENSION: &str = "tmpl";

const BUILTIN: [(&str, &str); 8] = [
    (
        "claude-code/agent",
        include_str!("../../templates/claude-code/agent.tmpl"),
    ),
    (
        "claude-code/command",
        include_str!("../../templates/claude-code/command.tmpl"),
    ),
    (
        "claude-code/memory",
        include_str!("../../templates/claude-code/memory.tmpl"),
    ),
    (
        "claude-code/skill",
        include_str!("../../templates/claude-code/skill.tmpl"),
    ),
    ("opencode/agent", include_str!("../../templates/opencode/agent.tmpl")),
    (
        "opencode/command",
        include_str!("../../templates/opencode/command.tmpl"),
    ),
    (
        "opencode/memory",
        include_str!("../../templates/opencode/memory.tmpl"),
    ),
    ("opencode/skill", include_str!("../../templates/opencode/skill.tmpl")),
];

/// Template key for a platform and document kind, e.g. `opencode/agent`.
pub fn template_name(platform: &str, kind: DocumentKind) -> String {
    format!("{}/{}", platform, kind)
}

/// Built-in template source by key.
pub fn builtin(name: &str) -> Option<&'static str> {
    BUILTIN
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, source)| *source)
}

/// Resolve the template source for `(platform, kind)`.
///
/// `<templates_dir>/<platform>/<kind>.tmpl` wins when it exists.
pub fn resolve(
    templates_dir: Option<&Path>,
    platform: &str,
    kind: DocumentKind,
) -> Result<(String, Cow<'static, str>)> {
    let name = template_name(platform, kind);

    if let Some(dir) = templates_dir {
        let path = dir
            .join(platform)
            .join(format!("{}.{}", kind, TEMPLATE_EXTENSION));
        if path.is_file() {
            debug!(template = %name, path = %path.display(), "using template override");
            let source = std::fs::read_to_string(&path)
                .map_err(|source| GerminatorError::Io { path, source })?;
            return Ok((name, Cow::Owned(source)));
        }
    }

    match builtin(&name) {
        Some(source) => Ok((name, Cow::Borrowed(source))),
        None => Err(GerminatorError::TemplateNotFound(name)),
    }
}
