//! Frontmatter decoding into typed documents.

use super::frontmatter::extract_frontmatter;
use crate::document::command::command_name_from_path;
use crate::document::{Agent, Command, Document, DocumentKind, Memory, Skill};
use crate::error::{GerminatorError, Result};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

/// Read `path` and parse it as a document of `kind`.
pub fn parse_document(path: &Path, kind: DocumentKind) -> Result<Document> {
    let text = std::fs::read_to_string(path).map_err(|source| GerminatorError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(path, &text, kind)
}

/// Parse already-read file text. `path` only populates `file_path` and the
/// command name.
pub fn parse_str(path: &Path, text: &str, kind: DocumentKind) -> Result<Document> {
    debug!(path = %path.display(), kind = %kind, "parsing document");

    if kind == DocumentKind::Memory {
        return Ok(Document::Memory(parse_memory(path, text)));
    }

    let split = extract_frontmatter(text);
    let yaml = split.yaml.as_deref().unwrap_or_default();

    let document = match kind {
        DocumentKind::Agent => {
            let mut agent: Agent = decode(yaml, kind)?;
            agent.file_path = path.to_path_buf();
            agent.content = split.body;
            Document::Agent(agent)
        }
        DocumentKind::Command => {
            let mut command: Command = decode(yaml, kind)?;
            command.name = command_name_from_path(path);
            command.file_path = path.to_path_buf();
            command.content = split.body;
            Document::Command(command)
        }
        DocumentKind::Skill => {
            let mut skill: Skill = decode(yaml, kind)?;
            skill.file_path = path.to_path_buf();
            skill.content = split.body;
            Document::Skill(skill)
        }
        DocumentKind::Memory => unreachable!("memory handled above"),
    };

    Ok(document)
}

/// Decode frontmatter into `T`. Blank or null frontmatter gives `T::default()`.
fn decode<T>(yaml: &str, kind: DocumentKind) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let wrap = |source| GerminatorError::Frontmatter {
        kind: kind.as_str(),
        source,
    };

    let value: serde_yaml::Value = serde_yaml::from_str(yaml).map_err(wrap)?;
    if value.is_null() {
        return Ok(T::default());
    }
    serde_yaml::from_value(value).map_err(wrap)
}

/// Memory files tolerate missing or malformed frontmatter: only a `paths`
/// sequence of strings is picked up, anything else is ignored.
fn parse_memory(path: &Path, text: &str) -> Memory {
    let split = extract_frontmatter(text);

    let paths = split
        .yaml
        .as_deref()
        .and_then(|yaml| serde_yaml::from_str::<serde_yaml::Value>(yaml).ok())
        .and_then(|value| value.get("paths").and_then(|p| p.as_sequence()).cloned())
        .map(|seq| {
            seq.iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    Memory {
        paths,
        file_path: path.to_path_buf(),
        content: split.body,
    }
}
