//! Command documents.

use super::{scalar, tools};
use super::validation::{
    check_content, check_context, check_name_pattern, validate_platform, ValidationError,
};
use super::PLATFORM_OPENCODE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A slash-command definition.
///
/// `name` is never taken from frontmatter: it is the file stem, set by the
/// loader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Command {
    #[serde(skip_deserializing)]
    pub name: String,
    #[serde(deserialize_with = "scalar::string")]
    pub description: String,
    #[serde(
        rename(deserialize = "allowed-tools"),
        deserialize_with = "tools::deserialize"
    )]
    pub allowed_tools: Vec<String>,
    #[serde(
        rename(deserialize = "disallowed-tools"),
        deserialize_with = "tools::deserialize"
    )]
    pub disallowed_tools: Vec<String>,
    pub subtask: bool,
    #[serde(
        rename(deserialize = "argument-hint"),
        deserialize_with = "scalar::string"
    )]
    pub argument_hint: String,
    #[serde(deserialize_with = "scalar::string")]
    pub context: String,
    #[serde(deserialize_with = "scalar::string")]
    pub agent: String,
    #[serde(rename(deserialize = "disable-model-invocation"))]
    pub disable_model_invocation: bool,
    #[serde(deserialize_with = "scalar::string")]
    pub model: String,

    #[serde(skip_deserializing)]
    pub file_path: PathBuf,
    #[serde(skip_deserializing)]
    pub content: String,
}

/// Derive a command name from its file name, extension stripped.
pub fn command_name_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

impl Command {
    pub fn validate(&self, platform: &str) -> Vec<ValidationError> {
        let mut errs = validate_platform(platform);

        if !self.name.is_empty() {
            check_name_pattern(&mut errs, &self.name);
        }
        check_context(&mut errs, &self.context);

        if platform == PLATFORM_OPENCODE {
            // OpenCode stores the body as the command template.
            check_content(&mut errs, &self.content);
        }

        errs
    }
}
