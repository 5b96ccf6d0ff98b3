//! Skill documents.

use super::{scalar, tools};
use super::validation::{
    check_content, check_context, check_max_chars, check_name_pattern, check_required,
    check_required_name, validate_platform, ValidationError,
};
use super::PLATFORM_OPENCODE;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

pub const MAX_NAME_LEN: usize = 64;
pub const MAX_DESCRIPTION_LEN: usize = 1024;

/// A reusable skill definition.
///
/// `metadata` and `hooks` are ordered maps so rendering is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    #[serde(deserialize_with = "scalar::string")]
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
    #[serde(deserialize_with = "scalar::string")]
    pub license: String,
    /// Platforms the skill is known to work on.
    #[serde(deserialize_with = "scalar::string_list")]
    pub compatibility: Vec<String>,
    #[serde(deserialize_with = "scalar::string_map")]
    pub metadata: BTreeMap<String, String>,
    #[serde(deserialize_with = "scalar::string_map")]
    pub hooks: BTreeMap<String, String>,
    #[serde(deserialize_with = "scalar::string")]
    pub model: String,
    #[serde(deserialize_with = "scalar::string")]
    pub context: String,
    #[serde(deserialize_with = "scalar::string")]
    pub agent: String,
    #[serde(rename(deserialize = "user-invocable"))]
    pub user_invocable: bool,

    #[serde(skip_deserializing)]
    pub file_path: PathBuf,
    #[serde(skip_deserializing)]
    pub content: String,
}

impl Skill {
    pub fn validate(&self, platform: &str) -> Vec<ValidationError> {
        let mut errs = validate_platform(platform);

        check_required_name(&mut errs, &self.name);
        if !self.name.is_empty() {
            check_max_chars(&mut errs, "name", &self.name, MAX_NAME_LEN);
        }
        check_required(&mut errs, "description", &self.description);
        check_max_chars(&mut errs, "description", &self.description, MAX_DESCRIPTION_LEN);
        check_context(&mut errs, &self.context);

        if platform == PLATFORM_OPENCODE {
            errs.extend(self.validate_opencode());
        }

        errs
    }

    fn validate_opencode(&self) -> Vec<ValidationError> {
        let mut errs = Vec::new();
        check_name_pattern(&mut errs, &self.name);
        check_content(&mut errs, &self.content);
        errs
    }
}
