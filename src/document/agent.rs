//! Agent documents.

use super::{scalar, tools};
use super::validation::{
    check_one_of, check_required, check_required_name, validate_platform, ValidationError,
    AGENT_MODES, PERMISSION_MODES,
};
use super::PLATFORM_OPENCODE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// An AI agent definition.
///
/// Field names serialize in snake_case for the template context; frontmatter
/// keys keep the camelCase spelling Claude Code uses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Agent {
    #[serde(deserialize_with = "scalar::string")]
    pub name: String,
    #[serde(deserialize_with = "scalar::string")]
    pub description: String,
    #[serde(deserialize_with = "tools::deserialize")]
    pub tools: Vec<String>,
    #[serde(
        rename(deserialize = "disallowedTools"),
        deserialize_with = "tools::deserialize"
    )]
    pub disallowed_tools: Vec<String>,
    #[serde(deserialize_with = "scalar::string")]
    pub model: String,
    #[serde(
        rename(deserialize = "permissionMode"),
        deserialize_with = "scalar::string"
    )]
    pub permission_mode: String,
    #[serde(deserialize_with = "scalar::string_list")]
    pub skills: Vec<String>,

    /// OpenCode agent mode: primary, subagent or all.
    #[serde(deserialize_with = "scalar::string")]
    pub mode: String,
    /// Unset and explicit zero render differently, so this stays optional.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(rename(deserialize = "maxSteps"))]
    pub max_steps: Option<i64>,
    pub hidden: bool,
    #[serde(deserialize_with = "scalar::string")]
    pub prompt: String,
    pub disable: bool,

    #[serde(skip_deserializing)]
    pub file_path: PathBuf,
    #[serde(skip_deserializing)]
    pub content: String,
}

impl Agent {
    pub fn validate(&self, platform: &str) -> Vec<ValidationError> {
        let mut errs = validate_platform(platform);

        check_required_name(&mut errs, &self.name);
        check_required(&mut errs, "description", &self.description);
        check_one_of(
            &mut errs,
            "permissionMode",
            &self.permission_mode,
            &PERMISSION_MODES,
        );
        check_one_of(&mut errs, "mode", &self.mode, &AGENT_MODES);

        if platform == PLATFORM_OPENCODE {
            errs.extend(self.validate_opencode());
        }

        errs
    }

    fn validate_opencode(&self) -> Vec<ValidationError> {
        let mut errs = Vec::new();

        check_one_of(&mut errs, "mode", &self.mode, &AGENT_MODES);

        if let Some(temperature) = self.temperature {
            if !(0.0..=1.0).contains(&temperature) {
                errs.push(ValidationError::new(
                    "temperature",
                    format!(
                        "temperature must be between 0.0 and 1.0 (got: {})",
                        temperature
                    ),
                ));
            }
        }

        if let Some(steps) = self.max_steps {
            if steps != 0 && steps < 1 {
                errs.push(ValidationError::new(
                    "maxSteps",
                    format!("maxSteps must be >= 1 (got: {})", steps),
                ));
            }
        }

        errs
    }
}
