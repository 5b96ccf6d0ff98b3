//! Shared validation rules.
//!
//! Every rule appends to a caller-owned list instead of returning early, so a
//! document with several problems reports all of them in one pass.

use super::{PLATFORM_CLAUDE_CODE, PLATFORM_OPENCODE};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// Slug pattern shared by every `name` field.
pub const NAME_PATTERN: &str = r"^[a-z0-9]+(-[a-z0-9]+)*$";

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(NAME_PATTERN).expect("valid name pattern"));

pub const PERMISSION_MODES: [&str; 5] =
    ["default", "acceptEdits", "dontAsk", "bypassPermissions", "plan"];

pub const AGENT_MODES: [&str; 3] = ["primary", "subagent", "all"];

/// A single semantic violation found on a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Check the platform identifier.
pub fn validate_platform(platform: &str) -> Vec<ValidationError> {
    if platform.is_empty() {
        return vec![ValidationError::new(
            "platform",
            format!(
                "platform is required (available: {}, {})",
                PLATFORM_CLAUDE_CODE, PLATFORM_OPENCODE
            ),
        )];
    }
    if platform != PLATFORM_CLAUDE_CODE && platform != PLATFORM_OPENCODE {
        return vec![ValidationError::new(
            "platform",
            format!(
                "unknown platform: {} (available: {}, {})",
                platform, PLATFORM_CLAUDE_CODE, PLATFORM_OPENCODE
            ),
        )];
    }
    Vec::new()
}

pub fn is_valid_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}

pub(crate) fn check_name_pattern(errs: &mut Vec<ValidationError>, name: &str) {
    if !is_valid_name(name) {
        errs.push(ValidationError::new(
            "name",
            format!("name must match pattern {} (got: {})", NAME_PATTERN, name),
        ));
    }
}

/// Required slug name.
pub(crate) fn check_required_name(errs: &mut Vec<ValidationError>, name: &str) {
    if name.is_empty() {
        errs.push(ValidationError::new("name", "name is required"));
    } else {
        check_name_pattern(errs, name);
    }
}

pub(crate) fn check_required(errs: &mut Vec<ValidationError>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errs.push(ValidationError::new(field, format!("{} is required", field)));
    }
}

pub(crate) fn check_max_chars(errs: &mut Vec<ValidationError>, field: &str, value: &str, max: usize) {
    let len = value.chars().count();
    if len > max {
        errs.push(ValidationError::new(
            field,
            format!("{} must not exceed {} characters (got: {})", field, max, len),
        ));
    }
}

pub(crate) fn check_context(errs: &mut Vec<ValidationError>, context: &str) {
    if !context.is_empty() && context != "fork" {
        errs.push(ValidationError::new(
            "context",
            format!("context must be 'fork' if specified (got: {})", context),
        ));
    }
}

/// Optional enumerated field: empty passes, anything else must be listed.
pub(crate) fn check_one_of(errs: &mut Vec<ValidationError>, field: &str, value: &str, allowed: &[&str]) {
    if !value.is_empty() && !allowed.contains(&value) {
        errs.push(ValidationError::new(
            field,
            format!(
                "{} must be one of: {} (got: {})",
                field,
                allowed.join(", "),
                value
            ),
        ));
    }
}

pub(crate) fn check_content(errs: &mut Vec<ValidationError>, content: &str) {
    if content.trim().is_empty() {
        errs.push(ValidationError::new("content", "content is required"));
    }
}
