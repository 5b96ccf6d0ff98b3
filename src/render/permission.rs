//! Claude Code permission modes mapped onto OpenCode permission rules.

use serde::Serialize;

/// A single OpenCode permission decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionAction {
    Ask,
    Allow,
    Deny,
}

/// Wildcard decisions for the `edit` and `bash` tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PermissionPolicy {
    pub edit: PermissionAction,
    pub bash: PermissionAction,
}

/// Map a `permissionMode` value to its OpenCode policy. Unknown or empty
/// modes have no policy.
pub fn transform_permission_mode(mode: &str) -> Option<PermissionPolicy> {
    use PermissionAction::*;

    let (edit, bash) = match mode {
        "default" => (Ask, Ask),
        "acceptEdits" => (Allow, Ask),
        "dontAsk" | "bypassPermissions" => (Allow, Allow),
        "plan" => (Deny, Deny),
        _ => return None,
    };
    Some(PermissionPolicy { edit, bash })
}
