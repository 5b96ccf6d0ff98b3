//! Document model
//!
//! The four document kinds germinator understands (agents, commands, memory
//! files and skills), the two target platforms, and the per-platform validation
//! each kind performs. Documents are built fresh by the loader for every
//! invocation and are never mutated after validation.

pub mod agent;
pub mod command;
pub mod memory;
pub mod scalar;
pub mod skill;
pub mod tools;
pub mod validation;

pub use agent::Agent;
pub use command::Command;
pub use memory::Memory;
pub use skill::Skill;
pub use validation::{validate_platform, ValidationError};

use crate::error::GerminatorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Platform identifier for Claude Code.
pub const PLATFORM_CLAUDE_CODE: &str = "claude-code";
/// Platform identifier for OpenCode.
pub const PLATFORM_OPENCODE: &str = "opencode";

/// Supported output conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "claude-code")]
    ClaudeCode,
    #[serde(rename = "opencode")]
    OpenCode,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::ClaudeCode, Platform::OpenCode];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::ClaudeCode => PLATFORM_CLAUDE_CODE,
            Platform::OpenCode => PLATFORM_OPENCODE,
        }
    }

    /// Parse a platform identifier. Matching is exact and case-sensitive.
    pub fn parse(value: &str) -> Option<Platform> {
        Platform::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The structural variant of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Agent,
    Command,
    Memory,
    Skill,
}

impl DocumentKind {
    /// Detection order: agent, command, memory, skill.
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::Agent,
        DocumentKind::Command,
        DocumentKind::Memory,
        DocumentKind::Skill,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Agent => "agent",
            DocumentKind::Command => "command",
            DocumentKind::Memory => "memory",
            DocumentKind::Skill => "skill",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = GerminatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| GerminatorError::UnsupportedDocumentType(s.to_string()))
    }
}

/// A loaded document of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Agent(Agent),
    Command(Command),
    Memory(Memory),
    Skill(Skill),
}

impl Document {
    pub fn kind(&self) -> DocumentKind {
        match self {
            Document::Agent(_) => DocumentKind::Agent,
            Document::Command(_) => DocumentKind::Command,
            Document::Memory(_) => DocumentKind::Memory,
            Document::Skill(_) => DocumentKind::Skill,
        }
    }

    /// Validate against `platform`, returning every violation found.
    pub fn validate(&self, platform: &str) -> Vec<ValidationError> {
        match self {
            Document::Agent(agent) => agent.validate(platform),
            Document::Command(command) => command.validate(platform),
            Document::Memory(memory) => memory.validate(platform),
            Document::Skill(skill) => skill.validate(platform),
        }
    }

    /// Path the document was loaded from.
    pub fn file_path(&self) -> &Path {
        match self {
            Document::Agent(agent) => &agent.file_path,
            Document::Command(command) => &command.file_path,
            Document::Memory(memory) => &memory.file_path,
            Document::Skill(skill) => &skill.file_path,
        }
    }

    /// Markdown body following the frontmatter.
    pub fn content(&self) -> &str {
        match self {
            Document::Agent(agent) => &agent.content,
            Document::Command(command) => &command.content,
            Document::Memory(memory) => &memory.content,
            Document::Skill(skill) => &skill.content,
        }
    }
}

impl From<Agent> for Document {
    fn from(agent: Agent) -> Self {
        Document::Agent(agent)
    }
}

impl From<Command> for Document {
    fn from(command: Command) -> Self {
        Document::Command(command)
    }
}

impl From<Memory> for Document {
    fn from(memory: Memory) -> Self {
        Document::Memory(memory)
    }
}

impl From<Skill> for Document {
    fn from(skill: Skill) -> Self {
        Document::Skill(skill)
    }
}
