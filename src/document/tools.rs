//! Tool list frontmatter values.

use serde::{Deserialize, Deserializer};

/// Tool lists may be written as a YAML list or as a comma-separated string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ToolListRepr {
    Csv(String),
    List(Vec<String>),
}

impl ToolListRepr {
    fn into_vec(self) -> Vec<String> {
        let raw: Vec<String> = match self {
            ToolListRepr::Csv(s) => s.split(',').map(|t| t.trim().to_string()).collect(),
            ToolListRepr::List(v) => v.into_iter().map(|t| t.trim().to_string()).collect(),
        };
        dedup_preserving_order(raw)
    }
}

/// Drop empty and repeated entries, keeping the first occurrence.
pub fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !item.is_empty() && !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

/// `deserialize_with` target for tool list fields.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let repr = Option::<ToolListRepr>::deserialize(deserializer)?;
    Ok(repr.map(ToolListRepr::into_vec).unwrap_or_default())
}

/// One entry of the rendered tool mapping.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ToolEntry {
    pub name: String,
    pub enabled: bool,
}

/// Merge allowed and disallowed lists into a single ordered mapping.
///
/// Allowed tools come first in their declared order, then disallowed ones.
/// A tool named in both lists is disabled and appears once, in the
/// disallowed section.
pub fn merge_tools(allowed: &[String], disallowed: &[String]) -> Vec<ToolEntry> {
    let mut entries: Vec<ToolEntry> = allowed
        .iter()
        .filter(|tool| !disallowed.contains(tool))
        .map(|tool| ToolEntry {
            name: tool.clone(),
            enabled: true,
        })
        .collect();
    entries.extend(disallowed.iter().map(|tool| ToolEntry {
        name: tool.clone(),
        enabled: false,
    }));
    entries
}
