//! Line-oriented frontmatter extraction.

/// A file split into its YAML frontmatter and markdown body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    /// `None` when the file has no complete `---` block.
    pub yaml: Option<String>,
    pub body: String,
}

/// Split `content` into frontmatter and body.
///
/// The first line must be exactly `---`; the block ends at the next line that
/// is exactly `---`. Without an opening or closing fence the whole text is the
/// body. The scan is textual: a `---` line inside a multi-line YAML scalar
/// ends the block early. Fences may end in `\r\n`; the body keeps its line
/// endings as written.
pub fn extract_frontmatter(content: &str) -> Split {
    let whole = || Split {
        yaml: None,
        body: content.to_string(),
    };

    let lines: Vec<&str> = content.split('\n').collect();
    let is_fence = |line: &str| line.trim_end_matches('\r') == "---";

    if lines.len() < 3 || !is_fence(lines[0]) {
        return whole();
    }

    match lines.iter().skip(1).position(|line| is_fence(line)) {
        Some(offset) => {
            let end = offset + 1;
            let yaml: Vec<&str> = lines[1..end]
                .iter()
                .map(|line| line.trim_end_matches('\r'))
                .collect();
            Split {
                yaml: Some(yaml.join("\n")),
                body: lines[end + 1..].join("\n"),
            }
        }
        None => whole(),
    }
}
