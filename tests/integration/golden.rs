use std::fs;

use germinator::transform_document;
use tempfile::TempDir;

use crate::integration::support::{fixture, golden};

const FIXTURES: [&str; 4] = [
    "code-reviewer-agent.md",
    "deploy-command.md",
    "project-memory.md",
    "git-workflow-skill.md",
];

fn assert_matches_golden(platform: &str) {
    let out_dir = TempDir::new().unwrap();
    for name in FIXTURES {
        let output = out_dir.path().join(name);
        transform_document(&fixture(name), &output, platform)
            .unwrap_or_else(|e| panic!("{platform}/{name}: {e}"));
        let actual = fs::read_to_string(&output).unwrap();
        assert_eq!(actual, golden(platform, name), "{platform}/{name}");
    }
}

#[test]
fn opencode_output_matches_golden_files() {
    assert_matches_golden("opencode");
}

#[test]
fn claude_code_output_matches_golden_files() {
    assert_matches_golden("claude-code");
}

#[test]
fn claude_code_memory_output_is_the_input() {
    let input = fs::read_to_string(fixture("project-memory.md")).unwrap();
    assert_eq!(golden("claude-code", "project-memory.md"), input);
}
