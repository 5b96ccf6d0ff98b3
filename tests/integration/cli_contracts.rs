use std::fs;

use clap::Parser;
use germinator::config::GerminatorConfig;
use germinator::tooling::cli::{Cli, CliContext, Commands};
use tempfile::TempDir;

use crate::integration::support::{fixture, write_doc};

fn context() -> CliContext {
    CliContext::from_config(GerminatorConfig::default())
}

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["germinator", "adapt", "in-agent.md", "out.md", "--platform", "opencode"],
        vec!["germinator", "adapt", "in-agent.md", "out.md"],
        vec!["germinator", "validate", "agent-x.md", "--platform", "claude-code"],
        vec!["germinator", "validate", "agent-x.md", "--format", "json"],
        vec!["germinator", "detect", "agent-x.md"],
        vec!["germinator", "version"],
        vec!["germinator", "--config", "g.toml", "--verbose", "detect", "agent-x.md"],
        vec!["germinator", "detect", "agent-x.md", "--log-output", "file", "--log-file", "/tmp/g.log"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_malformed_invocations() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["germinator"],
        vec!["germinator", "adapt", "only-input-agent.md"],
        vec!["germinator", "validate", "agent-x.md", "--format", "yaml"],
        vec!["germinator", "detect"],
        vec!["germinator", "transform", "agent-x.md"],
    ];

    for args in cases {
        assert!(
            Cli::try_parse_from(args.clone()).is_err(),
            "expected parse failure for args: {args:?}"
        );
    }
}

#[test]
fn adapt_reports_the_output_path() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("reviewer.md");
    let out = context()
        .execute(&Commands::Adapt {
            input: fixture("code-reviewer-agent.md"),
            output: output.clone(),
            platform: Some("opencode".into()),
        })
        .unwrap();

    assert!(out.success);
    assert_eq!(
        out.text,
        format!("Document transformed successfully to {}", output.display())
    );
    assert!(fs::read_to_string(&output).unwrap().contains("mode: subagent"));
}

#[test]
fn adapt_without_platform_fails_the_platform_gate() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.md");
    let err = context()
        .execute(&Commands::Adapt {
            input: fixture("code-reviewer-agent.md"),
            output: output.clone(),
            platform: None,
        })
        .unwrap_err();
    assert!(err.to_string().contains("platform is required"));
    assert!(!output.exists());
}

#[test]
fn adapt_uses_the_configured_default_platform() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.md");
    let ctx = CliContext::from_config(GerminatorConfig {
        default_platform: Some("opencode".into()),
        ..GerminatorConfig::default()
    });
    ctx.execute(&Commands::Adapt {
        input: fixture("project-memory.md"),
        output: output.clone(),
        platform: None,
    })
    .unwrap();
    assert!(fs::read_to_string(&output).unwrap().starts_with("@README.md\n"));
}

#[test]
fn validate_text_output() {
    let out = context()
        .execute(&Commands::Validate {
            file: fixture("git-workflow-skill.md"),
            platform: Some("opencode".into()),
            format: "text".into(),
        })
        .unwrap();
    assert!(out.success);
    assert_eq!(out.text, "Document is valid");

    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, "skill-bad.md", "---\nname: Bad\n---\n");
    let out = context()
        .execute(&Commands::Validate {
            file: path,
            platform: Some("opencode".into()),
            format: "text".into(),
        })
        .unwrap();
    assert!(!out.success);
    assert!(out.text.contains("name must match pattern"));
    assert!(out.text.contains("description is required"));
    assert!(out.text.contains("content is required"));
}

#[test]
fn validate_json_contract_has_required_fields() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, "agent-x.md", "---\nname: x\n---\n");
    let out = context()
        .execute(&Commands::Validate {
            file: path.clone(),
            platform: Some("claude-code".into()),
            format: "json".into(),
        })
        .unwrap();
    assert!(!out.success);

    let parsed: serde_json::Value = serde_json::from_str(&out.text).unwrap();
    assert_eq!(parsed["file"].as_str(), Some(path.display().to_string().as_str()));
    assert_eq!(parsed["kind"].as_str(), Some("agent"));
    assert_eq!(parsed["platform"].as_str(), Some("claude-code"));
    assert_eq!(parsed["valid"].as_bool(), Some(false));
    let errors = parsed["errors"].as_array().expect("errors array should exist");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["field"].as_str(), Some("description"));
    assert_eq!(errors[0]["message"].as_str(), Some("description is required"));
}

#[test]
fn validate_hard_failures_are_errors() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, "agent-broken.md", "---\nname: [x\n---\n");
    let err = context()
        .execute(&Commands::Validate {
            file: path,
            platform: Some("opencode".into()),
            format: "text".into(),
        })
        .unwrap_err();
    assert!(err.to_string().starts_with("failed to parse agent"));
}

#[test]
fn context_reads_an_explicit_config_file() {
    let dir = TempDir::new().unwrap();
    let config = write_doc(&dir, "custom.toml", "default_platform = \"claude-code\"\n");
    let ctx = CliContext::new(dir.path(), Some(config.as_path())).unwrap();
    assert_eq!(ctx.config().default_platform.as_deref(), Some("claude-code"));

    let err = CliContext::new(dir.path(), Some(dir.path().join("missing.toml").as_path()));
    assert!(err.is_err());
}

#[test]
fn context_discovers_the_workspace_file() {
    let dir = TempDir::new().unwrap();
    write_doc(&dir, "germinator.toml", "default_platform = \"opencode\"\n");
    let ctx = CliContext::new(dir.path(), None).unwrap();
    assert_eq!(ctx.config().default_platform.as_deref(), Some("opencode"));
}
