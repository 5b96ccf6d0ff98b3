use std::fs;

use germinator::document::{Agent, Document, DocumentKind};
use germinator::loader::parse_str;
use germinator::render::Renderer;
use germinator::{
    detect_type, load_document, render_document, transform_document, validate_document,
    GerminatorError,
};
use tempfile::TempDir;

use crate::integration::support::{fixture, write_doc};

#[test]
fn load_detects_parses_and_validates() {
    for (name, kind) in [
        ("code-reviewer-agent.md", DocumentKind::Agent),
        ("deploy-command.md", DocumentKind::Command),
        ("project-memory.md", DocumentKind::Memory),
        ("git-workflow-skill.md", DocumentKind::Skill),
    ] {
        for platform in ["claude-code", "opencode"] {
            let doc = load_document(fixture(name), platform)
                .unwrap_or_else(|e| panic!("{name} on {platform}: {e}"));
            assert_eq!(doc.kind(), kind);
            assert_eq!(doc.file_path(), fixture(name).as_path());
        }
    }
}

#[test]
fn load_returns_the_document_with_validation_errors() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(
        &dir,
        "agent-bad.md",
        "---\nname: Bad_Name\ndescription: d\npermissionMode: yolo\n---\nBody\n",
    );

    let err = load_document(&path, "opencode").unwrap_err();
    let errors = err.validation_errors().unwrap().to_vec();
    assert!(errors.len() >= 2);
    assert!(err.to_string().contains("name must match pattern"));
    assert!(err.to_string().contains("permissionMode must be one of"));

    let doc = err.into_document().unwrap();
    assert_eq!(doc.content(), "Body\n");
}

#[test]
fn unknown_platform_is_reported_with_other_errors() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, "agent-x.md", "---\ndescription: d\n---\n");
    let errors = validate_document(&path, "vscode").unwrap();
    let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "unknown platform: vscode (available: claude-code, opencode)",
            "name is required",
        ]
    );
}

#[test]
fn validate_document_reports_invalid_skill_name() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(
        &dir,
        "skill-bad.md",
        "---\nname: Invalid_Name\ndescription: A skill\n---\nSteps\n",
    );
    let errors = validate_document(&path, "opencode").unwrap();
    assert!(errors
        .iter()
        .any(|e| e.to_string().contains("name must match pattern")));
}

#[test]
fn opencode_agent_validation_is_cumulative() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(
        &dir,
        "agent-limits.md",
        "---\nname: limits\ndescription: d\nmode: boss\ntemperature: 1.5\nmaxSteps: -1\n---\n",
    );

    let claude = validate_document(&path, "claude-code").unwrap();
    assert_eq!(claude.len(), 1);

    let opencode = validate_document(&path, "opencode").unwrap();
    let fields: Vec<&str> = opencode.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["mode", "mode", "temperature", "maxSteps"]);
}

#[test]
fn command_without_body_fails_only_for_opencode() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, "sync-command.md", "---\ndescription: Sync\n---\n");
    assert!(validate_document(&path, "claude-code").unwrap().is_empty());
    let errors = validate_document(&path, "opencode").unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "content is required");
}

#[test]
fn freeform_memory_loads_without_frontmatter() {
    let dir = TempDir::new().unwrap();
    let text = "# Project Context\n\nThis is the project context.\n";
    let path = write_doc(&dir, "memory-notes.md", text);
    let doc = load_document(&path, "opencode").unwrap();
    assert_eq!(doc.content(), text);
    assert_eq!(render_document(&doc, "opencode").unwrap(), text);
}

#[test]
fn detection_gates_loading() {
    assert_eq!(detect_type("agent-test.md"), Some(DocumentKind::Agent));
    assert_eq!(detect_type("AGENT-test.md"), None);

    let err = load_document("readme.md", "opencode").unwrap_err();
    assert!(matches!(err, GerminatorError::UnrecognizedFilename(_)));
    assert!(err.to_string().contains("unrecognizable filename"));
}

#[test]
fn claude_code_round_trip_preserves_agent_fields() {
    let original = load_document(fixture("code-reviewer-agent.md"), "claude-code").unwrap();
    let rendered = render_document(&original, "claude-code").unwrap();
    let reloaded = parse_str(original.file_path(), &rendered, DocumentKind::Agent).unwrap();

    let (Document::Agent(a), Document::Agent(b)) = (&original, &reloaded) else {
        panic!("expected agents");
    };
    assert_eq!(a.name, b.name);
    assert_eq!(a.description, b.description);
    assert_eq!(a.tools.len(), b.tools.len());
    assert_eq!(a.content, b.content);
}

#[test]
fn permission_modes_render_as_nested_rules() {
    for (mode, edit, bash) in [
        ("default", "ask", "ask"),
        ("acceptEdits", "allow", "ask"),
        ("dontAsk", "allow", "allow"),
        ("bypassPermissions", "allow", "allow"),
        ("plan", "deny", "deny"),
    ] {
        let doc = Document::from(Agent {
            name: "a".into(),
            description: "d".into(),
            permission_mode: mode.into(),
            ..Agent::default()
        });
        let out = render_document(&doc, "opencode").unwrap();
        let expected = format!(
            "permission:\n  edit:\n    \"*\": {}\n  bash:\n    \"*\": {}\n",
            edit, bash
        );
        assert!(out.contains(&expected), "{mode}: {out}");
    }
}

#[test]
fn rendered_opencode_frontmatter_is_valid_yaml() {
    let doc = load_document(fixture("code-reviewer-agent.md"), "opencode").unwrap();
    let out = render_document(&doc, "opencode").unwrap();
    let yaml = out
        .strip_prefix("---\n")
        .and_then(|rest| rest.split("\n---\n").next())
        .unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(value["permission"]["edit"]["*"].as_str(), Some("allow"));
    assert_eq!(value["tools"]["Write"].as_bool(), Some(false));
    assert_eq!(value["maxSteps"].as_i64(), Some(50));
}

#[test]
fn template_override_directory_is_used() {
    let templates = TempDir::new().unwrap();
    fs::create_dir_all(templates.path().join("opencode")).unwrap();
    fs::write(
        templates.path().join("opencode").join("command.tmpl"),
        "# {{ description }}\n{{ content }}",
    )
    .unwrap();

    let doc = load_document(fixture("deploy-command.md"), "opencode").unwrap();
    let out = Renderer::with_templates_dir(templates.path())
        .render(&doc, "opencode")
        .unwrap();
    assert_eq!(
        out,
        "# Deploy the current branch\nDeploy to $ARGUMENTS and report the result.\n"
    );
}

#[test]
fn transform_overwrites_existing_output() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("skill.md");
    fs::write(&output, "stale").unwrap();

    transform_document(&fixture("git-workflow-skill.md"), &output, "opencode").unwrap();
    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("---\nname: git-workflow\n"));
    assert!(written.contains("license: MIT"));
}
