use germinator::document::{Agent, Document, DocumentKind, Memory};
use germinator::loader::parse_str;
use germinator::{detect_type, render_document};
use proptest::prelude::*;
use std::path::Path;

const KINDS: [&str; 4] = ["agent", "command", "memory", "skill"];

fn kind_index() -> impl Strategy<Value = usize> {
    0..KINDS.len()
}

fn agent_strategy() -> impl Strategy<Value = Agent> {
    (
        "[a-z0-9]{1,8}(-[a-z0-9]{1,8}){0,2}",
        "[A-Za-z][A-Za-z0-9 ,.:#'-]{0,40}",
        prop::collection::btree_set("[a-z]{1,8}", 0..5),
        "[a-zA-Z0-9 .#*\\n-]{0,120}",
        prop::option::of(0u8..=10),
    )
        .prop_map(|(name, description, tools, content, temperature)| Agent {
            name,
            description: description.trim_end().to_string(),
            tools: tools.into_iter().collect(),
            content,
            temperature: temperature.map(|t| f64::from(t) / 10.0),
            ..Agent::default()
        })
}

proptest! {
    #[test]
    fn prefixed_and_suffixed_names_are_detected(idx in kind_index(), stem in "[0-9x_]{1,12}") {
        let kind = KINDS[idx];
        let expected = kind.parse::<DocumentKind>().unwrap();
        prop_assert_eq!(detect_type(format!("{kind}-{stem}.md")), Some(expected));
        prop_assert_eq!(detect_type(format!("{stem}-{kind}.md")), Some(expected));
        prop_assert_eq!(detect_type(format!("dir/{kind}-{stem}.md")), Some(expected));
    }

    #[test]
    fn unhyphenated_names_are_not_detected(stem in "[a-z0-9_]{0,12}") {
        prop_assert_eq!(detect_type(format!("{stem}.md")), None);
    }

    #[test]
    fn detection_is_case_sensitive(idx in kind_index(), stem in "[0-9]{1,6}") {
        let upper = KINDS[idx].to_uppercase();
        prop_assert_eq!(detect_type(format!("{upper}-{stem}.md")), None);
        prop_assert_eq!(detect_type(format!("{stem}-{upper}.md")), None);
    }

    #[test]
    fn wrong_extension_is_not_detected(idx in kind_index(), ext in "(txt|markdown|MD|md\\.bak)") {
        prop_assert_eq!(detect_type(format!("{}-notes.{ext}", KINDS[idx])), None);
    }

    #[test]
    fn claude_code_round_trip(agent in agent_strategy()) {
        let doc = Document::from(agent.clone());
        let rendered = render_document(&doc, "claude-code").unwrap();
        let reloaded = parse_str(Path::new("agent-x.md"), &rendered, DocumentKind::Agent).unwrap();
        let Document::Agent(reloaded) = reloaded else {
            panic!("expected agent");
        };
        prop_assert_eq!(&reloaded.name, &agent.name);
        prop_assert_eq!(&reloaded.description, &agent.description);
        prop_assert_eq!(&reloaded.tools, &agent.tools);
        prop_assert_eq!(&reloaded.content, &agent.content);
    }

    #[test]
    fn rendering_is_idempotent(agent in agent_strategy(), opencode in any::<bool>()) {
        let platform = if opencode { "opencode" } else { "claude-code" };
        let doc = Document::from(agent);
        let first = render_document(&doc, platform).unwrap();
        let second = render_document(&doc, platform).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn temperature_presence_follows_the_option(agent in agent_strategy()) {
        let rendered = render_document(&Document::from(agent.clone()), "opencode").unwrap();
        match agent.temperature {
            None => prop_assert!(!rendered.contains("\ntemperature:")),
            Some(t) if t == 0.0 => prop_assert!(rendered.contains("\ntemperature: 0\n")),
            Some(_) => prop_assert!(rendered.contains("\ntemperature: ")),
        }
    }

    #[test]
    fn opencode_memory_has_no_frontmatter(paths in prop::collection::vec("[a-z]{1,8}(/[a-z*]{1,4}){0,2}\\.md", 1..4)) {
        let doc = Document::from(Memory { paths: paths.clone(), ..Memory::default() });
        let rendered = render_document(&doc, "opencode").unwrap();
        prop_assert!(!rendered.contains("---"));
        for path in &paths {
            let line = format!("@{}\n", path);
            prop_assert!(rendered.contains(&line));
        }
    }
}
