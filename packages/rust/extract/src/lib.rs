//! Topic discovery and body extraction from a help header.
//!
//! Two passes over the source lines. Discovery registers every
//! declared topic identifier with an empty body. Extraction re-scans
//! the lines and fills each registered topic's body from the quoted
//! continuation lines following its declaration, resolving bracketed
//! cross-references as the lines are taken.
//!
//! Discovery must fully precede extraction: a body line may reference
//! a topic declared further down the header, and resolution needs the
//! complete registry.

mod parser;
mod xref;

use helpmd_shared::{TopicId, TopicRegistry};
use tracing::debug;

pub use xref::link_cross_references;

/// Identifiers that are declared in the header but intentionally never
/// documented. Extend this table rather than comparing inline.
const EXCLUDED_TOPICS: &[&str] = &["ABOOT"];

/// Scan all source lines and register every declared topic with an
/// empty body. Absence of declarations yields an empty registry; a
/// repeated declaration silently resets the existing entry.
pub fn discover_topics(lines: &[&str]) -> TopicRegistry {
    let mut registry = TopicRegistry::new();
    for line in lines {
        if let Some(name) = parser::declaration(line) {
            if EXCLUDED_TOPICS.contains(&name) {
                debug!(topic = name, "skipping excluded topic");
                continue;
            }
            registry.insert(TopicId::new(name));
        }
    }
    registry
}

/// Populate each registered topic's body in place.
///
/// Every line is scanned for a declaration; declarations whose
/// identifier is not a registry key (the excluded table) are passed
/// over. The declaration scan always resumes from its own index,
/// independent of how far the body collection below it ran.
pub fn extract_bodies(lines: &[&str], registry: &mut TopicRegistry) {
    for (i, line) in lines.iter().enumerate() {
        let Some(name) = parser::declaration(line) else {
            continue;
        };
        if !registry.contains(name) {
            continue;
        }

        let body = collect_body(&lines[i + 1..], registry);
        debug!(topic = name, lines = body.len(), "collected topic body");
        if let Some(slot) = registry.body_mut(name) {
            *slot = body;
        }
    }
}

/// Collect one topic's body: take matching continuation lines from the
/// start of `rest`, resolving cross-references on each. The first
/// non-matching line exits collection and is not consumed, so a
/// declaration immediately followed by anything else yields an empty
/// body.
fn collect_body(rest: &[&str], registry: &TopicRegistry) -> Vec<String> {
    let mut body = Vec::new();
    for line in rest {
        match parser::continuation(line) {
            Some(text) => body.push(xref::link_cross_references(text, registry)),
            None => break,
        }
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = r#"#ifndef HELP_H
#define HELP_H

#define TOPIC_ABOUT \
"    Demo v1\n" \
"See [Help] for usage.\n" \

#define TOPIC_HELP \
"Usage: demo [options]\n" \

#define TOPIC_ABOOT \
"there is no cow level\n" \

#define TOPIC_SESSIONS

#endif /* HELP_H */
"#;

    fn lines_of(src: &str) -> Vec<&str> {
        src.lines().collect()
    }

    fn populated(src: &str) -> TopicRegistry {
        let lines = lines_of(src);
        let mut registry = discover_topics(&lines);
        extract_bodies(&lines, &mut registry);
        registry
    }

    fn body<'a>(registry: &'a TopicRegistry, name: &str) -> &'a [String] {
        registry
            .iter()
            .find(|(id, _)| id.as_str() == name)
            .map(|(_, body)| body)
            .unwrap_or_else(|| panic!("topic {name} not registered"))
    }

    #[test]
    fn discover_registers_all_declarations() {
        let registry = discover_topics(&lines_of(HEADER));
        let names: Vec<&str> = registry.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(names, vec!["ABOUT", "HELP", "SESSIONS"]);
    }

    #[test]
    fn discover_skips_excluded_topic() {
        let registry = discover_topics(&lines_of(HEADER));
        assert!(!registry.contains("ABOOT"));
    }

    #[test]
    fn discover_empty_input_yields_empty_registry() {
        let registry = discover_topics(&lines_of("int main(void) { return 0; }\n"));
        assert!(registry.is_empty());
    }

    #[test]
    fn extract_collects_contiguous_body() {
        let registry = populated(HEADER);
        assert_eq!(
            body(&registry, "ABOUT"),
            &["    Demo v1", "See [Help](help.md) for usage."]
        );
        assert_eq!(body(&registry, "HELP"), &["Usage: demo [options]"]);
    }

    #[test]
    fn extract_resolves_forward_references() {
        // [Help] in ABOUT's body refers to a topic declared later.
        let registry = populated(HEADER);
        assert!(body(&registry, "ABOUT")[1].contains("(help.md)"));
    }

    #[test]
    fn extract_declaration_without_body_stays_empty() {
        let registry = populated(HEADER);
        assert!(body(&registry, "SESSIONS").is_empty());
    }

    #[test]
    fn extract_stops_at_first_non_matching_line() {
        let src = r#"#define TOPIC_GENERAL \
"first\n" \
"second\n" \
not a continuation
"orphaned after the break\n" \
"#;
        let registry = populated(src);
        assert_eq!(body(&registry, "GENERAL"), &["first", "second"]);
    }

    #[test]
    fn empty_quoted_line_terminates_body() {
        let src = r#"#define TOPIC_GENERAL \
"above the gap\n" \
"\n" \
"below the gap\n" \
"#;
        let registry = populated(src);
        assert_eq!(body(&registry, "GENERAL"), &["above the gap"]);
    }

    #[test]
    fn reference_to_excluded_topic_stays_unresolved() {
        let src = r#"#define TOPIC_GENERAL \
"See [aboot] if you can.\n" \

#define TOPIC_ABOOT \
"hidden\n" \
"#;
        let registry = populated(src);
        assert_eq!(body(&registry, "GENERAL"), &["See [aboot] if you can."]);
    }

    #[test]
    fn fixture_header_extracts_fully() {
        let content = std::fs::read_to_string("../../../fixtures/help/sample.h")
            .expect("read fixture");
        let registry = populated(&content);

        let names: Vec<&str> = registry.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(
            names,
            vec!["ABOUT", "GENERAL", "NETWORKS", "SESSIONS", "TRAINING"]
        );

        assert_eq!(body(&registry, "NETWORKS").len(), 2);
        assert_eq!(body(&registry, "TRAINING").len(), 1);
        assert!(body(&registry, "SESSIONS").is_empty());

        // Cross-references resolved against the full registry.
        let general = body(&registry, "GENERAL");
        assert!(general.last().unwrap().contains("[networks](networks.md)"));
    }
}
