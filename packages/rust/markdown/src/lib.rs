//! Markdown rendering for help topics.
//!
//! Most topics get the standard treatment: every body line is stripped
//! of surrounding whitespace, and a blank line separates paragraphs.
//! Whether two consecutive body lines belong to the same paragraph is
//! signalled by the raw line's leading indentation, a convention the
//! header authors follow.
//!
//! The `ABOUT` topic is a preformatted banner and is wrapped verbatim
//! in a fenced code block instead.

use helpmd_shared::TopicId;

// ---------------------------------------------------------------------------
// Policy selection
// ---------------------------------------------------------------------------

/// How a topic's body is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPolicy {
    /// Strip each line; blank lines separate paragraphs.
    Standard,
    /// Wrap the body unmodified in a fenced code block.
    Verbatim,
}

/// Topics rendered with a non-standard policy. Extend this table
/// rather than comparing identifiers at call sites.
const POLICY_OVERRIDES: &[(&str, RenderPolicy)] = &[("ABOUT", RenderPolicy::Verbatim)];

/// Look up the rendering policy for a topic.
pub fn policy_for(topic: &TopicId) -> RenderPolicy {
    POLICY_OVERRIDES
        .iter()
        .find(|(name, _)| *name == topic.as_str())
        .map(|(_, policy)| *policy)
        .unwrap_or(RenderPolicy::Standard)
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render a topic's body lines to a complete Markdown document.
pub fn render(topic: &TopicId, body: &[String]) -> String {
    match policy_for(topic) {
        RenderPolicy::Verbatim => render_verbatim(body),
        RenderPolicy::Standard => render_standard(body),
    }
}

fn render_verbatim(body: &[String]) -> String {
    let mut out = String::from("```\n");
    for line in body {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("```\n");
    out
}

fn render_standard(body: &[String]) -> String {
    let mut out = String::new();
    for (i, line) in body.iter().enumerate() {
        out.push_str(line.trim());
        out.push('\n');
        // The *raw* next line decides the separation: indentation means
        // it continues this paragraph, anything else opens a new one.
        if let Some(next) = body.get(i + 1) {
            if !next.starts_with(|c: char| c.is_whitespace()) {
                out.push('\n');
            }
        }
    }
    out
}
