//! Cross-reference resolution.
//!
//! A bracketed mention of another topic (`[Networks]`) becomes a
//! Markdown inline link (`[Networks](networks.md)`). Only the first
//! bracket pair on a line is considered; content that does not name a
//! registered topic passes through untouched.

use std::sync::LazyLock;

use regex::Regex;

use helpmd_shared::TopicRegistry;

/// Matches the first `[...]` pair on a line.
static XREF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]").expect("xref regex"));

/// Rewrite the first bracketed reference on `line` into an inline
/// link, if its content names a registered topic (matched
/// case-insensitively). The label keeps its original case; the link
/// target is the lowercased identifier plus `.md`.
pub fn link_cross_references(line: &str, registry: &TopicRegistry) -> String {
    if let Some(caps) = XREF_RE.captures(line) {
        let label = &caps[1];
        if let Some(id) = registry.resolve(label) {
            let target = id.file_name();
            let m = caps.get(0).expect("xref match");
            let mut out = String::with_capacity(line.len() + target.len() + 2);
            out.push_str(&line[..m.start()]);
            out.push('[');
            out.push_str(label);
            out.push_str("](");
            out.push_str(&target);
            out.push(')');
            out.push_str(&line[m.end()..]);
            return out;
        }
    }
    line.to_string()
}
