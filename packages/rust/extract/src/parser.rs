//! Line patterns for the help header.
//!
//! The header embeds help text as multi-line C string literals:
//!
//! ```text
//! #define TOPIC_GENERAL \
//! "### Welcome\n" \
//! "Commands are typed at the prompt.\n" \
//! ```
//!
//! Only this narrow textual convention is recognized; there is no
//! attempt at real preprocessor parsing.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a topic declaration: `#define TOPIC_<NAME>` where `<NAME>`
/// is any non-space run terminated by a space or the end of the line.
static DECLARATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#define TOPIC_(\S+)(?: |$)").expect("declaration regex"));

/// Matches one continuation line of a topic body: a double-quoted
/// string ending in a literal `\n` escape, followed by the
/// line-continuation backslash. The capture is the inner text.
///
/// An empty quoted line (`"\n" \`) does not match and therefore
/// terminates a body.
static CONTINUATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""(.+)\\n" \\"#).expect("continuation regex"));

/// Extract the topic identifier from a declaration line, if any.
pub(crate) fn declaration(line: &str) -> Option<&str> {
    DECLARATION_RE
        .captures(line)
        .map(|caps| caps.get(1).expect("declaration capture").as_str())
}

/// Extract the inner text of a body continuation line, if any.
pub(crate) fn continuation(line: &str) -> Option<&str> {
    CONTINUATION_RE
        .captures(line)
        .map(|caps| caps.get(1).expect("continuation capture").as_str())
}
