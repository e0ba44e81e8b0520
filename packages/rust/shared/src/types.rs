//! Core domain types for help topic extraction.

use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// TopicId
// ---------------------------------------------------------------------------

/// Identifier of a help topic, as declared in the source header.
///
/// Uppercase by convention (`GENERAL`, `NETWORKS`, ...). The derived
/// output file name is always lowercased.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TopicId(String);

impl TopicId {
    /// Wrap a raw identifier token as extracted from a declaration.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The identifier as declared.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Output file name for this topic: lowercased identifier + `.md`.
    pub fn file_name(&self) -> String {
        format!("{}.md", self.0.to_lowercase())
    }
}

impl std::fmt::Display for TopicId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// TopicRegistry
// ---------------------------------------------------------------------------

/// The set of discovered topics, each mapped to its ordered body lines.
///
/// Built once per run: keys are inserted with empty bodies during
/// discovery, bodies are filled in place during extraction, and the
/// whole registry is consumed by emission. Iteration order is sorted,
/// so repeated runs over unchanged input emit files identically.
#[derive(Debug, Default)]
pub struct TopicRegistry {
    topics: BTreeMap<TopicId, Vec<String>>,
}

impl TopicRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a topic with an empty body.
    ///
    /// Re-registering an existing identifier resets its body; declared
    /// identifiers are expected to be unique in well-formed input.
    pub fn insert(&mut self, id: TopicId) {
        self.topics.insert(id, Vec::new());
    }

    /// Whether `name` is a registered identifier (exact match).
    pub fn contains(&self, name: &str) -> bool {
        self.topics.contains_key(&TopicId::new(name))
    }

    /// Case-insensitive lookup: uppercases `label` and returns the
    /// matching key, if any. Backs cross-reference resolution.
    pub fn resolve(&self, label: &str) -> Option<&TopicId> {
        let probe = TopicId::new(label.to_uppercase());
        self.topics.get_key_value(&probe).map(|(id, _)| id)
    }

    /// Mutable access to a topic's body lines.
    pub fn body_mut(&mut self, name: &str) -> Option<&mut Vec<String>> {
        self.topics.get_mut(&TopicId::new(name))
    }

    /// Iterate over topics and their bodies in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&TopicId, &[String])> {
        self.topics.iter().map(|(id, body)| (id, body.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}
