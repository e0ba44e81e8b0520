//! Markdown file emission.
//!
//! Writes one `<lowercased-topic>.md` per registered topic into the
//! output directory, overwriting any existing file of the same name.

use std::path::{Path, PathBuf};

use tracing::debug;

use helpmd_shared::{HelpmdError, Result, TopicId, TopicRegistry};

/// Render and write every topic in the registry.
///
/// Returns the written paths in emission order. Each file is fully
/// written and closed before the next one starts; the first failure
/// aborts emission, leaving earlier files on disk.
pub fn emit_all(registry: &TopicRegistry, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(registry.len());
    for (topic, body) in registry.iter() {
        written.push(emit_topic(topic, body, out_dir)?);
    }
    Ok(written)
}

/// Write a single topic's rendered Markdown.
fn emit_topic(topic: &TopicId, body: &[String], out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join(topic.file_name());
    let markdown = helpmd_markdown::render(topic, body);

    std::fs::write(&path, markdown).map_err(|e| HelpmdError::io(&path, e))?;
    debug!(topic = %topic, path = %path.display(), "wrote topic");

    Ok(path)
}
