//! End-to-end export pipeline: header → discovery → extraction → Markdown.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::info;

use helpmd_extract::{discover_topics, extract_bodies};
use helpmd_shared::{HelpmdError, Result};

use crate::emitter;

/// Configuration for the export pipeline.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Path of the help header to read.
    pub input: PathBuf,
    /// Directory the Markdown files are written into.
    pub out_dir: PathBuf,
}

/// Result of a completed export.
#[derive(Debug)]
pub struct ExportResult {
    /// Number of topics written.
    pub topic_count: usize,
    /// Paths of the written files, in emission order.
    pub files: Vec<PathBuf>,
    /// Total elapsed time.
    pub elapsed: Duration,
}

/// Run the full export: read the header, discover topics, extract and
/// cross-link their bodies, and write one Markdown file per topic.
///
/// Fully synchronous and single-threaded. Nothing is recovered: the
/// first error aborts the run, and files already written stay on disk.
pub fn export(config: &ExportConfig) -> Result<ExportResult> {
    let start = Instant::now();

    info!(input = %config.input.display(), "reading help header");
    let source = std::fs::read_to_string(&config.input)
        .map_err(|e| HelpmdError::io(&config.input, e))?;
    let lines: Vec<&str> = source.lines().collect();

    let mut registry = discover_topics(&lines);
    info!(topics = registry.len(), "discovered topics");

    extract_bodies(&lines, &mut registry);

    let files = emitter::emit_all(&registry, &config.out_dir)?;
    info!(
        files = files.len(),
        out_dir = %config.out_dir.display(),
        "export complete"
    );

    Ok(ExportResult {
        topic_count: registry.len(),
        files,
        elapsed: start.elapsed(),
    })
}
