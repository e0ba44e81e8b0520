//! Pipeline orchestration for helpmd: header in, Markdown files out.

pub mod emitter;
pub mod pipeline;

pub use pipeline::{ExportConfig, ExportResult, export};
