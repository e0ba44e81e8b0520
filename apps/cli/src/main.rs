//! helpmd CLI — export embedded help topics to Markdown.
//!
//! Reads a C help header and writes one Markdown document per topic,
//! with bracketed cross-references rewritten as inter-document links.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
