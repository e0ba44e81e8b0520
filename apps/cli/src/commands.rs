//! CLI definition, tracing setup, and the export command.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;

use helpmd_core::pipeline::{ExportConfig, export};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// helpmd — turn a help header into linked Markdown documents.
#[derive(Parser)]
#[command(
    name = "helpmd",
    version,
    about = "Export help topics embedded in a C header to per-topic Markdown files.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Help header to read.
    #[arg(long, default_value = "../help.h")]
    pub input: PathBuf,

    /// Directory the Markdown files are written into.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text")]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the export and print a summary.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let config = ExportConfig {
        input: cli.input,
        out_dir: cli.out_dir,
    };

    info!(
        input = %config.input.display(),
        out_dir = %config.out_dir.display(),
        "exporting help topics"
    );

    let result = export(&config)?;

    println!();
    println!("  Help topics exported!");
    println!("  Topics: {}", result.topic_count);
    println!("  Output: {}", config.out_dir.display());
    println!("  Time:   {:.1}s", result.elapsed.as_secs_f64());
    println!();

    Ok(())
}
