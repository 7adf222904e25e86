mod input;
mod parse;
mod probe;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use placedex_core::OutputFormat;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "placedex")]
#[command(about = "Extract business listings from map-search payloads")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Extract listings and write them to stdout as JSON.
    Parse {
        /// Payload file; reads stdin when absent or `-`.
        input: Option<PathBuf>,
        /// Output format: `json` or `jsonl` [default: `PLACEDEX_OUTPUT_FORMAT`].
        #[arg(long, value_parser = parse_format)]
        format: Option<OutputFormat>,
        /// Pretty-print JSON output.
        #[arg(long)]
        pretty: bool,
        /// Do not strip a leading `)]}'` guard before decoding.
        #[arg(long)]
        keep_guard: bool,
    },
    /// Print the raw value at a dot-separated index path, e.g. `0.1.1.14.11`.
    Probe {
        /// Payload file; reads stdin when absent or `-`.
        input: Option<PathBuf>,
        #[arg(long, value_parser = probe::parse_index_path)]
        path: probe::IndexPath,
        /// Do not strip a leading `)]}'` guard before decoding.
        #[arg(long)]
        keep_guard: bool,
    },
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    placedex_core::parse_output_format(s).map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = placedex_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(env = %config.env, "starting placedex");

    match cli.command {
        Commands::Parse {
            input,
            format,
            pretty,
            keep_guard,
        } => parse::run_parse(
            input.as_deref(),
            &parse::ParseOptions {
                format: format.unwrap_or(config.output_format),
                pretty,
                strip_guard: config.strip_guard_prefix && !keep_guard,
            },
        ),
        Commands::Probe {
            input,
            path,
            keep_guard,
        } => probe::run_probe(
            input.as_deref(),
            &path,
            config.strip_guard_prefix && !keep_guard,
        ),
    }
}
