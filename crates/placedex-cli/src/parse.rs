//! `placedex parse`: extract listings and write them to stdout.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use placedex_core::{Entry, OutputFormat};

use crate::input::{prepare, read_payload};

pub(crate) struct ParseOptions {
    pub(crate) format: OutputFormat,
    pub(crate) pretty: bool,
    pub(crate) strip_guard: bool,
}

pub(crate) fn run_parse(input: Option<&Path>, opts: &ParseOptions) -> anyhow::Result<()> {
    let raw = read_payload(input)?;
    let entries = placedex_parser::parse_search_results(prepare(&raw, opts.strip_guard))
        .context("failed to extract listings")?;

    tracing::info!(
        entries = entries.len(),
        input_bytes = raw.len(),
        "extracted listings"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_entries(&mut out, &entries, opts.format, opts.pretty)?;
    out.flush()?;
    Ok(())
}

/// Serialize `entries` to `out` in the requested format.
///
/// JSON-lines output is always compact; `pretty` only applies to `json`.
pub(crate) fn write_entries<W: Write>(
    out: &mut W,
    entries: &[Entry],
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            if pretty {
                serde_json::to_writer_pretty(&mut *out, entries)?;
            } else {
                serde_json::to_writer(&mut *out, entries)?;
            }
            writeln!(out)?;
        }
        OutputFormat::JsonLines => {
            for entry in entries {
                serde_json::to_writer(&mut *out, entry)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}
