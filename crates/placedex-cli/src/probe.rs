//! `placedex probe`: inspect raw payload positions.
//!
//! Upstream positions shift without notice; this prints whatever sits at a
//! given index path so the layout table can be re-mapped.

use std::path::Path;

use anyhow::Context;
use serde_json::Value;

use crate::input::{prepare, read_payload};

/// Index path from the payload root, one array index per step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct IndexPath(pub(crate) Vec<usize>);

/// Parse a dot-separated index path such as `0.1.1.14.11`.
///
/// An empty string is the empty path (the payload root).
pub(crate) fn parse_index_path(s: &str) -> Result<IndexPath, String> {
    if s.is_empty() {
        return Ok(IndexPath(Vec::new()));
    }
    s.split('.')
        .map(|seg| {
            seg.trim()
                .parse::<usize>()
                .map_err(|e| format!("invalid path segment '{seg}': {e}"))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(IndexPath)
}

pub(crate) fn run_probe(
    input: Option<&Path>,
    path: &IndexPath,
    strip_guard: bool,
) -> anyhow::Result<()> {
    let raw = read_payload(input)?;
    let data: Value =
        serde_json::from_slice(prepare(&raw, strip_guard)).context("payload is not valid JSON")?;

    let found = probe(&data, &path.0);
    if found.is_none() {
        tracing::info!(path = ?path.0, "path does not resolve");
    }
    println!(
        "{}",
        serde_json::to_string_pretty(found.unwrap_or(&Value::Null))?
    );
    Ok(())
}

pub(crate) fn probe<'a>(data: &'a Value, path: &[usize]) -> Option<&'a Value> {
    placedex_parser::raw::descend(data, path)
}
