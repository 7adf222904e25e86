use std::io::Read;
use std::path::Path;

use anyhow::Context;

/// Read the whole payload from `path`, or from stdin when `path` is `None`
/// or `-`.
pub(crate) fn read_payload(path: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    match path {
        Some(p) if p != Path::new("-") => {
            std::fs::read(p).with_context(|| format!("failed to read payload {}", p.display()))
        }
        _ => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read payload from stdin")?;
            Ok(buf)
        }
    }
}

/// Optionally strip the anti-XSSI guard, logging when it was present.
pub(crate) fn prepare(raw: &[u8], strip_guard: bool) -> &[u8] {
    if !strip_guard {
        return raw;
    }
    let stripped = placedex_parser::strip_guard_prefix(raw);
    if stripped.len() != raw.len() {
        tracing::debug!("stripped guard prefix from payload");
    }
    stripped
}
