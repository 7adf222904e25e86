//! Raw payload preparation ahead of decoding.

/// Anti-XSSI guard some endpoints prepend to JSON responses.
const GUARD_PREFIX: &[u8] = b")]}'";

/// Strip a leading `)]}'` guard (and the newline after it) from `raw`.
///
/// Leading whitespace before the guard is tolerated. Input without the
/// guard is returned unchanged.
#[must_use]
pub fn strip_guard_prefix(raw: &[u8]) -> &[u8] {
    let trimmed = raw.trim_ascii_start();
    match trimmed.strip_prefix(GUARD_PREFIX) {
        Some(rest) => rest
            .strip_prefix(b"\r\n")
            .or_else(|| rest.strip_prefix(b"\n"))
            .unwrap_or(rest),
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_guard_and_newline() {
        assert_eq!(strip_guard_prefix(b")]}'\n[[1]]"), b"[[1]]");
        assert_eq!(strip_guard_prefix(b")]}'\r\n[[1]]"), b"[[1]]");
    }

    #[test]
    fn strips_guard_after_leading_whitespace() {
        assert_eq!(strip_guard_prefix(b"  )]}'[1]"), b"[1]");
    }

    #[test]
    fn leaves_unguarded_payload_untouched() {
        assert_eq!(strip_guard_prefix(b"[[1]]"), b"[[1]]");
        assert_eq!(strip_guard_prefix(b""), b"");
    }
}
