//! Decoding of the decimal place identifier (CID) from a raw data ID.

/// Derive the decimal CID from a data ID shaped like `<prefix>:0x<hex>`.
///
/// The data ID must split on `:` into exactly two parts. The second part
/// may carry a `0x` prefix and must otherwise be a hexadecimal `u64`.
/// Returns an empty string for any other shape.
#[must_use]
pub fn decode_cid(data_id: &str) -> String {
    let mut parts = data_id.split(':');
    let (Some(_), Some(second), None) = (parts.next(), parts.next(), parts.next()) else {
        return String::new();
    };

    let hex = second.strip_prefix("0x").unwrap_or(second);
    // `from_str_radix` tolerates a leading `+`, which is not a hex digit.
    if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return String::new();
    }

    u64::from_str_radix(hex, 16)
        .map(|cid| cid.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_prefixed_hex() {
        assert_eq!(decode_cid("0x0:0x2a"), "42");
    }

    #[test]
    fn decodes_real_world_data_id() {
        assert_eq!(
            decode_cid("0x89c259a61c75684f:0x79d31adb123348d2"),
            "8778389626880739538"
        );
    }

    #[test]
    fn accepts_hex_without_prefix() {
        assert_eq!(decode_cid("abc:ff"), "255");
    }

    #[test]
    fn no_colon_yields_empty() {
        assert_eq!(decode_cid("abc"), "");
    }

    #[test]
    fn two_colons_yields_empty() {
        assert_eq!(decode_cid("a:b:c"), "");
    }

    #[test]
    fn empty_data_id_yields_empty() {
        assert_eq!(decode_cid(""), "");
    }

    #[test]
    fn non_hex_yields_empty() {
        assert_eq!(decode_cid("0x1:0xzz"), "");
        assert_eq!(decode_cid("0x1:0x"), "");
        assert_eq!(decode_cid("0x1:+ff"), "");
    }

    #[test]
    fn overflowing_hex_yields_empty() {
        assert_eq!(decode_cid("0x1:0x10000000000000000"), "");
    }
}
