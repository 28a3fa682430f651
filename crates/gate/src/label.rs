//! Group label decoding.
//!
//! On-chain group identifiers are frequently the hex encoding of a short
//! UTF-8 label, zero-padded on the right to a full word. Decoding is best
//! effort: an identifier that does not decode is used verbatim as the name.

/// Decodes a `0x`-prefixed hex group identifier into its UTF-8 label.
///
/// Trailing NUL padding is stripped before validation. On any failure —
/// missing prefix, odd or non-hex digits, invalid UTF-8, or an all-padding
/// identifier — the raw input is returned unchanged. The fallback is silent
/// by contract: an undecodable identifier is a normal group name, not an
/// error.
pub fn decode_group_label(raw: &str) -> String {
    match try_decode(raw) {
        Some(label) => label,
        None => raw.to_string(),
    }
}

fn try_decode(raw: &str) -> Option<String> {
    let digits = raw.strip_prefix("0x")?;
    let mut bytes = hex::decode(digits).ok()?;

    // Labels are right-padded with NULs to the on-chain word size.
    while bytes.last() == Some(&0) {
        bytes.pop();
    }
    if bytes.is_empty() {
        return None;
    }

    String::from_utf8(bytes).ok()
}
