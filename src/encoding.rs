//! Decoding of the raw input buffer.
//!
//! The input is always treated as UTF-8. Invalid sequences are replaced with
//! U+FFFD instead of failing, so decoding is total.

use std::borrow::Cow;

use encoding_rs::UTF_8;

/// Decode bytes as UTF-8, replacing invalid sequences.
///
/// A leading byte order mark is kept as-is; the tokenizer decides what to
/// do with it.
///
/// # Examples
///
/// ```
/// use metasniff::encoding::decode_utf8_lossy;
///
/// assert_eq!(decode_utf8_lossy(b"<html>"), "<html>");
/// assert_eq!(decode_utf8_lossy(b"caf\xE9"), "caf\u{FFFD}");
/// ```
#[must_use]
pub fn decode_utf8_lossy(bytes: &[u8]) -> Cow<'_, str> {
    let (decoded, had_errors) = UTF_8.decode_without_bom_handling(bytes);
    if had_errors {
        log::debug!("input is not valid UTF-8; invalid sequences were replaced");
    }
    decoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_utf8_is_borrowed() {
        let decoded = decode_utf8_lossy("<title>Café</title>".as_bytes());
        assert!(matches!(decoded, Cow::Borrowed(_)));
        assert_eq!(decoded, "<title>Café</title>");
    }

    #[test]
    fn invalid_sequences_are_replaced() {
        let decoded = decode_utf8_lossy(b"Test \xFF\xFE Invalid");
        assert!(decoded.contains("Test"));
        assert!(decoded.contains("Invalid"));
        assert!(decoded.contains('\u{FFFD}'));
    }

    #[test]
    fn truncated_multibyte_sequence_at_end() {
        let decoded = decode_utf8_lossy(b"abc\xE2\x82");
        assert!(decoded.starts_with("abc"));
        assert!(decoded.ends_with('\u{FFFD}'));
    }
}
