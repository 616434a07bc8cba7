//! Percent-encoding of path segments.
//!
//! The parser leaves `%XX` sequences untouched; callers unescape the
//! components they need.

use crate::chars::{is, CharClass};
use crate::error::EscapeError;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Percent-encodes every byte of `path` in [`CharClass::ESCAPE`].
///
/// Escapes use lowercase hex digits. `/` and `%` are never escaped, so an
/// already-escaped path is returned unchanged. The result is always a fresh
/// allocation, even when nothing needed escaping.
///
/// # Examples
///
/// ```
/// use http_uri::escape;
///
/// assert_eq!(escape("/a b/c"), "/a%20b/c");
/// assert_eq!(escape("/caf\u{e9}"), "/caf%c3%a9");
/// assert_eq!(escape("abc"), "abc");
/// ```
#[must_use]
pub fn escape(path: impl AsRef<[u8]>) -> String {
    let path = path.as_ref();
    let count = path.iter().filter(|&&b| is(b, CharClass::ESCAPE)).count();

    let mut out = String::with_capacity(path.len() + 2 * count);
    for &b in path {
        if is(b, CharClass::ESCAPE) {
            out.push('%');
            out.push(char::from(HEX_DIGITS[usize::from(b >> 4)]));
            out.push(char::from(HEX_DIGITS[usize::from(b & 0x0f)]));
        } else {
            // everything outside ESCAPE is ASCII
            out.push(char::from(b));
        }
    }
    out
}

/// Decodes `%XX` sequences in `input`.
///
/// Hex digits are accepted in either case. Decoded bytes are returned as-is,
/// with no UTF-8 validation; use [`unescape_str`] for text.
///
/// # Errors
///
/// Returns [`EscapeError::MalformedEscape`] if a `%` is not followed by two
/// hexadecimal digits.
///
/// # Examples
///
/// ```
/// use http_uri::unescape;
///
/// assert_eq!(unescape("%2F").unwrap(), b"/");
/// assert_eq!(unescape("a%20b").unwrap(), b"a b");
/// assert!(unescape("%2").is_err());
/// ```
pub fn unescape(input: impl AsRef<[u8]>) -> Result<Vec<u8>, EscapeError> {
    let input = input.as_ref();
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0;

    while i < input.len() {
        if input[i] == b'%' {
            let hi = input.get(i + 1).copied().and_then(hex_value);
            let lo = input.get(i + 2).copied().and_then(hex_value);
            match (hi, lo) {
                (Some(hi), Some(lo)) => out.push((hi << 4) | lo),
                _ => return Err(EscapeError::MalformedEscape { position: i }),
            }
            i += 3;
        } else {
            out.push(input[i]);
            i += 1;
        }
    }

    Ok(out)
}

/// Decodes `%XX` sequences in `input` and requires the result to be UTF-8.
///
/// # Errors
///
/// Returns [`EscapeError::MalformedEscape`] for a bad escape, or
/// [`EscapeError::InvalidUtf8`] if the decoded bytes are not UTF-8.
///
/// # Examples
///
/// ```
/// use http_uri::unescape_str;
///
/// assert_eq!(unescape_str("/caf%C3%A9").unwrap(), "/caf\u{e9}");
/// assert!(unescape_str("%ff").is_err());
/// ```
pub fn unescape_str(input: &str) -> Result<String, EscapeError> {
    let bytes = unescape(input)?;
    String::from_utf8(bytes).map_err(|e| EscapeError::InvalidUtf8 {
        valid_up_to: e.utf8_error().valid_up_to(),
    })
}

const fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
