//! Byte classification for the RFC 3986 grammar.
//!
//! Every byte maps to exactly one primitive class. Grammar productions are
//! unions of those classes:
//!
//! ```abnf
//! unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"
//! scheme     = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
//! sub-delims = "!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="
//! gen-delims = ":" / "/" / "?" / "#" / "[" / "]" / "@"
//! userinfo   = *( unreserved / pct-encoded / sub-delims / ":" )
//! pchar      = unreserved / pct-encoded / sub-delims / ":" / "@"
//! query      = *( pchar / "/" / "?" )
//! fragment   = *( pchar / "/" / "?" )
//! ```

use std::ops::BitOr;

/// A set of grammar categories a byte belongs to.
///
/// # Examples
///
/// ```
/// use http_uri::{classify, CharClass};
///
/// assert!(classify(b'a').intersects(CharClass::SCHEME));
/// assert!(classify(b' ').intersects(CharClass::ESCAPE));
/// assert!(!classify(b'/').intersects(CharClass::ESCAPE));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharClass(u16);

impl CharClass {
    /// `+`
    pub const PLUS: Self = Self(0x0001);
    /// `%`
    pub const PERCENT: Self = Self(0x0002);
    /// `-`
    pub const DASH: Self = Self(0x0004);
    /// `.`
    pub const DOT: Self = Self(0x0008);
    /// `_`
    pub const UNDERSCORE: Self = Self(0x0010);
    /// `~`
    pub const TILDE: Self = Self(0x0020);
    /// `/`
    pub const SLASH: Self = Self(0x0040);
    /// `:`
    pub const COLON: Self = Self(0x0080);
    /// `@`
    pub const AT: Self = Self(0x0100);
    /// `?`
    pub const QUESTION: Self = Self(0x0200);
    /// `0`-`9`
    pub const DIGIT: Self = Self(0x0400);
    /// `A`-`Z`, `a`-`z`
    pub const ALPHA: Self = Self(0x0800);
    /// `#`, `[`, `]`: the gen-delims not given a class of their own
    pub const GEN_DELIM: Self = Self(0x1000);
    /// The sub-delims except `+`
    pub const SUB_DELIM: Self = Self(0x2000);
    /// Everything else: controls, space, non-ASCII, `"<>\^`{|}` and DEL
    pub const OTHER: Self = Self(0x4000);

    /// `unreserved`
    pub const UNRESERVED: Self = Self::ALPHA
        .union(Self::DIGIT)
        .union(Self::DASH)
        .union(Self::DOT)
        .union(Self::UNDERSCORE)
        .union(Self::TILDE);
    /// Characters allowed in a scheme after the leading letter.
    pub const SCHEME: Self = Self::ALPHA
        .union(Self::DIGIT)
        .union(Self::PLUS)
        .union(Self::DASH)
        .union(Self::DOT);
    /// The full `sub-delims` production, including `+`.
    pub const SUB_DELIMS: Self = Self::PLUS.union(Self::SUB_DELIM);
    /// The full `gen-delims` production.
    pub const GEN_DELIMS: Self = Self::GEN_DELIM
        .union(Self::COLON)
        .union(Self::SLASH)
        .union(Self::AT)
        .union(Self::QUESTION);
    /// Characters allowed in `userinfo`.
    pub const USERINFO: Self = Self::UNRESERVED
        .union(Self::PERCENT)
        .union(Self::SUB_DELIMS)
        .union(Self::COLON);
    /// `pchar`
    pub const PCHAR: Self = Self::USERINFO.union(Self::AT);
    /// A `pchar` or `/`: anything that may appear in a path.
    pub const SEGMENT: Self = Self::PCHAR.union(Self::SLASH);
    /// Characters allowed in a query or fragment.
    pub const QUERY: Self = Self::SEGMENT.union(Self::QUESTION);
    /// Bytes that must be percent-encoded in a path segment.
    pub const ESCAPE: Self = Self::GEN_DELIMS
        .difference(Self::SLASH)
        .union(Self::SUB_DELIMS)
        .union(Self::OTHER);

    /// Returns the raw bitmask.
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Returns the union of two classes.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the classes in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns true if the two classes share any category.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for CharClass {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

const fn primitive_class(byte: u8) -> CharClass {
    match byte {
        b'+' => CharClass::PLUS,
        b'%' => CharClass::PERCENT,
        b'-' => CharClass::DASH,
        b'.' => CharClass::DOT,
        b'_' => CharClass::UNDERSCORE,
        b'~' => CharClass::TILDE,
        b'/' => CharClass::SLASH,
        b':' => CharClass::COLON,
        b'@' => CharClass::AT,
        b'?' => CharClass::QUESTION,
        b'0'..=b'9' => CharClass::DIGIT,
        b'A'..=b'Z' | b'a'..=b'z' => CharClass::ALPHA,
        b'#' | b'[' | b']' => CharClass::GEN_DELIM,
        b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b',' | b';' | b'=' => {
            CharClass::SUB_DELIM
        }
        _ => CharClass::OTHER,
    }
}

#[allow(clippy::cast_possible_truncation)]
static TABLE: [CharClass; 256] = {
    let mut table = [CharClass::OTHER; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = primitive_class(i as u8);
        i += 1;
    }
    table
};

/// Returns the grammar class of a byte.
#[must_use]
#[inline]
pub fn classify(byte: u8) -> CharClass {
    TABLE[usize::from(byte)]
}

/// Returns true if `byte` belongs to any category in `class`.
#[must_use]
#[inline]
pub fn is(byte: u8, class: CharClass) -> bool {
    classify(byte).intersects(class)
}

/// Returns the index of the first byte at or after `start` not in `class`.
pub(crate) fn scan(bytes: &[u8], start: usize, class: CharClass) -> usize {
    bytes[start..]
        .iter()
        .position(|&b| !is(b, class))
        .map_or(bytes.len(), |i| start + i)
}
