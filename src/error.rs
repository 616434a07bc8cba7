//! Error types for URI parsing, percent-decoding, and building.

use std::fmt;

/// Errors that can occur when parsing a URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parsing error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input is zero-length
    EmptyUri,
    /// Bracketed host has no closing `]`, or `]` is followed by something
    /// other than `:` inside the authority
    InvalidIpLiteral {
        /// Byte offset of the offending bracket or trailing byte
        position: usize,
    },
    /// Bytes remain that are neither a query nor a fragment
    MalformedTail {
        /// Byte offset of the first unconsumed byte
        position: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse URI '{}': {}", self.input, self.kind)
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUri => write!(f, "input is empty"),
            Self::InvalidIpLiteral { position } => {
                write!(f, "ill-formed IP-literal host at position {position}")
            }
            Self::MalformedTail { position } => write!(
                f,
                "unexpected data at position {position}; expected '?query' or '#fragment'"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors for percent-decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeError {
    /// A `%` not followed by two hexadecimal digits
    MalformedEscape {
        /// Byte offset of the `%`
        position: usize,
    },
    /// Decoded bytes are not valid UTF-8
    InvalidUtf8 {
        /// Length of the longest valid UTF-8 prefix of the decoded bytes
        valid_up_to: usize,
    },
}

impl fmt::Display for EscapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedEscape { position } => write!(
                f,
                "malformed percent-escape at position {position}; '%' must be followed by two hex digits"
            ),
            Self::InvalidUtf8 { valid_up_to } => {
                write!(f, "decoded bytes are not UTF-8 after byte {valid_up_to}")
            }
        }
    }
}

impl std::error::Error for EscapeError {}

/// Errors that can occur when building a URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// Scheme does not match `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
    InvalidScheme {
        /// The rejected scheme
        scheme: String,
    },
    /// Host contains a byte that would end the authority early
    InvalidHost {
        /// The rejected host
        host: String,
        /// The offending character
        char: char,
    },
    /// Userinfo contains a character outside the `userinfo` production
    InvalidUserinfo {
        /// The rejected userinfo
        userinfo: String,
        /// The offending character
        char: char,
    },
    /// Path is non-empty and does not start with `/`, or contains a
    /// character that is neither `pchar` nor `/`
    InvalidPath {
        /// The rejected path
        path: String,
        /// The offending character
        char: char,
    },
    /// Query contains a character that would end it early
    InvalidQuery {
        /// The rejected query
        query: String,
        /// The offending character
        char: char,
    },
    /// Fragment contains a character outside the `fragment` production
    InvalidFragment {
        /// The rejected fragment
        fragment: String,
        /// The offending character
        char: char,
    },
}

impl fmt::Display for BuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScheme { scheme } => {
                write!(
                    f,
                    "invalid scheme '{scheme}'; must start with a letter followed by letters, digits, '+', '-' or '.'"
                )
            }
            Self::InvalidHost { host, char } => {
                write!(f, "invalid host '{host}': character '{char}' is not allowed")
            }
            Self::InvalidUserinfo { userinfo, char } => {
                write!(
                    f,
                    "invalid userinfo '{userinfo}': character '{char}' is not allowed"
                )
            }
            Self::InvalidPath { path, char } => {
                write!(
                    f,
                    "invalid path '{path}': must be empty or start with '/'; character '{char}' is not allowed here"
                )
            }
            Self::InvalidQuery { query, char } => {
                write!(f, "invalid query '{query}': character '{char}' is not allowed")
            }
            Self::InvalidFragment { fragment, char } => {
                write!(
                    f,
                    "invalid fragment '{fragment}': character '{char}' is not allowed"
                )
            }
        }
    }
}

impl std::error::Error for BuilderError {}
