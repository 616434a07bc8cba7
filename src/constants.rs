//! Registered defaults used by parsing, serialization, and comparison.

/// Default port of the `http` scheme (RFC 2616 §3.2.2).
pub const HTTP_DEFAULT_PORT: u16 = 80;

/// Default port of the `https` scheme (RFC 2818 §2.3).
pub const HTTPS_DEFAULT_PORT: u16 = 443;

/// Path substituted when an authority is followed by nothing at all.
///
/// Applied for every scheme, not only HTTP.
pub const DEFAULT_PATH: &str = "/";
