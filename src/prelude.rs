//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use http_uri::prelude::*;
//!
//! let uri = Uri::parse("http://example.com/").unwrap();
//! assert_eq!(default_port(uri.scheme().unwrap()), 80);
//! ```
//!
//! Builder state markers (`Empty`, `HasScheme`, `Ready`) and the
//! classification table are left out.

pub use crate::{
    // Core types
    Uri, UriBuilder,
    // Operations
    compare_path, compare_uri, default_port, escape, has_trailing_slash, is_child_path,
    parent_path, unescape, unescape_str,
    // Errors
    BuilderError, EscapeError, ParseError, ParseErrorKind,
    // Constants
    DEFAULT_PATH, HTTPS_DEFAULT_PORT, HTTP_DEFAULT_PORT,
};
