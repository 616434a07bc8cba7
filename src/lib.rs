//! URI parsing, serialization, and HTTP equivalence rules.
//!
//! This crate decomposes URI references per RFC 3986, renders them back to
//! strings, percent-encodes and decodes path segments, and compares URIs and
//! paths the way HTTP clients decide whether two URIs name the same resource
//! (RFC 2616 §3.2.3).
//!
//! # Quick Start
//!
//! ```rust
//! use http_uri::Uri;
//!
//! let uri = Uri::parse("http://example.com/a/b?q=1#frag").unwrap();
//!
//! assert_eq!(uri.scheme(), Some("http"));
//! assert_eq!(uri.host(), "example.com");
//! assert_eq!(uri.path(), "/a/b");
//! assert_eq!(uri.query(), Some("q=1"));
//! assert_eq!(uri.fragment(), Some("frag"));
//! assert_eq!(uri.to_string(), "http://example.com/a/b?q=1#frag");
//! ```
//!
//! # Comparison
//!
//! ```rust
//! use std::cmp::Ordering;
//! use http_uri::{compare_path, is_child_path, Uri};
//!
//! // An authority with nothing after it gets the path "/"
//! let a = Uri::parse("http://EXAMPLE.com").unwrap();
//! let b = Uri::parse("http://example.com/").unwrap();
//! assert!(a.is_equivalent(&b));
//!
//! assert_eq!(compare_path("/foo", "/foo/"), Ordering::Equal);
//! assert!(is_child_path("/a/", "/a/b"));
//! ```
//!
//! # Percent-Encoding
//!
//! The parser never decodes. Escape and unescape path segments explicitly:
//!
//! ```rust
//! use http_uri::{escape, unescape};
//!
//! assert_eq!(escape("/my file"), "/my%20file");
//! assert_eq!(unescape("/my%20file").unwrap(), b"/my file");
//! ```
//!
//! # Features
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `serde` | `Serialize`/`Deserialize` for [`Uri`] as a lossless string |
//! | `log`   | Diagnostic records through the `log` facade |

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod log;

mod builder;
mod chars;
mod compare;
mod constants;
mod error;
mod escape;
#[cfg(kani)]
mod kani_impls;
mod path;
pub mod prelude;
mod uri;

pub use builder::{Empty, HasScheme, Ready, UriBuilder};
pub use chars::{classify, CharClass};
pub use compare::{compare_path, compare_uri, default_port, is_child_path};
pub use constants::{DEFAULT_PATH, HTTPS_DEFAULT_PORT, HTTP_DEFAULT_PORT};
pub use error::{BuilderError, EscapeError, ParseError, ParseErrorKind};
pub use escape::{escape, unescape, unescape_str};
pub use path::{has_trailing_slash, parent_path};
pub use uri::Uri;
