//! URI and path equivalence as used by HTTP caches and clients.
//!
//! See RFC 2616 §3.2.3: hosts and schemes compare case-insensitively,
//! an empty path is the same as `/`, and an omitted port is the same as
//! the scheme's default.

use std::cmp::Ordering;

use crate::constants::{HTTPS_DEFAULT_PORT, HTTP_DEFAULT_PORT};
use crate::path::has_trailing_slash;
use crate::uri::Uri;

/// Returns the registered default port of `scheme`, or 0 if it has none.
///
/// The scheme is matched case-insensitively.
///
/// # Examples
///
/// ```
/// use http_uri::default_port;
///
/// assert_eq!(default_port("http"), 80);
/// assert_eq!(default_port("HTTPS"), 443);
/// assert_eq!(default_port("ftp"), 0);
/// ```
#[must_use]
pub fn default_port(scheme: &str) -> u16 {
    if scheme.eq_ignore_ascii_case("http") {
        HTTP_DEFAULT_PORT
    } else if scheme.eq_ignore_ascii_case("https") {
        HTTPS_DEFAULT_PORT
    } else {
        0
    }
}

/// Compares two URIs, returning [`Ordering::Equal`] if they name the same
/// resource.
///
/// If one path is empty and the other is `/`, the URIs are equal regardless
/// of every other component. Otherwise the first difference decides, in
/// this order: path (exact bytes), host (ignoring ASCII case), scheme
/// (ignoring ASCII case), port (numerically). Userinfo, query and fragment
/// are not compared.
///
/// Ports are compared as stored: `http://h/` and `http://h:80/` differ.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use http_uri::{compare_uri, Uri};
///
/// let a = Uri::parse("http://Example.COM/a").unwrap();
/// let b = Uri::parse("HTTP://example.com/a").unwrap();
/// assert_eq!(compare_uri(&a, &b), Ordering::Equal);
/// ```
#[must_use]
pub fn compare_uri(a: &Uri, b: &Uri) -> Ordering {
    if (a.path().is_empty() && b.path() == "/") || (b.path().is_empty() && a.path() == "/") {
        return Ordering::Equal;
    }

    a.path()
        .as_bytes()
        .cmp(b.path().as_bytes())
        .then_with(|| cmp_ignore_ascii_case(a.host().as_bytes(), b.host().as_bytes()))
        .then_with(|| {
            cmp_ignore_ascii_case(
                a.scheme().unwrap_or_default().as_bytes(),
                b.scheme().unwrap_or_default().as_bytes(),
            )
        })
        .then_with(|| a.port().cmp(&b.port()))
}

/// Compares two paths ignoring ASCII case, treating `/foo` and `/foo/` as
/// equal.
///
/// The trailing-slash rule only applies when exactly one path ends in `/`,
/// that path is exactly one byte longer, and the two agree (ignoring case)
/// once that slash is dropped. It is a heuristic, not a normalization:
/// `/foo` and `/foo//` still differ.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use http_uri::compare_path;
///
/// assert_eq!(compare_path("/foo", "/foo/"), Ordering::Equal);
/// assert_eq!(compare_path("/FOO", "/foo"), Ordering::Equal);
/// assert_ne!(compare_path("/foo", "/bar"), Ordering::Equal);
/// ```
#[must_use]
pub fn compare_path(a: &str, b: &str) -> Ordering {
    compare_path_bytes(a.as_bytes(), b.as_bytes())
}

/// Returns true if `child` lies strictly below `parent`.
///
/// The leading `parent.len()` bytes of `child` are compared against
/// `parent` with [`compare_path`]. No segment boundary is required, so
/// `/a` is considered a parent of `/ab`.
///
/// # Examples
///
/// ```
/// use http_uri::is_child_path;
///
/// assert!(is_child_path("/a", "/a/b"));
/// assert!(is_child_path("/a/", "/a/b"));
/// assert!(!is_child_path("/a/b", "/a"));
/// assert!(!is_child_path("/a", "/a"));
/// ```
#[must_use]
pub fn is_child_path(parent: &str, child: &str) -> bool {
    let (parent, child) = (parent.as_bytes(), child.as_bytes());
    if parent.len() >= child.len() {
        return false;
    }
    compare_path_bytes(parent, &child[..parent.len()]) == Ordering::Equal
}

fn compare_path_bytes(a: &[u8], b: &[u8]) -> Ordering {
    let ord = cmp_ignore_ascii_case(a, b);
    if ord == Ordering::Equal {
        return ord;
    }

    let trail_a = a.last() == Some(&b'/');
    let trail_b = b.last() == Some(&b'/');
    let one_longer_with_slash =
        (trail_a && a.len() == b.len() + 1) || (trail_b && b.len() == a.len() + 1);

    if trail_a != trail_b && one_longer_with_slash {
        let n = a.len().min(b.len());
        if a[..n].eq_ignore_ascii_case(&b[..n]) {
            return Ordering::Equal;
        }
    }

    ord
}

fn cmp_ignore_ascii_case(a: &[u8], b: &[u8]) -> Ordering {
    a.iter()
        .map(u8::to_ascii_lowercase)
        .cmp(b.iter().map(u8::to_ascii_lowercase))
}

impl Uri {
    /// Compares this URI with another. See [`compare_uri`].
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        compare_uri(self, other)
    }

    /// Returns true if both URIs name the same resource. See [`compare_uri`].
    #[must_use]
    pub fn is_equivalent(&self, other: &Self) -> bool {
        compare_uri(self, other) == Ordering::Equal
    }

    /// Returns true if this URI's path has a trailing slash.
    #[must_use]
    pub fn has_trailing_slash(&self) -> bool {
        has_trailing_slash(self.path())
    }
}
