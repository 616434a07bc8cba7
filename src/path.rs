//! Structural helpers over raw path strings.

/// Returns true if `path` is non-empty and ends in `/`.
///
/// # Examples
///
/// ```
/// use http_uri::has_trailing_slash;
///
/// assert!(has_trailing_slash("/foo/"));
/// assert!(!has_trailing_slash("/foo"));
/// assert!(!has_trailing_slash(""));
/// ```
#[must_use]
pub fn has_trailing_slash(path: &str) -> bool {
    path.as_bytes().last() == Some(&b'/')
}

/// Returns the parent collection of `path`, including its trailing `/`.
///
/// A trailing slash on `path` itself is ignored, so the parent of both
/// `/a/b` and `/a/b/` is `/a/`. Returns `None` when there is no `/` to
/// cut at, which covers the root `/`, the empty string, and a lone segment
/// such as `foo`.
///
/// # Examples
///
/// ```
/// use http_uri::parent_path;
///
/// assert_eq!(parent_path("/a/b"), Some("/a/"));
/// assert_eq!(parent_path("/a/b/"), Some("/a/"));
/// assert_eq!(parent_path("/a"), Some("/"));
/// assert_eq!(parent_path("/"), None);
/// ```
#[must_use]
pub fn parent_path(path: &str) -> Option<&str> {
    let bytes = path.as_bytes();
    let end = if has_trailing_slash(path) {
        bytes.len() - 1
    } else {
        bytes.len()
    };
    bytes[..end]
        .iter()
        .rposition(|&b| b == b'/')
        .map(|slash| &path[..=slash])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash() {
        assert!(has_trailing_slash("/"));
        assert!(has_trailing_slash("a/"));
        assert!(!has_trailing_slash("a"));
        assert!(!has_trailing_slash(""));
    }

    #[test]
    fn parent_of_nested_collection() {
        assert_eq!(parent_path("/a/b/c/"), Some("/a/b/"));
        assert_eq!(parent_path("/foo/"), Some("/"));
    }

    #[test]
    fn parent_of_root_is_none() {
        assert_eq!(parent_path("/"), None);
        assert_eq!(parent_path(""), None);
    }

    #[test]
    fn parent_of_lone_segment_is_none() {
        assert_eq!(parent_path("foo"), None);
        assert_eq!(parent_path("foo/"), None);
    }

    #[test]
    fn parent_of_relative_path() {
        assert_eq!(parent_path("a/b"), Some("a/"));
    }

    #[test]
    fn parent_of_double_slash() {
        assert_eq!(parent_path("//"), Some("/"));
    }
}
