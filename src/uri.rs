//! The parsed URI component set.

use std::fmt;
use std::str::FromStr;

use crate::builder::UriBuilder;
use crate::chars::{is, scan, CharClass};
use crate::compare::default_port;
use crate::constants::DEFAULT_PATH;
use crate::error::{ParseError, ParseErrorKind};
use crate::log::{debug, trace};
use crate::path::parent_path;

/// A URI decomposed into its RFC 3986 components.
///
/// Components are stored exactly as they appear in the input: nothing is
/// case-folded, percent-decoded, or dot-segment normalized. The only
/// rewriting is that the brackets around an IP-literal host are dropped,
/// and an authority followed by nothing gets the path `/`.
///
/// # Structure
///
/// ```text
/// [scheme ":"] ["//" [userinfo "@"] host [":" port]] path ["?" query] ["#" fragment]
/// ```
///
/// # Examples
///
/// ```
/// use http_uri::Uri;
///
/// let uri = Uri::parse("http://example.com/a/b?q=1#frag").unwrap();
/// assert_eq!(uri.scheme(), Some("http"));
/// assert_eq!(uri.host(), "example.com");
/// assert_eq!(uri.port(), 0);
/// assert_eq!(uri.path(), "/a/b");
/// assert_eq!(uri.query(), Some("q=1"));
/// assert_eq!(uri.fragment(), Some("frag"));
///
/// // IPv6 literal with a port
/// let uri = Uri::parse("http://[::1]:8080/").unwrap();
/// assert_eq!(uri.host(), "::1");
/// assert_eq!(uri.port(), 8080);
/// assert_eq!(uri.to_string(), "http://[::1]:8080/");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Uri {
    pub(crate) scheme: Option<String>,
    pub(crate) userinfo: Option<String>,
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) path: String,
    pub(crate) query: Option<String>,
    pub(crate) fragment: Option<String>,
    pub(crate) has_authority: bool,
}

impl Uri {
    /// Parses a URI or relative reference.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - The input is empty
    /// - A bracketed host has no closing `]`, or `]` is followed by
    ///   anything but `:` before the end of the authority
    /// - Bytes remain after the path that are not a `?query` and/or
    ///   `#fragment`
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_inner(input).map_err(|kind| {
            debug!("rejected URI {input:?}: {kind}");
            ParseError {
                input: input.to_string(),
                kind,
            }
        })
    }

    /// Returns a builder for constructing a URI from parts.
    #[must_use]
    pub fn builder() -> UriBuilder {
        UriBuilder::new()
    }

    /// Returns the scheme, if present.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Returns the userinfo, if an `@` appeared in the authority.
    #[must_use]
    pub fn userinfo(&self) -> Option<&str> {
        self.userinfo.as_deref()
    }

    /// Returns the host, without brackets for an IP-literal.
    ///
    /// Empty when there is no authority.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port, or 0 if none was given.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns the port, falling back to the scheme's default.
    ///
    /// # Examples
    ///
    /// ```
    /// use http_uri::Uri;
    ///
    /// assert_eq!(Uri::parse("https://h/").unwrap().effective_port(), 443);
    /// assert_eq!(Uri::parse("https://h:8443/").unwrap().effective_port(), 8443);
    /// assert_eq!(Uri::parse("ftp://h/").unwrap().effective_port(), 0);
    /// ```
    #[must_use]
    pub fn effective_port(&self) -> u16 {
        if self.port == 0 {
            self.scheme().map_or(0, default_port)
        } else {
            self.port
        }
    }

    /// Returns the path, still percent-encoded.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query without its leading `?`, if present.
    ///
    /// `Some("")` means the input had a bare `?`.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Returns the fragment without its leading `#`, if present.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Returns true if the URI had a `//` authority.
    #[must_use]
    pub const fn has_authority(&self) -> bool {
        self.has_authority
    }

    /// Returns true if the URI has a scheme.
    #[must_use]
    pub const fn is_absolute(&self) -> bool {
        self.scheme.is_some()
    }

    /// Returns the parent collection of this URI's path. See [`parent_path`].
    #[must_use]
    pub fn parent_path(&self) -> Option<&str> {
        parent_path(&self.path)
    }

    /// Serializes the URI. Same as `to_string()`.
    #[must_use]
    pub fn to_uri_string(&self) -> String {
        self.to_string()
    }

    /// Returns a new URI with the given path.
    #[must_use]
    pub fn with_path(&self, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..self.clone()
        }
    }

    /// Returns a new URI with the given port. 0 clears it.
    #[must_use]
    pub fn with_port(&self, port: u16) -> Self {
        Self {
            port,
            ..self.clone()
        }
    }

    /// Returns a new URI with the given raw query.
    ///
    /// # Examples
    ///
    /// ```
    /// use http_uri::Uri;
    ///
    /// let uri = Uri::parse("http://h/search").unwrap();
    /// assert_eq!(uri.with_query("q=rust").to_string(), "http://h/search?q=rust");
    /// ```
    #[must_use]
    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..self.clone()
        }
    }

    /// Returns a new URI without a query.
    #[must_use]
    pub fn without_query(&self) -> Self {
        Self {
            query: None,
            ..self.clone()
        }
    }

    /// Returns a new URI with the given raw fragment.
    #[must_use]
    pub fn with_fragment(&self, fragment: impl Into<String>) -> Self {
        Self {
            fragment: Some(fragment.into()),
            ..self.clone()
        }
    }

    /// Returns a new URI without a fragment.
    #[must_use]
    pub fn without_fragment(&self) -> Self {
        Self {
            fragment: None,
            ..self.clone()
        }
    }

    fn parse_inner(input: &str) -> Result<Self, ParseErrorKind> {
        let bytes = input.as_bytes();
        if bytes.is_empty() {
            return Err(ParseErrorKind::EmptyUri);
        }

        let mut uri = Self::default();
        let mut pos = 0;

        // A scheme needs its ':'; "c/d:e" and "ab" stay paths
        if is(bytes[0], CharClass::ALPHA) {
            let end = scan(bytes, 0, CharClass::SCHEME);
            if bytes.get(end) == Some(&b':') {
                uri.scheme = Some(input[..end].to_string());
                pos = end + 1;
            }
        }

        if bytes[pos..].starts_with(b"//") {
            pos = uri.parse_authority(input, pos + 2)?;
            if pos == bytes.len() {
                uri.path = DEFAULT_PATH.to_string();
                return Ok(uri);
            }
        }

        let path_end = scan(bytes, pos, CharClass::SEGMENT);
        uri.path = input[pos..path_end].to_string();
        pos = path_end;

        if bytes.get(pos) == Some(&b'?') {
            let end = scan(bytes, pos + 1, CharClass::QUERY);
            uri.query = Some(input[pos + 1..end].to_string());
            pos = end;
        }

        if bytes.get(pos) == Some(&b'#') {
            let end = scan(bytes, pos + 1, CharClass::QUERY);
            uri.fragment = Some(input[pos + 1..end].to_string());
            pos = end;
        }

        if pos != bytes.len() {
            return Err(ParseErrorKind::MalformedTail { position: pos });
        }

        Ok(uri)
    }

    /// Parses `authority` starting at `start` (just past `//`), returning
    /// the offset where the path begins.
    fn parse_authority(&mut self, input: &str, start: usize) -> Result<usize, ParseErrorKind> {
        let bytes = input.as_bytes();
        self.has_authority = true;

        let end = bytes[start..]
            .iter()
            .position(|&b| b == b'/')
            .map_or(bytes.len(), |i| start + i);

        let mut host_start = start;
        let userinfo_end = scan(&bytes[..end], start, CharClass::USERINFO);
        if bytes.get(userinfo_end) == Some(&b'@') {
            self.userinfo = Some(input[start..userinfo_end].to_string());
            host_start = userinfo_end + 1;
        }

        let (host, colon) = if host_start < end && bytes[host_start] == b'[' {
            let close = bytes[host_start + 1..end]
                .iter()
                .position(|&b| b == b']')
                .map(|i| host_start + 1 + i)
                .ok_or(ParseErrorKind::InvalidIpLiteral {
                    position: host_start,
                })?;
            let after = close + 1;
            if after != end && bytes[after] != b':' {
                return Err(ParseErrorKind::InvalidIpLiteral { position: after });
            }
            let colon = (after != end).then_some(after);
            (&input[host_start + 1..close], colon)
        } else {
            // Last ':' wins; a ':' as the very first host byte is not a separator
            let colon = bytes
                .get(host_start + 1..end)
                .and_then(|h| h.iter().rposition(|&b| b == b':'))
                .map(|i| host_start + 1 + i);
            (&input[host_start..colon.unwrap_or(end)], colon)
        };

        self.host = host.to_string();
        if let Some(colon) = colon
            && colon + 1 < end
        {
            self.port = parse_port(&input[colon + 1..end]);
        }

        Ok(end)
    }
}

/// Reads the leading decimal digits of `s`.
///
/// Anything after the digits is ignored. No digits, or a value above
/// 65535, yields 0 ("not specified").
fn parse_port(s: &str) -> u16 {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits != s.len() {
        trace!("port {s:?} is not purely numeric; reading {digits} leading digits");
    }
    s[..digits].parse().unwrap_or_else(|_| {
        trace!("port {s:?} has no usable value, treating as unspecified");
        0
    })
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{scheme}:")?;
        }
        f.write_str("//")?;
        if let Some(userinfo) = &self.userinfo {
            write!(f, "{userinfo}@")?;
        }
        if self.host.contains(':') {
            write!(f, "[{}]", self.host)?;
        } else {
            f.write_str(&self.host)?;
        }
        let default = self.scheme().map_or(0, default_port);
        if self.port > 0 && self.port != default {
            write!(f, ":{}", self.port)?;
        }
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

impl FromStr for Uri {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Uri {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

/// Writes every component as stored.
///
/// Unlike `Display`, `scheme:` and `//authority` appear only when present
/// and a default port is kept, so parsing the output rebuilds the same
/// value whenever that is possible at all.
#[cfg(feature = "serde")]
struct Verbatim<'a>(&'a Uri);

#[cfg(feature = "serde")]
impl fmt::Display for Verbatim<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let uri = self.0;
        if let Some(scheme) = &uri.scheme {
            write!(f, "{scheme}:")?;
        }
        if uri.has_authority {
            f.write_str("//")?;
            if let Some(userinfo) = &uri.userinfo {
                write!(f, "{userinfo}@")?;
            }
            if uri.host.contains(':') {
                write!(f, "[{}]", uri.host)?;
            } else {
                f.write_str(&uri.host)?;
            }
            if uri.port > 0 {
                write!(f, ":{}", uri.port)?;
            }
        }
        f.write_str(&uri.path)?;
        if let Some(query) = &uri.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &uri.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

/// Serializes as a string that parses back to an equal `Uri`.
///
/// Fails for values no string can express, such as an authority with an
/// empty path or the all-empty default.
#[cfg(feature = "serde")]
impl serde::Serialize for Uri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let text = Verbatim(self).to_string();
        if !Self::parse(&text).is_ok_and(|parsed| parsed == *self) {
            return Err(serde::ser::Error::custom(format_args!(
                "URI components do not survive a round trip through {text:?}"
            )));
        }
        serializer.serialize_str(&text)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Uri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(input: &str) -> ParseErrorKind {
        Uri::parse(input).unwrap_err().kind
    }

    #[test]
    fn parse_full_http_uri() {
        let uri = Uri::parse("http://example.com/a/b?q=1#frag").unwrap();
        assert_eq!(uri.scheme(), Some("http"));
        assert_eq!(uri.userinfo(), None);
        assert_eq!(uri.host(), "example.com");
        assert_eq!(uri.port(), 0);
        assert_eq!(uri.path(), "/a/b");
        assert_eq!(uri.query(), Some("q=1"));
        assert_eq!(uri.fragment(), Some("frag"));
        assert!(uri.has_authority());
    }

    #[test]
    fn parse_empty_returns_error() {
        let err = Uri::parse("").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::EmptyUri);
        assert_eq!(err.input, "");
    }

    #[test]
    fn parse_ipv6_literal_with_port() {
        let uri = Uri::parse("http://[::1]:8080/").unwrap();
        assert_eq!(uri.host(), "::1");
        assert_eq!(uri.port(), 8080);
        assert_eq!(uri.path(), "/");
    }

    #[test]
    fn parse_ipv6_literal_without_port() {
        let uri = Uri::parse("http://[fe80::1]/x").unwrap();
        assert_eq!(uri.host(), "fe80::1");
        assert_eq!(uri.port(), 0);
        assert_eq!(uri.path(), "/x");
    }

    #[test]
    fn parse_ipv6_literal_empty_port() {
        let uri = Uri::parse("http://[::1]:/").unwrap();
        assert_eq!(uri.host(), "::1");
        assert_eq!(uri.port(), 0);
    }

    #[test]
    fn parse_unclosed_ip_literal_fails() {
        assert_eq!(
            kind("http://[::1"),
            ParseErrorKind::InvalidIpLiteral { position: 7 }
        );
        assert_eq!(
            kind("http://[::1/]"),
            ParseErrorKind::InvalidIpLiteral { position: 7 }
        );
    }

    #[test]
    fn parse_ip_literal_with_trailing_garbage_fails() {
        assert_eq!(
            kind("http://[::1]x/"),
            ParseErrorKind::InvalidIpLiteral { position: 12 }
        );
    }

    #[test]
    fn parse_host_only_gets_default_path() {
        let uri = Uri::parse("http://h").unwrap();
        assert_eq!(uri.host(), "h");
        assert_eq!(uri.path(), "/");
    }

    #[test]
    fn parse_authority_ends_only_at_slash() {
        let uri = Uri::parse("http://h?q").unwrap();
        assert_eq!(uri.host(), "h?q");
        assert_eq!(uri.query(), None);
        assert_eq!(uri.path(), "/");

        let uri = Uri::parse("http://h#f").unwrap();
        assert_eq!(uri.host(), "h#f");
        assert_eq!(uri.fragment(), None);
    }

    #[test]
    fn parse_ip_literal_alone_gets_default_path() {
        let uri = Uri::parse("http://[::1]").unwrap();
        assert_eq!(uri.host(), "::1");
        assert_eq!(uri.port(), 0);
        assert_eq!(uri.path(), "/");
    }

    #[test]
    fn parse_default_path_is_scheme_agnostic() {
        assert_eq!(Uri::parse("ftp://h").unwrap().path(), "/");
        assert_eq!(Uri::parse("//h").unwrap().path(), "/");
    }

    #[test]
    fn parse_empty_authority() {
        let uri = Uri::parse("file://").unwrap();
        assert_eq!(uri.host(), "");
        assert_eq!(uri.path(), "/");

        let uri = Uri::parse("file:///etc/hosts").unwrap();
        assert_eq!(uri.host(), "");
        assert_eq!(uri.path(), "/etc/hosts");
    }

    #[test]
    fn parse_userinfo() {
        let uri = Uri::parse("http://user:p%40ss@h:81/").unwrap();
        assert_eq!(uri.userinfo(), Some("user:p%40ss"));
        assert_eq!(uri.host(), "h");
        assert_eq!(uri.port(), 81);
    }

    #[test]
    fn parse_at_in_path_is_not_userinfo() {
        let uri = Uri::parse("http://h/a@b").unwrap();
        assert_eq!(uri.userinfo(), None);
        assert_eq!(uri.host(), "h");
        assert_eq!(uri.path(), "/a@b");
    }

    #[test]
    fn parse_port_uses_last_colon() {
        let uri = Uri::parse("http://a:b:99/").unwrap();
        assert_eq!(uri.host(), "a:b");
        assert_eq!(uri.port(), 99);
    }

    #[test]
    fn parse_empty_port() {
        let uri = Uri::parse("http://h:/x").unwrap();
        assert_eq!(uri.host(), "h");
        assert_eq!(uri.port(), 0);
    }

    #[test]
    fn parse_non_numeric_port_is_zero() {
        let uri = Uri::parse("http://h:abc/").unwrap();
        assert_eq!(uri.host(), "h");
        assert_eq!(uri.port(), 0);
    }

    #[test]
    fn parse_port_numeric_prefix() {
        assert_eq!(Uri::parse("http://h:80x/").unwrap().port(), 80);
    }

    #[test]
    fn parse_port_out_of_range_is_zero() {
        assert_eq!(Uri::parse("http://h:65536/").unwrap().port(), 0);
        assert_eq!(Uri::parse("http://h:65535/").unwrap().port(), 65535);
    }

    #[test]
    fn parse_leading_colon_is_part_of_host() {
        let uri = Uri::parse("http://:80/").unwrap();
        assert_eq!(uri.host(), ":80");
        assert_eq!(uri.port(), 0);
    }

    #[test]
    fn parse_scheme_case_preserved() {
        let uri = Uri::parse("HTTP://H/").unwrap();
        assert_eq!(uri.scheme(), Some("HTTP"));
        assert_eq!(uri.host(), "H");
    }

    #[test]
    fn parse_scheme_requires_colon() {
        let uri = Uri::parse("abc/def").unwrap();
        assert_eq!(uri.scheme(), None);
        assert_eq!(uri.path(), "abc/def");
        assert!(!uri.has_authority());
    }

    #[test]
    fn parse_scheme_must_start_with_letter() {
        let uri = Uri::parse("1a:b").unwrap();
        assert_eq!(uri.scheme(), None);
        assert_eq!(uri.path(), "1a:b");
    }

    #[test]
    fn parse_drive_letter_after_slash_is_path() {
        let uri = Uri::parse("/C:/dir").unwrap();
        assert_eq!(uri.scheme(), None);
        assert_eq!(uri.path(), "/C:/dir");
    }

    #[test]
    fn parse_scheme_without_authority() {
        let uri = Uri::parse("mailto:joe@example.com").unwrap();
        assert_eq!(uri.scheme(), Some("mailto"));
        assert_eq!(uri.host(), "");
        assert_eq!(uri.path(), "joe@example.com");
    }

    #[test]
    fn parse_relative_with_query_only() {
        let uri = Uri::parse("?q").unwrap();
        assert_eq!(uri.path(), "");
        assert_eq!(uri.query(), Some("q"));
    }

    #[test]
    fn parse_fragment_only() {
        let uri = Uri::parse("#top").unwrap();
        assert_eq!(uri.path(), "");
        assert_eq!(uri.query(), None);
        assert_eq!(uri.fragment(), Some("top"));
    }

    #[test]
    fn parse_empty_query_and_fragment_are_present() {
        let uri = Uri::parse("http://h/p?#").unwrap();
        assert_eq!(uri.query(), Some(""));
        assert_eq!(uri.fragment(), Some(""));
    }

    #[test]
    fn parse_query_may_contain_slash_and_question() {
        let uri = Uri::parse("http://h/p?a/b?c").unwrap();
        assert_eq!(uri.query(), Some("a/b?c"));
    }

    #[test]
    fn parse_escapes_left_encoded() {
        let uri = Uri::parse("http://h/a%20b").unwrap();
        assert_eq!(uri.path(), "/a%20b");
    }

    #[test]
    fn parse_malformed_tail_fails() {
        assert_eq!(
            kind("http://h/a b"),
            ParseErrorKind::MalformedTail { position: 10 }
        );
        assert_eq!(
            kind("http://h/a?q x"),
            ParseErrorKind::MalformedTail { position: 12 }
        );
        assert_eq!(
            kind("http://h/a#f#g"),
            ParseErrorKind::MalformedTail { position: 12 }
        );
        assert_eq!(
            kind("http://h/a[b]"),
            ParseErrorKind::MalformedTail { position: 10 }
        );
    }

    #[test]
    fn parse_non_ascii_path_fails() {
        assert!(matches!(
            kind("http://h/caf\u{e9}"),
            ParseErrorKind::MalformedTail { position: 12 }
        ));
    }

    #[test]
    fn display_omits_default_port() {
        let uri = Uri::parse("http://h:80/").unwrap();
        assert_eq!(uri.port(), 80);
        assert_eq!(uri.to_string(), "http://h/");

        let uri = Uri::parse("HTTPS://h:443/").unwrap();
        assert_eq!(uri.to_string(), "HTTPS://h/");
    }

    #[test]
    fn display_keeps_other_ports() {
        assert_eq!(
            Uri::parse("http://h:443/").unwrap().to_string(),
            "http://h:443/"
        );
        assert_eq!(Uri::parse("ftp://h:21/").unwrap().to_string(), "ftp://h:21/");
    }

    #[test]
    fn display_full_roundtrip() {
        let input = "https://u:p@example.com:8443/a/b?x=1&y=2#sec";
        assert_eq!(Uri::parse(input).unwrap().to_string(), input);
    }

    #[test]
    fn display_empty_query_and_fragment() {
        let uri = Uri::parse("http://h/p?#").unwrap();
        assert_eq!(uri.to_string(), "http://h/p?#");
    }

    #[test]
    fn display_empty_path_verbatim() {
        let uri = Uri::parse("http://h/").unwrap().with_path("");
        assert_eq!(uri.to_string(), "http://h");
    }

    #[test]
    fn display_brackets_ipv6_host() {
        let uri = Uri::parse("http://[2001:db8::7]/c").unwrap();
        assert_eq!(uri.to_uri_string(), "http://[2001:db8::7]/c");
    }

    #[test]
    fn from_str_and_try_from() {
        let a: Uri = "http://h/x".parse().unwrap();
        let b = Uri::try_from("http://h/x").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn default_is_empty() {
        let uri = Uri::default();
        assert_eq!(uri.scheme(), None);
        assert_eq!(uri.host(), "");
        assert_eq!(uri.port(), 0);
        assert_eq!(uri.path(), "");
        assert!(!uri.is_absolute());
    }

    #[test]
    fn with_methods_replace_components() {
        let uri = Uri::parse("http://h/a?q#f").unwrap();
        let uri = uri.without_query().without_fragment().with_port(8080);
        assert_eq!(uri.to_string(), "http://h:8080/a");
        let uri = uri.with_fragment("top").with_path("/b");
        assert_eq!(uri.to_string(), "http://h:8080/b#top");
    }

    #[test]
    fn parent_path_of_uri() {
        let uri = Uri::parse("http://h/a/b/").unwrap();
        assert_eq!(uri.parent_path(), Some("/a/"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let uri = Uri::parse("http://h:8080/a?b#c").unwrap();
        let json = serde_json::to_string(&uri).unwrap();
        assert_eq!(json, "\"http://h:8080/a?b#c\"");
        let back: Uri = serde_json::from_str(&json).unwrap();
        assert_eq!(back, uri);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip_without_authority() {
        for input in ["mailto:joe@example.com", "?q", "#top", "a/b", "/C:/dir"] {
            let uri = Uri::parse(input).unwrap();
            let json = serde_json::to_string(&uri).unwrap();
            assert_eq!(json, format!("\"{input}\""));
            let back: Uri = serde_json::from_str(&json).unwrap();
            assert_eq!(back, uri);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_keeps_default_port_and_brackets() {
        for input in ["http://h:80/", "http://[::1]/x", "//u@h:8/p"] {
            let uri = Uri::parse(input).unwrap();
            let json = serde_json::to_string(&uri).unwrap();
            assert_eq!(json, format!("\"{input}\""));
            let back: Uri = serde_json::from_str(&json).unwrap();
            assert_eq!(back, uri);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_refuses_unrepresentable() {
        assert!(serde_json::to_string(&Uri::default()).is_err());

        let uri = Uri::parse("http://h/").unwrap().with_path("");
        assert!(serde_json::to_string(&uri).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_rejects_invalid() {
        let result: Result<Uri, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
