//! Typestate builder for constructing [`Uri`] instances.
//!
//! The phantom state parameter makes the scheme and host mandatory: `build()`
//! only exists once both have been set, in that order.

use std::marker::PhantomData;

use crate::chars::{is, CharClass};
use crate::constants::DEFAULT_PATH;
use crate::error::BuilderError;
use crate::uri::Uri;

/// Marker: No components set yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

/// Marker: Scheme has been set.
#[derive(Debug, Clone, Copy, Default)]
pub struct HasScheme;

/// Marker: Scheme and host are set, ready to build.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ready;

/// A typestate builder for absolute URIs.
///
/// Components are taken verbatim, in their on-wire (already escaped) form.
/// The path defaults to `/`.
///
/// # Examples
///
/// ```
/// use http_uri::Uri;
///
/// let uri = Uri::builder()
///     .scheme("https")
///     .host("example.com")
///     .port(8443)
///     .path("/a%20b")
///     .query("x=1")
///     .build()
///     .unwrap();
///
/// assert_eq!(uri.to_string(), "https://example.com:8443/a%20b?x=1");
/// ```
///
/// ```compile_fail
/// use http_uri::Uri;
///
/// // Error: cannot call build() without a host
/// let uri = Uri::builder().scheme("http").build();
/// ```
#[derive(Debug, Clone)]
pub struct UriBuilder<State = Empty> {
    scheme: String,
    userinfo: Option<String>,
    host: String,
    port: u16,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
    _state: PhantomData<State>,
}

impl UriBuilder<Empty> {
    /// Creates a new builder in the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scheme: String::new(),
            userinfo: None,
            host: String::new(),
            port: 0,
            path: DEFAULT_PATH.to_string(),
            query: None,
            fragment: None,
            _state: PhantomData,
        }
    }

    /// Sets the scheme and advances to the [`HasScheme`] state.
    ///
    /// The scheme is checked when `build()` is called.
    #[must_use]
    pub fn scheme(self, scheme: impl Into<String>) -> UriBuilder<HasScheme> {
        UriBuilder {
            scheme: scheme.into(),
            userinfo: self.userinfo,
            host: self.host,
            port: self.port,
            path: self.path,
            query: self.query,
            fragment: self.fragment,
            _state: PhantomData,
        }
    }
}

impl Default for UriBuilder<Empty> {
    fn default() -> Self {
        Self::new()
    }
}

impl UriBuilder<HasScheme> {
    /// Sets the host and advances to the [`Ready`] state.
    ///
    /// An IPv6 address is given without brackets.
    #[must_use]
    pub fn host(self, host: impl Into<String>) -> UriBuilder<Ready> {
        UriBuilder {
            scheme: self.scheme,
            userinfo: self.userinfo,
            host: host.into(),
            port: self.port,
            path: self.path,
            query: self.query,
            fragment: self.fragment,
            _state: PhantomData,
        }
    }
}

impl UriBuilder<Ready> {
    /// Builds the final [`Uri`].
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidScheme`] if the scheme is empty, does
    /// not start with a letter, or contains a character outside
    /// `ALPHA / DIGIT / "+" / "-" / "."`.
    ///
    /// Returns [`BuilderError::InvalidHost`] if the host contains `/`, `?`,
    /// `#`, `@`, `[` or `]`.
    ///
    /// Returns [`BuilderError::InvalidUserinfo`] if the userinfo contains a
    /// character outside `unreserved / pct-encoded / sub-delims / ":"`.
    ///
    /// Returns [`BuilderError::InvalidPath`] if the path is non-empty and
    /// does not start with `/`, or contains a character that is neither
    /// `pchar` nor `/`.
    ///
    /// Returns [`BuilderError::InvalidQuery`] or
    /// [`BuilderError::InvalidFragment`] if either contains a character
    /// outside `pchar / "/" / "?"`.
    ///
    /// Each of these would otherwise change how the serialized URI parses.
    /// An empty path is accepted; it serializes to nothing and parses back
    /// as `/`, which [`compare_uri`](crate::compare_uri) treats as equal.
    pub fn build(self) -> Result<Uri, BuilderError> {
        validate_scheme(&self.scheme)?;
        validate_host(&self.host)?;
        if let Some(userinfo) = &self.userinfo
            && let Some(c) = find_outside(userinfo, CharClass::USERINFO)
        {
            return Err(BuilderError::InvalidUserinfo {
                userinfo: userinfo.clone(),
                char: c,
            });
        }
        validate_path(&self.path)?;
        if let Some(query) = &self.query
            && let Some(c) = find_outside(query, CharClass::QUERY)
        {
            return Err(BuilderError::InvalidQuery {
                query: query.clone(),
                char: c,
            });
        }
        if let Some(fragment) = &self.fragment
            && let Some(c) = find_outside(fragment, CharClass::QUERY)
        {
            return Err(BuilderError::InvalidFragment {
                fragment: fragment.clone(),
                char: c,
            });
        }

        Ok(Uri {
            scheme: Some(self.scheme),
            userinfo: self.userinfo,
            host: self.host,
            port: self.port,
            path: self.path,
            query: self.query,
            fragment: self.fragment,
            has_authority: true,
        })
    }
}

/// Methods available in every state for optional components.
impl<State> UriBuilder<State> {
    /// Sets the userinfo (without the trailing `@`).
    #[must_use]
    pub fn userinfo(mut self, userinfo: impl Into<String>) -> Self {
        self.userinfo = Some(userinfo.into());
        self
    }

    /// Sets the port. 0 means "use the scheme default".
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the path. An empty path is kept as-is.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Sets the query (without the leading `?`).
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Sets the fragment (without the leading `#`).
    #[must_use]
    pub fn fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }

    /// Sets the query if provided, otherwise leaves it unchanged.
    #[must_use]
    pub fn maybe_query(self, query: Option<impl Into<String>>) -> Self {
        match query {
            Some(q) => self.query(q),
            None => self,
        }
    }

    /// Sets the fragment if provided, otherwise leaves it unchanged.
    #[must_use]
    pub fn maybe_fragment(self, fragment: Option<impl Into<String>>) -> Self {
        match fragment {
            Some(f) => self.fragment(f),
            None => self,
        }
    }
}

fn validate_scheme(scheme: &str) -> Result<(), BuilderError> {
    let bytes = scheme.as_bytes();
    let valid = bytes.first().is_some_and(|&b| is(b, CharClass::ALPHA))
        && bytes.iter().all(|&b| is(b, CharClass::SCHEME));
    if valid {
        Ok(())
    } else {
        Err(BuilderError::InvalidScheme {
            scheme: scheme.to_string(),
        })
    }
}

fn validate_host(host: &str) -> Result<(), BuilderError> {
    match host.chars().find(|&c| matches!(c, '/' | '?' | '#' | '@' | '[' | ']')) {
        Some(c) => Err(BuilderError::InvalidHost {
            host: host.to_string(),
            char: c,
        }),
        None => Ok(()),
    }
}

fn validate_path(path: &str) -> Result<(), BuilderError> {
    let offending = match path.chars().next() {
        None => return Ok(()),
        Some('/') => find_outside(path, CharClass::SEGMENT),
        Some(first) => Some(first),
    };
    match offending {
        Some(c) => Err(BuilderError::InvalidPath {
            path: path.to_string(),
            char: c,
        }),
        None => Ok(()),
    }
}

/// Returns the first character of `s` that is not an ASCII byte in `class`.
fn find_outside(s: &str, class: CharClass) -> Option<char> {
    s.chars()
        .find(|&c| !u8::try_from(c).is_ok_and(|b| is(b, class)))
}
