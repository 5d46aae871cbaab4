//! URL normalization.
//!
//! Turns a raw user string into a [`ParsedUrl`], defaulting the scheme to
//! `http://` when the input does not already start with `http`.

use log::trace;
use url::{Host, Url};

use crate::config::DEFAULT_SCHEME_PREFIX;
use crate::error_handling::UrlFormatError;

/// A parsed URL plus the raw input it came from.
///
/// Lives for the duration of one analysis call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    url: Url,
    original: String,
}

impl ParsedUrl {
    /// Lowercase scheme, e.g. "https".
    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    /// Host as serialized by the parser. IPv6 literals keep their brackets and
    /// internationalized names come back in punycode (`xn--`), so host length
    /// and substring checks see the ASCII form.
    pub fn host(&self) -> &str {
        self.url.host_str().unwrap_or_default()
    }

    /// Path followed by `?query` when a query is present.
    pub fn path_and_query(&self) -> String {
        match self.url.query() {
            Some(query) => format!("{}?{}", self.url.path(), query),
            None => self.url.path().to_string(),
        }
    }

    /// Full serialized URL after scheme defaulting and parser normalization.
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// The raw input exactly as given to [`normalize_url`].
    pub fn original(&self) -> &str {
        &self.original
    }

    /// True when the host is a literal IPv4 or IPv6 address.
    ///
    /// Relies on the parser's host classification, so shorthand forms it
    /// canonicalizes (e.g. `0x7f.1`) are detected too.
    pub fn is_ip_address(&self) -> bool {
        matches!(self.url.host(), Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)))
    }
}

/// Returns true if `raw` starts with "http", ignoring ASCII case.
fn has_http_prefix(raw: &str) -> bool {
    raw.as_bytes()
        .get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(b"http"))
}

/// Normalizes and parses a raw URL string.
///
/// Inputs that do not begin with `http` (any case) get `http://` prepended.
/// Note that the test is a prefix test, so `httpbin.org` is handed to the
/// parser unchanged and fails for lack of a scheme separator.
///
/// # Errors
///
/// Returns `UrlFormatError::InvalidUrlFormat` if the string cannot be parsed
/// or the parsed URL has no host.
pub fn normalize_url(raw: &str) -> Result<ParsedUrl, UrlFormatError> {
    let candidate = if has_http_prefix(raw) {
        raw.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{raw}")
    };

    let url = Url::parse(&candidate).map_err(|e| UrlFormatError::InvalidUrlFormat {
        input: candidate.clone(),
        reason: e.to_string(),
    })?;

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlFormatError::InvalidUrlFormat {
            input: candidate,
            reason: "missing host".to_string(),
        });
    }

    trace!("Normalized {raw:?} to {}", url.as_str());

    Ok(ParsedUrl {
        url,
        original: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adds_http_scheme() {
        let parsed = normalize_url("example.com/path?q=1").unwrap();
        assert_eq!(parsed.scheme(), "http");
        assert_eq!(parsed.host(), "example.com");
        assert_eq!(parsed.path_and_query(), "/path?q=1");
        assert_eq!(parsed.as_str(), "http://example.com/path?q=1");
        assert_eq!(parsed.original(), "example.com/path?q=1");
    }

    #[test]
    fn test_preserves_https() {
        let parsed = normalize_url("https://example.com").unwrap();
        assert_eq!(parsed.scheme(), "https");
        assert_eq!(parsed.path_and_query(), "/");
    }

    #[test]
    fn test_scheme_prefix_is_case_insensitive() {
        let parsed = normalize_url("HTTPS://Example.COM").unwrap();
        assert_eq!(parsed.scheme(), "https");
        assert_eq!(parsed.host(), "example.com");
    }

    #[test]
    fn test_missing_host_is_invalid() {
        let err = normalize_url("http://").unwrap_err();
        assert!(matches!(err, UrlFormatError::InvalidUrlFormat { .. }));
    }

    #[test]
    fn test_http_prefixed_host_without_scheme_is_invalid() {
        // Prefix test only: "httpbin.org" is not re-schemed and has no "://"
        assert!(normalize_url("httpbin.org").is_err());
    }

    #[test]
    fn test_illegal_characters_are_invalid() {
        assert!(normalize_url("exa mple.com").is_err());
        assert!(normalize_url("http://[not-an-ip]").is_err());
    }

    #[test]
    fn test_ip_literals() {
        assert!(normalize_url("http://192.168.1.1/login").unwrap().is_ip_address());
        assert!(normalize_url("[2001:db8::1]").unwrap().is_ip_address());
        assert!(normalize_url("http://0x7f.1").unwrap().is_ip_address());
        assert!(!normalize_url("http://cafe.com").unwrap().is_ip_address());
    }

    #[test]
    fn test_ipv6_host_keeps_brackets() {
        let parsed = normalize_url("http://[::1]:8080/").unwrap();
        assert_eq!(parsed.host(), "[::1]");
    }

    #[test]
    fn test_idn_host_is_punycode() {
        let parsed = normalize_url("https://b\u{fc}cher.example/").unwrap();
        assert_eq!(parsed.host(), "xn--bcher-kva.example");
        assert_eq!(parsed.original(), "https://b\u{fc}cher.example/");
    }

    #[test]
    fn test_multibyte_input_does_not_panic() {
        assert!(normalize_url("ü").is_ok());
        let _ = normalize_url("h\u{e9}llo");
    }
}
