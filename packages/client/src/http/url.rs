//! Endpoint validation and URL helpers

use url::Url;

use crate::error::{self, Result};

/// Parse and validate an API endpoint
///
/// # Errors
///
/// Returns a builder error if:
/// - the string is not a valid absolute URL
/// - the scheme is not `http` or `https`
/// - the host component is missing
#[inline]
pub fn parse_endpoint(url_str: &str) -> Result<Url> {
    let url = Url::parse(url_str).map_err(error::builder)?;
    validate_endpoint(&url)?;
    Ok(url)
}

/// Check that `url` can serve as an API endpoint
///
/// # Errors
///
/// Returns a builder error for non-http(s) schemes or a missing host.
pub fn validate_endpoint(url: &Url) -> Result<()> {
    if !matches!(url.scheme(), "http" | "https") {
        return Err(error::builder(format!(
            "unsupported endpoint scheme '{}'",
            url.scheme()
        )));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(error::builder("endpoint has no host"));
    }
    Ok(())
}

/// Check if URL uses secure scheme
#[inline]
#[must_use]
pub fn is_secure_scheme(url: &Url) -> bool {
    url.scheme() == "https"
}

/// Extract port from URL with default fallback
#[inline]
#[must_use]
pub fn extract_port(url: &Url) -> u16 {
    url.port().unwrap_or_else(|| match url.scheme() {
        "https" => 443,
        _ => 80,
    })
}

/// Path and query as sent on an HTTP/1.1 request line
#[must_use]
pub fn origin_form(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{query}", url.path()),
        None => url.path().to_string(),
    }
}

/// Percent-encode per RFC 3986: everything but `A-Z a-z 0-9 - _ . ~` is
/// escaped, spaces become `%20`.
#[inline]
#[must_use]
pub fn percent_encode(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}
