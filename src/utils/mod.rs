//! URL helpers shared by discovery and extraction.
//!
//! Hrefs in the library come in two shapes: origin-relative paths
//! (`/teaching-resources-library/foo`) and fully-qualified URLs. Both
//! normalize to the absolute, origin-qualified form that serves as the
//! record identity key.

pub mod constants;

pub use constants::*;

/// Check that a URL is an http(s) URL worth following.
#[must_use]
pub fn is_http_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }

    // Skip data URLs, javascript URLs, and other non-http schemes
    if url.starts_with("data:") || url.starts_with("javascript:") || url.starts_with("mailto:") {
        return false;
    }

    match url::Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Extract the path component of an href.
///
/// Origin-relative hrefs are already a path; absolute http(s) hrefs are
/// parsed and their path taken. Returns `None` for anything else
/// (fragments, mailto:, malformed URLs).
#[must_use]
pub fn href_path(href: &str) -> Option<String> {
    let href = href.trim();
    if let Some(rest) = href.strip_prefix('/') {
        // Protocol-relative (`//host/...`) is not a path
        if rest.starts_with('/') {
            return None;
        }
        return Some(href.to_string());
    }
    let parsed = url::Url::parse(href).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }
    Some(parsed.path().to_string())
}

/// Normalize an href to an absolute URL against a fixed origin.
///
/// Origin-relative hrefs get the origin prefixed; everything else passes
/// through unchanged.
#[must_use]
pub fn absolutize(href: &str, origin: &str) -> String {
    let href = href.trim();
    if href.starts_with('/') && !href.starts_with("//") {
        format!("{}{}", origin.trim_end_matches('/'), href)
    } else {
        href.to_string()
    }
}
