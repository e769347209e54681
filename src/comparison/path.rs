//! Path extraction: reduce a URL to the path that is compared across sites.
//!
//! The path text is kept exactly as written. Dot segments are not resolved
//! and nothing is percent-encoded, so `/каталог` and `/%D0%BA...` stay
//! different pages.

use url::Url;

use crate::core::error::{Result, SiteCmpError};

/// Extract the path of `url`, dropping scheme, host, query and fragment.
///
/// Input without an authority is taken as a bare path. The result always
/// starts with `/`; a URL without a path yields `/`.
///
/// # Errors
/// Returns [`SiteCmpError::UrlParse`] when `url` has a `scheme://` authority
/// that cannot be parsed, such as an unclosed IPv6 host.
///
/// # Examples
/// ```
/// use sitecmp::comparison::extract_path;
///
/// assert_eq!(extract_path("https://x.com/catalog").unwrap(), "/catalog");
/// assert_eq!(extract_path("https://x.com/").unwrap(), "/");
/// assert_eq!(extract_path("catalog").unwrap(), "/catalog");
/// assert!(extract_path("http://[::1").is_err());
/// ```
pub fn extract_path(url: &str) -> Result<String> {
    let trimmed = url.trim();
    let (scheme, rest) = split_scheme(trimmed);

    let path = match rest.strip_prefix("//") {
        Some(authority_and_path) => {
            if scheme.is_some() {
                Url::parse(trimmed).map_err(|source| SiteCmpError::UrlParse {
                    url: url.to_string(),
                    source,
                })?;
            }
            let authority_end = authority_and_path
                .find(['/', '?', '#'])
                .unwrap_or(authority_and_path.len());
            &authority_and_path[authority_end..]
        }
        None => rest,
    };

    Ok(normalize(strip_query_and_fragment(path)))
}

/// Split a leading `scheme:` off, if the text before the first `:` is a valid scheme
fn split_scheme(url: &str) -> (Option<&str>, &str) {
    match url.split_once(':') {
        Some((scheme, rest)) if is_scheme(scheme) => (Some(scheme), rest),
        _ => (None, url),
    }
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn strip_query_and_fragment(path: &str) -> &str {
    match path.find(['?', '#']) {
        Some(end) => &path[..end],
        None => path,
    }
}

fn normalize(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}
