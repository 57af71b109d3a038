//! URL utilities.
//!
//! Hrefs found in `<link>` tags are resolved against the document's base URL
//! the way a browser would, falling back to the raw href whenever no usable
//! base exists.

use url::Url;

/// Parse `s` as an absolute URL.
#[must_use]
pub fn parse_url(s: &str) -> Option<Url> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    Url::parse(s).ok()
}

/// Resolve `href` against `base`.
///
/// Returns `href` unchanged when there is no base, the base is not an
/// absolute URL, or the join fails.
///
/// # Examples
///
/// ```
/// use metasniff::url_utils::join_url;
///
/// assert_eq!(join_url(Some("https://x.test/a/b"), "feed.xml"), "https://x.test/a/feed.xml");
/// assert_eq!(join_url(None, "/feed.xml"), "/feed.xml");
/// ```
#[must_use]
pub fn join_url(base: Option<&str>, href: &str) -> String {
    let Some(base) = base.and_then(parse_url) else {
        return href.to_string();
    };
    match base.join(href.trim()) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => href.to_string(),
    }
}
