//! Configuration options for parsing.
//!
//! The `Options` struct controls what the walker records and whether the
//! reconciliation pass looks at JSON-LD.

/// Configuration options for parsing.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use metasniff::Options;
///
/// let options = Options {
///     url: Some("https://example.com/post".to_string()),
///     ..Options::default()
/// };
/// assert!(options.keep_unknown_tokens);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Known URL of the document.
    ///
    /// Seeds `url` and `base_url` before parsing, so canonical links and
    /// `og:url` no longer override them. Relative feed and icon hrefs are
    /// resolved against it.
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Record tokens that match no extraction rule in `unknown_tokens`.
    ///
    /// Default: `true`
    pub keep_unknown_tokens: bool,

    /// Merge a single embedded JSON-LD node into `main_content`.
    ///
    /// When disabled, captured nodes are still listed in `json_ld`.
    ///
    /// Default: `true`
    pub reconcile_json_ld: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            url: None,
            keep_unknown_tokens: true,
            reconcile_json_ld: true,
        }
    }
}
