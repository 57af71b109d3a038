//! # metasniff
//!
//! Metadata extraction from HTML documents.
//!
//! The document is never turned into a tree. It is read as a flat token
//! stream, and a small set of extractors picks out what describes the page:
//! title, canonical URL, feeds, favicon, authors, embedded JSON-LD and the
//! raw `<script>`, `<style>`, `<link>` and `<meta>` elements. Malformed markup
//! is recorded and skipped instead of aborting the parse.
//!
//! ## Quick Start
//!
//! ```rust
//! use metasniff::parse_bytes;
//!
//! let html = br#"<!DOCTYPE html><html><head>
//! <title>My Article</title>
//! <meta name="description" content="An article">
//! <link rel="canonical" href="https://example.com/a">
//! </head><body></body></html>"#;
//!
//! let info = parse_bytes(html)?;
//! assert_eq!(info.html.title.as_deref(), Some("My Article"));
//! assert_eq!(info.url.as_deref(), Some("https://example.com/a"));
//! # Ok::<(), metasniff::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! - [`preamble`]: the `<!doctype>` decides whether the HTML path runs
//! - [`encoding`]: bytes are decoded as UTF-8, lossily
//! - [`tokenizer`]: text becomes a [`Token`] sequence
//! - [`extractor`]: the walker dispatches tokens to extractors
//! - [`metadata`]: JSON-LD and identity reconciliation

mod error;
mod options;
mod parse;
mod patterns;
mod result;

/// Position-tracking views over bytes, text and tokens.
pub mod cursor;

/// UTF-8 decoding of the raw input.
pub mod encoding;

/// Token stream extraction (walker and per-element extractors).
pub mod extractor;

/// Reconciliation of authors, feeds and JSON-LD.
pub mod metadata;

/// Document type declaration handling.
pub mod preamble;

/// Markup tokens.
pub mod token;

/// Tokenizer capability and its html5ever implementation.
pub mod tokenizer;

/// URL parsing and resolution.
pub mod url_utils;

use std::io::Read;

// Public API - re-exports
pub use error::{Error, Offset, Result, Unit};
pub use options::Options;
pub use result::{
    ContentNode, Description, Entity, ErrorTrace, Favicon, HtmlInfo, IconSize, Link, MainContent,
    PageInfo, Script, Style, UrlInfo, SCHEMA_VERSION,
};
pub use token::{AttributeMap, Attributes, Token, TokenCapture, TokenKind};
pub use tokenizer::{Html5everTokenizer, Tokenize};

/// Parses an HTML document using default options.
///
/// # Errors
///
/// Returns an error only when the document cannot be processed at all: it
/// does not start with a valid doctype, or a content region such as
/// `<noscript>` is never closed. Everything else is recorded in
/// [`PageInfo::errors`].
pub fn parse_bytes(buffer: &[u8]) -> Result<PageInfo> {
    parse_bytes_with_options(buffer, &Options::default())
}

/// Parses an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use metasniff::{parse_bytes_with_options, Options};
///
/// let html = b"<!doctype html><link rel=canonical href=https://example.com/other>";
/// let options = Options {
///     url: Some("https://example.com/page".to_string()),
///     ..Options::default()
/// };
/// let info = parse_bytes_with_options(html, &options)?;
/// assert_eq!(info.url.as_deref(), Some("https://example.com/page"));
/// # Ok::<(), metasniff::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn parse_bytes_with_options(buffer: &[u8], options: &Options) -> Result<PageInfo> {
    parse_bytes_with_tokenizer(buffer, options, &Html5everTokenizer)
}

/// Parses an HTML document with a caller-supplied tokenizer.
#[allow(clippy::missing_errors_doc)]
pub fn parse_bytes_with_tokenizer(
    buffer: &[u8],
    options: &Options,
    tokenizer: &impl Tokenize,
) -> Result<PageInfo> {
    parse::parse_document(buffer, options, tokenizer)
}

/// Reads a whole document from `reader` and parses it with default options.
///
/// # Errors
///
/// [`Error::Io`] if reading fails, otherwise as [`parse_bytes`].
pub fn parse_reader<R: Read>(mut reader: R) -> Result<PageInfo> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    parse_bytes(&buffer)
}
