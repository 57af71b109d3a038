//! Token-stream extraction.
//!
//! # Module Structure
//!
//! - `tags`: Tag names and attribute vocabularies the walker keys on
//! - `walker`: Top-level state machine over the token stream
//! - `handlers`: Title, style and script extractors, structural tags
//! - `links`: `<link>` capture, canonical URL, feeds, favicon ranking
//! - `meta`: `<meta>` capture and the metadata it implies
//! - `content`: Recursive content containers such as `<noscript>`
//!
//! Every extractor takes a [`TokenCursor`] by value and hands back the
//! advanced cursor, so a failed attempt leaves the caller's cursor where it
//! was.

pub mod content;
pub mod handlers;
pub mod links;
pub mod meta;
pub mod tags;
pub mod walker;

use crate::cursor::TokenCursor;

pub use walker::walk;

/// Outcome of an extraction attempt that did not fail.
#[derive(Debug)]
pub enum Extraction<'a, T> {
    /// The token was recognized; extraction resumes at the cursor.
    Extracted(TokenCursor<'a>, T),
    /// No rule applies here; the caller should fall back.
    Unrecognized,
}
