//! Document-level pipeline.
//!
//! Dispatches on the document type declaration, then runs the HTML path:
//! decode, tokenize, walk, reconcile.

use crate::cursor::{ByteCursor, TextCursor};
use crate::encoding::decode_utf8_lossy;
use crate::error::Result;
use crate::extractor;
use crate::metadata;
use crate::options::Options;
use crate::preamble::{is_html, parse_doctype};
use crate::result::PageInfo;
use crate::tokenizer::{tokenize_text, Tokenize};

/// Parse one document held in `buffer`.
pub(crate) fn parse_document(buffer: &[u8], options: &Options, tokenizer: &impl Tokenize) -> Result<PageInfo> {
    let mut info = PageInfo::default();
    if let Some(url) = options.url.as_deref() {
        info.set_url_if_unset(url);
    }

    let cursor = ByteCursor::new(buffer);
    let (after_doctype, name) = parse_doctype(cursor)?;
    let html = is_html(&name);
    info.document_type_name = Some(name);

    if !html {
        log::debug!("document type {:?} is not HTML; keeping the rest verbatim", info.document_type_name);
        let rest = after_doctype.remaining();
        if !rest.is_empty() {
            info.trailing_data = Some(decode_utf8_lossy(rest).into_owned());
        }
        return Ok(info);
    }

    // The doctype is decoded again so the tokenizer sees the whole document.
    let text = decode_utf8_lossy(cursor.remaining());
    let (rest, tokens) = tokenize_text(TextCursor::new(&text), tokenizer);

    extractor::walk(&tokens, &mut info, options)?;
    metadata::reconcile(&mut info, options);

    if !rest.is_at_end() {
        info.trailing_data = Some(rest.remaining().to_string());
    }
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::token::{Attributes, Token};
    use crate::tokenizer::Html5everTokenizer;

    /// Returns a fixed token sequence whatever the input.
    struct Canned(Vec<Token>);

    impl Tokenize for Canned {
        fn tokenize(&self, _text: &str) -> Vec<Token> {
            self.0.clone()
        }
    }

    #[test]
    fn tokenizer_is_pluggable() {
        let canned = Canned(vec![
            Token::start("title", Attributes::new()),
            Token::data("Canned"),
            Token::end("title"),
        ]);
        let Ok(info) = parse_document(b"<!doctype html>", &Options::default(), &canned) else {
            panic!("parse failed");
        };
        assert_eq!(info.html.title.as_deref(), Some("Canned"));
        assert_eq!(info.main_content.title.as_deref(), Some("Canned"));
    }

    #[test]
    fn non_html_document_keeps_rest() {
        let Ok(info) = parse_document(b"<!doctype svg><svg/>", &Options::default(), &Html5everTokenizer)
        else {
            panic!("parse failed");
        };
        assert_eq!(info.document_type_name.as_deref(), Some("svg"));
        assert_eq!(info.trailing_data.as_deref(), Some("<svg/>"));
        assert!(info.html.is_empty());
    }

    #[test]
    fn options_url_is_seeded() {
        let options = Options { url: Some("https://x.test/".into()), ..Options::default() };
        let Ok(info) = parse_document(b"<!doctype html>", &options, &Html5everTokenizer) else {
            panic!("parse failed");
        };
        assert_eq!(info.url.as_deref(), Some("https://x.test/"));
        assert_eq!(info.base_url.as_deref(), Some("https://x.test/"));
    }

    #[test]
    fn preamble_failure_aborts() {
        assert!(matches!(
            parse_document(b"<html></html>", &Options::default(), &Html5everTokenizer),
            Err(Error::UnrecognizedPreamble { .. })
        ));
    }
}
