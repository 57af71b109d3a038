//! Tokenizer adapter.
//!
//! The extraction logic only depends on the [`Tokenize`] capability: given a
//! string, produce an ordered token sequence. [`Html5everTokenizer`] provides
//! it on top of the html5ever tokenizer, without running the tree builder.

use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Doctype, Tag, TagKind, Token as HtmlToken, TokenSink, TokenSinkResult, Tokenizer,
    TokenizerOpts,
};
use tendril::StrTendril;

use crate::cursor::TextCursor;
use crate::token::{Attributes, Token};

/// Turns markup text into a flat sequence of [`Token`]s in document order.
///
/// Implementations must expand self-closing tags into an adjacent start/end
/// pair marked [`empty`](Token::empty) and report attributes as raw
/// `(name, value)` pairs.
pub trait Tokenize {
    /// Tokenize a whole document.
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// [`Tokenize`] implementation backed by html5ever.
///
/// `<script>` and `<style>` bodies are read as raw text, so each arrives as a
/// single data token. Adjacent character runs are coalesced.
#[derive(Debug, Clone, Copy, Default)]
pub struct Html5everTokenizer;

impl Tokenize for Html5everTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut queue = BufferQueue::default();
        queue.push_back(StrTendril::from_slice(text));

        let mut tokenizer = Tokenizer::new(Collector::default(), TokenizerOpts::default());
        let _ = tokenizer.feed(&mut queue);
        tokenizer.end();

        let mut sink = tokenizer.sink;
        sink.flush_text();
        log::debug!(target: "metasniff::tokenizer", "produced {} tokens", sink.tokens.len());
        sink.tokens
    }
}

/// Tokenize everything left in `cursor`, returning the exhausted cursor.
pub fn tokenize_text<'a>(cursor: TextCursor<'a>, tokenizer: &impl Tokenize) -> (TextCursor<'a>, Vec<Token>) {
    let tokens = tokenizer.tokenize(cursor.remaining());
    (cursor.to_end(), tokens)
}

/// Elements whose content the tokenizer must read without looking for tags.
fn raw_text_kind(tag: &str) -> Option<RawKind> {
    match tag {
        "script" => Some(RawKind::ScriptData),
        "style" => Some(RawKind::Rawtext),
        _ => None,
    }
}

#[derive(Default)]
struct Collector {
    tokens: Vec<Token>,
    text: String,
}

impl Collector {
    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            self.tokens.push(Token::data(std::mem::take(&mut self.text)));
        }
    }

    fn push_tag(&mut self, tag: Tag) -> TokenSinkResult<()> {
        let name = tag.name.to_string();
        match tag.kind {
            TagKind::StartTag => {
                let attrs: Attributes = tag
                    .attrs
                    .iter()
                    .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                    .collect();
                if tag.self_closing {
                    self.tokens.push(Token::start(name.clone(), attrs).into_empty());
                    self.tokens.push(Token::end(name).into_empty());
                    return TokenSinkResult::Continue;
                }
                let raw = raw_text_kind(&name);
                self.tokens.push(Token::start(name, attrs));
                if let Some(kind) = raw {
                    return TokenSinkResult::RawData(kind);
                }
            }
            TagKind::EndTag => self.tokens.push(Token::end(name)),
        }
        TokenSinkResult::Continue
    }
}

fn doctype_text(doctype: &Doctype) -> String {
    let mut text = String::from("DOCTYPE");
    if let Some(name) = &doctype.name {
        text.push(' ');
        text.push_str(name);
    }
    if let Some(public_id) = &doctype.public_id {
        text.push_str(&format!(" PUBLIC \"{public_id}\""));
    }
    if let Some(system_id) = &doctype.system_id {
        text.push_str(&format!(" \"{system_id}\""));
    }
    text
}

impl TokenSink for Collector {
    type Handle = ();

    fn process_token(&mut self, token: HtmlToken, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            HtmlToken::CharacterTokens(text) => self.text.push_str(&text),
            HtmlToken::NullCharacterToken => self.text.push('\0'),
            HtmlToken::ParseError(message) => {
                log::trace!(target: "metasniff::tokenizer", "tokenizer parse error: {message}");
            }
            HtmlToken::EOFToken => self.flush_text(),
            HtmlToken::CommentToken(text) => {
                self.flush_text();
                self.tokens.push(Token::comment(text.to_string()));
            }
            HtmlToken::DoctypeToken(doctype) => {
                self.flush_text();
                self.tokens.push(Token::declaration(doctype_text(&doctype)));
            }
            HtmlToken::TagToken(tag) => {
                self.flush_text();
                return self.push_tag(tag);
            }
        }
        TokenSinkResult::Continue
    }
}
