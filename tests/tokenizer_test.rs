use metasniff::{
    parse_bytes_with_tokenizer, Attributes, Html5everTokenizer, Options, Token, TokenKind, Tokenize,
};

/// Reports every word after the doctype as a `<meta name=WORD>`.
struct WordsAsMeta;

impl Tokenize for WordsAsMeta {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split_whitespace()
            .skip(2)
            .map(|word| Token::start("meta", [("name", word)].into_iter().collect::<Attributes>()))
            .collect()
    }
}

#[test]
fn custom_tokenizer_drives_extraction() {
    let info = match parse_bytes_with_tokenizer(b"<!doctype html> one two", &Options::default(), &WordsAsMeta) {
        Ok(info) => info,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };
    let names: Vec<_> = info.html.metas.iter().filter_map(|m| m.get("name")).collect();
    assert_eq!(names, vec!["one", "two"]);
}

#[test]
fn html5ever_tokenizer_reports_doctype_as_declaration() {
    let tokens = Html5everTokenizer.tokenize("<!DOCTYPE html><p>");
    assert_eq!(tokens[0].kind, TokenKind::Declaration);
    assert_eq!(tokens[0].text(), Some("DOCTYPE html"));
    assert!(tokens[1].is_start("p"));
}

#[test]
fn raw_text_bodies_arrive_as_one_token() {
    let tokens = Html5everTokenizer.tokenize("<script>if (a < b && c > d) { x('</p>') }</script>");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].text(), Some("if (a < b && c > d) { x('</p>') }"));
    assert!(tokens[2].is_end("script"));
}
