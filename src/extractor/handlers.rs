//! Element extractors for `<title>`, `<style>` and `<script>`, plus the
//! structural `<html>`, `<head>` and `<body>` tags.
//!
//! Title, style and script require an exact token sequence. Any deviation is
//! reported as an error and the walker decides how to recover.

use serde_json::Value;

use crate::cursor::TokenCursor;
use crate::error::{Error, Result};
use crate::result::{HtmlInfo, Script, Style};
use crate::token::{Token, TokenKind};

use super::tags::{JSON_LD_TYPE, SCRIPT, STYLE, TITLE};

/// What a successfully extracted `<script>` contributes.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptOutcome {
    /// A script to list under `html.scripts`.
    Script(Script),
    /// JSON-LD nodes; the script itself is not retained.
    JsonLd(Vec<Value>),
}

/// Record the attributes of `<html>`.
pub fn record_html_attrs(token: &Token, html: &mut HtmlInfo) {
    for (name, value) in token.attrs.iter() {
        match name {
            "id" => html.html_id = Some(value.to_string()),
            "class" => html.html_class = Some(value.to_string()),
            _ => html.html_unknown_attrs.push((name.to_string(), value.to_string())),
        }
    }
}

/// Attributes of `<head>` or `<body>`, verbatim.
pub fn attr_pairs(token: &Token) -> impl Iterator<Item = (String, String)> + '_ {
    token.attrs.iter().map(|(n, v)| (n.to_string(), v.to_string()))
}

/// Consume a data token, returning its text.
fn expect_data(cursor: TokenCursor<'_>) -> Result<(TokenCursor<'_>, &str)> {
    let token = cursor.current()?;
    if token.kind != TokenKind::Data {
        return Err(Error::unexpected(cursor.offset(), format!("expected data, got {token}")));
    }
    Ok((cursor.advance()?, token.text().unwrap_or_default()))
}

/// Consume `</tag>`.
fn expect_end<'a>(cursor: TokenCursor<'a>, tag: &str) -> Result<TokenCursor<'a>> {
    let token = cursor.current()?;
    if !token.is_end(tag) {
        return Err(Error::unexpected(
            cursor.offset(),
            format!("expected closing {tag} tag, got {token}"),
        ));
    }
    cursor.advance()
}

/// `<title>`, data, `</title>`; returns the trimmed text.
pub fn extract_title(cursor: TokenCursor<'_>) -> Result<(TokenCursor<'_>, String)> {
    let cursor = cursor.advance()?;
    let (cursor, text) = expect_data(cursor)?;
    let cursor = expect_end(cursor, TITLE)?;
    Ok((cursor, text.trim().to_string()))
}

/// `<style>`, data, `</style>`.
pub fn extract_style(cursor: TokenCursor<'_>) -> Result<(TokenCursor<'_>, Style)> {
    let open = cursor.current()?;
    let mut style = Style::default();
    for (name, value) in open.attrs.iter() {
        let slot = match name {
            "blocking" => &mut style.blocking,
            "media" => &mut style.media,
            "nonce" => &mut style.nonce,
            "title" => &mut style.title,
            "type" => &mut style.style_type,
            _ => {
                style.attrs.push(name, value);
                continue;
            }
        };
        *slot = Some(value.to_string());
    }

    let cursor = cursor.advance()?;
    let (cursor, content) = expect_data(cursor)?;
    let cursor = expect_end(cursor, STYLE)?;
    style.content = content.to_string();
    Ok((cursor, style))
}

/// `<script>`, optional data, `</script>`.
///
/// The body of a `+json` script is decoded. An `application/ld+json` body
/// is returned as JSON-LD nodes: an array contributes each element, any
/// other value contributes itself.
pub fn extract_script(cursor: TokenCursor<'_>) -> Result<(TokenCursor<'_>, ScriptOutcome)> {
    let open = cursor.current()?;
    let mut script = Script::default();
    for (name, value) in open.attrs.iter() {
        match name {
            "type" => script.script_type = Some(value.to_string()),
            "src" => script.src = Some(value.to_string()),
            _ => script.attrs.push(name, value),
        }
    }

    let cursor = cursor.advance()?;
    let next = cursor.current()?;
    let data_offset = cursor.offset();
    let cursor = if next.kind == TokenKind::Data {
        script.content = next.data.clone();
        expect_end(cursor.advance()?, SCRIPT)?
    } else if next.is_end(SCRIPT) {
        cursor.advance()?
    } else {
        return Err(Error::unexpected(
            cursor.offset(),
            format!("expected data or closing script tag, got {next}"),
        ));
    };

    let script_type = script
        .script_type
        .as_deref()
        .map(|t| t.trim().to_ascii_lowercase())
        .unwrap_or_default();
    if let (true, Some(content)) = (script_type.ends_with("+json"), script.content.as_deref()) {
        let json: Value = serde_json::from_str(content)
            .map_err(|source| Error::InvalidJson { offset: data_offset, source })?;
        if script_type == JSON_LD_TYPE {
            let nodes = match json {
                Value::Array(nodes) => nodes,
                node => vec![node],
            };
            return Ok((cursor, ScriptOutcome::JsonLd(nodes)));
        }
        script.json = Some(json);
    }

    Ok((cursor, ScriptOutcome::Script(script)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Offset;
    use crate::token::Attributes;
    use serde_json::json;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs.iter().copied().collect()
    }

    #[test]
    fn title_is_trimmed() {
        let tokens = vec![Token::start("title", Attributes::new()), Token::data("  Hi \n"), Token::end("title")];
        let Ok((cursor, title)) = extract_title(TokenCursor::new(&tokens)) else {
            panic!("title extraction failed");
        };
        assert_eq!(title, "Hi");
        assert!(cursor.is_at_end());
    }

    #[test]
    fn title_without_data_fails_at_next_token() {
        let tokens = vec![Token::start("title", Attributes::new()), Token::start("body", Attributes::new())];
        match extract_title(TokenCursor::new(&tokens)) {
            Err(Error::UnexpectedData { offset, message }) => {
                assert_eq!(offset, Offset::token(1));
                assert!(message.contains("kind=start, tag=body"), "{message}");
            }
            other => panic!("expected UnexpectedData, got {other:?}"),
        }
    }

    #[test]
    fn title_at_end_of_stream() {
        let tokens = vec![Token::start("title", Attributes::new())];
        assert!(matches!(
            extract_title(TokenCursor::new(&tokens)),
            Err(Error::UnexpectedEndOfFile { .. })
        ));
    }

    #[test]
    fn style_attributes_are_partitioned() {
        let tokens = vec![
            Token::start("style", attrs(&[("media", "print"), ("nonce", "n1"), ("data-x", "1")])),
            Token::data("p { margin: 0 }"),
            Token::end("style"),
        ];
        let Ok((_, style)) = extract_style(TokenCursor::new(&tokens)) else {
            panic!("style extraction failed");
        };
        assert_eq!(style.media.as_deref(), Some("print"));
        assert_eq!(style.nonce.as_deref(), Some("n1"));
        assert_eq!(style.attrs, attrs(&[("data-x", "1")]));
        assert_eq!(style.content, "p { margin: 0 }");
    }

    #[test]
    fn empty_style_is_an_error() {
        let tokens = vec![Token::start("style", Attributes::new()), Token::end("style")];
        assert!(matches!(
            extract_style(TokenCursor::new(&tokens)),
            Err(Error::UnexpectedData { .. })
        ));
    }

    #[test]
    fn external_script_has_no_content() {
        let tokens = vec![
            Token::start("script", attrs(&[("src", "/app.js"), ("async", "")])),
            Token::end("script"),
        ];
        let Ok((cursor, ScriptOutcome::Script(script))) = extract_script(TokenCursor::new(&tokens)) else {
            panic!("script extraction failed");
        };
        assert!(cursor.is_at_end());
        assert_eq!(script.src.as_deref(), Some("/app.js"));
        assert_eq!(script.content, None);
        assert_eq!(script.attrs, attrs(&[("async", "")]));
    }

    #[test]
    fn json_ld_array_is_unpacked() {
        let tokens = vec![
            Token::start("script", attrs(&[("type", "application/ld+json")])),
            Token::data(r#"[{"@type":"Article"},{"@type":"Person"}]"#),
            Token::end("script"),
        ];
        let Ok((_, ScriptOutcome::JsonLd(nodes))) = extract_script(TokenCursor::new(&tokens)) else {
            panic!("expected JSON-LD");
        };
        assert_eq!(nodes, vec![json!({"@type": "Article"}), json!({"@type": "Person"})]);
    }

    #[test]
    fn json_ld_object_is_one_node() {
        let tokens = vec![
            Token::start("script", attrs(&[("type", "application/ld+json")])),
            Token::data(r#"{"@type":"Article"}"#),
            Token::end("script"),
        ];
        let Ok((_, ScriptOutcome::JsonLd(nodes))) = extract_script(TokenCursor::new(&tokens)) else {
            panic!("expected JSON-LD");
        };
        assert_eq!(nodes.len(), 1);
    }

    #[test]
    fn other_json_scripts_keep_decoded_body() {
        let tokens = vec![
            Token::start("script", attrs(&[("type", "application/settings+json")])),
            Token::data(r#"{"a":1}"#),
            Token::end("script"),
        ];
        let Ok((_, ScriptOutcome::Script(script))) = extract_script(TokenCursor::new(&tokens)) else {
            panic!("expected a script");
        };
        assert_eq!(script.json, Some(json!({"a": 1})));
        assert_eq!(script.content.as_deref(), Some(r#"{"a":1}"#));
    }

    #[test]
    fn invalid_json_is_reported_at_data_token() {
        let tokens = vec![
            Token::start("script", attrs(&[("type", "application/ld+json")])),
            Token::data("{ invalid json here }"),
            Token::end("script"),
        ];
        assert!(matches!(
            extract_script(TokenCursor::new(&tokens)),
            Err(Error::InvalidJson { offset, .. }) if offset == Offset::token(1)
        ));
    }

    #[test]
    fn script_followed_by_other_tag_fails() {
        let tokens = vec![
            Token::start("script", Attributes::new()),
            Token::data("x()"),
            Token::start("p", Attributes::new()),
        ];
        assert!(matches!(
            extract_script(TokenCursor::new(&tokens)),
            Err(Error::UnexpectedData { offset, .. }) if offset == Offset::token(2)
        ));
    }

    #[test]
    fn html_attributes() {
        let token = Token::start("html", attrs(&[("id", "top"), ("class", "js"), ("lang", "en")]));
        let mut html = HtmlInfo::default();
        record_html_attrs(&token, &mut html);
        assert_eq!(html.html_id.as_deref(), Some("top"));
        assert_eq!(html.html_class.as_deref(), Some("js"));
        assert_eq!(html.html_unknown_attrs, vec![("lang".to_string(), "en".to_string())]);
    }
}
