//! Top-level state machine over the token stream.
//!
//! Each step looks at the token under the cursor and hands it to the first
//! matching rule. Title, style and script extractors may fail on malformed
//! markup; the failure is recorded and the opening token is then treated
//! like any other unrecognized token, so every step makes progress.

use crate::cursor::TokenCursor;
use crate::error::Result;
use crate::options::Options;
use crate::result::PageInfo;
use crate::token::{Token, TokenKind};

use super::content::extract_content;
use super::handlers::{
    attr_pairs, extract_script, extract_style, extract_title, record_html_attrs, ScriptOutcome,
};
use super::links::apply_link;
use super::meta::apply_meta;
use super::tags::{BODY, HEAD, HTML, LINK, META, SCRIPT, STRUCTURAL_END_TAGS, STYLE, TITLE};
use super::Extraction;

/// Walk `tokens` from the first to the last, filling `info`.
///
/// Only an unterminated content region aborts the walk.
pub fn walk(tokens: &[Token], info: &mut PageInfo, options: &Options) -> Result<()> {
    let mut cursor = TokenCursor::new(tokens);
    while !cursor.is_at_end() {
        cursor = step(cursor, info, options)?;
    }
    log::debug!(
        "walked {} tokens: {} recovered errors, {} unknown",
        tokens.len(),
        info.errors.len(),
        info.unknown_tokens.len()
    );
    Ok(())
}

fn step<'a>(cursor: TokenCursor<'a>, info: &mut PageInfo, options: &Options) -> Result<TokenCursor<'a>> {
    let token = cursor.current()?;
    log::trace!(target: "metasniff::walker", "{} {token}", cursor.offset());

    match token.kind {
        TokenKind::Start => match token.tag().unwrap_or_default() {
            HTML => {
                record_html_attrs(token, &mut info.html);
                return cursor.advance();
            }
            HEAD => {
                info.html.head_attrs.extend(attr_pairs(token));
                return cursor.advance();
            }
            BODY => {
                info.html.body_attrs.extend(attr_pairs(token));
                return cursor.advance();
            }
            SCRIPT => match extract_script(cursor) {
                Ok((next, ScriptOutcome::Script(script))) => {
                    info.html.scripts.push(script);
                    return Ok(next);
                }
                Ok((next, ScriptOutcome::JsonLd(nodes))) => {
                    info.json_ld.extend(nodes);
                    return Ok(next);
                }
                Err(err) => info.record_error(&err),
            },
            LINK => {
                apply_link(token, info);
                return cursor.advance();
            }
            META => {
                apply_meta(token, info);
                return cursor.advance();
            }
            TITLE => match extract_title(cursor) {
                Ok((next, title)) => {
                    info.html.title = Some(title);
                    return Ok(next);
                }
                Err(err) => info.record_error(&err),
            },
            STYLE => match extract_style(cursor) {
                Ok((next, style)) => {
                    info.html.styles.push(style);
                    return Ok(next);
                }
                Err(err) => info.record_error(&err),
            },
            _ => {}
        },
        TokenKind::End if token.tag().is_some_and(|tag| STRUCTURAL_END_TAGS.contains(&tag)) => {
            return cursor.advance();
        }
        TokenKind::Declaration => return cursor.advance(),
        _ => {}
    }

    match extract_content(cursor, info) {
        Ok(Extraction::Extracted(next, node)) => {
            info.html.content.push(node);
            return Ok(next);
        }
        Ok(Extraction::Unrecognized) => {}
        Err(err) if err.is_fatal() => return Err(err),
        Err(err) => info.record_error(&err),
    }

    match token.kind {
        TokenKind::Data if is_blank(token) => {}
        TokenKind::Comment => info.html.comments.push(token.data.clone().unwrap_or_default()),
        _ if options.keep_unknown_tokens => info.unknown_tokens.push(token.capture()),
        _ => {}
    }
    cursor.advance()
}

/// Non-empty data made only of whitespace.
fn is_blank(token: &Token) -> bool {
    token
        .text()
        .is_some_and(|text| !text.is_empty() && text.chars().all(char::is_whitespace))
}
