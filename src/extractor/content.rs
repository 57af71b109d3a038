//! Recursive content containers.
//!
//! Only `<noscript>` is recognized. Its children are parsed as a content
//! list that ends at the matching closing tag; an unterminated list runs
//! into the end of the token stream, which aborts the whole parse.

use crate::cursor::TokenCursor;
use crate::error::Result;
use crate::result::{ContentNode, PageInfo};
use crate::token::TokenKind;

use super::tags::NOSCRIPT;
use super::Extraction;

/// Try to extract a content node at `cursor`.
pub fn extract_content<'a>(
    cursor: TokenCursor<'a>,
    info: &mut PageInfo,
) -> Result<Extraction<'a, ContentNode>> {
    let Some(open) = cursor.peek() else {
        return Ok(Extraction::Unrecognized);
    };
    if !open.is_start(NOSCRIPT) {
        return Ok(Extraction::Unrecognized);
    }

    let (cursor, contents) = extract_content_list(cursor.advance()?, info, NOSCRIPT)?;
    Ok(Extraction::Extracted(
        cursor,
        ContentNode::Element { kind: NOSCRIPT.to_string(), attrs: open.attrs.clone(), contents },
    ))
}

/// Parse nodes up to and including `</closing_tag>`.
///
/// Tokens that are not content are kept as opaque nodes. Recoverable
/// failures are recorded in `info.errors`; both advance by one token.
pub fn extract_content_list<'a>(
    mut cursor: TokenCursor<'a>,
    info: &mut PageInfo,
    closing_tag: &str,
) -> Result<(TokenCursor<'a>, Vec<ContentNode>)> {
    let mut nodes = Vec::new();
    loop {
        let token = cursor.current()?;
        if cursor.starts_with_tag(TokenKind::End, closing_tag) {
            return Ok((cursor.advance()?, nodes));
        }
        match extract_content(cursor, info) {
            Ok(Extraction::Extracted(next, node)) => {
                nodes.push(node);
                cursor = next;
            }
            Ok(Extraction::Unrecognized) => {
                nodes.push(ContentNode::Opaque(token.capture()));
                cursor = cursor.advance()?;
            }
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => {
                info.record_error(&err);
                cursor = cursor.advance()?;
            }
        }
    }
}
