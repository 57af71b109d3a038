//! Document type declaration at the start of the input.
//!
//! The declaration decides how the rest of the input is treated, so it is
//! parsed from the raw bytes before anything is decoded. Only the form
//! `<!doctype NAME>` is accepted; external identifiers are not.

use crate::cursor::ByteCursor;
use crate::encoding::decode_utf8_lossy;
use crate::error::{Error, Result};

const DOCTYPE_OPEN: &[u8] = b"<!doctype";

/// Bytes of input quoted in [`Error::UnrecognizedPreamble`].
pub const PREVIEW_LEN: usize = 256;

/// Parse `<!doctype NAME>` and return the cursor after it with the name.
///
/// # Errors
///
/// [`Error::UnrecognizedPreamble`] if the input does not start with a
/// doctype; [`Error::UnexpectedData`] or [`Error::UnexpectedEndOfFile`] if
/// the declaration is malformed.
pub fn parse_doctype(cursor: ByteCursor<'_>) -> Result<(ByteCursor<'_>, String)> {
    if !cursor.starts_with_ignore_case(DOCTYPE_OPEN) {
        let rest = cursor.remaining();
        return Err(Error::UnrecognizedPreamble {
            preview: decode_utf8_lossy(&rest[..rest.len().min(PREVIEW_LEN)]).into_owned(),
        });
    }
    let cursor = cursor.expect_ignore_case(DOCTYPE_OPEN)?;

    match cursor.peek_byte() {
        None => return Err(Error::UnexpectedEndOfFile { offset: cursor.offset() }),
        Some(b) if !b.is_ascii_whitespace() => {
            return Err(Error::unexpected(
                cursor.offset(),
                format!("expected whitespace after doctype, got {:?}", char::from(b)),
            ));
        }
        Some(_) => {}
    }
    let cursor = cursor.skip_while(|b| b.is_ascii_whitespace());

    match cursor.peek_byte() {
        None => return Err(Error::UnexpectedEndOfFile { offset: cursor.offset() }),
        Some(b'>') => return Err(Error::unexpected(cursor.offset(), "expected doctype name, got \">\"")),
        Some(_) => {}
    }
    let name_start = cursor.position();
    let cursor = cursor.skip_while(|b| !b.is_ascii_whitespace() && b != b'>');
    if cursor.is_at_end() {
        return Err(Error::UnexpectedEndOfFile { offset: cursor.offset() });
    }
    let name = decode_utf8_lossy(&cursor.buffer()[name_start..cursor.position()]).into_owned();

    let cursor = cursor.expect(b">")?;
    log::debug!("doctype {name:?} ends at byte {}", cursor.position());
    Ok((cursor, name))
}

/// Whether a doctype name selects the HTML path.
#[must_use]
pub fn is_html(name: &str) -> bool {
    name.eq_ignore_ascii_case("html")
}
