//! Position-tracking, read-only views over the pipeline's buffers.
//!
//! A cursor never mutates its buffer. Advancing returns a new cursor, so a
//! caller that fails halfway through a match still holds the cursor it
//! started from.

use crate::error::{Error, Offset, Result, Unit};
use crate::token::{Token, TokenKind};

/// Element type of a slice cursor, tied to the unit its offsets are reported in.
pub trait Element {
    /// Unit of positions within a buffer of this element.
    const UNIT: Unit;
}

impl Element for u8 {
    const UNIT: Unit = Unit::Byte;
}

impl Element for Token {
    const UNIT: Unit = Unit::Token;
}

/// Immutable view `{buffer, start, end}` over a slice.
#[derive(Debug)]
pub struct Cursor<'a, T> {
    buffer: &'a [T],
    start: usize,
    end: usize,
}

/// Cursor over the raw input, before decoding.
pub type ByteCursor<'a> = Cursor<'a, u8>;

/// Cursor over the token sequence.
pub type TokenCursor<'a> = Cursor<'a, Token>;

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<'a, T: Element> Cursor<'a, T> {
    /// Cursor over the whole buffer.
    #[must_use]
    pub fn new(buffer: &'a [T]) -> Self {
        Self { buffer, start: 0, end: buffer.len() }
    }

    /// Cursor over `buffer[start..end]`, clamped so that
    /// `start <= end <= buffer.len()`.
    #[must_use]
    pub fn with_range(buffer: &'a [T], start: usize, end: usize) -> Self {
        let end = end.min(buffer.len());
        Self { buffer, start: start.min(end), end }
    }

    /// Index of the next element in the underlying buffer.
    #[must_use]
    pub fn position(&self) -> usize {
        self.start
    }

    /// Exclusive end of the view.
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    /// The underlying buffer, including consumed elements.
    #[must_use]
    pub fn buffer(&self) -> &'a [T] {
        self.buffer
    }

    /// Position of the next element as an [`Offset`].
    #[must_use]
    pub fn offset(&self) -> Offset {
        Offset { unit: T::UNIT, index: self.start }
    }

    /// Whether every element has been consumed.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.start >= self.end
    }

    /// Number of elements left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether nothing is left; same as [`is_at_end`](Self::is_at_end).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_at_end()
    }

    /// The unconsumed slice.
    #[must_use]
    pub fn remaining(&self) -> &'a [T] {
        &self.buffer[self.start..self.end]
    }

    /// Next element without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&'a T> {
        self.remaining().first()
    }

    /// Cursor one element further.
    pub fn advance(self) -> Result<Self> {
        if self.is_at_end() {
            return Err(Error::UnexpectedEndOfFile { offset: self.offset() });
        }
        Ok(Self { start: self.start + 1, ..self })
    }

    /// Cursor `n` elements further.
    pub fn advance_by(self, n: usize) -> Result<Self> {
        if n > self.len() {
            return Err(Error::UnexpectedEndOfFile {
                offset: Offset { unit: T::UNIT, index: self.end },
            });
        }
        Ok(Self { start: self.start + n, ..self })
    }

    /// Cursor with nothing left.
    #[must_use]
    pub fn to_end(self) -> Self {
        Self { start: self.end, ..self }
    }

    /// Whether the remaining slice starts with `pattern` under `eq`.
    pub fn starts_with_by<P>(&self, pattern: &[P], eq: impl Fn(&T, &P) -> bool) -> bool {
        let rest = self.remaining();
        rest.len() >= pattern.len() && rest.iter().zip(pattern).all(|(a, b)| eq(a, b))
    }
}

impl<T: Element + PartialEq> Cursor<'_, T> {
    /// Whether the remaining slice starts with `pattern`.
    #[must_use]
    pub fn starts_with(&self, pattern: &[T]) -> bool {
        self.remaining().starts_with(pattern)
    }
}

impl Cursor<'_, u8> {
    /// Next byte without consuming it.
    #[must_use]
    pub fn peek_byte(&self) -> Option<u8> {
        self.peek().copied()
    }

    /// Whether the remaining bytes start with `pattern`, ignoring ASCII case.
    #[must_use]
    pub fn starts_with_ignore_case(&self, pattern: &[u8]) -> bool {
        self.starts_with_by(pattern, u8::eq_ignore_ascii_case)
    }

    /// Consumes exactly `pattern`.
    pub fn expect(self, pattern: &[u8]) -> Result<Self> {
        if self.starts_with(pattern) {
            return self.advance_by(pattern.len());
        }
        Err(self.mismatch(pattern))
    }

    /// Consumes `pattern`, ignoring ASCII case.
    pub fn expect_ignore_case(self, pattern: &[u8]) -> Result<Self> {
        if self.starts_with_ignore_case(pattern) {
            return self.advance_by(pattern.len());
        }
        Err(self.mismatch(pattern))
    }

    /// Skips bytes while `pred` holds.
    #[must_use]
    pub fn skip_while(self, pred: impl Fn(u8) -> bool) -> Self {
        let skipped = self.remaining().iter().take_while(|&&b| pred(b)).count();
        Self { start: self.start + skipped, ..self }
    }

    fn mismatch(&self, pattern: &[u8]) -> Error {
        let rest = self.remaining();
        let found = &rest[..rest.len().min(pattern.len())];
        Error::unexpected(
            self.offset(),
            format!(
                "expected {:?}, got {:?}",
                String::from_utf8_lossy(pattern),
                String::from_utf8_lossy(found)
            ),
        )
    }
}

impl<'a> Cursor<'a, Token> {
    /// Whether the next token has the given kind and tag.
    #[must_use]
    pub fn starts_with_tag(&self, kind: TokenKind, tag: &str) -> bool {
        self.peek().is_some_and(|t| t.kind == kind && t.tag() == Some(tag))
    }

    /// Next token, or [`Error::UnexpectedEndOfFile`] when none is left.
    pub fn current(&self) -> Result<&'a Token> {
        self.peek().ok_or(Error::UnexpectedEndOfFile { offset: self.offset() })
    }
}

/// Cursor over decoded text, stepping one `char` at a time.
///
/// Positions are byte indices into the string; error offsets are reported
/// in chars.
#[derive(Debug, Clone, Copy)]
pub struct TextCursor<'a> {
    buffer: &'a str,
    start: usize,
    end: usize,
}

impl<'a> TextCursor<'a> {
    /// Cursor over the whole string.
    #[must_use]
    pub fn new(buffer: &'a str) -> Self {
        Self { buffer, start: 0, end: buffer.len() }
    }

    /// Byte index of the next char.
    #[must_use]
    pub fn position(&self) -> usize {
        self.start
    }

    /// Position of the next char, counted in chars.
    #[must_use]
    pub fn offset(&self) -> Offset {
        Offset::char(self.buffer[..self.start].chars().count())
    }

    /// Whether the text is exhausted.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.start >= self.end
    }

    /// The unconsumed text.
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        &self.buffer[self.start..self.end]
    }

    /// Next char without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Cursor one char further.
    pub fn advance(self) -> Result<Self> {
        match self.peek() {
            Some(c) => Ok(Self { start: self.start + c.len_utf8(), ..self }),
            None => Err(Error::UnexpectedEndOfFile { offset: self.offset() }),
        }
    }

    /// Cursor with nothing left.
    #[must_use]
    pub fn to_end(self) -> Self {
        Self { start: self.end, ..self }
    }

    /// Whether the remaining text starts with `pattern`.
    #[must_use]
    pub fn starts_with(&self, pattern: &str) -> bool {
        self.remaining().starts_with(pattern)
    }

    /// Whether the remaining text starts with `pattern`, ignoring ASCII case.
    #[must_use]
    pub fn starts_with_ignore_case(&self, pattern: &str) -> bool {
        self.remaining()
            .get(..pattern.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(pattern))
    }

    /// Consumes exactly `pattern`.
    pub fn expect(self, pattern: &str) -> Result<Self> {
        if self.starts_with(pattern) {
            return Ok(Self { start: self.start + pattern.len(), ..self });
        }
        let found: String = self.remaining().chars().take(pattern.chars().count()).collect();
        Err(Error::unexpected(self.offset(), format!("expected {pattern:?}, got {found:?}")))
    }
}
