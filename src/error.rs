//! Error types for metasniff.
//!
//! Every failure carries the [`Offset`] at which it was detected, measured in
//! the unit of the cursor that raised it (bytes before decoding, chars in the
//! decoded text, tokens in the walker).

use std::fmt;

use serde::Serialize;

/// Unit in which an [`Offset`] is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Position in the raw input buffer.
    Byte,
    /// Position in the decoded text, counted in `char`s.
    Char,
    /// Index into the token sequence.
    Token,
}

/// Position of a failure within one of the pipeline's buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Offset {
    /// What `index` counts.
    pub unit: Unit,
    /// Zero-based position.
    pub index: usize,
}

impl Offset {
    /// Offset into the raw byte buffer.
    #[must_use]
    pub const fn byte(index: usize) -> Self {
        Self { unit: Unit::Byte, index }
    }

    /// Offset into the decoded text.
    #[must_use]
    pub const fn char(index: usize) -> Self {
        Self { unit: Unit::Char, index }
    }

    /// Offset into the token sequence.
    #[must_use]
    pub const fn token(index: usize) -> Self {
        Self { unit: Unit::Token, index }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self.unit {
            Unit::Byte => "byte",
            Unit::Char => "char",
            Unit::Token => "token",
        };
        write!(f, "{unit} {}", self.index)
    }
}

/// Error type for parsing operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A cursor was advanced past its end: a required terminator never came.
    #[error("Unexpected end of file at {offset}")]
    UnexpectedEndOfFile {
        /// Where the cursor ran out.
        offset: Offset,
    },

    /// The next element did not match an exact expectation.
    #[error("Unexpected data at {offset}: {message}")]
    UnexpectedData {
        /// Where the mismatch was found.
        offset: Offset,
        /// What was expected and what was found.
        message: String,
    },

    /// The document does not begin with a document type declaration.
    #[error("Unrecognized preamble: {preview:?}")]
    UnrecognizedPreamble {
        /// Lossy rendering of the first bytes of the input.
        preview: String,
    },

    /// An embedded `+json` script body is not valid JSON.
    #[error("Invalid JSON in script at {offset}: {source}")]
    InvalidJson {
        /// Position of the script's data token.
        offset: Offset,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },

    /// Reading the input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Builds an [`Error::UnexpectedData`].
    pub(crate) fn unexpected(offset: Offset, message: impl Into<String>) -> Self {
        Self::UnexpectedData { offset, message: message.into() }
    }

    /// Whether this failure aborts the whole parse instead of being recorded
    /// and skipped.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedEndOfFile { .. } | Self::UnrecognizedPreamble { .. } | Self::Io(_)
        )
    }

    /// Stable snake-case name of the failure class.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnexpectedEndOfFile { .. } => "unexpected_end_of_file",
            Self::UnexpectedData { .. } => "unexpected_data",
            Self::UnrecognizedPreamble { .. } => "unrecognized_preamble",
            Self::InvalidJson { .. } => "invalid_json",
            Self::Io(_) => "io",
        }
    }

    /// Where the failure was detected, if it is tied to a position.
    #[must_use]
    pub const fn offset(&self) -> Option<Offset> {
        match self {
            Self::UnexpectedEndOfFile { offset }
            | Self::UnexpectedData { offset, .. }
            | Self::InvalidJson { offset, .. } => Some(*offset),
            Self::UnrecognizedPreamble { .. } | Self::Io(_) => None,
        }
    }
}

/// Result type alias for parsing operations.
pub type Result<T> = std::result::Result<T, Error>;
