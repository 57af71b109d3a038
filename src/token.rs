//! Normalized markup tokens.
//!
//! Tokens are produced once by a [`Tokenize`](crate::tokenizer::Tokenize)
//! implementation and never mutated afterwards.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Kind of a markup token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Start tag, `<p>`.
    Start,
    /// End tag, `</p>`.
    End,
    /// Character data between tags.
    Data,
    /// `<!-- ... -->`
    Comment,
    /// `<!...>` declaration such as the doctype.
    Declaration,
}

impl TokenKind {
    /// Lowercase name, as used in serialized output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Data => "data",
            Self::Comment => "comment",
            Self::Declaration => "declaration",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered attribute list of a start tag.
///
/// Duplicate names are kept in sequence form. Lookups through [`get`]
/// behave like the derived name-to-value mapping, where the last occurrence
/// wins.
///
/// [`get`]: Attributes::get
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    /// Creates an empty attribute list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends an attribute, keeping any earlier one with the same name.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    /// Value of `name` in the derived mapping (last occurrence wins).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates over `(name, value)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of attributes, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Deduplicated mapping: first-seen order, last-seen value.
    #[must_use]
    pub fn to_map(&self) -> AttributeMap {
        let mut entries: Vec<(String, String)> = Vec::with_capacity(self.0.len());
        for (name, value) in &self.0 {
            match entries.iter_mut().find(|(n, _)| n == name) {
                Some(entry) => entry.1.clone_from(value),
                None => entries.push((name.clone(), value.clone())),
            }
        }
        AttributeMap(entries)
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(n, v)| (n.into(), v.into())).collect())
    }
}

/// Name-to-value mapping derived from [`Attributes`]; serialized as an object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap(Vec<(String, String)>);

impl AttributeMap {
    /// Value for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    /// Iterates over entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of distinct names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the mapping is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for AttributeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// One markup token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token kind.
    pub kind: TokenKind,
    /// Tag name, present for start and end tags.
    pub tag: Option<String>,
    /// Attributes of a start tag, empty otherwise.
    pub attrs: Attributes,
    /// Text payload of data, comment and declaration tokens.
    pub data: Option<String>,
    /// Part of the synthetic start/end pair emitted for a self-closing tag.
    pub empty: bool,
}

impl Token {
    /// Start tag token.
    #[must_use]
    pub fn start(tag: impl Into<String>, attrs: Attributes) -> Self {
        Self { kind: TokenKind::Start, tag: Some(tag.into()), attrs, data: None, empty: false }
    }

    /// End tag token.
    #[must_use]
    pub fn end(tag: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::End,
            tag: Some(tag.into()),
            attrs: Attributes::new(),
            data: None,
            empty: false,
        }
    }

    /// Character data token.
    #[must_use]
    pub fn data(text: impl Into<String>) -> Self {
        Self::payload(TokenKind::Data, text.into())
    }

    /// Comment token.
    #[must_use]
    pub fn comment(text: impl Into<String>) -> Self {
        Self::payload(TokenKind::Comment, text.into())
    }

    /// Declaration token.
    #[must_use]
    pub fn declaration(text: impl Into<String>) -> Self {
        Self::payload(TokenKind::Declaration, text.into())
    }

    fn payload(kind: TokenKind, text: String) -> Self {
        Self { kind, tag: None, attrs: Attributes::new(), data: Some(text), empty: false }
    }

    /// Marks the token as half of a self-closing pair.
    #[must_use]
    pub fn into_empty(mut self) -> Self {
        self.empty = true;
        self
    }

    /// Tag name, if any.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Text payload, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.data.as_deref()
    }

    /// Whether this is `<tag>`.
    #[must_use]
    pub fn is_start(&self, tag: &str) -> bool {
        self.kind == TokenKind::Start && self.tag() == Some(tag)
    }

    /// Whether this is `</tag>`.
    #[must_use]
    pub fn is_end(&self, tag: &str) -> bool {
        self.kind == TokenKind::End && self.tag() == Some(tag)
    }

    /// Verbatim structural snapshot of the token.
    #[must_use]
    pub fn capture(&self) -> TokenCapture {
        TokenCapture {
            kind: self.kind,
            tag: self.tag.clone(),
            attrs: self.attrs.clone(),
            data: self.data.clone(),
            empty: self.empty,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "kind={}, tag={}", self.kind, self.tag().unwrap_or("none"))
    }
}

/// Snapshot of a token that matched no extraction rule.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TokenCapture {
    /// Token kind.
    pub kind: TokenKind,
    /// Tag name, if any.
    pub tag: Option<String>,
    /// Attributes in document order.
    pub attrs: Attributes,
    /// Text payload, if any.
    pub data: Option<String>,
    /// Half of a self-closing pair.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub empty: bool,
}
