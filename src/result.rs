//! Result types for extraction output.
//!
//! The record is built incrementally while the walker runs. Each extraction
//! site writes only the fields declared here. Unset options and empty lists
//! are left out of the serialized form.

use std::cmp::Ordering;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::{Error, Offset};
use crate::token::{AttributeMap, Attributes, TokenCapture};

/// Version of the serialized record layout.
pub const SCHEMA_VERSION: u32 = 1;

/// Everything extracted from one document.
#[derive(Debug, Clone, Serialize)]
pub struct PageInfo {
    /// Layout version, always [`SCHEMA_VERSION`].
    pub version: u32,

    /// Name declared by the document type declaration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type_name: Option<String>,

    /// Canonical URL of the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// URL that relative hrefs are resolved against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Raw per-document facts.
    #[serde(skip_serializing_if = "HtmlInfo::is_empty")]
    pub html: HtmlInfo,

    /// Reconciled view of the page's primary content.
    #[serde(skip_serializing_if = "MainContent::is_empty")]
    pub main_content: MainContent,

    /// Best-ranked icon seen so far.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<Favicon>,

    /// Locally recovered failures, in the order they happened.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorTrace>,

    /// Tokens that matched no extraction rule.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unknown_tokens: Vec<TokenCapture>,

    /// JSON-LD nodes captured from `application/ld+json` scripts.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub json_ld: Vec<Value>,

    /// Input left over after the recognized document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_data: Option<String>,
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            version: SCHEMA_VERSION,
            document_type_name: None,
            url: None,
            base_url: None,
            html: HtmlInfo::default(),
            main_content: MainContent::default(),
            favicon: None,
            errors: Vec::new(),
            unknown_tokens: Vec::new(),
            json_ld: Vec::new(),
            trailing_data: None,
        }
    }
}

impl PageInfo {
    /// Append a recovered failure to `errors`.
    pub fn record_error(&mut self, error: &Error) {
        log::debug!("recovered from {error}");
        self.errors.push(ErrorTrace::from(error));
    }

    /// Set `url` and `base_url`, each only if still unset.
    pub fn set_url_if_unset(&mut self, url: &str) {
        if self.url.is_none() {
            self.url = Some(url.to_string());
        }
        if self.base_url.is_none() {
            self.base_url = Some(url.to_string());
        }
    }

    /// Offer an icon candidate; it is stored if it outranks the current one.
    ///
    /// Returns whether the candidate was stored.
    pub fn offer_favicon(&mut self, candidate: Favicon) -> bool {
        let replace = self
            .favicon
            .as_ref()
            .is_none_or(|current| candidate.size > current.size);
        if replace {
            self.favicon = Some(candidate);
        }
        replace
    }
}

/// Raw facts gathered from the markup.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HtmlInfo {
    /// Trimmed `<title>` text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// `id` of the `<html>` element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_id: Option<String>,

    /// `class` of the `<html>` element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_class: Option<String>,

    /// Other `<html>` attributes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub html_unknown_attrs: Vec<(String, String)>,

    /// `<head>` attributes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub head_attrs: Vec<(String, String)>,

    /// `<body>` attributes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub body_attrs: Vec<(String, String)>,

    /// Scripts, excluding consumed JSON-LD payloads.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scripts: Vec<Script>,

    /// Inline stylesheets.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub styles: Vec<Style>,

    /// `<link>` elements.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,

    /// Attribute mappings of `<meta>` elements.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metas: Vec<AttributeMap>,

    /// Comment bodies.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,

    /// Recognized content containers.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<ContentNode>,
}

impl HtmlInfo {
    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A `<script>` element.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Script {
    /// `type` attribute.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub script_type: Option<String>,

    /// `src` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// Remaining attributes.
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub attrs: Attributes,

    /// Inline body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Decoded body of a `+json` script.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<Value>,
}

/// A `<style>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Style {
    /// `blocking` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocking: Option<String>,

    /// `media` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,

    /// `nonce` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,

    /// `title` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// `type` attribute.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub style_type: Option<String>,

    /// Remaining attributes.
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub attrs: Attributes,

    /// Stylesheet text.
    pub content: String,
}

/// A `<link>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Link {
    /// `rel` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,

    /// `href` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    /// `type` attribute.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,

    /// `title` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Remaining attributes.
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub attrs: Attributes,
}

/// A node produced by the content extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ContentNode {
    /// A recognized container, e.g. `<noscript>`.
    Element {
        /// Container tag name.
        kind: String,
        /// Attributes of the opening tag.
        #[serde(skip_serializing_if = "Attributes::is_empty")]
        attrs: Attributes,
        /// Nodes between the opening and closing tags.
        contents: Vec<ContentNode>,
    },
    /// A token kept verbatim.
    Opaque(TokenCapture),
}

/// Best guess about the page's primary content.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MainContent {
    /// Content kind, e.g. `"article"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Headline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,

    /// Summary text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,

    /// Publication date, verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,

    /// Modification date, verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,

    /// Authors, merged by identity.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub author: Vec<Entity>,

    /// Feeds or publications the content belongs to.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub containing_feeds: Vec<Entity>,

    /// The single JSON-LD node this record was reconciled with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_ld: Option<Value>,
}

impl MainContent {
    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Description text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Description {
    /// The text.
    pub text: String,
}

/// What more could be learned by fetching an entity's URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlInfo {
    /// The entity's name.
    Name,
    /// A description of the entity.
    Description,
    /// Something unspecified.
    Unknown,
}

/// An author or feed identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Entity {
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Placeholder label used when no name is known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generic_name: Option<String>,

    /// Main URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Other URLs identifying the same entity.
    #[serde(rename = "sameAs", skip_serializing_if = "Vec::is_empty")]
    pub same_as: Vec<String>,

    /// Information available at `url`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub url_has_info: Vec<UrlInfo>,

    /// The `<link>` this entity was found in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_link: Option<Link>,

    /// The JSON-LD object this entity was built from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_ld: Option<Value>,
}

/// Declared icon size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSize {
    /// Width in pixels.
    Pixels(u32),
    /// Scalable; outranks every finite size.
    Any,
}

impl PartialOrd for IconSize {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IconSize {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Any, Self::Any) => Ordering::Equal,
            (Self::Any, Self::Pixels(_)) => Ordering::Greater,
            (Self::Pixels(_), Self::Any) => Ordering::Less,
            (Self::Pixels(a), Self::Pixels(b)) => a.cmp(b),
        }
    }
}

impl Serialize for IconSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Pixels(px) => serializer.serialize_u32(*px),
            Self::Any => serializer.serialize_str("any"),
        }
    }
}

/// The page icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Favicon {
    /// Declared size.
    pub size: IconSize,
    /// Resolved URL.
    pub url: String,
}

/// A recovered failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorTrace {
    /// Failure class, e.g. `"unexpected_data"`.
    pub kind: String,
    /// Human-readable description.
    pub message: String,
    /// Where it happened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<Offset>,
}

impl From<&Error> for ErrorTrace {
    fn from(error: &Error) -> Self {
        Self {
            kind: error.kind().to_string(),
            message: error.to_string(),
            offset: error.offset(),
        }
    }
}
