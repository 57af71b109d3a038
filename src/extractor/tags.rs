//! Tag names and attribute vocabularies.

pub const HTML: &str = "html";
pub const HEAD: &str = "head";
pub const BODY: &str = "body";
pub const SCRIPT: &str = "script";
pub const LINK: &str = "link";
pub const META: &str = "meta";
pub const TITLE: &str = "title";
pub const STYLE: &str = "style";
pub const NOSCRIPT: &str = "noscript";

/// Closing tags consumed without extracting anything.
pub static STRUCTURAL_END_TAGS: [&str; 5] = [HTML, HEAD, LINK, META, BODY];

/// `rel` values naming a page icon.
pub static ICON_RELS: [&str; 4] = [
    "icon",
    "shortcut icon",
    "apple-touch-icon",
    "apple-touch-icon-precomposed",
];

/// Feed MIME types of `<link rel="alternate">` and their placeholder names.
pub static FEED_TYPES: [(&str, &str); 2] = [
    ("application/rss+xml", "RSS Feed"),
    ("application/atom+xml", "Atom Feed"),
];

/// Script type whose payload is captured as JSON-LD.
pub const JSON_LD_TYPE: &str = "application/ld+json";

/// Logical name attributes of `<meta>`, in lookup order.
pub static META_NAME_ATTRS: [&str; 4] = ["name", "http-equiv", "itemprop", "property"];

/// Whether `rel` names a page icon.
#[must_use]
pub fn is_icon_rel(rel: &str) -> bool {
    ICON_RELS.contains(&rel)
}

/// Whether `rel` names an Apple touch icon, which defaults to 192px.
#[must_use]
pub fn is_apple_touch_rel(rel: &str) -> bool {
    rel.starts_with("apple-touch-icon")
}

/// Placeholder name for a feed of MIME type `link_type`, if it is one.
#[must_use]
pub fn feed_generic_name(link_type: &str) -> Option<&'static str> {
    FEED_TYPES
        .iter()
        .find(|(mime, _)| *mime == link_type)
        .map(|(_, name)| *name)
}
