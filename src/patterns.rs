//! Compiled regex patterns.
//!
//! All patterns are compiled once on first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches the width of the first `WxH` entry of an icon `sizes` attribute.
pub static ICON_SIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)[xX]\d+").expect("ICON_SIZE regex")
});

/// Matches schema.org article types, bare or as a full schema.org URL.
pub static ARTICLE_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https?://schema\.org/)?(?:Article|NewsArticle|BlogPosting)$")
        .expect("ARTICLE_TYPE regex")
});
