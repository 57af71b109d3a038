//! `<link>` extraction.
//!
//! Besides recording the link itself, a link can set the canonical URL,
//! announce a feed the page belongs to, or offer a favicon. These effects
//! are independent of each other.

use crate::patterns::ICON_SIZE;
use crate::result::{Entity, Favicon, IconSize, Link, PageInfo, UrlInfo};
use crate::token::Token;
use crate::url_utils::join_url;

use super::tags::{feed_generic_name, is_apple_touch_rel, is_icon_rel};

/// Split a `<link>` start tag into named fields and leftover attributes.
#[must_use]
pub fn capture_link(token: &Token) -> Link {
    let mut link = Link::default();
    for (name, value) in token.attrs.iter() {
        let slot = match name {
            "rel" => &mut link.rel,
            "href" => &mut link.href,
            "type" => &mut link.link_type,
            "title" => &mut link.title,
            _ => {
                link.attrs.push(name, value);
                continue;
            }
        };
        *slot = Some(value.to_string());
    }
    link
}

/// Record a `<link>` and apply its side effects to `info`.
pub fn apply_link(token: &Token, info: &mut PageInfo) {
    let link = capture_link(token);
    let rel = link.rel.as_deref().map(|r| r.trim().to_ascii_lowercase()).unwrap_or_default();

    if let Some(href) = link.href.as_deref() {
        if rel == "canonical" {
            info.set_url_if_unset(href);
        }

        if rel == "alternate" {
            let link_type = link.link_type.as_deref().map(|t| t.trim().to_ascii_lowercase());
            if let Some(generic_name) = link_type.as_deref().and_then(feed_generic_name) {
                let feed = feed_entity(&link, href, generic_name, info.base_url.as_deref());
                log::debug!("feed link {:?}", feed.url);
                info.main_content.containing_feeds.push(feed);
            }
        }

        if is_icon_rel(&rel) {
            let size = icon_size(&rel, token.attrs.get("sizes"));
            let url = join_url(info.base_url.as_deref(), href);
            if info.offer_favicon(Favicon { size, url }) {
                log::trace!("favicon candidate of size {size:?} stored");
            }
        }
    }

    info.html.links.push(link);
}

fn feed_entity(link: &Link, href: &str, generic_name: &str, base_url: Option<&str>) -> Entity {
    let (name, generic_name) = match &link.title {
        Some(title) => (Some(title.clone()), None),
        None => (None, Some(generic_name.to_string())),
    };
    Entity {
        name,
        generic_name,
        url: Some(join_url(base_url, href)),
        url_has_info: vec![UrlInfo::Name, UrlInfo::Description, UrlInfo::Unknown],
        html_link: Some(link.clone()),
        ..Entity::default()
    }
}

/// Declared size of an icon link.
///
/// `sizes="any"` is the scalable sentinel; otherwise the width of the first
/// `WxH` entry, saturating at `u32::MAX`. Without a usable `sizes`, touch
/// icons count as 192px and everything else as 16px.
#[must_use]
pub fn icon_size(rel: &str, sizes: Option<&str>) -> IconSize {
    if let Some(sizes) = sizes {
        if sizes.trim().eq_ignore_ascii_case("any") {
            return IconSize::Any;
        }
        let width = ICON_SIZE
            .captures(sizes)
            .and_then(|caps| caps.get(1))
            // Only digits are captured, so a failed parse is an overflow.
            .map(|m| m.as_str().parse::<u32>().unwrap_or(u32::MAX));
        if let Some(width) = width {
            return IconSize::Pixels(width);
        }
    }
    if is_apple_touch_rel(rel) {
        IconSize::Pixels(192)
    } else {
        IconSize::Pixels(16)
    }
}
