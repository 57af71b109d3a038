//! `<meta>` extraction.

use crate::result::{Description, Entity, PageInfo};
use crate::token::{AttributeMap, Token};

use super::tags::META_NAME_ATTRS;

/// Logical name of a `<meta>` element: the first non-empty of `name`,
/// `http-equiv`, `itemprop` and `property`, lowercased.
#[must_use]
pub fn meta_name(attrs: &AttributeMap) -> Option<String> {
    META_NAME_ATTRS
        .iter()
        .find_map(|key| attrs.get(key).filter(|v| !v.is_empty()))
        .map(|name| name.trim().to_ascii_lowercase())
}

/// Record a `<meta>` and apply the metadata it carries.
pub fn apply_meta(token: &Token, info: &mut PageInfo) {
    let attrs = token.attrs.to_map();

    if let Some(name) = meta_name(&attrs) {
        let content = attrs.get("content");
        let main = &mut info.main_content;

        if let ("description" | "og:description", Some(text)) = (name.as_str(), content) {
            main.set_description(Description { text: text.to_string() });
        }

        if let ("sailthru.author" | "author", Some(author)) = (name.as_str(), content) {
            main.add_author(Entity::named(author));
        }

        if name == "og:type" && content == Some("article") {
            main.kind = Some("article".to_string());
        }

        if let ("og:title", Some(title)) = (name.as_str(), content) {
            main.title = Some(title.to_string());
        }

        if let ("og:url", Some(url)) = (name.as_str(), content) {
            info.set_url_if_unset(url);
        }
    }

    info.html.metas.push(attrs);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Attributes;

    fn meta(pairs: &[(&str, &str)]) -> Token {
        Token::start("meta", pairs.iter().copied().collect::<Attributes>())
    }

    #[test]
    fn name_lookup_order() {
        let attrs = meta(&[("property", "og:title"), ("name", "")]).attrs.to_map();
        assert_eq!(meta_name(&attrs).as_deref(), Some("og:title"));
        let attrs = meta(&[("itemprop", "x"), ("name", "Description")]).attrs.to_map();
        assert_eq!(meta_name(&attrs).as_deref(), Some("description"));
        let attrs = meta(&[("charset", "utf-8")]).attrs.to_map();
        assert_eq!(meta_name(&attrs), None);
    }

    #[test]
    fn description_first_writer_wins() {
        let mut info = PageInfo::default();
        apply_meta(&meta(&[("name", "description"), ("content", "first")]), &mut info);
        apply_meta(&meta(&[("property", "og:description"), ("content", "second")]), &mut info);
        assert_eq!(
            info.main_content.description.map(|d| d.text),
            Some("first".to_string())
        );
        assert_eq!(info.html.metas.len(), 2);
    }

    #[test]
    fn og_title_overwrites() {
        let mut info = PageInfo::default();
        apply_meta(&meta(&[("property", "og:title"), ("content", "One")]), &mut info);
        apply_meta(&meta(&[("property", "og:title"), ("content", "Two")]), &mut info);
        assert_eq!(info.main_content.title.as_deref(), Some("Two"));
    }

    #[test]
    fn og_type_article_sets_kind() {
        let mut info = PageInfo::default();
        apply_meta(&meta(&[("property", "og:type"), ("content", "website")]), &mut info);
        assert_eq!(info.main_content.kind, None);
        apply_meta(&meta(&[("property", "og:type"), ("content", "article")]), &mut info);
        assert_eq!(info.main_content.kind.as_deref(), Some("article"));
    }

    #[test]
    fn og_url_sets_url_if_unset() {
        let mut info = PageInfo::default();
        apply_meta(&meta(&[("property", "og:url"), ("content", "https://x.test/a")]), &mut info);
        apply_meta(&meta(&[("property", "og:url"), ("content", "https://x.test/b")]), &mut info);
        assert_eq!(info.url.as_deref(), Some("https://x.test/a"));
        assert_eq!(info.base_url.as_deref(), Some("https://x.test/a"));
    }

    #[test]
    fn sailthru_author_merges_by_name() {
        let mut info = PageInfo::default();
        apply_meta(&meta(&[("name", "sailthru.author"), ("content", "Ada")]), &mut info);
        apply_meta(&meta(&[("name", "author"), ("content", "Ada")]), &mut info);
        assert_eq!(info.main_content.author, vec![Entity::named("Ada")]);
    }

    #[test]
    fn raw_mapping_is_deduplicated() {
        let mut info = PageInfo::default();
        apply_meta(&meta(&[("name", "a"), ("name", "b"), ("content", "c")]), &mut info);
        let recorded: Vec<_> = info.html.metas[0].iter().collect();
        assert_eq!(recorded, vec![("name", "b"), ("content", "c")]);
    }
}
