//! JSON-LD reconciliation.
//!
//! Only the simple case is handled: a page whose `application/ld+json`
//! scripts yield exactly one node. Graphs of several nodes are left in
//! `PageInfo::json_ld` untouched, since merging them would require following
//! references between nodes.

use serde_json::{Map, Value};

use crate::patterns::ARTICLE_TYPE;
use crate::result::{Description, Entity, MainContent, PageInfo, UrlInfo};

/// Merge the captured JSON-LD node into `info.main_content`.
///
/// Every field is first-writer-wins, so values already taken from `<meta>`
/// tags are kept. Returns whether a node was reconciled.
pub fn fill_from_json_ld(info: &mut PageInfo) -> bool {
    let [node] = info.json_ld.as_slice() else {
        if !info.json_ld.is_empty() {
            log::debug!(
                "skipping JSON-LD reconciliation: {} top-level nodes",
                info.json_ld.len()
            );
        }
        return false;
    };
    let node = node.clone();

    if let Value::Object(map) = &node {
        fill_from_node(&mut info.main_content, map);
    } else {
        log::debug!("JSON-LD node is not an object; keeping it verbatim only");
    }
    info.main_content.json_ld = Some(node);
    true
}

fn fill_from_node(main: &mut MainContent, node: &Map<String, Value>) {
    if main.kind.is_none() && schema_types(node).any(|t| ARTICLE_TYPE.is_match(t)) {
        main.kind = Some("article".to_string());
    }

    if let Some(headline) = string_field(node, "headline") {
        if main.headline.is_none() {
            main.headline = Some(headline.to_string());
            if main.title.is_none() {
                main.title = Some(headline.to_string());
            }
        }
    }

    if let Some(date) = string_field(node, "datePublished") {
        if main.date_published.is_none() {
            main.date_published = Some(date.to_string());
        }
    }

    if let Some(date) = string_field(node, "dateModified") {
        if main.date_modified.is_none() {
            main.date_modified = Some(date.to_string());
        }
    }

    if let Some(text) = string_field(node, "description") {
        main.set_description(Description { text: text.to_string() });
    }

    match node.get("author") {
        Some(Value::Array(authors)) => {
            for author in authors {
                if let Some(candidate) = entity_from_json_ld(author) {
                    main.add_author(candidate);
                }
            }
        }
        Some(author @ (Value::Object(_) | Value::String(_))) => {
            if let Some(candidate) = entity_from_json_ld(author) {
                main.add_author(candidate);
            }
        }
        _ => {}
    }

    if let Some(publisher @ Value::Object(fields)) = node.get("publisher") {
        if !fields.is_empty() {
            if let Some(candidate) = entity_from_json_ld(publisher) {
                // Publishers are identified by name and url only.
                main.add_feed(Entity { same_as: Vec::new(), ..candidate });
            }
        }
    }
}

/// `@type` values of a node, whether given as a string or a list.
fn schema_types(node: &Map<String, Value>) -> impl Iterator<Item = &str> {
    let values: &[Value] = match node.get("@type") {
        Some(Value::Array(types)) => types,
        Some(single @ Value::String(_)) => std::slice::from_ref(single),
        _ => &[],
    };
    values.iter().filter_map(Value::as_str)
}

fn string_field<'a>(node: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    node.get(key).and_then(Value::as_str)
}

/// `sameAs` given as a single URL or a list of URLs.
fn same_as_urls(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(url)) => vec![url.clone()],
        Some(Value::Array(urls)) => urls
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Candidate identity for an author or publisher entry.
fn entity_from_json_ld(value: &Value) -> Option<Entity> {
    match value {
        Value::String(name) => Some(Entity {
            name: Some(name.clone()),
            json_ld: Some(value.clone()),
            ..Entity::default()
        }),
        Value::Object(fields) => {
            let url = string_field(fields, "url").map(str::to_string);
            let url_has_info = if url.is_some() { vec![UrlInfo::Unknown] } else { Vec::new() };
            Some(Entity {
                name: string_field(fields, "name").map(str::to_string),
                url,
                same_as: same_as_urls(fields.get("sameAs")),
                url_has_info,
                json_ld: Some(value.clone()),
                ..Entity::default()
            })
        }
        _ => None,
    }
}
