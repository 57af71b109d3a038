//! Identity matching for authors and feeds.
//!
//! Two mentions denote the same entity when their names are equal (two
//! missing names count as equal), or when the URL sets `{url} ∪ sameAs` of
//! the two overlap. Each incoming candidate
//! is matched against the entities already present; existing entities are
//! never re-clustered afterwards.

use crate::result::{Description, Entity, MainContent};

impl Entity {
    /// Entity known only by name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..Self::default() }
    }

    /// `url` followed by `sameAs`.
    pub fn identity_urls(&self) -> impl Iterator<Item = &str> {
        self.url.iter().chain(&self.same_as).map(String::as_str)
    }

    /// Whether `self` and `other` denote the same entity.
    ///
    /// Reflexive and symmetric. A nameless entity matches any other nameless
    /// one.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.name == other.name
            || self
                .identity_urls()
                .any(|url| other.identity_urls().any(|o| o == url))
    }

    /// Fold `other` into `self`.
    ///
    /// Fields present in `other` overwrite those of `self`, except `sameAs`,
    /// which becomes the duplicate-free union in first-seen order.
    pub fn merge_from(&mut self, other: Self) {
        let Self { name, generic_name, url, same_as, url_has_info, html_link, json_ld } = other;
        if name.is_some() {
            self.name = name;
        }
        if generic_name.is_some() {
            self.generic_name = generic_name;
        }
        if url.is_some() {
            self.url = url;
        }
        for same in same_as {
            if !self.same_as.contains(&same) {
                self.same_as.push(same);
            }
        }
        if !url_has_info.is_empty() {
            self.url_has_info = url_has_info;
        }
        if html_link.is_some() {
            self.html_link = html_link;
        }
        if json_ld.is_some() {
            self.json_ld = json_ld;
        }
    }
}

/// Merge `candidate` into the first matching entity of `entities`, or append
/// it when none matches.
pub fn merge_entity(entities: &mut Vec<Entity>, candidate: Entity) {
    match entities.iter_mut().find(|existing| existing.matches(&candidate)) {
        Some(existing) => existing.merge_from(candidate),
        None => entities.push(candidate),
    }
}

impl MainContent {
    /// Register an author mention.
    pub fn add_author(&mut self, author: Entity) {
        merge_entity(&mut self.author, author);
    }

    /// Register a containing feed or publisher mention.
    pub fn add_feed(&mut self, feed: Entity) {
        merge_entity(&mut self.containing_feeds, feed);
    }

    /// Set the description unless one is already set.
    pub fn set_description(&mut self, description: Description) {
        if self.description.is_none() {
            self.description = Some(description);
        }
    }
}
