//! Reference entries and name matching
//!
//! A filter selects entries by exact name first. Only when nothing matches
//! exactly is a trailing `*` treated as a prefix wildcard, so `Accept`
//! finds just the Accept header while `Accept*` also finds
//! Accept-Language, Accept-Encoding and friends.

use serde::Serialize;
use std::ops::Deref;
use tracing::debug;

/// Suffix that turns a filter into a prefix match
pub const WILDCARD: char = '*';

/// A single documented HTTP method, status code or header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub name: &'static str,
    pub title: &'static str,
    #[serde(skip_serializing_if = "is_blank")]
    pub description: &'static str,
}

impl Reference {
    pub const fn new(name: &'static str, title: &'static str, description: &'static str) -> Self {
        Self {
            name,
            title,
            description,
        }
    }

    /// The same entry without its description
    pub fn title_only(&self) -> Self {
        Self {
            description: "",
            ..*self
        }
    }

    /// Name and title on one line, the lead of both render modes
    pub fn heading(&self) -> String {
        if self.title.is_empty() {
            self.name.to_string()
        } else {
            format!("{} - {}", self.name, self.title)
        }
    }
}

fn is_blank(text: &&str) -> bool {
    text.is_empty()
}

/// An ordered collection of references
///
/// Order is display order. Collections built from several categories keep
/// each category's entries together in the order they were joined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct References(Vec<Reference>);

impl References {
    pub fn new(references: Vec<Reference>) -> Self {
        Self(references)
    }

    /// Join several slices into one collection, preserving order
    pub fn concat(parts: &[&[Reference]]) -> Self {
        Self(parts.iter().flat_map(|part| part.iter().copied()).collect())
    }

    /// Every entry reduced to its name and title
    pub fn titles(&self) -> References {
        self.0.iter().map(Reference::title_only).collect()
    }

    /// Entries selected by `filter`
    ///
    /// Exact name matches win. Without one, a filter ending in `*` selects
    /// every entry whose name starts with the part before the `*`. Anything
    /// else selects nothing; an empty result is a normal outcome.
    pub fn by_name(&self, filter: &str) -> References {
        let exact: References = self.0.iter().filter(|r| r.name == filter).copied().collect();
        if !exact.is_empty() {
            debug!(filter, count = exact.len(), "exact name match");
            return exact;
        }

        match filter.strip_suffix(WILDCARD) {
            Some(prefix) => {
                let matched: References = self
                    .0
                    .iter()
                    .filter(|r| r.name.starts_with(prefix))
                    .copied()
                    .collect();
                debug!(prefix, count = matched.len(), "wildcard prefix match");
                matched
            }
            None => {
                debug!(filter, "no exact match and no wildcard");
                References::default()
            }
        }
    }
}

impl Deref for References {
    type Target = [Reference];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<&[Reference]> for References {
    fn from(references: &[Reference]) -> Self {
        Self(references.to_vec())
    }
}

impl FromIterator<Reference> for References {
    fn from_iter<I: IntoIterator<Item = Reference>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a References {
    type Item = &'a Reference;
    type IntoIter = std::slice::Iter<'a, Reference>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    fn accept_family() -> References {
        References::new(vec![
            Reference::new("Accept", "Media types the client understands", "Long text."),
            Reference::new("Accept-Language", "Preferred natural languages", "More text."),
            Reference::new("Age", "Seconds spent in a proxy cache", "Even more."),
        ])
    }

    fn names(references: &References) -> Vec<&'static str> {
        references.iter().map(|r| r.name).collect()
    }

    #[test]
    fn test_exact_match_wins_over_prefix() {
        let found = accept_family().by_name("Accept");
        assert_eq!(names(&found), vec!["Accept"]);
        assert_eq!(found[0].description, "Long text.");
    }

    #[test]
    fn test_wildcard_matches_prefix_in_order() {
        let found = accept_family().by_name("Accept*");
        assert_eq!(names(&found), vec!["Accept", "Accept-Language"]);
    }

    #[test]
    fn test_lone_wildcard_matches_everything() {
        let all = accept_family();
        assert_eq!(all.by_name("*"), all);
    }

    #[test]
    fn test_no_implicit_prefix_matching() {
        assert!(accept_family().by_name("Acc").is_empty());
        assert!(accept_family().by_name("").is_empty());
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert!(accept_family().by_name("accept").is_empty());
        assert!(accept_family().by_name("accept*").is_empty());
    }

    #[test]
    fn test_exact_match_returns_every_duplicate() {
        let refs = References::new(vec![
            Reference::new("X", "first", ""),
            Reference::new("Y", "other", ""),
            Reference::new("X", "second", ""),
        ]);
        let found = refs.by_name("X");
        let titles: Vec<_> = found.iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[test]
    fn test_every_entry_found_by_own_name() {
        let all = accept_family();
        for entry in &all {
            assert!(all.by_name(entry.name).contains(entry));
        }
    }

    #[test]
    fn test_every_dataset_entry_found_by_own_name() {
        let all = Category::everything();
        for entry in &all {
            let found = all.by_name(entry.name);
            assert!(found.contains(entry), "{} not found by name", entry.name);
            assert_eq!(found.len(), 1, "{} collides across categories", entry.name);
        }
    }

    #[test]
    fn test_titles_keep_order_and_drop_descriptions() {
        let all = accept_family();
        let titles = all.titles();

        assert_eq!(titles.len(), all.len());
        for (title, full) in titles.iter().zip(all.iter()) {
            assert_eq!(title.name, full.name);
            assert_eq!(title.title, full.title);
            assert!(title.description.is_empty());
        }
    }

    #[test]
    fn test_concat_preserves_part_order() {
        let first = [Reference::new("B", "", "")];
        let second = [Reference::new("A", "", ""), Reference::new("C", "", "")];
        let joined = References::concat(&[&first, &second]);
        assert_eq!(names(&joined), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_heading() {
        assert_eq!(Reference::new("GET", "Fetch", "").heading(), "GET - Fetch");
        assert_eq!(Reference::new("GET", "", "").heading(), "GET");
    }

    #[test]
    fn test_titles_serialize_without_description() {
        let json = serde_json::to_value(accept_family().titles()).unwrap();
        assert_eq!(json[0]["name"], "Accept");
        assert!(json[0].get("description").is_none());

        let full = serde_json::to_value(accept_family()).unwrap();
        assert_eq!(full[0]["description"], "Long text.");
    }
}
