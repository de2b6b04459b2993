//! Selecting the references a command should print

use tracing::debug;

use crate::category::Category;
use crate::error::LookupError;
use crate::reference::References;

/// Filter one collection, listing titles when there is no filter
pub fn select(collection: &References, filter: Option<&str>) -> References {
    match filter {
        Some(filter) => collection.by_name(filter),
        None => {
            debug!("no filter, listing titles");
            collection.titles()
        }
    }
}

/// Lookup across every category
///
/// A titles listing ignores any filter. Otherwise a filter is required.
pub fn select_everywhere(filter: Option<&str>, titles: bool) -> Result<References, LookupError> {
    if titles {
        return Ok(Category::everything().titles());
    }

    let filter = filter.ok_or(LookupError::MissingFilter)?;
    Ok(Category::everything().by_name(filter))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_without_filter_lists_titles() {
        let methods = Category::Methods.collection();
        let listed = select(&methods, None);

        assert_eq!(listed.len(), methods.len());
        assert!(listed.iter().all(|r| r.description.is_empty()));
    }

    #[test]
    fn test_select_with_filter() {
        let statuses = Category::Statuses.collection();
        assert_eq!(select(&statuses, Some("418"))[0].title, "I'm a teapot");
        assert!(select(&statuses, Some("999")).is_empty());
        assert!(select(&statuses, Some("GET")).is_empty());
    }

    #[test]
    fn test_everywhere_requires_filter() {
        assert_eq!(select_everywhere(None, false), Err(LookupError::MissingFilter));
    }

    #[test]
    fn test_everywhere_titles_ignore_filter() {
        let listed = select_everywhere(Some("GET"), true).unwrap();
        assert_eq!(listed, Category::everything().titles());
    }

    #[test]
    fn test_everywhere_searches_all_categories() {
        assert_eq!(select_everywhere(Some("GET"), false).unwrap()[0].name, "GET");
        assert_eq!(select_everywhere(Some("200"), false).unwrap()[0].title, "OK");

        let wildcard = select_everywhere(Some("Content-*"), false).unwrap();
        assert!(wildcard.len() > 1);
        assert!(wildcard.iter().all(|r| r.name.starts_with("Content-")));
    }

    #[test]
    fn test_everywhere_wildcard_follows_lookup_order() {
        let everything = select_everywhere(Some("*"), false).unwrap();
        assert_eq!(everything, Category::everything());
        assert_eq!(everything[0].name, "100");
    }
}
