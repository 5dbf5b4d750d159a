//! Client-side listing rules.
//!
//! The API has no search or ordering parameters. Clients fetch whole
//! collections and narrow or order them locally with these helpers.

use std::cmp::Reverse;

use crate::categories::ALL_CATEGORIES;
use crate::types::{Identified, Timestamp};

/// A record that can be searched by title and filtered by category.
pub trait Searchable {
    fn title(&self) -> &str;
    fn category(&self) -> &str;
}

/// A record with a creation time.
pub trait Dated: Identified {
    fn created_at(&self) -> Timestamp;
}

/// A record pinned to a calendar year.
pub trait Yearly {
    fn year(&self) -> i32;
}

/// Title substring search plus optional category selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    query: String,
    category: Option<String>,
}

impl ListingFilter {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
            category: None,
        }
    }

    /// Restrict to one category. `"all"` clears the restriction.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into().to_lowercase();
        self.category = (category != ALL_CATEGORIES).then_some(category);
        self
    }

    /// Case-insensitive on both the title substring and the category.
    /// An empty query matches every title.
    pub fn matches<T: Searchable>(&self, item: &T) -> bool {
        if !self.query.is_empty() && !item.title().to_lowercase().contains(&self.query) {
            return false;
        }
        match &self.category {
            Some(category) => item.category().to_lowercase() == *category,
            None => true,
        }
    }

    pub fn apply<T: Searchable + Clone>(&self, items: &[T]) -> Vec<T> {
        items.iter().filter(|item| self.matches(*item)).cloned().collect()
    }
}

/// Newest first; rows created in the same instant fall back to id, highest first.
pub fn sort_newest_first<T: Dated>(items: &mut [T]) {
    items.sort_by_key(|item| Reverse((item.created_at(), item.id())));
}

/// Ascending by year. The sort is stable, so equal years keep the order the
/// server returned them in.
pub fn sort_by_year<T: Yearly>(items: &mut [T]) {
    items.sort_by_key(|item| item.year());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DbId;
    use chrono::{TimeZone, Utc};

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: DbId,
        title: &'static str,
        category: &'static str,
        created: i64,
        year: i32,
    }

    impl Identified for Item {
        fn id(&self) -> DbId {
            self.id
        }
    }

    impl Searchable for Item {
        fn title(&self) -> &str {
            self.title
        }
        fn category(&self) -> &str {
            self.category
        }
    }

    impl Dated for Item {
        fn created_at(&self) -> Timestamp {
            Utc.timestamp_opt(self.created, 0).unwrap()
        }
    }

    impl Yearly for Item {
        fn year(&self) -> i32 {
            self.year
        }
    }

    fn item(id: DbId, title: &'static str, category: &'static str) -> Item {
        Item {
            id,
            title,
            category,
            created: 1_700_000_000 + id,
            year: 2000,
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let items = vec![item(1, "Dal", "veg"), item(2, "Fish Fry", "non-veg")];
        assert_eq!(ListingFilter::default().apply(&items).len(), 2);
    }

    #[test]
    fn title_search_is_case_insensitive_substring() {
        let items = vec![
            item(1, "Sunday Curry", "veg"),
            item(2, "Lemon Rice", "veg"),
            item(3, "Egg CURRY", "non-veg"),
        ];
        let found = ListingFilter::new("curry").apply(&items);
        let ids: Vec<_> = found.iter().map(|i| i.id).collect();
        assert_eq!(ids, [1, 3]);
    }

    #[test]
    fn category_must_match_when_selected() {
        let items = vec![item(1, "Sunday Curry", "veg"), item(2, "Egg Curry", "non-veg")];
        let found = ListingFilter::new("curry").with_category("Non-Veg").apply(&items);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);
    }

    #[test]
    fn all_category_clears_selection() {
        let items = vec![item(1, "A", "veg"), item(2, "B", "non-veg")];
        let filter = ListingFilter::new("").with_category("veg").with_category("all");
        assert_eq!(filter.apply(&items).len(), 2);
    }

    #[test]
    fn newest_first_orders_by_creation_then_id() {
        let mut items = vec![item(1, "a", "veg"), item(3, "c", "veg"), item(2, "b", "veg")];
        items[1].created = items[0].created;
        sort_newest_first(&mut items);
        let ids: Vec<_> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, [2, 3, 1]);
    }

    #[test]
    fn year_sort_is_stable_for_equal_years() {
        let mut items: Vec<Item> = [(1, 1990), (2, 1985), (3, 1990), (4, 1985), (5, 1970)]
            .into_iter()
            .map(|(id, year)| Item {
                year,
                ..item(id, "note", "")
            })
            .collect();
        sort_by_year(&mut items);
        let ids: Vec<_> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, [5, 2, 4, 1, 3]);
    }
}
