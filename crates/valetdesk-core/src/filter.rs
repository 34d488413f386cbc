//! View filter: the displayed subset of the item store.
//!
//! A filter combines a free-text query with a [`StatusCategory`] tab. Both
//! predicates must pass. Filtering is pure: it borrows the source slice,
//! returns references in source order and never touches the store, so it can
//! run on every keystroke.
//!
//! # Examples
//!
//! ```rust
//! use valetdesk_core::{ViewFilter, models::StatusCategory};
//! # use valetdesk_core::models::{Item, ItemId, ItemStatus};
//! # let item = |id: &str, title: &str, status| Item {
//! #     id: ItemId::from(id),
//! #     title: title.to_string(),
//! #     description: None,
//! #     vehicle_number: "MH12AB1234".to_string(),
//! #     level: None,
//! #     slot: None,
//! #     entry_time: jiff::civil::date(2026, 1, 31).at(10, 0, 0, 0),
//! #     due_date: None,
//! #     status,
//! # };
//! let items = vec![
//!     item("1", "Blue Ford Mustang", ItemStatus::Active),
//!     item("2", "Red Maruti Swift", ItemStatus::Completed),
//! ];
//!
//! let filter = ViewFilter::new("ford", StatusCategory::Active);
//! let visible = filter.apply(&items);
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].title, "Blue Ford Mustang");
//! ```

use crate::models::{Item, StatusCategory};

/// Search text plus status tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewFilter {
    query: String,
    needle: String,
    category: StatusCategory,
}

impl ViewFilter {
    /// Creates a filter from raw search text and a category.
    pub fn new(query: impl Into<String>, category: StatusCategory) -> Self {
        let query = query.into();
        let needle = query.trim().to_lowercase();
        Self {
            query,
            needle,
            category,
        }
    }

    /// Filter that passes every item.
    pub fn all() -> Self {
        Self::default()
    }

    /// Same category, new search text.
    pub fn with_query(self, query: impl Into<String>) -> Self {
        Self::new(query, self.category)
    }

    /// Same search text, new category.
    pub fn with_category(self, category: StatusCategory) -> Self {
        Self { category, ..self }
    }

    /// Search text as entered.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> StatusCategory {
        self.category
    }

    /// Whether the filter lets everything through.
    pub fn is_unfiltered(&self) -> bool {
        self.needle.is_empty() && self.category == StatusCategory::All
    }

    /// Case-insensitive substring match on title or vehicle number.
    ///
    /// An empty query matches every item.
    pub fn matches_query(&self, item: &Item) -> bool {
        self.needle.is_empty()
            || item.title.to_lowercase().contains(&self.needle)
            || item.vehicle_number.to_lowercase().contains(&self.needle)
    }

    /// Status tab match.
    pub fn matches_category(&self, item: &Item) -> bool {
        self.category.admits(item.status)
    }

    /// Both predicates.
    pub fn matches(&self, item: &Item) -> bool {
        self.matches_category(item) && self.matches_query(item)
    }

    /// The matching items, in source order.
    pub fn apply<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}
