//! Collection wrapper types for displaying groups of items.

use std::{fmt, ops::Index};

use crate::models::Item;

/// Newtype wrapper for displaying a filtered item list.
///
/// Holds references into the store so a view can be formatted without
/// cloning the cache.
///
/// # Examples
///
/// ```rust
/// use valetdesk_core::display::Items;
///
/// let empty = Items(Vec::new());
/// assert_eq!(empty.to_string(), "No tickets found.\n");
/// ```
pub struct Items<'a>(pub Vec<&'a Item>);

impl<'a> Items<'a> {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of items in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the items.
    pub fn iter(&self) -> impl Iterator<Item = &'a Item> + '_ {
        self.0.iter().copied()
    }
}

impl<'a> Index<usize> for Items<'a> {
    type Output = Item;

    fn index(&self, index: usize) -> &Self::Output {
        self.0[index]
    }
}

impl<'a> From<&'a [Item]> for Items<'a> {
    fn from(items: &'a [Item]) -> Self {
        Self(items.iter().collect())
    }
}

impl fmt::Display for Items<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No tickets found.")
        } else {
            for item in &self.0 {
                write!(f, "{}", item.card())?;
            }
            Ok(())
        }
    }
}
