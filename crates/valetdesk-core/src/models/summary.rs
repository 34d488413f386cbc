//! Item summary types and functionality.

use serde::{Deserialize, Serialize};

use super::{Item, ItemStatus};

/// Overview counts for a sequence of items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSummary {
    /// Number of items
    pub total: u32,
    /// Number of active items
    pub active: u32,
    /// Number of completed items
    pub completed: u32,
}

impl ItemSummary {
    /// Count items by status.
    pub fn from_items<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a Item>,
    {
        items
            .into_iter()
            .fold(Self::default(), |mut summary, item| {
                summary.total += 1;
                match item.status {
                    ItemStatus::Active => summary.active += 1,
                    ItemStatus::Completed => summary.completed += 1,
                }
                summary
            })
    }
}

impl From<&[Item]> for ItemSummary {
    fn from(items: &[Item]) -> Self {
        Self::from_items(items)
    }
}
