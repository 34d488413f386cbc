//! Partial updates applied to cached items.

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

use super::{Item, ItemStatus};

/// Field set for an optimistic local patch.
///
/// `id` and `entry_time` are assigned by the service and cannot be patched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ItemStatus>,
}

impl ItemPatch {
    /// Patch that only changes the status.
    pub fn status(status: ItemStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Whether the patch carries no fields.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Copy every present field onto `item`.
    ///
    /// Status legality is checked by the caller; this only writes fields.
    pub(crate) fn apply_to(&self, item: &mut Item) {
        if let Some(title) = &self.title {
            item.title = title.clone();
        }
        if let Some(description) = &self.description {
            item.description = Some(description.clone()).filter(|d| !d.is_empty());
        }
        if let Some(vehicle_number) = &self.vehicle_number {
            item.vehicle_number = vehicle_number.clone();
        }
        if let Some(level) = &self.level {
            item.level = Some(level.clone()).filter(|l| !l.is_empty());
        }
        if let Some(slot) = &self.slot {
            item.slot = Some(slot.clone()).filter(|s| !s.is_empty());
        }
        if let Some(due_date) = self.due_date {
            item.due_date = Some(due_date);
        }
        if let Some(status) = self.status {
            item.status = status;
        }
    }
}
