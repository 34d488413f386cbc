//! Item model definition and related functionality.

use std::fmt;

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

use super::{
    wire::{empty_as_none, optional_service_time, service_time},
    ItemStatus,
};

/// Opaque identifier assigned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as sent on the wire.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A parking ticket or task as exposed by the item service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Unique identifier, immutable after creation
    pub id: ItemId,

    /// Display title
    pub title: String,

    /// Free-text notes
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,

    /// Vehicle registration, or the assignee for task items
    #[serde(alias = "assignee")]
    pub vehicle_number: String,

    /// Parking level
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub level: Option<String>,

    /// Parking slot
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub slot: Option<String>,

    /// When the service recorded the item
    #[serde(with = "service_time")]
    pub entry_time: DateTime,

    /// Optional due date, display only
    #[serde(
        default,
        with = "optional_service_time",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<DateTime>,

    /// Current status
    pub status: ItemStatus,
}

impl Item {
    /// Whether the item is still open.
    pub fn is_active(&self) -> bool {
        self.status == ItemStatus::Active
    }
}
