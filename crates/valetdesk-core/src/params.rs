//! Parameter structures for ValetDesk operations
//!
//! These structures are shared by every interface (the CLI today) without
//! framework-specific derives. Interface layers define their own argument
//! types and convert into these with `From` impls:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │───▶│  Core Params    │───▶│  Dispatcher /   │
//! │  (clap derives) │    │ (serde only)    │    │  Item Store     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, ValetError},
    filter::ViewFilter,
    models::{ItemId, StatusCategory},
};

/// Form fields for creating a new item.
///
/// Serializes to the `POST /items` request body. The dispatcher borrows the
/// form, so a failed submission leaves every entered value with the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateItem {
    /// Title of the item (required)
    pub title: String,
    /// Free-text notes
    #[serde(default)]
    pub description: String,
    /// Vehicle registration or assignee (required)
    pub vehicle_number: String,
    /// Parking slot
    #[serde(default)]
    pub slot: String,
    /// Parking level
    #[serde(default)]
    pub level: String,
    /// Optional due date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime>,
}

impl CreateItem {
    /// Check the required fields before any request is sent.
    ///
    /// # Errors
    ///
    /// * `ValetError::InvalidInput` - When `title` or `vehicle_number` is
    ///   empty or whitespace
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valetdesk_core::params::CreateItem;
    ///
    /// let form = CreateItem {
    ///     title: "Blue Ford Mustang".to_string(),
    ///     vehicle_number: "KA01XY0001".to_string(),
    ///     ..Default::default()
    /// };
    /// assert!(form.validate().is_ok());
    ///
    /// let missing = CreateItem {
    ///     title: "Blue Ford Mustang".to_string(),
    ///     ..Default::default()
    /// };
    /// assert!(missing.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ValetError::invalid_input("title").with_reason("Title is required"));
        }
        if self.vehicle_number.trim().is_empty() {
            return Err(ValetError::invalid_input("vehicle_number")
                .with_reason("Vehicle number is required"));
        }
        Ok(())
    }
}

/// Parameters for listing items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListItems {
    /// Free-text search over title and vehicle number
    #[serde(default)]
    pub query: String,
    /// Status tab
    #[serde(default)]
    pub category: StatusCategory,
}

impl From<&ListItems> for ViewFilter {
    fn from(params: &ListItems) -> Self {
        ViewFilter::new(params.query.clone(), params.category)
    }
}

/// Parameters for deleting an item.
///
/// Deletion is destructive, so the caller must set `confirmed` after an
/// explicit confirmation step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteItem {
    /// The ID of the item to delete
    pub id: ItemId,
    /// Whether the user confirmed the deletion
    #[serde(default)]
    pub confirmed: bool,
}
