//! Status enumerations for items and list categories.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of item statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// Ticket is open (vehicle still parked, task still to do)
    #[default]
    Active,

    /// Ticket is closed
    Completed,
}

impl FromStr for ItemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(ItemStatus::Active),
            "completed" => Ok(ItemStatus::Completed),
            _ => Err(format!("Invalid item status: {s}")),
        }
    }
}

impl ItemStatus {
    /// Wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Active => "active",
            ItemStatus::Completed => "completed",
        }
    }

    /// Whether the client offers a move from `self` to `next`.
    ///
    /// Staying put is always allowed; the only real move is
    /// `active → completed`.
    pub fn can_transition_to(&self, next: ItemStatus) -> bool {
        matches!(
            (self, next),
            (ItemStatus::Active, _) | (ItemStatus::Completed, ItemStatus::Completed)
        )
    }

    /// Upper-case badge text shown next to item titles.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valetdesk_core::models::ItemStatus;
    ///
    /// assert_eq!(ItemStatus::Active.badge(), "● ACTIVE");
    /// assert_eq!(ItemStatus::Completed.badge(), "✓ COMPLETED");
    /// ```
    pub fn badge(&self) -> &'static str {
        match self {
            ItemStatus::Active => "● ACTIVE",
            ItemStatus::Completed => "✓ COMPLETED",
        }
    }
}

/// Categorical list filter shown as tabs above the item list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusCategory {
    /// Every item
    #[default]
    All,

    /// Only items whose status is `active`
    Active,

    /// Only items whose status is `completed`
    Completed,
}

impl FromStr for StatusCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(StatusCategory::All),
            "active" => Ok(StatusCategory::Active),
            "completed" | "done" => Ok(StatusCategory::Completed),
            _ => Err(format!(
                "Invalid status filter: {s} (expected all, active or completed)"
            )),
        }
    }
}

impl StatusCategory {
    /// String representation used by the CLI and in list headers.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCategory::All => "all",
            StatusCategory::Active => "active",
            StatusCategory::Completed => "completed",
        }
    }

    /// The status this category selects, or `None` for [`StatusCategory::All`].
    pub fn status(&self) -> Option<ItemStatus> {
        match self {
            StatusCategory::All => None,
            StatusCategory::Active => Some(ItemStatus::Active),
            StatusCategory::Completed => Some(ItemStatus::Completed),
        }
    }

    /// Whether an item with `status` belongs in this category.
    pub fn admits(&self, status: ItemStatus) -> bool {
        self.status().map_or(true, |wanted| wanted == status)
    }
}
