//! Display implementations for domain models.
//!
//! - [`Item`] formats as a full detail page.
//! - [`Item::card`] is the compact list form used by [`super::Items`].
//! - [`ItemSummary`] formats as the one-line overview.

use std::fmt;

use super::datetime::ServiceDateTime;
use crate::models::{Item, ItemStatus, ItemSummary, StatusCategory};

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Item {
    /// `vehicle • Level 2 • Slot A1`, skipping absent locators.
    pub fn locator_line(&self) -> String {
        let mut parts = vec![self.vehicle_number.clone()];
        if let Some(level) = &self.level {
            parts.push(format!("Level {level}"));
        }
        if let Some(slot) = &self.slot {
            parts.push(format!("Slot {slot}"));
        }
        parts.join(" • ")
    }

    /// Compact list card.
    pub fn card(&self) -> ItemCard<'_> {
        ItemCard(self)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Status: {}", self.status.badge())?;
        writeln!(f, "- Vehicle: {}", self.vehicle_number)?;
        if let Some(level) = &self.level {
            writeln!(f, "- Level: {level}")?;
        }
        if let Some(slot) = &self.slot {
            writeln!(f, "- Slot: {slot}")?;
        }
        writeln!(f, "- Entry: {}", ServiceDateTime(&self.entry_time))?;
        if let Some(due) = &self.due_date {
            writeln!(f, "- Due: {}", ServiceDateTime(due))?;
        }

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        Ok(())
    }
}

/// List-card view of an [`Item`].
pub struct ItemCard<'a>(&'a Item);

impl fmt::Display for ItemCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let item = self.0;
        writeln!(
            f,
            "## {} (ID: {}) {}",
            item.title,
            item.id,
            item.status.badge()
        )?;
        writeln!(f)?;
        writeln!(f, "{}", item.locator_line())?;
        if let Some(desc) = &item.description {
            writeln!(f, "{desc}")?;
        }
        write!(f, "*{}*", ServiceDateTime(&item.entry_time))?;
        if let Some(due) = &item.due_date {
            write!(f, " · due {}", ServiceDateTime(due))?;
        }
        writeln!(f)?;
        writeln!(f)?; // Blank line between cards

        Ok(())
    }
}

impl fmt::Display for ItemSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "**Overview**: {} total · {} active · {} completed",
            self.total, self.active, self.completed
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::ItemId;

    fn ticket() -> Item {
        Item {
            id: ItemId::from("1"),
            title: "Ticket #001 - Blue Honda Civic".to_string(),
            description: Some("Parked at Slot A1, Level 2".to_string()),
            vehicle_number: "MH12AB1234".to_string(),
            level: Some("2".to_string()),
            slot: Some("A1".to_string()),
            entry_time: date(2026, 1, 31).at(10, 0, 0, 0),
            due_date: None,
            status: ItemStatus::Active,
        }
    }

    #[test]
    fn test_item_detail_display() {
        let output = ticket().to_string();
        assert!(output.starts_with("# Ticket #001 - Blue Honda Civic\n"));
        assert!(output.contains("- Status: ● ACTIVE"));
        assert!(output.contains("- Level: 2"));
        assert!(output.contains("- Entry: 2026-01-31 10:00"));
        assert!(output.contains("Parked at Slot A1, Level 2"));
        assert!(!output.contains("- Due:"));
    }

    #[test]
    fn test_item_card_display() {
        let mut item = ticket();
        item.status = ItemStatus::Completed;
        item.due_date = Some(date(2026, 2, 2).at(9, 0, 0, 0));

        let output = item.card().to_string();
        assert!(output.contains("## Ticket #001 - Blue Honda Civic (ID: 1) ✓ COMPLETED"));
        assert!(output.contains("MH12AB1234 • Level 2 • Slot A1"));
        assert!(output.contains("*2026-01-31 10:00* · due 2026-02-02 09:00"));
    }

    #[test]
    fn test_locator_line_skips_absent_fields() {
        let mut item = ticket();
        item.level = None;
        assert_eq!(item.locator_line(), "MH12AB1234 • Slot A1");
        item.slot = None;
        assert_eq!(item.locator_line(), "MH12AB1234");
    }

    #[test]
    fn test_summary_display() {
        let summary = ItemSummary {
            total: 3,
            active: 2,
            completed: 1,
        };
        assert_eq!(
            summary.to_string(),
            "**Overview**: 3 total · 2 active · 1 completed\n"
        );
    }
}
