//! Data models for items.
//!
//! This module contains the domain model exchanged with the item service.
//! Display implementations live in [`crate::display::models`] so the data
//! structures stay free of presentation logic.
//!
//! # Wire format
//!
//! Items arrive as JSON objects:
//!
//! ```json
//! {
//!   "id": "1",
//!   "title": "Ticket #001 - Blue Honda Civic",
//!   "description": "Parked at Slot A1, Level 2",
//!   "vehicle_number": "MH12AB1234",
//!   "slot": "A1",
//!   "level": "2",
//!   "entry_time": "2026-01-31T10:00:00",
//!   "status": "active"
//! }
//! ```
//!
//! Empty optional strings decode as `None`, and `assignee` is accepted in
//! place of `vehicle_number`.
//!
//! # Examples
//!
//! ```rust
//! use valetdesk_core::models::{Item, ItemStatus};
//!
//! let item: Item = serde_json::from_str(
//!     r#"{"id":"1","title":"Ticket #001","description":"","vehicle_number":"MH12AB1234",
//!         "slot":"A1","level":"","entry_time":"2026-01-31T10:00:00","status":"active"}"#,
//! )?;
//! assert_eq!(item.status, ItemStatus::Active);
//! assert_eq!(item.description, None);
//! assert_eq!(item.slot.as_deref(), Some("A1"));
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod item;
pub mod patch;
pub mod status;
pub mod summary;
pub mod wire;


pub use item::{Item, ItemId};
pub use patch::ItemPatch;
pub use status::{ItemStatus, StatusCategory};
pub use summary::ItemSummary;
pub use wire::parse_service_time;
