//! Display formatting for items and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrapper types here format collections and operation outcomes. All
//! output is markdown, rendered by the CLI's terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Markdown      │
//! │  (Item, ...)    │───▶│ Result Types    │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: the item list ([`Items`])
//! - [`results`]: create/update/delete outcomes
//! - [`status`]: success and failure alerts ([`OperationStatus`])
//! - [`datetime`]: timestamp formatting
//! - [`models`]: Display implementations for domain models
//!
//! # Examples
//!
//! ```rust
//! use valetdesk_core::{
//!     display::{CreateResult, OperationStatus},
//!     models::{Item, ItemId, ItemStatus},
//! };
//!
//! let item = Item {
//!     id: ItemId::from("a1b2c3d4"),
//!     title: "Blue Ford Mustang".to_string(),
//!     description: Some("Near the elevator".to_string()),
//!     vehicle_number: "KA01XY0001".to_string(),
//!     level: Some("2".to_string()),
//!     slot: Some("A-42".to_string()),
//!     entry_time: jiff::civil::date(2026, 2, 1).at(18, 42, 0, 0),
//!     due_date: None,
//!     status: ItemStatus::Active,
//! };
//!
//! let output = CreateResult::new(item).to_string();
//! assert!(output.contains("Created ticket with ID: a1b2c3d4"));
//! assert!(output.contains("KA01XY0001"));
//!
//! let alert = OperationStatus::success("Ticket created successfully");
//! assert_eq!(alert.to_string(), "Success: Ticket created successfully\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::Items;
pub use datetime::ServiceDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
