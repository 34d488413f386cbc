//! Core library for the ValetDesk client.
//!
//! ValetDesk tracks parking tickets (or tasks) held by a remote REST
//! service. This crate is everything the client does besides drawing:
//!
//! - [`service`]: the [`ItemService`] seam and its HTTP implementation
//! - [`store`]: the in-memory [`ItemStore`] of the last-fetched collection
//! - [`filter`]: the pure [`ViewFilter`] (search text plus status tab)
//! - [`dispatcher`]: the [`MutationDispatcher`] for create, complete and
//!   delete
//! - [`navigation`]: the destination stack whose back-navigation re-fetches
//! - [`display`]: markdown formatting of items and results
//! - [`config`]: base URL resolution
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use valetdesk_core::{
//!     ClientConfigBuilder, HttpItemService, ItemService, ItemStore, MutationDispatcher,
//!     ViewFilter, models::StatusCategory, params::CreateItem,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfigBuilder::new().build()?;
//! let service: Arc<dyn ItemService> = Arc::new(HttpItemService::new(&config)?);
//!
//! let mut store = ItemStore::new(service.clone());
//! let dispatcher = MutationDispatcher::new(service);
//!
//! store.refresh().await?;
//! for item in store.view(&ViewFilter::new("ford", StatusCategory::Active)) {
//!     println!("{}", item.card());
//! }
//!
//! let form = CreateItem {
//!     title: "Blue Ford Mustang".to_string(),
//!     vehicle_number: "KA01XY0001".to_string(),
//!     ..Default::default()
//! };
//! let created = dispatcher.create(&mut store, &form).await?;
//!
//! // Creating invalidates the cache; re-fetch before acting on the new item.
//! store.refresh().await?;
//! dispatcher.mark_completed(&mut store, &created.id).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dispatcher;
pub mod display;
pub mod error;
pub mod filter;
pub mod models;
pub mod navigation;
pub mod params;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use config::{ClientConfig, ClientConfigBuilder, Platform};
pub use dispatcher::{BusyFlag, MutationDispatcher};
pub use display::{CreateResult, DeleteResult, Items, OperationStatus, UpdateResult};
pub use error::{Result, ValetError};
pub use filter::ViewFilter;
pub use models::{Item, ItemId, ItemPatch, ItemStatus, ItemSummary, StatusCategory};
pub use navigation::{Navigator, Route};
pub use params::{CreateItem, DeleteItem, ListItems};
pub use service::{Health, HttpItemService, ItemService};
pub use store::{ItemStore, StoreState};
