//! Remote item service.
//!
//! [`ItemService`] is the seam between the client and the REST backend. The
//! store and the dispatcher only ever talk to `Arc<dyn ItemService>`, so the
//! HTTP implementation ([`HttpItemService`]) can be swapped for an in-memory
//! one in tests.

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{Item, ItemId, ItemStatus},
    params::CreateItem,
};

pub mod envelope;
pub mod http;

pub use envelope::{ApiResponse, Health};
pub use http::HttpItemService;

/// Operations exposed by the remote item collection.
#[async_trait]
pub trait ItemService: Send + Sync {
    /// `GET /items`: the whole collection in service order.
    async fn list(&self) -> Result<Vec<Item>>;

    /// `GET /items/{id}`.
    async fn get(&self, id: &ItemId) -> Result<Item>;

    /// `POST /items`: returns the item with its service-assigned identity.
    async fn create(&self, item: &CreateItem) -> Result<Item>;

    /// `PATCH /items/{id}` with a new status.
    ///
    /// The service may omit the updated item from its response.
    async fn update_status(&self, id: &ItemId, status: ItemStatus) -> Result<Option<Item>>;

    /// `DELETE /items/{id}`.
    async fn delete(&self, id: &ItemId) -> Result<()>;
}
