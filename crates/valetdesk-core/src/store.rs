//! Item store: the client-side cache of the last-fetched collection.
//!
//! The store is owned by the application's composition root and handed to
//! views and the [`MutationDispatcher`](crate::MutationDispatcher) by
//! reference. It is a cache, not a source of truth:
//!
//! - [`ItemStore::refresh`] replaces the whole sequence on success and leaves
//!   it untouched on failure.
//! - [`ItemStore::apply_local_patch`] and [`ItemStore::remove_local`] mirror a
//!   successful write immediately, without waiting for a re-fetch.
//! - [`ItemStore::invalidate_and_refresh`] is the hook navigation calls when
//!   the list becomes visible again.
//!
//! Nothing is persisted and nothing is retried.

use std::{fmt, sync::Arc};

use log::{debug, info, warn};

use crate::{
    error::{Result, ValetError},
    filter::ViewFilter,
    models::{Item, ItemId, ItemPatch, ItemSummary},
    service::ItemService,
};

/// Freshness of the cached sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreState {
    /// At least one refresh has succeeded
    pub loaded: bool,
    /// The cache should be re-fetched before it is trusted
    pub stale: bool,
    /// Message of the most recent failed refresh, cleared by the next success
    pub last_error: Option<String>,
}

/// In-memory cache of the item collection.
pub struct ItemStore {
    service: Arc<dyn ItemService>,
    items: Vec<Item>,
    state: StoreState,
}

impl fmt::Debug for ItemStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemStore")
            .field("items", &self.items.len())
            .field("state", &self.state)
            .finish()
    }
}

impl ItemStore {
    /// Creates an empty store; the first [`refresh`](Self::refresh) loads it.
    pub fn new(service: Arc<dyn ItemService>) -> Self {
        Self {
            service,
            items: Vec::new(),
            state: StoreState {
                stale: true,
                ..Default::default()
            },
        }
    }

    /// The cached items in service order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Looks up a cached item.
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Counts of the cached items by status.
    pub fn summary(&self) -> ItemSummary {
        ItemSummary::from(self.items.as_slice())
    }

    /// The cached items passing `filter`, in service order.
    pub fn view(&self, filter: &ViewFilter) -> Vec<&Item> {
        filter.apply(&self.items)
    }

    /// Re-fetch the whole collection.
    ///
    /// On success the cached sequence is replaced in one step. On failure
    /// the previous sequence stays as it was, the message is kept in
    /// [`StoreState::last_error`] and the error is returned.
    pub async fn refresh(&mut self) -> Result<&[Item]> {
        match self.service.list().await {
            Ok(items) => {
                debug!("Replacing {} cached items with {}", self.items.len(), items.len());
                self.items = items;
                self.state = StoreState {
                    loaded: true,
                    stale: false,
                    last_error: None,
                };
                Ok(&self.items)
            }
            Err(err) => {
                warn!("Refresh failed, keeping {} cached items: {err}", self.items.len());
                self.state.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Fetch a single item and replace its cached entry.
    ///
    /// An item that is not cached yet is appended.
    pub async fn load_item(&mut self, id: &ItemId) -> Result<&Item> {
        let item = self.service.get(id).await?;
        let index = match self.items.iter().position(|cached| cached.id == item.id) {
            Some(index) => {
                self.items[index] = item;
                index
            }
            None => {
                self.items.push(item);
                self.items.len() - 1
            }
        };
        Ok(&self.items[index])
    }

    /// Mark the cache stale without fetching.
    pub fn invalidate(&mut self) {
        self.state.stale = true;
    }

    /// Invalidate, then re-fetch.
    pub async fn invalidate_and_refresh(&mut self) -> Result<&[Item]> {
        self.invalidate();
        self.refresh().await
    }

    /// Optimistically patch the cached item with `id` in place.
    ///
    /// # Errors
    ///
    /// * `ValetError::NotFound` - When no cached item has `id`
    /// * `ValetError::InvalidTransition` - When the patch would move a
    ///   completed item back to active
    pub fn apply_local_patch(&mut self, id: &ItemId, patch: &ItemPatch) -> Result<&Item> {
        let item = self
            .items
            .iter_mut()
            .find(|item| &item.id == id)
            .ok_or_else(|| ValetError::NotFound { id: id.clone() })?;

        if let Some(next) = patch.status {
            if !item.status.can_transition_to(next) {
                return Err(ValetError::InvalidTransition {
                    id: id.clone(),
                    from: item.status,
                    to: next,
                });
            }
        }

        patch.apply_to(item);
        debug!("Patched cached item {id}");
        Ok(item)
    }

    /// Drop the cached item with `id`, returning it if it was cached.
    pub fn remove_local(&mut self, id: &ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| &item.id == id)?;
        debug!("Removed cached item {id}");
        Some(self.items.remove(index))
    }

    /// End the store's lifecycle, dropping the cache.
    pub fn dispose(self) {
        info!("Disposing item store with {} cached items", self.items.len());
    }
}
