//! Mutation dispatcher: one user action, one remote call, one store
//! reconciliation.
//!
//! | Action | Client-side check | On success |
//! |---|---|---|
//! | [`create`](MutationDispatcher::create) | title and vehicle number present | store invalidated |
//! | [`mark_completed`](MutationDispatcher::mark_completed) | item cached and active | status patched locally |
//! | [`delete`](MutationDispatcher::delete) | deletion confirmed | item removed locally |
//!
//! A failed check returns before any request is sent. A failed request
//! leaves the store as it was. Nothing is retried.
//!
//! Each screen owns its own dispatcher; the embedded [`BusyFlag`] rejects a
//! second action while one is in flight.

use std::{fmt, sync::Arc};

use log::{debug, info};

use crate::{
    error::{Result, ValetError},
    models::{Item, ItemId, ItemPatch, ItemStatus},
    params::{CreateItem, DeleteItem},
    service::ItemService,
    store::ItemStore,
};

pub mod busy;

pub use busy::{BusyFlag, BusyGuard};

/// Issues mutations against the service and reconciles the store.
pub struct MutationDispatcher {
    service: Arc<dyn ItemService>,
    busy: BusyFlag,
}

impl fmt::Debug for MutationDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutationDispatcher")
            .field("busy", &self.busy.is_busy())
            .finish()
    }
}

impl MutationDispatcher {
    pub fn new(service: Arc<dyn ItemService>) -> Self {
        Self {
            service,
            busy: BusyFlag::new(),
        }
    }

    /// The screen's in-flight flag; controls bind their disabled state to it.
    pub fn busy(&self) -> &BusyFlag {
        &self.busy
    }

    /// Whether the "mark completed" action should be offered for `id`.
    pub fn can_mark_completed(&self, store: &ItemStore, id: &ItemId) -> bool {
        !self.busy.is_busy() && store.get(id).is_some_and(Item::is_active)
    }

    /// Submit the create form.
    ///
    /// The form is only borrowed, so on failure the caller still holds every
    /// entered value. On success the store is invalidated; the list
    /// re-fetches when it becomes visible again.
    ///
    /// # Errors
    ///
    /// * `ValetError::InvalidInput` - Missing title or vehicle number
    /// * `ValetError::Busy` - Another action is in flight
    /// * Any service error from `POST /items`
    pub async fn create(&self, store: &mut ItemStore, form: &CreateItem) -> Result<Item> {
        form.validate()?;
        let _guard = self.busy.try_acquire()?;

        let item = self.service.create(form).await?;
        info!("Created item {} ({})", item.id, item.title);
        store.invalidate();
        Ok(item)
    }

    /// Move an active item to completed.
    ///
    /// On success the cached item is patched in place and returned; the
    /// service's copy of the item, when it sends one, is not merged.
    ///
    /// # Errors
    ///
    /// * `ValetError::NotFound` - The item is not cached
    /// * `ValetError::InvalidTransition` - The item is already completed
    /// * `ValetError::Busy` - Another action is in flight
    /// * Any service error from `PATCH /items/{id}`
    pub async fn mark_completed(&self, store: &mut ItemStore, id: &ItemId) -> Result<Item> {
        let current = store
            .get(id)
            .ok_or_else(|| ValetError::NotFound { id: id.clone() })?
            .status;
        if current != ItemStatus::Active {
            return Err(ValetError::InvalidTransition {
                id: id.clone(),
                from: current,
                to: ItemStatus::Completed,
            });
        }
        let _guard = self.busy.try_acquire()?;

        let echoed = self.service.update_status(id, ItemStatus::Completed).await?;
        if let Some(remote) = &echoed {
            debug!("Service echoed item {} with status {}", remote.id, remote.status);
        }

        let patched = store
            .apply_local_patch(id, &ItemPatch::status(ItemStatus::Completed))?
            .clone();
        info!("Marked item {id} completed");
        Ok(patched)
    }

    /// Delete an item after explicit confirmation.
    ///
    /// Returns the removed cached item, if it was cached.
    ///
    /// # Errors
    ///
    /// * `ValetError::ConfirmationRequired` - `confirmed` is false
    /// * `ValetError::Busy` - Another action is in flight
    /// * Any service error from `DELETE /items/{id}`
    pub async fn delete(&self, store: &mut ItemStore, params: &DeleteItem) -> Result<Option<Item>> {
        if !params.confirmed {
            return Err(ValetError::ConfirmationRequired {
                id: params.id.clone(),
            });
        }
        let _guard = self.busy.try_acquire()?;

        self.service.delete(&params.id).await?;
        info!("Deleted item {}", params.id);
        Ok(store.remove_local(&params.id))
    }
}
