//! Navigation between the list, detail and create destinations.
//!
//! Re-entering the list is the one cross-screen synchronisation point:
//! [`Navigator::back`] calls [`ItemStore::invalidate_and_refresh`] whenever
//! the list becomes the current destination again.

use log::debug;

use crate::{error::Result, models::ItemId, store::ItemStore};

/// A destination in the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Item list (root)
    List,
    /// Detail view of one item
    Detail(ItemId),
    /// Modal create form
    Create,
}

static ROOT: Route = Route::List;

/// Destination stack rooted at [`Route::List`].
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::List],
        }
    }

    /// The visible destination.
    pub fn current(&self) -> &Route {
        self.stack.last().unwrap_or(&ROOT)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Open a destination on top of the current one.
    pub fn push(&mut self, route: Route) {
        debug!("Navigating to {route:?}");
        self.stack.push(route);
    }

    /// Return to the previous destination.
    ///
    /// At the root this is a no-op. When the list becomes current the
    /// store is re-fetched; a refresh failure is returned, but the
    /// navigation itself has already happened.
    pub async fn back(&mut self, store: &mut ItemStore) -> Result<&Route> {
        if self.stack.len() > 1 {
            self.stack.pop();
            debug!("Back to {:?}", self.current());
            if *self.current() == Route::List {
                store.invalidate_and_refresh().await?;
            }
        }
        Ok(self.current())
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
