#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicBool, AtomicU32, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use jiff::civil::date;
use valetdesk_core::{
    CreateItem, Item, ItemId, ItemService, ItemStatus, ItemStore, MutationDispatcher, Result,
    ValetError,
};

/// In-memory stand-in for the remote item service.
///
/// Records every call and can be switched into a failing mode, in which each
/// operation answers like a `success: false` envelope.
#[derive(Default)]
pub struct FakeItemService {
    items: Mutex<Vec<Item>>,
    calls: Mutex<Vec<String>>,
    failing: AtomicBool,
    next_id: AtomicU32,
}

impl FakeItemService {
    pub fn with_items(items: Vec<Item>) -> Arc<Self> {
        Arc::new(Self {
            items: Mutex::new(items),
            next_id: AtomicU32::new(100),
            ..Default::default()
        })
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }

    pub fn remote_items(&self) -> Vec<Item> {
        self.items.lock().expect("items lock poisoned").clone()
    }

    /// Change the remote copy behind the client's back.
    pub fn replace_remote(&self, items: Vec<Item>) {
        *self.items.lock().expect("items lock poisoned") = items;
    }

    fn record(&self, call: String) -> Result<()> {
        self.calls.lock().expect("calls lock poisoned").push(call);
        if self.failing.load(Ordering::SeqCst) {
            Err(ValetError::Service {
                message: "Service unavailable".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ItemService for FakeItemService {
    async fn list(&self) -> Result<Vec<Item>> {
        self.record("list".to_string())?;
        Ok(self.remote_items())
    }

    async fn get(&self, id: &ItemId) -> Result<Item> {
        self.record(format!("get {id}"))?;
        self.remote_items()
            .into_iter()
            .find(|item| &item.id == id)
            .ok_or_else(|| ValetError::NotFound { id: id.clone() })
    }

    async fn create(&self, form: &CreateItem) -> Result<Item> {
        self.record(format!("create {}", form.title))?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let item = Item {
            id: ItemId::new(id.to_string()),
            title: form.title.clone(),
            description: Some(form.description.clone()).filter(|d| !d.is_empty()),
            vehicle_number: form.vehicle_number.clone(),
            level: Some(form.level.clone()).filter(|l| !l.is_empty()),
            slot: Some(form.slot.clone()).filter(|s| !s.is_empty()),
            entry_time: date(2026, 2, 1).at(12, 0, 0, 0),
            due_date: form.due_date,
            status: ItemStatus::Active,
        };
        self.items
            .lock()
            .expect("items lock poisoned")
            .push(item.clone());
        Ok(item)
    }

    async fn update_status(&self, id: &ItemId, status: ItemStatus) -> Result<Option<Item>> {
        self.record(format!("update {id} {status}"))?;
        let mut items = self.items.lock().expect("items lock poisoned");
        let item = items
            .iter_mut()
            .find(|item| &item.id == id)
            .ok_or_else(|| ValetError::NotFound { id: id.clone() })?;
        item.status = status;
        Ok(Some(item.clone()))
    }

    async fn delete(&self, id: &ItemId) -> Result<()> {
        self.record(format!("delete {id}"))?;
        let mut items = self.items.lock().expect("items lock poisoned");
        let before = items.len();
        items.retain(|item| &item.id != id);
        if items.len() == before {
            return Err(ValetError::NotFound { id: id.clone() });
        }
        Ok(())
    }
}

pub fn ticket(id: &str, title: &str, vehicle: &str, status: ItemStatus) -> Item {
    Item {
        id: ItemId::from(id),
        title: title.to_string(),
        description: None,
        vehicle_number: vehicle.to_string(),
        level: Some("1".to_string()),
        slot: Some("A1".to_string()),
        entry_time: date(2026, 1, 31).at(10, 0, 0, 0),
        due_date: None,
        status,
    }
}

/// The backend's seed data plus one extra active ticket.
pub fn seed_items() -> Vec<Item> {
    vec![
        ticket("1", "Ticket #001 - Blue Honda Civic", "MH12AB1234", ItemStatus::Active),
        ticket("2", "Ticket #002 - White Toyota Camry", "MH14CD5678", ItemStatus::Active),
        ticket("3", "Ticket #003 - Red Maruti Swift", "MH01EF9012", ItemStatus::Completed),
        ticket("4", "Blue Ford Mustang", "KA01XY0001", ItemStatus::Active),
    ]
}

/// Service, loaded store and dispatcher wired the way the CLI wires them.
pub async fn loaded_environment() -> (Arc<FakeItemService>, ItemStore, MutationDispatcher) {
    let service = FakeItemService::with_items(seed_items());
    let mut store = ItemStore::new(service.clone());
    store.refresh().await.expect("Initial refresh failed");
    let dispatcher = MutationDispatcher::new(service.clone());
    (service, store, dispatcher)
}

pub fn ids(items: &[&Item]) -> Vec<String> {
    items.iter().map(|item| item.id.to_string()).collect()
}
