//! Command definitions and handlers.
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types, which stay free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Store / Dispatcher
//! ```
//!
//! [`Cli`] owns the item store and the dispatcher for the lifetime of one
//! command and renders every outcome as markdown.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use jiff::civil::DateTime;
use log::debug;
use valetdesk_core::{
    models::parse_service_time,
    params::{CreateItem, DeleteItem, ListItems},
    CreateResult, DeleteResult, HttpItemService, ItemId, ItemStatus, ItemStore, Items,
    MutationDispatcher, OperationStatus, Platform, StatusCategory, UpdateResult, ViewFilter,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// CLI Argument Wrappers
// ============================================================================

/// List tickets
///
/// The search text matches title or vehicle number, ignoring case. The
/// status tab narrows the list further.
#[derive(Args, Default)]
pub struct ListItemsArgs {
    /// Free-text search over title and vehicle number
    #[arg(short, long, default_value = "")]
    pub query: String,
    /// Status tab to show
    #[arg(short, long, value_enum, default_value_t = StatusArg::All)]
    pub status: StatusArg,
}

impl From<ListItemsArgs> for ListItems {
    fn from(val: ListItemsArgs) -> Self {
        ListItems {
            query: val.query,
            category: val.status.into(),
        }
    }
}

/// Show details of a specific ticket
#[derive(Args)]
pub struct ShowItemArgs {
    #[arg(help = "Identifier of the ticket to show")]
    pub id: String,
}

/// Create a new ticket
///
/// Title and vehicle number are required; the remaining fields are sent
/// as empty strings when omitted.
#[derive(Args)]
pub struct CreateItemArgs {
    /// Title of the ticket
    pub title: String,
    #[arg(long, help = "Vehicle registration number")]
    pub vehicle_number: String,
    #[arg(short, long, help = "Optional notes about the vehicle or ticket")]
    pub description: Option<String>,
    #[arg(long, help = "Parking slot, e.g. A1")]
    pub slot: Option<String>,
    #[arg(long, help = "Parking level, e.g. 2")]
    pub level: Option<String>,
    #[arg(
        long,
        value_parser = parse_due_date,
        help = "Due date as YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS"
    )]
    pub due_date: Option<DateTime>,
}

impl From<CreateItemArgs> for CreateItem {
    fn from(val: CreateItemArgs) -> Self {
        CreateItem {
            title: val.title,
            description: val.description.unwrap_or_default(),
            vehicle_number: val.vehicle_number,
            slot: val.slot.unwrap_or_default(),
            level: val.level.unwrap_or_default(),
            due_date: val.due_date,
        }
    }
}

fn parse_due_date(raw: &str) -> std::result::Result<DateTime, String> {
    parse_service_time(raw).map_err(|e| format!("invalid date '{raw}': {e}"))
}

/// Mark an active ticket as completed
#[derive(Args)]
pub struct CompleteArgs {
    #[arg(help = "Identifier of the ticket to complete")]
    pub id: String,
}

/// Delete a ticket permanently
#[derive(Args)]
pub struct DeleteItemArgs {
    #[arg(help = "Identifier of the ticket to permanently delete")]
    pub id: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteItemArgs> for DeleteItem {
    fn from(val: DeleteItemArgs) -> Self {
        DeleteItem {
            id: ItemId::from(val.id),
            confirmed: val.confirm,
        }
    }
}

/// Status tab values accepted by `--status`
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    #[default]
    All,
    Active,
    #[value(alias = "done")]
    Completed,
}

impl From<StatusArg> for StatusCategory {
    fn from(val: StatusArg) -> Self {
        match val {
            StatusArg::All => StatusCategory::All,
            StatusArg::Active => StatusCategory::Active,
            StatusArg::Completed => StatusCategory::Completed,
        }
    }
}

/// Platform values accepted by `--platform`
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PlatformArg {
    /// Android emulator, reaches the host through 10.0.2.2
    Android,
    Ios,
    #[value(alias = "web")]
    Generic,
}

impl From<PlatformArg> for Platform {
    fn from(val: PlatformArg) -> Self {
        match val {
            PlatformArg::Android => Platform::Android,
            PlatformArg::Ios => Platform::Ios,
            PlatformArg::Generic => Platform::Generic,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Runs one command against the service and renders the outcome.
pub struct Cli {
    http: Arc<HttpItemService>,
    store: ItemStore,
    dispatcher: MutationDispatcher,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(http: Arc<HttpItemService>, renderer: TerminalRenderer) -> Self {
        Self {
            store: ItemStore::new(http.clone()),
            dispatcher: MutationDispatcher::new(http.clone()),
            http,
            renderer,
        }
    }

    pub async fn list(&mut self, params: &ListItems) -> Result<()> {
        self.store
            .refresh()
            .await
            .context("Failed to load tickets")?;

        let filter = ViewFilter::from(params);
        let items = Items(self.store.view(&filter));

        let mut output = if filter.is_unfiltered() {
            format!("# Tickets ({})\n\n", items.len())
        } else {
            format!(
                "# Tickets ({} of {}, {})\n\n",
                items.len(),
                self.store.len(),
                filter.category()
            )
        };
        output.push_str(&items.to_string());
        self.renderer.render(&output)
    }

    pub async fn show(&mut self, id: &ItemId) -> Result<()> {
        let item = self
            .store
            .load_item(id)
            .await
            .with_context(|| format!("Failed to load ticket {id}"))?;
        self.renderer.render(&item.to_string())
    }

    pub async fn create(&mut self, form: &CreateItem) -> Result<()> {
        let item = self
            .dispatcher
            .create(&mut self.store, form)
            .await
            .context("Failed to create ticket")?;
        self.renderer
            .render(&CreateResult::new(item).to_string())
    }

    pub async fn complete(&mut self, id: &ItemId) -> Result<()> {
        // The dispatcher acts on cached items only.
        self.store
            .load_item(id)
            .await
            .with_context(|| format!("Failed to load ticket {id}"))?;

        let item = self
            .dispatcher
            .mark_completed(&mut self.store, id)
            .await
            .with_context(|| format!("Failed to complete ticket {id}"))?;

        let changes = vec![format!(
            "Status: {} → {}",
            ItemStatus::Active,
            ItemStatus::Completed
        )];
        self.renderer
            .render(&UpdateResult::with_changes(item, changes).to_string())
    }

    pub async fn delete(&mut self, params: &DeleteItem) -> Result<()> {
        if params.confirmed {
            self.store
                .load_item(&params.id)
                .await
                .with_context(|| format!("Failed to load ticket {}", params.id))?;
        }

        let removed = self
            .dispatcher
            .delete(&mut self.store, params)
            .await
            .with_context(|| format!("Failed to delete ticket {}", params.id))?;

        let output = match removed {
            Some(item) => DeleteResult::new(item).to_string(),
            None => OperationStatus::success(format!("Deleted ticket {}", params.id)).to_string(),
        };
        self.renderer.render(&output)
    }

    pub async fn summary(&mut self) -> Result<()> {
        self.store
            .refresh()
            .await
            .context("Failed to load tickets")?;
        self.renderer.render(&self.store.summary().to_string())
    }

    pub async fn health(&self) -> Result<()> {
        let health = self
            .http
            .health()
            .await
            .with_context(|| format!("Health check against {} failed", self.http.base_url()))?;
        debug!("Health response: {health:?}");

        let alert = OperationStatus::health(&health);
        self.renderer.render(&alert.to_string())?;
        if !alert.success {
            bail!("Service at {} is not healthy", self.http.base_url());
        }
        Ok(())
    }

    /// Release the store at the end of the command.
    pub fn dispose(self) {
        self.store.dispose();
    }
}
