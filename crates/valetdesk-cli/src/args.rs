use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    CompleteArgs, CreateItemArgs, DeleteItemArgs, ListItemsArgs, PlatformArg, ShowItemArgs,
};

/// Command-line client for the ValetDesk ticket service
///
/// ValetDesk tracks parking tickets held by a remote REST service. This
/// client lists and searches tickets, shows a single ticket, creates new
/// ones, marks them completed and deletes them.
#[derive(Parser)]
#[command(version, about, name = "vd")]
pub struct Args {
    /// Base URL of the item service. Overrides the config file and the
    /// platform default
    #[arg(long, global = true, env = "VALETDESK_API_URL")]
    pub base_url: Option<String>,

    /// Platform whose default base URL applies when none is configured
    #[arg(long, global = true, value_enum)]
    pub platform: Option<PlatformArg>,

    /// Path to the JSON config file. Defaults to
    /// $XDG_CONFIG_HOME/valetdesk/config.json
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the ValetDesk CLI
///
/// Without a command, `vd` lists every ticket.
#[derive(Subcommand)]
pub enum Commands {
    /// List tickets, optionally filtered
    #[command(aliases = ["l", "ls"])]
    List(ListItemsArgs),
    /// Show details of a specific ticket
    #[command(alias = "s")]
    Show(ShowItemArgs),
    /// Create a new ticket
    #[command(alias = "c")]
    Create(CreateItemArgs),
    /// Mark an active ticket as completed
    #[command(alias = "done")]
    Complete(CompleteArgs),
    /// Delete a ticket permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteItemArgs),
    /// Show ticket counts by status
    Summary,
    /// Check that the service is reachable and healthy
    Health,
}
