//! ValetDesk CLI Application
//!
//! Command-line client for the ValetDesk ticket service.

mod args;
mod cli;
mod renderer;

use std::sync::Arc;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use valetdesk_core::{params::ListItems, ClientConfigBuilder, HttpItemService, ItemId};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        base_url,
        platform,
        config_file,
        no_color,
        command,
    } = Args::parse();

    let config = ClientConfigBuilder::new()
        .with_base_url(base_url)
        .with_platform(platform.map(Into::into))
        .with_config_file(config_file)
        .build()
        .context("Failed to resolve service configuration")?;

    let http = HttpItemService::new(&config).context("Failed to initialize HTTP client")?;
    let renderer = TerminalRenderer::new(!no_color);

    info!("ValetDesk started against {}", config.base_url);

    let mut cli = Cli::new(Arc::new(http), renderer);
    let result = match command {
        Some(List(args)) => cli.list(&args.into()).await,
        Some(Show(args)) => cli.show(&ItemId::from(args.id)).await,
        Some(Create(args)) => cli.create(&args.into()).await,
        Some(Complete(args)) => cli.complete(&ItemId::from(args.id)).await,
        Some(Delete(args)) => cli.delete(&args.into()).await,
        Some(Summary) => cli.summary().await,
        Some(Health) => cli.health().await,
        None => cli.list(&ListItems::default()).await,
    };
    cli.dispose();

    result
}
