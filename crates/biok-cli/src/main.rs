//! Biok CLI Application
//!
//! Command-line interface for deciding the next outing or meal for two.

mod args;
mod cli;
mod decide;
mod handler;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use biok_core::{models::Category, CatalogBuilder};
use clap::Parser;
use handler::CommandHandler;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let mut builder = CatalogBuilder::new();
    if let Some(path) = database_file {
        builder = builder.with_database_path(path);
    }
    let catalog = builder
        .build()
        .await
        .context("Failed to initialize catalog")?;

    info!("Biok started with database {}", catalog.database_path().display());

    let handler = CommandHandler::new(catalog, TerminalRenderer::new(!no_color));

    match command {
        Some(Plan { command }) => {
            handler
                .handle_item_command(Category::Plan, command.into())
                .await
        }
        Some(Comer { command }) => {
            handler
                .handle_item_command(Category::Comer, command.into())
                .await
        }
        Some(Decide { command }) => handler.decide(command).await,
        Some(Stats) => handler.show_statistics().await,
        Some(Export(args)) => handler.export(args).await,
        Some(Import(args)) => handler.import(args).await,
        Some(Prefs { command }) => handler.handle_prefs_command(command).await,
        None => handler.list_items(Category::Plan, None).await,
    }
}
