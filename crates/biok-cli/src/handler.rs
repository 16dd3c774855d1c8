//! Command dispatch: runs catalog operations and renders their results.

use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use biok_core::{
    display::{short_id, CreateResult, DeleteResult, OperationStatus, UpdateResult},
    models::{Category, Item},
    params::{ItemRef, ListItems, SetPreferences, UpdateItem},
    Catalog, CatalogError,
};
use log::debug;

use crate::{
    cli::{ExportArgs, ImportArgs, ItemAction, PrefsCommands},
    renderer::TerminalRenderer,
};

pub struct CommandHandler {
    pub(crate) catalog: Catalog,
    pub(crate) renderer: TerminalRenderer,
}

impl CommandHandler {
    pub fn new(catalog: Catalog, renderer: TerminalRenderer) -> Self {
        Self { catalog, renderer }
    }

    pub async fn handle_item_command(&self, category: Category, action: ItemAction) -> Result<()> {
        match action {
            ItemAction::Add(params) => {
                let item = self
                    .catalog
                    .create_item(&params)
                    .await
                    .context("Failed to create item")?;
                self.renderer.render(&CreateResult::new(item).to_string())
            }
            ItemAction::List(search) => self.list_items(category, search).await,
            ItemAction::Show(prefix) => {
                let item = self.find_item(category, &prefix).await?;
                self.renderer.render(&item.to_string())
            }
            ItemAction::Edit(mut params) => {
                let item = self.find_item(category, &params.id).await?;
                params.id = item.id().to_string();
                let changes = describe_changes(&params);
                let updated = self
                    .catalog
                    .edit_item(&params)
                    .await
                    .context("Failed to update item")?;
                self.renderer
                    .render(&UpdateResult::with_changes(updated, changes).to_string())
            }
            ItemAction::Fav(prefix) => {
                let item = self.find_item(category, &prefix).await?;
                let updated = self.catalog.toggle_favorite(&item_ref(&item)).await?;
                let change = if updated.base().is_favorite {
                    "Marked as favorite"
                } else {
                    "Removed from favorites"
                };
                self.renderer
                    .render(&UpdateResult::with_changes(updated, vec![change.to_string()]).to_string())
            }
            ItemAction::Done(prefix) => {
                let item = self.find_item(category, &prefix).await?;
                let updated = self.catalog.toggle_done(&item_ref(&item)).await?;
                let change = if updated.base().is_done {
                    "Marked as done"
                } else {
                    "Marked as pending"
                };
                self.renderer
                    .render(&UpdateResult::with_changes(updated, vec![change.to_string()]).to_string())
            }
            ItemAction::Delete(mut params) => {
                let item = self.find_item(category, &params.id).await?;
                params.id = item.id().to_string();
                match self.catalog.remove_item(&params).await {
                    Ok(Some(deleted)) => self.renderer.render(&DeleteResult::new(deleted).to_string()),
                    Ok(None) => Err(CatalogError::ItemNotFound { id: params.id }.into()),
                    Err(CatalogError::InvalidInput { .. }) => bail!(
                        "Deleting '{}' is permanent; run again with --confirm",
                        item.title()
                    ),
                    Err(e) => Err(e).context("Failed to delete item"),
                }
            }
        }
    }

    pub async fn list_items(&self, category: Category, search: Option<String>) -> Result<()> {
        let groups = self
            .catalog
            .list_grouped(&ListItems { category, search })
            .await?;
        let heading = match category {
            Category::Plan => "Plans",
            Category::Comer => "Places to eat",
        };
        self.renderer
            .render(&format!("# {heading} ({})\n\n{groups}", groups.len()))
    }

    pub async fn show_statistics(&self) -> Result<()> {
        let stats = self
            .catalog
            .statistics()
            .await
            .context("Failed to compute statistics")?;
        self.renderer.render(&stats.to_string())
    }

    pub async fn export(&self, args: ExportArgs) -> Result<()> {
        let document = self.catalog.export_backup().await?;
        let json = document.to_json_pretty()?;
        match args.output {
            Some(path) => {
                fs::write(&path, json + "\n")
                    .with_context(|| format!("Failed to write backup to {}", path.display()))?;
                let status = OperationStatus::success(format!(
                    "Exported {} items to {}",
                    document.len(),
                    path.display()
                ));
                self.renderer.render(&status.to_string())
            }
            None => {
                println!("{json}");
                Ok(())
            }
        }
    }

    pub async fn import(&self, args: ImportArgs) -> Result<()> {
        let text = read_backup(&args.file)?;
        let summary = self
            .catalog
            .import_backup(&text)
            .await
            .with_context(|| format!("Failed to import {}", args.file.display()))?;
        self.renderer.render(&summary.to_string())
    }

    pub async fn handle_prefs_command(&self, command: PrefsCommands) -> Result<()> {
        match command {
            PrefsCommands::Show => {
                let prefs = self.catalog.preferences().await?;
                self.renderer.render(&prefs.to_string())
            }
            PrefsCommands::Set(args) => {
                let params: SetPreferences = args.into();
                if params.default_author.is_none() && params.default_origin.is_none() {
                    bail!("Nothing to set; pass --author and/or --origin");
                }
                let prefs = self.catalog.set_preferences(&params).await?;
                let status = OperationStatus::success("Preferences saved");
                self.renderer.render(&format!("{status}\n{prefs}"))
            }
            PrefsCommands::Clear => {
                self.catalog.clear_preferences().await?;
                self.renderer
                    .render(&OperationStatus::success("Preferences cleared").to_string())
            }
        }
    }

    /// Resolves an id prefix and checks the item belongs to `category`.
    async fn find_item(&self, category: Category, prefix: &str) -> Result<Item> {
        let id = self.catalog.resolve_id(prefix).await?;
        debug!("Resolved '{prefix}' to {id}");

        let item = self
            .catalog
            .show_item(&ItemRef { id: id.clone() })
            .await?
            .ok_or(CatalogError::ItemNotFound { id })?;
        if item.category() != category {
            bail!(
                "Item {} is a {} item, not {}",
                short_id(item.id()),
                item.category(),
                category
            );
        }
        Ok(item)
    }
}

fn item_ref(item: &Item) -> ItemRef {
    ItemRef {
        id: item.id().to_string(),
    }
}

fn read_backup(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Names the fields an edit touches, for the update summary.
fn describe_changes(params: &UpdateItem) -> Vec<String> {
    let fields = [
        ("title", params.title.is_some()),
        ("author", params.author.is_some()),
        ("notes", params.notes.is_some()),
        ("links", params.links.is_some()),
        ("travel from Las Carreras", params.time_las_carreras.is_some()),
        ("travel from Portu", params.time_portu.is_some()),
        ("car needed", params.car_needed.is_some()),
        ("favorite", params.is_favorite.is_some()),
        ("done", params.is_done.is_some()),
        ("price", params.price.is_some()),
        ("location", params.location.is_some()),
        ("duration", params.duration.is_some()),
        ("price range", params.price_range.is_some()),
        ("meals", params.meal_types.is_some()),
    ];
    fields
        .into_iter()
        .filter(|(_, given)| *given)
        .map(|(name, _)| format!("Updated {name}"))
        .collect()
}
