use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    ComerCommands, DecideCommands, ExportArgs, ImportArgs, PlanCommands, PrefsCommands,
};

/// Pick the next outing or meal for two
///
/// Biok keeps two shared lists, plans (things to do) and comer (places to
/// eat), and settles "what do we do today?" by drawing one item at random
/// from those that fit the moment: how far you are willing to travel, from
/// where, with or without a car, and what you feel like.
#[derive(Parser)]
#[command(version, about, name = "biok")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/biok/biok.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Biok CLI
///
/// Without a command the plan catalog is listed.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage the catalog of outings
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Manage the catalog of places to eat
    #[command(alias = "c")]
    Comer {
        #[command(subcommand)]
        command: ComerCommands,
    },
    /// Draw a random candidate that fits the given constraints
    #[command(alias = "d")]
    Decide {
        #[command(subcommand)]
        command: DecideCommands,
    },
    /// Show statistics and achievements
    Stats,
    /// Write a backup of both catalogs as JSON
    Export(ExportArgs),
    /// Restore items from a backup file
    Import(ImportArgs),
    /// Show or change preferences
    Prefs {
        #[command(subcommand)]
        command: PrefsCommands,
    },
}
