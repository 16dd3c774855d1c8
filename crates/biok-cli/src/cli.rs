//! Command-line argument wrappers using clap
//!
//! Core parameter types in `biok_core::params` carry no clap derives. Each
//! command here defines its own clap-facing structure and converts into the
//! core type with a `From` impl:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Catalog
//! ```
//!
//! Item ids given on the command line may be abbreviated; they are carried
//! as typed and resolved to full ids by the handler.

use std::{path::PathBuf, time::Duration};

use biok_core::{
    decision::RevealTiming,
    models::{
        Author, Category, Constraints, Link, MealType, ModeConstraints, Origin, PlanDuration,
        PlanLocation, PriceRange,
    },
    params::{CreateItem, DeleteItem, ItemDetails, SetPreferences, UpdateItem},
};
use clap::{Args, Subcommand, ValueEnum};

/// Declares a clap value enum mirroring a core enum one-to-one.
macro_rules! value_arg {
    ($(#[$meta:meta])* $arg:ident => $core:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
        pub enum $arg {
            $($variant),+
        }

        impl From<$arg> for $core {
            fn from(val: $arg) -> Self {
                match val {
                    $($arg::$variant => $core::$variant),+
                }
            }
        }
    };
}

value_arg!(
    /// Who proposed an item
    AuthorArg => Author { Sergio, Nerea }
);
value_arg!(
    /// Where travel times are measured from
    OriginArg => Origin { LasCarreras, Portu }
);
value_arg!(
    /// Where a plan takes place
    LocationArg => PlanLocation { Home, City, Nature }
);
value_arg!(
    /// How long a plan takes
    DurationArg => PlanDuration { Short, HalfDay, FullDay }
);
value_arg!(
    /// Price level of a place to eat
    PriceRangeArg => PriceRange { Low, Mid, High }
);
value_arg!(
    /// Meal slot a place to eat is good for
    MealArg => MealType { Lunch, Dinner, Bar }
);

fn convert_all<A: Into<T>, T>(values: Vec<A>) -> Vec<T> {
    values.into_iter().map(Into::into).collect()
}

// ============================================================================
// Catalog commands
// ============================================================================

/// Fields shared by both kinds of new item
#[derive(Args)]
pub struct NewItemArgs {
    /// Title of the item
    pub title: String,
    /// Who proposes it; defaults to the default-author preference
    #[arg(short, long)]
    pub author: Option<AuthorArg>,
    /// Free-form notes (at most 280 characters)
    #[arg(short, long)]
    pub notes: Option<String>,
    /// Link as `label=url` or a bare URL; repeat for several
    #[arg(short, long = "link")]
    pub links: Vec<Link>,
    /// Travel time in minutes from Las Carreras
    #[arg(long, value_name = "MINUTES")]
    pub las_carreras: u32,
    /// Travel time in minutes from Portu
    #[arg(long, value_name = "MINUTES")]
    pub portu: u32,
    /// Getting there requires a car
    #[arg(long)]
    pub car: bool,
    /// Mark as favorite
    #[arg(long)]
    pub favorite: bool,
}

impl NewItemArgs {
    fn into_params(self, details: ItemDetails) -> CreateItem {
        CreateItem {
            title: self.title,
            author: self.author.map(Into::into),
            notes: self.notes,
            links: self.links,
            time_las_carreras: self.las_carreras,
            time_portu: self.portu,
            car_needed: self.car,
            is_favorite: self.favorite,
            details,
        }
    }
}

/// Parses a euro amount, rejecting negative and non-finite values.
fn parse_price(s: &str) -> Result<f64, String> {
    let price: f64 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if !price.is_finite() || price < 0.0 {
        return Err(format!("price must be a non-negative amount, got {s}"));
    }
    Ok(price)
}

/// Add a new plan
#[derive(Args)]
pub struct PlanAddArgs {
    #[command(flatten)]
    pub item: NewItemArgs,
    /// Price per person in euros
    #[arg(long, default_value_t = 0.0, value_parser = parse_price)]
    pub price: f64,
    /// Where the plan takes place
    #[arg(long)]
    pub location: LocationArg,
    /// How long the plan takes
    #[arg(long)]
    pub duration: DurationArg,
}

impl From<PlanAddArgs> for CreateItem {
    fn from(val: PlanAddArgs) -> Self {
        val.item.into_params(ItemDetails::Plan {
            price: val.price,
            location: val.location.into(),
            duration: val.duration.into(),
        })
    }
}

/// Add a new place to eat
#[derive(Args)]
pub struct ComerAddArgs {
    #[command(flatten)]
    pub item: NewItemArgs,
    /// Price level
    #[arg(long)]
    pub price_range: PriceRangeArg,
    /// Meals it is good for, comma-separated
    #[arg(short, long = "meal", value_delimiter = ',')]
    pub meals: Vec<MealArg>,
}

impl From<ComerAddArgs> for CreateItem {
    fn from(val: ComerAddArgs) -> Self {
        val.item.into_params(ItemDetails::Comer {
            price_range: val.price_range.into(),
            meal_types: convert_all(val.meals),
        })
    }
}

/// Fields shared by both kinds of item edit
///
/// Every option left out keeps its stored value.
#[derive(Args)]
pub struct EditItemArgs {
    /// ID (or unique ID prefix) of the item to edit
    pub id: String,
    #[arg(short, long)]
    pub title: Option<String>,
    #[arg(short, long)]
    pub author: Option<AuthorArg>,
    /// New notes; an empty string removes them
    #[arg(short, long)]
    pub notes: Option<String>,
    /// Replace all links; repeat for several
    #[arg(short, long = "link")]
    pub links: Option<Vec<Link>>,
    /// Remove all links
    #[arg(long, conflicts_with = "links")]
    pub no_links: bool,
    #[arg(long, value_name = "MINUTES")]
    pub las_carreras: Option<u32>,
    #[arg(long, value_name = "MINUTES")]
    pub portu: Option<u32>,
    #[arg(long)]
    pub car: Option<bool>,
    #[arg(long)]
    pub favorite: Option<bool>,
    #[arg(long)]
    pub done: Option<bool>,
}

impl From<EditItemArgs> for UpdateItem {
    fn from(val: EditItemArgs) -> Self {
        let links = if val.no_links { Some(Vec::new()) } else { val.links };
        UpdateItem {
            id: val.id,
            title: val.title,
            author: val.author.map(Into::into),
            notes: val.notes,
            links,
            time_las_carreras: val.las_carreras,
            time_portu: val.portu,
            car_needed: val.car,
            is_favorite: val.favorite,
            is_done: val.done,
            ..Default::default()
        }
    }
}

/// Edit a plan
#[derive(Args)]
pub struct PlanEditArgs {
    #[command(flatten)]
    pub item: EditItemArgs,
    #[arg(long, value_parser = parse_price)]
    pub price: Option<f64>,
    #[arg(long)]
    pub location: Option<LocationArg>,
    #[arg(long)]
    pub duration: Option<DurationArg>,
}

impl From<PlanEditArgs> for UpdateItem {
    fn from(val: PlanEditArgs) -> Self {
        UpdateItem {
            price: val.price,
            location: val.location.map(Into::into),
            duration: val.duration.map(Into::into),
            ..val.item.into()
        }
    }
}

/// Edit a place to eat
#[derive(Args)]
pub struct ComerEditArgs {
    #[command(flatten)]
    pub item: EditItemArgs,
    #[arg(long)]
    pub price_range: Option<PriceRangeArg>,
    /// Replace the meals, comma-separated
    #[arg(short, long = "meal", value_delimiter = ',')]
    pub meals: Option<Vec<MealArg>>,
}

impl From<ComerEditArgs> for UpdateItem {
    fn from(val: ComerEditArgs) -> Self {
        UpdateItem {
            price_range: val.price_range.map(Into::into),
            meal_types: val.meals.map(convert_all),
            ..val.item.into()
        }
    }
}

/// List a catalog grouped into in progress, pending and history
#[derive(Args)]
pub struct ListArgs {
    /// Only show items whose title or notes contain this text
    #[arg(short, long)]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct ItemIdArgs {
    /// ID (or unique ID prefix) of the item
    pub id: String,
}

/// Delete an item permanently
#[derive(Args)]
pub struct DeleteArgs {
    /// ID (or unique ID prefix) of the item to delete
    pub id: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteArgs> for DeleteItem {
    fn from(val: DeleteArgs) -> Self {
        DeleteItem {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Add a new plan
    #[command(alias = "a")]
    Add(PlanAddArgs),
    /// List plans
    #[command(aliases = ["l", "ls"])]
    List(ListArgs),
    /// Show details of a plan
    #[command(alias = "s")]
    Show(ItemIdArgs),
    /// Edit a plan
    #[command(alias = "e")]
    Edit(PlanEditArgs),
    /// Toggle the favorite flag
    Fav(ItemIdArgs),
    /// Toggle done; marking done ends the in-progress state
    Done(ItemIdArgs),
    /// Delete a plan permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
}

#[derive(Subcommand)]
pub enum ComerCommands {
    /// Add a new place to eat
    #[command(alias = "a")]
    Add(ComerAddArgs),
    /// List places to eat
    #[command(aliases = ["l", "ls"])]
    List(ListArgs),
    /// Show details of a place to eat
    #[command(alias = "s")]
    Show(ItemIdArgs),
    /// Edit a place to eat
    #[command(alias = "e")]
    Edit(ComerEditArgs),
    /// Toggle the favorite flag
    Fav(ItemIdArgs),
    /// Toggle done; marking done ends the in-progress state
    Done(ItemIdArgs),
    /// Delete a place to eat permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
}

/// A catalog command with the category-specific parts already converted.
pub enum ItemAction {
    Add(CreateItem),
    List(Option<String>),
    Show(String),
    Edit(UpdateItem),
    Fav(String),
    Done(String),
    Delete(DeleteItem),
}

impl From<PlanCommands> for ItemAction {
    fn from(val: PlanCommands) -> Self {
        match val {
            PlanCommands::Add(args) => ItemAction::Add(args.into()),
            PlanCommands::List(args) => ItemAction::List(args.search),
            PlanCommands::Show(args) => ItemAction::Show(args.id),
            PlanCommands::Edit(args) => ItemAction::Edit(args.into()),
            PlanCommands::Fav(args) => ItemAction::Fav(args.id),
            PlanCommands::Done(args) => ItemAction::Done(args.id),
            PlanCommands::Delete(args) => ItemAction::Delete(args.into()),
        }
    }
}

impl From<ComerCommands> for ItemAction {
    fn from(val: ComerCommands) -> Self {
        match val {
            ComerCommands::Add(args) => ItemAction::Add(args.into()),
            ComerCommands::List(args) => ItemAction::List(args.search),
            ComerCommands::Show(args) => ItemAction::Show(args.id),
            ComerCommands::Edit(args) => ItemAction::Edit(args.into()),
            ComerCommands::Fav(args) => ItemAction::Fav(args.id),
            ComerCommands::Done(args) => ItemAction::Done(args.id),
            ComerCommands::Delete(args) => ItemAction::Delete(args.into()),
        }
    }
}

// ============================================================================
// Decide
// ============================================================================

/// Constraints and flow options shared by both decide modes
#[derive(Args)]
pub struct DecideArgs {
    /// Maximum travel time in minutes from the origin
    #[arg(short, long, value_name = "MINUTES")]
    pub max_minutes: Option<u32>,
    /// Origin travel times are measured from; defaults to the preference
    #[arg(short, long)]
    pub origin: Option<OriginArg>,
    /// No car today: skip items that need one
    #[arg(long)]
    pub no_car: bool,
    /// Also consider items already done
    #[arg(long)]
    pub repeat: bool,
    /// Only print how many candidates match, without drawing
    #[arg(long)]
    pub count: bool,
    /// Accept the first proposal without asking
    #[arg(long)]
    pub accept: bool,
    /// Skip the shuffle animation
    #[arg(long)]
    pub no_reveal: bool,
    /// Number of shuffle frames before the reveal
    #[arg(long, value_name = "FRAMES")]
    pub reveal_frames: Option<u32>,
    /// Delay between shuffle frames in milliseconds
    #[arg(long, value_name = "MS")]
    pub reveal_tick_ms: Option<u64>,
}

impl DecideArgs {
    fn apply(&self, constraints: &mut Constraints) {
        if let Some(origin) = self.origin {
            constraints.origin = origin.into();
        }
        if let Some(minutes) = self.max_minutes {
            constraints.max_travel_minutes = minutes;
        }
        constraints.car_available = !self.no_car;
        constraints.allow_repeat = self.repeat;
    }

    pub fn timing(&self) -> RevealTiming {
        if self.no_reveal {
            return RevealTiming::instant();
        }
        let defaults = RevealTiming::default();
        RevealTiming {
            frames: self.reveal_frames.unwrap_or(defaults.frames),
            tick: self
                .reveal_tick_ms
                .map_or(defaults.tick, Duration::from_millis),
        }
    }
}

/// Decide on a plan
#[derive(Args)]
pub struct DecidePlanArgs {
    #[command(flatten)]
    pub common: DecideArgs,
    /// Only plans at this location
    #[arg(short, long)]
    pub location: Option<LocationArg>,
    /// Maximum price per person in euros
    #[arg(long, value_parser = parse_price)]
    pub max_price: Option<f64>,
}

/// Decide where to eat
#[derive(Args)]
pub struct DecideComerArgs {
    #[command(flatten)]
    pub common: DecideArgs,
    /// Only places good for one of these meals, comma-separated
    #[arg(long = "meal", value_delimiter = ',')]
    pub meals: Vec<MealArg>,
    /// Only places in one of these price levels, comma-separated
    #[arg(long = "price-range", value_delimiter = ',')]
    pub price_ranges: Vec<PriceRangeArg>,
}

#[derive(Subcommand)]
pub enum DecideCommands {
    /// Decide on a plan
    #[command(alias = "p")]
    Plan(DecidePlanArgs),
    /// Decide where to eat
    #[command(alias = "c")]
    Comer(DecideComerArgs),
}

impl DecideCommands {
    pub fn category(&self) -> Category {
        match self {
            DecideCommands::Plan(_) => Category::Plan,
            DecideCommands::Comer(_) => Category::Comer,
        }
    }

    pub fn common(&self) -> &DecideArgs {
        match self {
            DecideCommands::Plan(args) => &args.common,
            DecideCommands::Comer(args) => &args.common,
        }
    }

    /// Narrows the default constraints of the category with the flags given.
    pub fn apply(&self, constraints: &mut Constraints) {
        self.common().apply(constraints);
        match (self, &mut constraints.mode) {
            (DecideCommands::Plan(args), ModeConstraints::Plan(plan)) => {
                if let Some(location) = args.location {
                    plan.location = Some(location.into());
                }
                if let Some(price) = args.max_price {
                    plan.max_price = price;
                }
            }
            (DecideCommands::Comer(args), ModeConstraints::Comer(comer)) => {
                comer
                    .meal_types
                    .extend(args.meals.iter().copied().map(MealType::from));
                comer
                    .price_ranges
                    .extend(args.price_ranges.iter().copied().map(PriceRange::from));
            }
            _ => {}
        }
    }
}

// ============================================================================
// Backup and preferences
// ============================================================================

#[derive(Args)]
pub struct ExportArgs {
    /// File to write the backup to; standard output when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ImportArgs {
    /// Backup file to restore
    pub file: PathBuf,
}

#[derive(Args)]
pub struct SetPrefsArgs {
    /// Default author for new items
    #[arg(short, long)]
    pub author: Option<AuthorArg>,
    /// Default origin for decide
    #[arg(short, long)]
    pub origin: Option<OriginArg>,
}

impl From<SetPrefsArgs> for SetPreferences {
    fn from(val: SetPrefsArgs) -> Self {
        SetPreferences {
            default_author: val.author.map(Into::into),
            default_origin: val.origin.map(Into::into),
        }
    }
}

#[derive(Subcommand)]
pub enum PrefsCommands {
    /// Show current preferences
    Show,
    /// Change preferences; options left out keep their value
    Set(SetPrefsArgs),
    /// Remove all preferences
    Clear,
}
