//! Enumerations shared by items, filters and preferences.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The two item collections, also known as the application "mode".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Outings and activities
    Plan,
    /// Places to eat or have a drink
    Comer,
}

impl Category {
    /// Both categories in display order.
    pub const ALL: [Category; 2] = [Category::Plan, Category::Comer];

    /// Value stored in the `category` column and used as the item `type` tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Plan => "plan",
            Category::Comer => "comer",
        }
    }

    /// Name of the collection in backup documents.
    pub fn collection(&self) -> &'static str {
        match self {
            Category::Plan => "planes",
            Category::Comer => "comer",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plan" | "planes" => Ok(Category::Plan),
            "comer" => Ok(Category::Comer),
            _ => Err(format!("Invalid category: {s}")),
        }
    }
}

/// The two people who propose items.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Author {
    Sergio,
    Nerea,
}

impl Author {
    pub fn as_str(&self) -> &'static str {
        match self {
            Author::Sergio => "Sergio",
            Author::Nerea => "Nerea",
        }
    }
}

impl FromStr for Author {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sergio" => Ok(Author::Sergio),
            "nerea" => Ok(Author::Nerea),
            _ => Err(format!("Invalid author: {s}")),
        }
    }
}

/// Fixed starting points that travel times are measured from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    #[default]
    LasCarreras,
    Portu,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::LasCarreras => "las_carreras",
            Origin::Portu => "portu",
        }
    }

    /// Human readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Origin::LasCarreras => "Las Carreras",
            Origin::Portu => "Portu",
        }
    }
}

impl FromStr for Origin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', ' '], "_").as_str() {
            "las_carreras" | "lascarreras" => Ok(Origin::LasCarreras),
            "portu" => Ok(Origin::Portu),
            _ => Err(format!("Invalid origin: {s}")),
        }
    }
}

/// Where a plan takes place.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlanLocation {
    Home,
    City,
    Nature,
}

impl PlanLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanLocation::Home => "home",
            PlanLocation::City => "city",
            PlanLocation::Nature => "nature",
        }
    }
}

impl FromStr for PlanLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "home" => Ok(PlanLocation::Home),
            "city" => Ok(PlanLocation::City),
            "nature" => Ok(PlanLocation::Nature),
            _ => Err(format!("Invalid location: {s}")),
        }
    }
}

/// Rough length of a plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PlanDuration {
    /// Under two hours
    Short,
    HalfDay,
    FullDay,
}

impl PlanDuration {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanDuration::Short => "short",
            PlanDuration::HalfDay => "half_day",
            PlanDuration::FullDay => "full_day",
        }
    }
}

impl FromStr for PlanDuration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "short" => Ok(PlanDuration::Short),
            "half_day" | "halfday" => Ok(PlanDuration::HalfDay),
            "full_day" | "fullday" => Ok(PlanDuration::FullDay),
            _ => Err(format!("Invalid duration: {s}")),
        }
    }
}

/// Ordinal price band of a dining option.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum PriceRange {
    Low,
    Mid,
    High,
}

impl PriceRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceRange::Low => "low",
            PriceRange::Mid => "mid",
            PriceRange::High => "high",
        }
    }

    /// Currency-sign rendering (`€`, `€€`, `€€€`).
    pub fn symbol(&self) -> &'static str {
        match self {
            PriceRange::Low => "€",
            PriceRange::Mid => "€€",
            PriceRange::High => "€€€",
        }
    }
}

impl FromStr for PriceRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" | "€" => Ok(PriceRange::Low),
            "mid" | "€€" => Ok(PriceRange::Mid),
            "high" | "€€€" => Ok(PriceRange::High),
            _ => Err(format!("Invalid price range: {s}")),
        }
    }
}

/// Meal slots a dining option is good for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Lunch,
    Dinner,
    /// Drinks and snacks
    Bar,
}

impl MealType {
    pub const ALL: [MealType; 3] = [MealType::Lunch, MealType::Dinner, MealType::Bar];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Bar => "bar",
        }
    }
}

impl FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "bar" => Ok(MealType::Bar),
            _ => Err(format!("Invalid meal type: {s}")),
        }
    }
}
