//! Constraint types deciding which items may be drawn.
//!
//! Every criterion is a pure predicate and all of them are combined with AND,
//! so evaluation order never changes the result. Empty set-valued filters
//! (meal types, price ranges) mean "no constraint".

use std::collections::BTreeSet;

use super::{Category, ComerItem, Item, MealType, Origin, PlanItem, PlanLocation, PriceRange};

/// Default upper bound on travel time, in minutes.
pub const DEFAULT_MAX_TRAVEL_MINUTES: u32 = 30;

/// Default upper bound on a plan's price per person.
pub const DEFAULT_MAX_PRICE: f64 = 50.0;

/// Criteria specific to plans.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanConstraints {
    /// Required location; `None` accepts any
    pub location: Option<PlanLocation>,

    /// Inclusive upper bound on the price per person
    pub max_price: f64,
}

impl Default for PlanConstraints {
    fn default() -> Self {
        Self {
            location: None,
            max_price: DEFAULT_MAX_PRICE,
        }
    }
}

impl PlanConstraints {
    pub fn admits(&self, plan: &PlanItem) -> bool {
        self.location.map_or(true, |loc| plan.location == loc) && plan.price <= self.max_price
    }
}

/// Criteria specific to dining options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComerConstraints {
    /// Item must serve at least one of these slots; empty accepts any
    pub meal_types: BTreeSet<MealType>,

    /// Item's range must be one of these; empty accepts any
    pub price_ranges: BTreeSet<PriceRange>,
}

impl ComerConstraints {
    pub fn admits(&self, comer: &ComerItem) -> bool {
        let meal_ok = self.meal_types.is_empty()
            || comer.meal_types.iter().any(|m| self.meal_types.contains(m));
        let price_ok =
            self.price_ranges.is_empty() || self.price_ranges.contains(&comer.price_range);
        meal_ok && price_ok
    }
}

/// Mode-specific half of a [`Constraints`] value.
#[derive(Debug, Clone, PartialEq)]
pub enum ModeConstraints {
    Plan(PlanConstraints),
    Comer(ComerConstraints),
}

impl ModeConstraints {
    /// Default criteria for a category.
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Plan => ModeConstraints::Plan(PlanConstraints::default()),
            Category::Comer => ModeConstraints::Comer(ComerConstraints::default()),
        }
    }

    pub fn category(&self) -> Category {
        match self {
            ModeConstraints::Plan(_) => Category::Plan,
            ModeConstraints::Comer(_) => Category::Comer,
        }
    }
}

/// The full situational configuration used to build a candidate pool.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraints {
    /// Inclusive upper bound on travel time from `origin`
    pub max_travel_minutes: u32,

    /// Which travel-time field is compared
    pub origin: Origin,

    /// When false, items that need a car are excluded
    pub car_available: bool,

    /// When false, items already done are excluded
    pub allow_repeat: bool,

    pub mode: ModeConstraints,
}

impl Constraints {
    /// Default configuration for a category, measured from `origin`.
    pub fn new(category: Category, origin: Origin) -> Self {
        Self {
            max_travel_minutes: DEFAULT_MAX_TRAVEL_MINUTES,
            origin,
            car_available: true,
            allow_repeat: false,
            mode: ModeConstraints::for_category(category),
        }
    }

    pub fn category(&self) -> Category {
        self.mode.category()
    }

    /// Decides whether `item` belongs to the candidate pool.
    ///
    /// Items of the other category never pass.
    pub fn admits(&self, item: &Item) -> bool {
        let base = item.base();

        if !self.allow_repeat && base.is_done {
            return false;
        }
        if base.travel_minutes(self.origin) > self.max_travel_minutes {
            return false;
        }
        if !self.car_available && base.car_needed {
            return false;
        }

        match (&self.mode, item) {
            (ModeConstraints::Plan(c), Item::Plan(plan)) => c.admits(plan),
            (ModeConstraints::Comer(c), Item::Comer(comer)) => c.admits(comer),
            _ => false,
        }
    }
}
