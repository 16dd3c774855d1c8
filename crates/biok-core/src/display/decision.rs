//! Display of decide configurations, pool reports and proposals.

use std::fmt;

use super::models::short_id;
use crate::{
    decision::{CandidateReport, Proposal},
    models::{Constraints, MealType, ModeConstraints, PriceRange},
};

fn joined<T: fmt::Display>(values: impl IntoIterator<Item = T>) -> String {
    values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "≤ {} min from {}",
            self.max_travel_minutes, self.origin
        )?;
        if !self.car_available {
            write!(f, ", no car")?;
        }
        if self.allow_repeat {
            write!(f, ", repeats allowed")?;
        }

        match &self.mode {
            ModeConstraints::Plan(plan) => {
                if let Some(location) = plan.location {
                    write!(f, ", {location}")?;
                }
                write!(f, ", ≤ {} €", plan.max_price)?;
            }
            ModeConstraints::Comer(comer) => {
                if !comer.meal_types.is_empty() {
                    write!(f, ", {}", joined(comer.meal_types.iter().map(MealType::as_str)))?;
                }
                if !comer.price_ranges.is_empty() {
                    write!(f, ", {}", joined(comer.price_ranges.iter().map(PriceRange::symbol)))?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for CandidateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.count == 1 { "candidate" } else { "candidates" };
        writeln!(f, "{} {noun} in {}", self.count, self.category)?;
        writeln!(
            f,
            "- Travel bound: {} min",
            self.bounds.max_travel_minutes
        )?;
        writeln!(f, "- Price bound: {} €", self.bounds.max_price)
    }
}

impl fmt::Display for Proposal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let item = self.item();
        writeln!(
            f,
            "Proposal: {} (`{}`)",
            item.title(),
            short_id(item.id())
        )?;
        writeln!(f, "- Drawn with: {}", self.constraints())?;
        writeln!(f)?;
        write!(f, "{item}")
    }
}
