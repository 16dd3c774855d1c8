//! Display implementations for domain models.
//!
//! Items render as markdown: a full card for `show`-style output and a
//! compact [`ItemLine`] for listings.

use std::fmt;

use super::datetime::{LocalDate, LocalDateTime};
use crate::models::{
    Author, Category, ComerItem, Item, ItemBase, MealType, Origin, PlanDuration, PlanItem,
    PlanLocation, Preferences, PriceRange,
};

/// Length of the abbreviated IDs shown in listings.
pub const SHORT_ID_LEN: usize = 8;

macro_rules! display_as_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_as_str!(Category, Author, PlanLocation, MealType);

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for PlanDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlanDuration::Short => "short",
            PlanDuration::HalfDay => "half day",
            PlanDuration::FullDay => "full day",
        })
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// First characters of an ID, enough to address it from the CLI.
pub fn short_id(id: &str) -> &str {
    id.char_indices()
        .nth(SHORT_ID_LEN)
        .map_or(id, |(idx, _)| &id[..idx])
}

fn state_label(base: &ItemBase) -> &'static str {
    match (base.is_done, base.is_active) {
        (true, _) => "done",
        (false, true) => "active",
        (false, false) => "pending",
    }
}

fn meal_list(meals: &[MealType]) -> String {
    if meals.is_empty() {
        return "any".to_string();
    }
    meals
        .iter()
        .map(MealType::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_price(price: f64) -> String {
    if price == 0.0 {
        "free".to_string()
    } else if price.fract() == 0.0 {
        format!("{price:.0} €")
    } else {
        format!("{price:.2} €")
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = self.base();
        let star = if base.is_favorite { " ★" } else { "" };
        writeln!(f, "# {}{star}", base.title)?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", base.id)?;
        writeln!(f, "- Type: {}", self.category())?;
        writeln!(f, "- Proposed by: {}", base.created_by)?;
        match &base.completed_at {
            Some(done_at) if base.is_done => {
                writeln!(f, "- Status: done on {}", LocalDate(done_at))?
            }
            _ => writeln!(f, "- Status: {}", state_label(base))?,
        }
        writeln!(
            f,
            "- Travel: {} min from {}, {} min from {}",
            base.time_las_carreras,
            Origin::LasCarreras,
            base.time_portu,
            Origin::Portu
        )?;
        writeln!(
            f,
            "- Car needed: {}",
            if base.car_needed { "yes" } else { "no" }
        )?;

        match self {
            Item::Plan(PlanItem {
                price,
                location,
                duration,
                ..
            }) => {
                writeln!(f, "- Price: {} per person", format_price(*price))?;
                writeln!(f, "- Location: {location}")?;
                writeln!(f, "- Duration: {duration}")?;
            }
            Item::Comer(ComerItem {
                price_range,
                meal_types,
                ..
            }) => {
                writeln!(f, "- Price range: {price_range}")?;
                writeln!(f, "- Meals: {}", meal_list(meal_types))?;
            }
        }
        writeln!(f, "- Created: {}", LocalDateTime(&base.created_at))?;

        if let Some(notes) = &base.notes {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }

        if !base.links.is_empty() {
            writeln!(f, "\n## Links")?;
            writeln!(f)?;
            for link in &base.links {
                writeln!(f, "- [{}]({})", link.label, link.url)?;
            }
        }

        Ok(())
    }
}

/// One-line summary of an item for listings.
pub struct ItemLine<'a>(pub &'a Item);

impl fmt::Display for ItemLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let item = self.0;
        let base = item.base();
        let star = if base.is_favorite { "★ " } else { "" };
        let car = if base.car_needed { " · 🚗" } else { "" };

        write!(
            f,
            "- {star}**{}** `{}` · {}/{} min{car}",
            base.title,
            short_id(&base.id),
            base.time_las_carreras,
            base.time_portu
        )?;

        match item {
            Item::Plan(plan) => write!(
                f,
                " · {} · {}",
                format_price(plan.price),
                plan.location
            )?,
            Item::Comer(comer) => write!(
                f,
                " · {} · {}",
                comer.price_range,
                meal_list(&comer.meal_types)
            )?,
        }

        if let (true, Some(done_at)) = (base.is_done, &base.completed_at) {
            write!(f, " · done {}", LocalDate(done_at))?;
        }

        writeln!(f)
    }
}

impl fmt::Display for Preferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Preferences")?;
        writeln!(f)?;
        match self.default_author {
            Some(author) => writeln!(f, "- Default author: {author}")?,
            None => writeln!(f, "- Default author: not set")?,
        }
        match self.default_origin {
            Some(origin) => writeln!(f, "- Default origin: {origin}")?,
            None => writeln!(f, "- Default origin: not set ({})", Origin::default())?,
        }
        Ok(())
    }
}
