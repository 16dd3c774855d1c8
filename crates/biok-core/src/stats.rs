//! Statistics and tiered achievements derived from the whole catalog.
//!
//! Nothing here is persisted: every call recomputes counts and unlock states
//! from the items passed in.

use serde::Serialize;

use crate::models::{Author, Item, MealType, PlanLocation, PriceRange};

/// Travel time, in minutes, above which an item counts as a trip.
pub const LONG_TRIP_MINUTES: u32 = 45;

/// Plan price above which a plan counts as expensive.
pub const EXPENSIVE_PRICE: f64 = 50.0;

/// One tier of an achievement group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Achievement {
    /// Stable identifier, `<group>_<threshold>`
    pub id: String,
    /// 1-based tier within the group
    pub tier: u8,
    pub icon: &'static str,
    pub title: &'static str,
    pub threshold: u32,
    pub unlocked: bool,
}

/// A themed ladder of achievements sharing one counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AchievementGroup {
    pub id: &'static str,
    pub title: &'static str,
    /// What the counter measures
    pub description: &'static str,
    pub count: u32,
    pub achievements: Vec<Achievement>,
}

impl AchievementGroup {
    fn new(
        id: &'static str,
        title: &'static str,
        description: &'static str,
        count: u32,
        tiers: &[(u32, &'static str, &'static str)],
    ) -> Self {
        let achievements = tiers
            .iter()
            .enumerate()
            .map(|(idx, &(threshold, icon, title))| Achievement {
                id: format!("{id}_{threshold}"),
                tier: idx as u8 + 1,
                icon,
                title,
                threshold,
                unlocked: count >= threshold,
            })
            .collect();

        Self {
            id,
            title,
            description,
            count,
            achievements,
        }
    }

    pub fn unlocked(&self) -> usize {
        self.achievements.iter().filter(|a| a.unlocked).count()
    }

    /// The highest unlocked tier, if any.
    pub fn current(&self) -> Option<&Achievement> {
        self.achievements.iter().rev().find(|a| a.unlocked)
    }
}

/// How many comer items offer each meal slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Palate {
    pub lunch: u32,
    pub dinner: u32,
    pub bar: u32,
}

/// Aggregate view over both collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total_items: u32,
    pub sergio_count: u32,
    pub nerea_count: u32,
    /// Sum over done items of the mean of both travel times, rounded
    pub taximeter_minutes: u64,
    /// Share of done plans that happened at home
    pub home_pct: u32,
    /// Share of done plans that happened elsewhere
    pub out_pct: u32,
    pub palate: Palate,
    pub groups: Vec<AchievementGroup>,
}

#[derive(Default)]
struct Counters {
    far: u32,
    cheap: u32,
    expensive: u32,
    nature: u32,
    city: u32,
    home: u32,
    done: u32,
    done_plans: u32,
}

impl Statistics {
    /// Computes statistics over every item of both categories.
    pub fn compute<'a>(items: impl IntoIterator<Item = &'a Item>) -> Self {
        let mut total_items = 0;
        let mut sergio_count = 0;
        let mut nerea_count = 0;
        let mut taximeter = 0.0_f64;
        let mut palate = Palate::default();
        let mut c = Counters::default();

        for item in items {
            let base = item.base();
            total_items += 1;
            match base.created_by {
                Author::Sergio => sergio_count += 1,
                Author::Nerea => nerea_count += 1,
            }

            if let Item::Comer(comer) = item {
                palate.lunch += u32::from(comer.serves(MealType::Lunch));
                palate.dinner += u32::from(comer.serves(MealType::Dinner));
                palate.bar += u32::from(comer.serves(MealType::Bar));
            }

            if !base.is_done {
                continue;
            }

            c.done += 1;
            taximeter += (f64::from(base.time_las_carreras) + f64::from(base.time_portu)) / 2.0;
            if base.time_las_carreras > LONG_TRIP_MINUTES || base.time_portu > LONG_TRIP_MINUTES {
                c.far += 1;
            }

            match item {
                Item::Plan(plan) => {
                    c.done_plans += 1;
                    if plan.price == 0.0 {
                        c.cheap += 1;
                    }
                    if plan.price > EXPENSIVE_PRICE {
                        c.expensive += 1;
                    }
                    match plan.location {
                        PlanLocation::Home => c.home += 1,
                        PlanLocation::City => c.city += 1,
                        PlanLocation::Nature => c.nature += 1,
                    }
                }
                Item::Comer(comer) => match comer.price_range {
                    PriceRange::Low => c.cheap += 1,
                    PriceRange::High => c.expensive += 1,
                    PriceRange::Mid => {}
                },
            }
        }

        let home_pct = (f64::from(c.home) / f64::from(c.done_plans.max(1)) * 100.0).round() as u32;

        Self {
            total_items,
            sergio_count,
            nerea_count,
            taximeter_minutes: taximeter.round() as u64,
            home_pct,
            out_pct: 100 - home_pct,
            palate,
            groups: achievement_groups(&c),
        }
    }

    pub fn total_unlocked(&self) -> usize {
        self.groups.iter().map(AchievementGroup::unlocked).sum()
    }

    pub fn total_achievements(&self) -> usize {
        self.groups.iter().map(|g| g.achievements.len()).sum()
    }
}

fn achievement_groups(c: &Counters) -> Vec<AchievementGroup> {
    vec![
        AchievementGroup::new(
            "travel",
            "Adventurers",
            "done items more than 45 min away",
            c.far,
            &[
                (1, "🚶", "Tourist"),
                (5, "🚲", "Explorer"),
                (10, "🚗", "Traveller"),
                (25, "✈️", "Nomad"),
                (50, "🚀", "Globetrotter"),
            ],
        ),
        AchievementGroup::new(
            "eco",
            "Thrift",
            "free plans and low-cost meals done",
            c.cheap,
            &[
                (1, "🪙", "Penny Pinchers"),
                (5, "🏷️", "Bargain Hunters"),
                (10, "🐷", "Savers"),
                (25, "📉", "Investors"),
                (50, "🎁", "Totally Free"),
            ],
        ),
        AchievementGroup::new(
            "rich",
            "High Life",
            "plans over 50 and high-end meals done",
            c.expensive,
            &[
                (1, "💳", "A Little Treat"),
                (3, "🥂", "Big Spenders"),
                (5, "💍", "VIP"),
                (10, "💎", "Tycoons"),
                (20, "👑", "Royalty"),
            ],
        ),
        AchievementGroup::new(
            "nature",
            "Outdoors",
            "nature plans done",
            c.nature,
            &[
                (1, "🍂", "Day Trippers"),
                (5, "🍄", "Foragers"),
                (10, "🌲", "Hikers"),
                (25, "🏔️", "Mountaineers"),
                (50, "🦅", "Survivors"),
            ],
        ),
        AchievementGroup::new(
            "city",
            "Urbanites",
            "city plans done",
            c.city,
            &[
                (1, "🚦", "Pedestrians"),
                (5, "🎭", "Culture Vultures"),
                (10, "🏙️", "City Dwellers"),
                (25, "🚕", "Cosmopolitans"),
                (50, "🗽", "Mayors"),
            ],
        ),
        AchievementGroup::new(
            "home",
            "Homebodies",
            "home plans done",
            c.home,
            &[
                (1, "🧦", "Slippers"),
                (5, "🕯️", "Hygge"),
                (10, "📺", "Movie Night"),
                (25, "🍕", "Bunker"),
                (50, "🏰", "Fortress"),
            ],
        ),
        AchievementGroup::new(
            "hist",
            "History",
            "items done in total",
            c.done,
            &[
                (1, "🐣", "Rookies"),
                (10, "🐥", "Initiates"),
                (25, "🦉", "Veterans"),
                (50, "🦁", "Masters"),
                (100, "🐲", "Legends"),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::{ComerItem, ItemBase, PlanDuration, PlanItem};

    fn base(author: Author, las_carreras: u32, portu: u32, done: bool) -> ItemBase {
        let created_at = Timestamp::from_second(1640995200).unwrap();
        ItemBase {
            id: uuid::Uuid::new_v4().to_string(),
            title: "x".to_string(),
            created_by: author,
            notes: None,
            links: vec![],
            time_las_carreras: las_carreras,
            time_portu: portu,
            car_needed: false,
            is_favorite: false,
            is_done: done,
            is_active: false,
            completed_at: done.then_some(created_at),
            created_at,
        }
    }

    fn plan(location: PlanLocation, price: f64, done: bool) -> Item {
        Item::Plan(PlanItem {
            base: base(Author::Sergio, 10, 20, done),
            price,
            location,
            duration: PlanDuration::Short,
        })
    }

    fn comer(range: PriceRange, meals: &[MealType], done: bool) -> Item {
        Item::Comer(ComerItem {
            base: base(Author::Nerea, 50, 10, done),
            price_range: range,
            meal_types: meals.to_vec(),
        })
    }

    #[test]
    fn test_empty_catalog() {
        let stats = Statistics::compute(&Vec::<Item>::new());
        assert_eq!(stats.total_items, 0);
        assert_eq!(stats.home_pct, 0);
        assert_eq!(stats.out_pct, 100);
        assert_eq!(stats.total_unlocked(), 0);
        assert_eq!(stats.total_achievements(), 35);
    }

    #[test]
    fn test_counts_and_percentages() {
        let items = vec![
            plan(PlanLocation::Home, 0.0, true),
            plan(PlanLocation::City, 60.0, true),
            plan(PlanLocation::Nature, 10.0, true),
            plan(PlanLocation::Home, 10.0, false),
            comer(PriceRange::Low, &[MealType::Lunch, MealType::Dinner], true),
            comer(PriceRange::High, &[MealType::Bar], false),
        ];
        let stats = Statistics::compute(&items);

        assert_eq!(stats.total_items, 6);
        assert_eq!(stats.sergio_count, 4);
        assert_eq!(stats.nerea_count, 2);
        // three done plans at 15 min average, one done comer at 30
        assert_eq!(stats.taximeter_minutes, 75);
        assert_eq!(stats.home_pct, 33);
        assert_eq!(stats.out_pct, 67);
        assert_eq!(
            stats.palate,
            Palate {
                lunch: 1,
                dinner: 1,
                bar: 1
            }
        );
    }

    #[test]
    fn test_achievement_counters() {
        let items = vec![
            plan(PlanLocation::Home, 0.0, true),
            plan(PlanLocation::City, 60.0, true),
            comer(PriceRange::Low, &[MealType::Lunch], true),
            comer(PriceRange::High, &[MealType::Lunch], true),
            comer(PriceRange::High, &[MealType::Lunch], false),
        ];
        let stats = Statistics::compute(&items);
        let group = |id: &str| stats.groups.iter().find(|g| g.id == id).unwrap();

        // comer items sit 50 min from Las Carreras
        assert_eq!(group("travel").count, 2);
        assert_eq!(group("eco").count, 2);
        assert_eq!(group("rich").count, 2);
        assert_eq!(group("home").count, 1);
        assert_eq!(group("city").count, 1);
        assert_eq!(group("nature").count, 0);
        assert_eq!(group("hist").count, 4);

        let hist = group("hist");
        assert_eq!(hist.unlocked(), 1);
        assert_eq!(hist.current().map(|a| a.id.as_str()), Some("hist_1"));
        assert!(group("nature").current().is_none());
        assert_eq!(group("rich").achievements[0].tier, 1);
    }

    #[test]
    fn test_taximeter_with_extreme_travel_times() {
        let far = || {
            Item::Plan(PlanItem {
                base: base(Author::Sergio, u32::MAX, 1, true),
                price: 0.0,
                location: PlanLocation::Nature,
                duration: PlanDuration::FullDay,
            })
        };
        let stats = Statistics::compute(&[far()]);
        assert_eq!(stats.taximeter_minutes, 2_147_483_648);

        // the total may exceed what a single travel time can hold
        let stats = Statistics::compute(&[far(), far()]);
        assert_eq!(stats.taximeter_minutes, 4_294_967_296);
    }

    #[test]
    fn test_tier_thresholds() {
        let items: Vec<Item> = (0..5).map(|_| plan(PlanLocation::Nature, 5.0, true)).collect();
        let stats = Statistics::compute(&items);
        let nature = stats.groups.iter().find(|g| g.id == "nature").unwrap();
        let unlocked: Vec<bool> = nature.achievements.iter().map(|a| a.unlocked).collect();
        assert_eq!(unlocked, [true, true, false, false, false]);
    }
}
