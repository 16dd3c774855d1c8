//! Markdown rendering of statistics and achievements.

use std::fmt;

use crate::stats::{AchievementGroup, Statistics};

impl fmt::Display for AchievementGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let current = self
            .current()
            .map_or_else(|| "locked".to_string(), |a| format!("{} {}", a.icon, a.title));
        writeln!(
            f,
            "### {} ({}/{}) · {current}",
            self.title,
            self.unlocked(),
            self.achievements.len()
        )?;
        writeln!(f)?;
        writeln!(f, "{}: {}", self.description, self.count)?;
        writeln!(f)?;
        for achievement in &self.achievements {
            let mark = if achievement.unlocked { "x" } else { " " };
            writeln!(
                f,
                "- [{mark}] {} {} ({})",
                achievement.icon, achievement.title, achievement.threshold
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Statistics")?;
        writeln!(f)?;

        let proposals = (self.sergio_count + self.nerea_count).max(1);
        let sergio_pct =
            (f64::from(self.sergio_count) / f64::from(proposals) * 100.0).round() as u32;
        writeln!(f, "- Items: {}", self.total_items)?;
        writeln!(
            f,
            "- Proposed: Sergio {} ({sergio_pct}%), Nerea {} ({}%)",
            self.sergio_count,
            self.nerea_count,
            100 - sergio_pct
        )?;
        writeln!(f, "- Taximeter: {} min", self.taximeter_minutes)?;
        writeln!(
            f,
            "- Done plans: {}% home, {}% out",
            self.home_pct, self.out_pct
        )?;
        writeln!(
            f,
            "- Palate: {} lunch, {} dinner, {} bar",
            self.palate.lunch, self.palate.dinner, self.palate.bar
        )?;

        writeln!(f)?;
        writeln!(
            f,
            "## Achievements ({}/{})",
            self.total_unlocked(),
            self.total_achievements()
        )?;
        for group in &self.groups {
            writeln!(f)?;
            write!(f, "{group}")?;
        }
        Ok(())
    }
}
