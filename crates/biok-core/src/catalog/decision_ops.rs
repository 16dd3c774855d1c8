//! Decision operations for the Catalog: pool reports, draws and accepting
//! proposals.

use rand::Rng;

use super::Catalog;
use crate::{
    decision::{CandidateReport, Decision, Proposal},
    error::Result,
    models::{Category, Constraints, Item},
};

impl Catalog {
    /// Default decide configuration for a category, measured from the
    /// default-origin preference.
    pub async fn default_constraints(&self, category: Category) -> Result<Constraints> {
        let prefs = self.preferences().await?;
        Ok(Constraints::new(category, prefs.origin()))
    }

    /// Counts the candidates for `constraints` without drawing.
    pub async fn candidate_report(&self, constraints: &Constraints) -> Result<CandidateReport> {
        let items = self.list_items(constraints.category()).await?;
        Ok(CandidateReport::new(&items, constraints))
    }

    /// Fetches the collection and draws a winner uniformly.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NoCandidates` if nothing passes the filters.
    pub async fn decide<R: Rng + ?Sized>(
        &self,
        constraints: &Constraints,
        rng: &mut R,
    ) -> Result<Decision> {
        let items = self.list_items(constraints.category()).await?;
        Decision::draw(&items, constraints, rng)
    }

    /// Draws a winner and wraps it as a proposal, skipping the reveal.
    pub async fn propose<R: Rng + ?Sized>(
        &self,
        constraints: &Constraints,
        rng: &mut R,
    ) -> Result<Proposal> {
        let decision = self.decide(constraints, rng).await?;
        Ok(Proposal::new(decision.winner, constraints.clone()))
    }

    /// Commits a proposal: the stored item gets `is_active` set and nothing
    /// else changes.
    pub async fn accept_proposal(&self, proposal: Proposal) -> Result<Item> {
        let accepted = proposal.accept();
        let id = accepted.item.id().to_string();
        self.with_db(move |db| db.activate_item(&id)).await
    }
}
