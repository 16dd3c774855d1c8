//! The interactive decide loop: draw, reveal, then accept, reroll or quit.

use std::{
    io::{self, BufRead},
    sync::{Arc, Mutex, PoisonError},
};

use anyhow::{Context, Result};
use biok_core::{
    decision::{Decision, Proposal, Reveal, RevealOutcome, RevealTiming},
    display::OperationStatus,
    models::{Constraints, Item},
    CatalogError,
};
use log::debug;
use rand::{rngs::StdRng, SeedableRng};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::{cli::DecideCommands, handler::CommandHandler};

/// What to do with a proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Accept,
    Reroll,
    Quit,
}

impl Choice {
    fn parse(answer: &str) -> Option<Self> {
        match answer.trim().to_lowercase().as_str() {
            "a" | "accept" | "y" | "yes" => Some(Choice::Accept),
            "r" | "reroll" | "" => Some(Choice::Reroll),
            "q" | "quit" | "n" | "no" => Some(Choice::Quit),
            _ => None,
        }
    }
}

/// Reads choices until one parses; end of input means quit.
fn read_choice(input: &mut impl BufRead, handler: &CommandHandler) -> Result<Choice> {
    loop {
        handler
            .renderer
            .prompt("[a]ccept, [r]eroll or [q]uit? ")?;
        let mut line = String::new();
        if input.read_line(&mut line).context("Failed to read answer")? == 0 {
            println!();
            return Ok(Choice::Quit);
        }
        if let Some(choice) = Choice::parse(&line) {
            return Ok(choice);
        }
    }
}

/// Routes Ctrl-C to the reveal on screen. Outside a reveal the process exits
/// as it would without a handler installed.
#[derive(Clone, Default)]
struct RevealSlot(Arc<Mutex<Option<CancellationToken>>>);

impl RevealSlot {
    fn watch(&self) -> JoinHandle<()> {
        let slot = self.clone();
        tokio::spawn(async move {
            while tokio::signal::ctrl_c().await.is_ok() {
                match slot.take() {
                    Some(token) => token.cancel(),
                    None => std::process::exit(130),
                }
            }
        })
    }

    fn begin(&self) -> CancellationToken {
        let token = CancellationToken::new();
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.clone());
        token
    }

    fn take(&self) -> Option<CancellationToken> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).take()
    }
}

impl CommandHandler {
    pub async fn decide(&self, command: DecideCommands) -> Result<()> {
        let category = command.category();
        let mut constraints = self.catalog.default_constraints(category).await?;
        command.apply(&mut constraints);

        if command.common().count {
            let report = self.catalog.candidate_report(&constraints).await?;
            return self
                .renderer
                .render(&format!("{report}- Constraints: {constraints}\n"));
        }

        let timing = command.common().timing();
        let slot = RevealSlot::default();
        let watcher = (timing.frames > 0).then(|| slot.watch());

        let result = self
            .decide_loop(constraints, timing, command.common().accept, &slot)
            .await;

        if let Some(watcher) = watcher {
            watcher.abort();
        }
        result
    }

    async fn decide_loop(
        &self,
        mut constraints: Constraints,
        timing: RevealTiming,
        auto_accept: bool,
        slot: &RevealSlot,
    ) -> Result<()> {
        let category = constraints.category();
        let mut rng = StdRng::from_entropy();

        loop {
            let decision = match self.catalog.decide(&constraints, &mut rng).await {
                Ok(decision) => decision,
                Err(CatalogError::NoCandidates) => {
                    let status = OperationStatus::notice(format!(
                        "Nothing in {category} matches: {constraints}"
                    ));
                    return self.renderer.render(&status.to_string());
                }
                Err(e) => return Err(e).context("Failed to draw a candidate"),
            };

            let Some(item) = self.reveal(decision, timing, slot, &mut rng).await? else {
                let status = OperationStatus::notice("Reveal cancelled; nothing was proposed");
                return self.renderer.render(&status.to_string());
            };

            let proposal = Proposal::new(item, constraints);
            self.renderer.render(&proposal.to_string())?;

            let choice = if auto_accept {
                Choice::Accept
            } else {
                read_choice(&mut io::stdin().lock(), self)?
            };
            debug!("Decide choice: {choice:?}");

            match choice {
                Choice::Accept => {
                    let title = proposal.item().title().to_string();
                    let accepted = self.catalog.accept_proposal(proposal).await?;
                    debug!("Accepted {}", accepted.id());
                    let status = OperationStatus::success(format!("'{title}' is now in progress"));
                    return self.renderer.render(&status.to_string());
                }
                Choice::Reroll => constraints = proposal.reroll(),
                Choice::Quit => return Ok(()),
            }
        }
    }

    /// Plays the shuffle; `None` when it was interrupted.
    async fn reveal(
        &self,
        decision: Decision,
        timing: RevealTiming,
        slot: &RevealSlot,
        rng: &mut StdRng,
    ) -> Result<Option<Item>> {
        let cancel = slot.begin();
        let mut frame_error = None;
        let outcome = Reveal::new(decision, timing)
            .play(rng, &cancel, |title| {
                if let Err(e) = self.renderer.frame(title) {
                    frame_error.get_or_insert(e);
                }
            })
            .await;
        slot.take();
        self.renderer.clear_frame()?;

        if let Some(e) = frame_error {
            return Err(e);
        }
        Ok(match outcome {
            RevealOutcome::Revealed(item) => Some(item),
            RevealOutcome::Cancelled => None,
        })
    }
}
