//! Cosmetic shuffle shown before a decision is revealed.
//!
//! The winner is fixed before the sequence starts. Each frame shows a title
//! sampled uniformly from the pool, independently of the outcome, and the
//! sequence ends after a fixed number of frames or when cancelled.

use std::time::Duration;

use log::debug;
use rand::{seq::SliceRandom, Rng};
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use super::Decision;
use crate::models::Item;

/// Frames shown by default; with the default tick this lasts about five
/// seconds.
pub const DEFAULT_REVEAL_FRAMES: u32 = 62;

/// Delay between frames by default.
pub const DEFAULT_REVEAL_TICK: Duration = Duration::from_millis(80);

/// Fixed pacing of a reveal sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    pub frames: u32,
    pub tick: Duration,
}

impl RevealTiming {
    /// No animation; the winner is revealed at once.
    pub fn instant() -> Self {
        Self {
            frames: 0,
            tick: Duration::ZERO,
        }
    }

    /// Total length of the sequence.
    pub fn total(&self) -> Duration {
        self.tick * self.frames
    }
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            frames: DEFAULT_REVEAL_FRAMES,
            tick: DEFAULT_REVEAL_TICK,
        }
    }
}

/// How a reveal sequence ended.
#[derive(Debug, Clone, PartialEq)]
pub enum RevealOutcome {
    /// The sequence ran to completion; the winner becomes the proposal
    Revealed(Item),
    /// The sequence was torn down before completion
    Cancelled,
}

/// A pending reveal of an already drawn [`Decision`].
#[derive(Debug, Clone)]
pub struct Reveal {
    decision: Decision,
    timing: RevealTiming,
}

impl Reveal {
    pub fn new(decision: Decision, timing: RevealTiming) -> Self {
        Self { decision, timing }
    }

    /// Runs the sequence, calling `on_frame` with each shuffled title.
    ///
    /// Cancellation is checked before every frame, so a token cancelled
    /// before the call yields `Cancelled` without showing any frame.
    pub async fn play<R, F>(
        self,
        rng: &mut R,
        cancel: &CancellationToken,
        mut on_frame: F,
    ) -> RevealOutcome
    where
        R: Rng + ?Sized,
        F: FnMut(&str),
    {
        if cancel.is_cancelled() {
            debug!("Reveal cancelled before start");
            return RevealOutcome::Cancelled;
        }

        let Self { decision, timing } = self;
        if timing.frames > 0 && !timing.tick.is_zero() {
            let mut ticker = interval(timing.tick);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick of an interval completes immediately.
            ticker.tick().await;

            for frame in 0..timing.frames {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => {
                        debug!("Reveal cancelled at frame {frame}/{}", timing.frames);
                        return RevealOutcome::Cancelled;
                    }
                    _ = ticker.tick() => {}
                }

                if let Some(title) = decision.pool.choose(rng) {
                    on_frame(title);
                }
            }
        } else {
            for _ in 0..timing.frames {
                if let Some(title) = decision.pool.choose(rng) {
                    on_frame(title);
                }
            }
        }

        RevealOutcome::Revealed(decision.winner)
    }
}
