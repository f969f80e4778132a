use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::random::{RandomSource, RngSource, sample_rejection, sample_shuffle};
use crate::{PICK_COUNT, PickError, PickSet, Rules, RulesError, Sampling, Tally};

/// Observable engine state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
pub enum EngineState {
    Idle,
    Won,
}

/// Owned copy of everything a front end shows after a drawing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawSnapshot {
    pub picks: PickSet,
    pub winners: PickSet,
    /// Matches of the latest drawing
    pub matches: usize,
    pub tally: Tally,
    pub years: f64,
    pub jackpot: bool,
}

/// Drawing and bookkeeping for one lottery session.
///
/// All randomness comes from the injected [`RandomSource`]. The engine holds no
/// locks; callers issue one operation at a time through `&mut self`.
#[derive(Debug, Clone)]
pub struct DrawingEngine<S = RngSource<StdRng>> {
    rules: Rules,
    source: S,
    picks: PickSet,
    winners: PickSet,
    last_matches: usize,
    tally: Tally,
    jackpot: bool,
}

impl DrawingEngine {
    /// Engine with default rules, seeded from OS entropy
    pub fn new() -> Self {
        Self::with_source(RngSource::from_entropy())
    }

    /// Repeatable engine with default rules
    pub fn seeded(seed: u64) -> Self {
        Self::with_source(RngSource::seeded(seed))
    }
}

impl Default for DrawingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RandomSource> DrawingEngine<S> {
    pub fn with_source(source: S) -> Self {
        Self::build(Rules::default(), source)
    }

    pub fn with_rules(rules: Rules, source: S) -> Result<Self, RulesError> {
        rules.validate()?;
        Ok(Self::build(rules, source))
    }

    fn build(rules: Rules, source: S) -> Self {
        Self {
            rules,
            source,
            picks: PickSet::default(),
            winners: PickSet::default(),
            last_matches: 0,
            tally: Tally::default(),
            jackpot: false,
        }
    }

    /// Six distinct numbers in range, in the order they were drawn
    pub fn generate_unique_picks(&mut self) -> PickSet {
        match self.rules.sampling {
            Sampling::Rejection => sample_rejection(&mut self.source, &self.rules),
            Sampling::Shuffle => sample_shuffle(&mut self.source, &self.rules),
        }
    }

    /// Store a copy of `candidate` as the user's picks.
    ///
    /// Range and uniqueness are not checked here, use [`PickSet::validate`] for that.
    pub fn set_picks(&mut self, candidate: &[u32]) -> Result<(), PickError> {
        if candidate.len() != PICK_COUNT {
            return Err(PickError::InvalidCount {
                expected: PICK_COUNT,
                got: candidate.len(),
            });
        }
        self.picks = PickSet::from(candidate.to_vec());
        Ok(())
    }

    pub fn generate_quick_pick(&mut self) -> PickSet {
        self.picks = self.generate_unique_picks();
        self.picks.clone()
    }

    /// Run one drawing and return how many picks it matched
    pub fn draw(&mut self) -> usize {
        self.tally.drawings += 1;
        self.winners = self.generate_unique_picks();
        let matches = count_matches(self.picks.as_slice(), self.winners.as_slice());
        self.last_matches = matches;
        log::trace!(
            "drawing #{}: winners [{}], {matches} matches",
            self.tally.drawings,
            self.winners
        );
        self.record_matches(matches);
        matches
    }

    /// Fold a match count into the tally. Returns true on a jackpot.
    pub fn record_matches(&mut self, matches: usize) -> bool {
        let jackpot = self.tally.record(matches);
        if jackpot {
            if !self.jackpot {
                log::debug!("jackpot after {} drawings", self.tally.drawings);
            }
            self.jackpot = true;
        }
        jackpot
    }

    /// Time the session would take at the configured drawing cadence
    pub fn years_elapsed(&self) -> f64 {
        self.tally.drawings as f64 / f64::from(self.rules.drawings_per_year)
    }

    /// Back to a fresh session. Rules and random source are kept.
    pub fn reset(&mut self) {
        log::debug!("reset after {} drawings", self.tally.drawings);
        self.picks = PickSet::default();
        self.winners = PickSet::default();
        self.last_matches = 0;
        self.tally = Tally::default();
        self.jackpot = false;
    }

    pub fn picks(&self) -> &[u32] {
        self.picks.as_slice()
    }

    pub fn winners(&self) -> &[u32] {
        self.winners.as_slice()
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn matches_of(&self, matches: usize) -> u64 {
        self.tally.matches_of(matches)
    }

    pub fn total_drawings(&self) -> u64 {
        self.tally.drawings
    }

    pub fn is_jackpot(&self) -> bool {
        self.jackpot
    }

    pub fn state(&self) -> EngineState {
        if self.jackpot {
            EngineState::Won
        } else {
            EngineState::Idle
        }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn snapshot(&self) -> DrawSnapshot {
        DrawSnapshot {
            picks: self.picks.clone(),
            winners: self.winners.clone(),
            matches: self.last_matches,
            tally: self.tally,
            years: self.years_elapsed(),
            jackpot: self.jackpot,
        }
    }
}

/// Winners that also appear among the picks, each winner counted once
pub fn count_matches(picks: &[u32], winners: &[u32]) -> usize {
    winners.iter().filter(|w| picks.contains(w)).count()
}
