use serde::{Deserialize, Serialize};

use crate::PICK_COUNT;

/// Running totals of one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub three: u64,
    pub four: u64,
    pub five: u64,
    pub six: u64,
    /// Every drawing, hit or not
    pub drawings: u64,
}

impl Tally {
    /// Count one drawing's matches. Matches of 0, 1 or 2 are ignored.
    ///
    /// Returns true on a jackpot.
    pub fn record(&mut self, matches: usize) -> bool {
        match matches {
            3 => self.three += 1,
            4 => self.four += 1,
            5 => self.five += 1,
            PICK_COUNT => {
                self.six += 1;
                return true;
            }
            _ => {}
        }
        false
    }

    /// Counter for drawings with exactly `matches` hits, zero for untracked counts
    pub fn matches_of(&self, matches: usize) -> u64 {
        match matches {
            3 => self.three,
            4 => self.four,
            5 => self.five,
            PICK_COUNT => self.six,
            _ => 0,
        }
    }
}
