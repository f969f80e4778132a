//! Lottery drawing engine.
//!
//! Owns the user's picks, the latest winning numbers and the running tally of
//! one single-player session. Randomness is injected through [`RandomSource`].

pub mod engine;
pub mod error;
pub mod pick;
pub mod random;
pub mod rules;
pub mod tally;

pub use engine::{DrawSnapshot, DrawingEngine, EngineState, count_matches};
pub use error::{PickError, RulesError};
pub use pick::PickSet;
pub use random::{RandomSource, RngSource};
pub use rules::{Rules, Sampling};
pub use tally::Tally;

/// Numbers in one pick set
pub const PICK_COUNT: usize = 6;
/// Lowest drawable number
pub const MIN_NUMBER: u32 = 1;
/// Highest drawable number
pub const MAX_NUMBER: u32 = 50;
/// Two drawings a week
pub const DRAWINGS_PER_YEAR: u32 = 104;
