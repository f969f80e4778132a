use serde::{Deserialize, Serialize};

use crate::{DRAWINGS_PER_YEAR, MAX_NUMBER, MIN_NUMBER, PICK_COUNT, RulesError};

/// How a pick set is sampled from the number range
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Sampling {
    /// Draw uniformly and throw away numbers already chosen
    #[default]
    Rejection,
    /// Partial Fisher-Yates shuffle over the whole range
    Shuffle,
}

/// Constants of one lottery game.
///
/// The pick count is fixed at [`PICK_COUNT`]; the number range, the yearly
/// drawing cadence and the sampling strategy may be tuned from config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Rules {
    pub min_number: u32,
    pub max_number: u32,
    pub drawings_per_year: u32,
    pub sampling: Sampling,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            min_number: MIN_NUMBER,
            max_number: MAX_NUMBER,
            drawings_per_year: DRAWINGS_PER_YEAR,
            sampling: Sampling::default(),
        }
    }
}

impl Rules {
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.min_number < 1 {
            return Err(RulesError::MinimumTooLow(self.min_number));
        }
        if self.max_number < self.min_number || self.span() < PICK_COUNT {
            return Err(RulesError::RangeTooSmall {
                min: self.min_number,
                max: self.max_number,
            });
        }
        if self.drawings_per_year == 0 {
            return Err(RulesError::ZeroDrawingsPerYear);
        }
        Ok(())
    }

    /// Whether `number` may appear in a pick set
    pub fn contains(&self, number: u32) -> bool {
        (self.min_number..=self.max_number).contains(&number)
    }

    /// Count of distinct numbers in the range
    pub fn span(&self) -> usize {
        self.max_number
            .checked_sub(self.min_number)
            .map_or(0, |gap| gap as usize + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = Rules::default();
        assert_eq!(rules.min_number, 1);
        assert_eq!(rules.max_number, 50);
        assert_eq!(rules.drawings_per_year, 104);
        assert_eq!(rules.sampling, Sampling::Rejection);
        assert_eq!(rules.span(), 50);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_range_too_small() {
        let rules = Rules {
            min_number: 1,
            max_number: 5,
            ..Rules::default()
        };
        assert_eq!(
            rules.validate(),
            Err(RulesError::RangeTooSmall { min: 1, max: 5 })
        );

        let inverted = Rules {
            min_number: 40,
            max_number: 10,
            ..Rules::default()
        };
        assert_eq!(inverted.span(), 0);
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn test_smallest_valid_range() {
        let rules = Rules {
            min_number: 10,
            max_number: 15,
            ..Rules::default()
        };
        assert!(rules.validate().is_ok());
        assert!(rules.contains(10));
        assert!(rules.contains(15));
        assert!(!rules.contains(16));
    }

    #[test]
    fn test_zero_minimum_and_cadence() {
        let rules = Rules {
            min_number: 0,
            ..Rules::default()
        };
        assert_eq!(rules.validate(), Err(RulesError::MinimumTooLow(0)));

        let rules = Rules {
            drawings_per_year: 0,
            ..Rules::default()
        };
        assert_eq!(rules.validate(), Err(RulesError::ZeroDrawingsPerYear));
    }

    #[test]
    fn test_sampling_names() {
        assert_eq!("shuffle".parse::<Sampling>(), Ok(Sampling::Shuffle));
        assert_eq!(Sampling::Rejection.to_string(), "rejection");
        assert!("bogus".parse::<Sampling>().is_err());
    }
}
