use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Display;

use crate::{PICK_COUNT, PickError, Rules};

/// An ordered run of lottery numbers: the user's picks or one drawing's winners.
///
/// Order is the order the numbers were chosen in, never sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PickSet(Vec<u32>);

impl Display for PickSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        )
    }
}

impl From<Vec<u32>> for PickSet {
    fn from(numbers: Vec<u32>) -> Self {
        Self(numbers)
    }
}

impl From<[u32; PICK_COUNT]> for PickSet {
    fn from(numbers: [u32; PICK_COUNT]) -> Self {
        Self(numbers.to_vec())
    }
}

impl AsRef<[u32]> for PickSet {
    fn as_ref(&self) -> &[u32] {
        &self.0
    }
}

impl PickSet {
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, number: u32) -> bool {
        self.0.contains(&number)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u32> {
        self.0.iter()
    }

    /// Parse manual entry such as `"7, 14 21,28 35 42"`.
    ///
    /// Only the syntax is checked here, see [`PickSet::validate`] for the game rules.
    pub fn parse(input: &str) -> Result<Self, PickError> {
        input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<u32>()
                    .map_err(|_e| PickError::Unparsable(token.to_owned()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Strict check used by front ends before handing picks to the engine
    pub fn validate(&self, rules: &Rules) -> Result<(), PickError> {
        if self.0.len() != PICK_COUNT {
            return Err(PickError::InvalidCount {
                expected: PICK_COUNT,
                got: self.0.len(),
            });
        }

        if let Some(&value) = self.0.iter().find(|&&n| !rules.contains(n)) {
            return Err(PickError::OutOfRange {
                value,
                min: rules.min_number,
                max: rules.max_number,
            });
        }

        let mut seen = HashSet::with_capacity(PICK_COUNT);
        if let Some(&dup) = self.0.iter().find(|&&n| !seen.insert(n)) {
            return Err(PickError::Duplicate(dup));
        }

        Ok(())
    }

    /// Copy of the numbers in ascending order, for display
    pub fn sorted(&self) -> Self {
        let mut numbers = self.0.clone();
        numbers.sort_unstable();
        Self(numbers)
    }
}

impl<'a> IntoIterator for &'a PickSet {
    type Item = &'a u32;
    type IntoIter = std::slice::Iter<'a, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
