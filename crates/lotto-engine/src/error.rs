use crate::PICK_COUNT;

/// Errors raised while building or validating a pick set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PickError {
    #[error("Invalid number of picks: expected {expected}, got {got}")]
    InvalidCount { expected: usize, got: usize },

    #[error("Pick {value} is out of range ({min}-{max})")]
    OutOfRange { value: u32, min: u32, max: u32 },

    #[error("Duplicate pick found: {0}")]
    Duplicate(u32),

    #[error("Cannot parse `{0}` as a pick")]
    Unparsable(String),
}

/// Errors raised by inconsistent game rules
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error("Number range must at least contain {count} numbers, but got: {min}-{max}", count = PICK_COUNT)]
    RangeTooSmall { min: u32, max: u32 },

    #[error("Lowest number must be at least 1, got {0}")]
    MinimumTooLow(u32),

    #[error("Drawings per year must be greater than zero")]
    ZeroDrawingsPerYear,
}
