//! Validated form input.
//!
//! The species and state counts are carried as [`BoundedCount`], so a
//! [`FormInput`] with an out-of-range count cannot be built. Out-of-range
//! values are either clamped ([`BoundedCount::clamped`]) or refused
//! ([`BoundedCount::try_new`]) before anything reaches the generator.

use std::fmt;

use crate::config::{DEFAULT_SPECIES_COUNT, DEFAULT_STATE_COUNT, MAX_COUNT, MIN_COUNT};

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A count fell outside `[MIN_COUNT, MAX_COUNT]`.
    CountOutOfRange { field: &'static str, value: i64 },
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::CountOutOfRange { field, value } => write!(
                f,
                "{field} must be between {MIN_COUNT} and {MAX_COUNT}, got {value}"
            ),
        }
    }
}

impl std::error::Error for FormError {}

// =============================================================================
// BoundedCount
// =============================================================================

/// A species or state count in `[MIN_COUNT, MAX_COUNT]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoundedCount(u16);

impl BoundedCount {
    pub const MIN: BoundedCount = BoundedCount(MIN_COUNT);
    pub const MAX: BoundedCount = BoundedCount(MAX_COUNT);

    /// Saturates `value` into the accepted range.
    pub fn clamped(value: i64) -> Self {
        let v = value.clamp(i64::from(MIN_COUNT), i64::from(MAX_COUNT));
        // Lossless: v is within u16 after the clamp.
        BoundedCount(v as u16)
    }

    /// Refuses `value` when it is outside the accepted range.
    pub fn try_new(field: &'static str, value: i64) -> Result<Self, FormError> {
        if (i64::from(MIN_COUNT)..=i64::from(MAX_COUNT)).contains(&value) {
            Ok(BoundedCount(value as u16))
        } else {
            Err(FormError::CountOutOfRange { field, value })
        }
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for BoundedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// FormInput
// =============================================================================

/// One submission of the chemistry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub species_count: BoundedCount,
    pub state_count: BoundedCount,
    pub pattern_text: String,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            species_count: BoundedCount(DEFAULT_SPECIES_COUNT),
            state_count: BoundedCount(DEFAULT_STATE_COUNT),
            pattern_text: String::new(),
        }
    }
}

impl FormInput {
    /// Builds an input, clamping both counts into range.
    pub fn new(species: i64, states: i64, pattern_text: impl Into<String>) -> Self {
        Self {
            species_count: BoundedCount::clamped(species),
            state_count: BoundedCount::clamped(states),
            pattern_text: pattern_text.into(),
        }
    }

    /// Builds an input, refusing out-of-range counts.
    pub fn try_new(
        species: i64,
        states: i64,
        pattern_text: impl Into<String>,
    ) -> Result<Self, FormError> {
        Ok(Self {
            species_count: BoundedCount::try_new("species_count", species)?,
            state_count: BoundedCount::try_new("state_count", states)?,
            pattern_text: pattern_text.into(),
        })
    }
}
