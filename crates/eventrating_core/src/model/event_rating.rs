//! Event rating domain record.
//!
//! # Responsibility
//! - Define the canonical record persisted per reviewed event.
//! - Validate the rating bound invariant in one place.
//!
//! # Invariants
//! - `event_id` is the non-empty natural key; the store enforces its uniqueness.
//! - `rating` lies in the closed range [`RATING_MIN`, `RATING_MAX`].
//! - `comment` is required, but the empty string is a legal value.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lowest accepted rating value (inclusive).
pub const RATING_MIN: i64 = 1;
/// Highest accepted rating value (inclusive).
pub const RATING_MAX: i64 = 5;

/// Validation error for rating records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingValidationError {
    /// Rating value falls outside the accepted closed range.
    RatingOutOfRange { rating: i64 },
    /// Natural key is the empty string.
    EmptyEventId,
}

impl Display for RatingValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RatingOutOfRange { rating } => write!(
                f,
                "rating {rating} is outside the accepted range {RATING_MIN}..={RATING_MAX}"
            ),
            Self::EmptyEventId => write!(f, "event_id must not be empty"),
        }
    }
}

impl Error for RatingValidationError {}

/// One reviewer's feedback for one event.
///
/// The record is created once and never updated; re-rating the same event
/// fails at the storage boundary on the `event_id` uniqueness constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRating {
    /// Natural key; unique across all stored ratings.
    pub event_id: String,
    /// Integer rating in [`RATING_MIN`, `RATING_MAX`].
    pub rating: i64,
    /// Free-text feedback; empty string permitted, absence not.
    pub comment: String,
}

impl EventRating {
    /// Builds a rating record without validating it.
    ///
    /// Validation is deliberately separate so callers decide where the bound
    /// is enforced; the service layer is the single enforcement point.
    pub fn new(event_id: impl Into<String>, rating: i64, comment: impl Into<String>) -> Self {
        Self {
            event_id: event_id.into(),
            rating,
            comment: comment.into(),
        }
    }

    /// Checks the record invariants.
    ///
    /// The read path treats an empty persisted `event_id` as corruption, so
    /// this check must reject it before any write.
    ///
    /// # Errors
    /// - [`RatingValidationError::EmptyEventId`] when `event_id` is empty.
    /// - [`RatingValidationError::RatingOutOfRange`] when `rating` is not in
    ///   [`RATING_MIN`, `RATING_MAX`].
    pub fn validate(&self) -> Result<(), RatingValidationError> {
        if self.event_id.is_empty() {
            return Err(RatingValidationError::EmptyEventId);
        }
        if !(RATING_MIN..=RATING_MAX).contains(&self.rating) {
            return Err(RatingValidationError::RatingOutOfRange {
                rating: self.rating,
            });
        }
        Ok(())
    }
}
