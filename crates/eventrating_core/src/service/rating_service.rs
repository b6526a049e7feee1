//! Event rating use-case service.
//!
//! # Responsibility
//! - Provide the create/list/get entry points consumed by external callers.
//! - Enforce the rating bound invariant before any side effect occurs.
//!
//! # Invariants
//! - The [1, 5] bound is checked here and only here, so every entry point is
//!   covered regardless of which front end calls in.
//! - The service never pre-checks key existence; duplicates fail at the
//!   storage boundary and are lifted to a semantic error.

use crate::model::event_rating::{EventRating, RatingValidationError};
use crate::repo::rating_repo::{EventRatingRepository, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for rating use-cases.
#[derive(Debug)]
pub enum RatingServiceError {
    /// Rating bound violated; rejected before persistence is touched.
    InvalidRating(RatingValidationError),
    /// Target event already has a rating.
    DuplicateEventId(String),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for RatingServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRating(err) => write!(f, "{err}"),
            Self::DuplicateEventId(event_id) => {
                write!(f, "event `{event_id}` already has a rating")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RatingServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidRating(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::DuplicateEventId(_) => None,
        }
    }
}

impl From<RepoError> for RatingServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::DuplicateEventId(event_id) => Self::DuplicateEventId(event_id),
            other => Self::Repo(other),
        }
    }
}

/// Use-case service wrapper for rating operations.
///
/// Owns its repository via constructor injection; stateless otherwise.
pub struct EventRatingService<R: EventRatingRepository> {
    repo: R,
}

impl<R: EventRatingRepository> EventRatingService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one rating and returns the stored record.
    ///
    /// # Contract
    /// - Validates the rating bound before any write.
    /// - Returns [`RatingServiceError::DuplicateEventId`] when the event was
    ///   already rated; the existing row is left untouched.
    pub fn create_event_rating(
        &self,
        event_id: impl Into<String>,
        rating: i64,
        comment: impl Into<String>,
    ) -> Result<EventRating, RatingServiceError> {
        let record = EventRating::new(event_id, rating, comment);
        record
            .validate()
            .map_err(RatingServiceError::InvalidRating)?;

        self.repo.add_event_rating(&record)?;
        Ok(record)
    }

    /// Lists all stored ratings; empty vec on an empty store.
    pub fn list_event_ratings(&self) -> Result<Vec<EventRating>, RatingServiceError> {
        Ok(self.repo.get_event_ratings()?)
    }

    /// Gets one rating by event id; `Ok(None)` is the normal absent outcome.
    pub fn get_event_rating(
        &self,
        event_id: &str,
    ) -> Result<Option<EventRating>, RatingServiceError> {
        Ok(self.repo.get_event_rating_by_event_id(event_id)?)
    }
}
