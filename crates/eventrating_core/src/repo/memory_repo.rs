//! In-memory rating repository for tests and non-durable composition.
//!
//! # Responsibility
//! - Mirror the SQLite repository contract without a backing file.
//!
//! # Invariants
//! - Honors the same duplicate-`event_id` and not-found semantics as the
//!   SQLite implementation, so services behave identically over either.

use crate::model::event_rating::EventRating;
use crate::repo::rating_repo::{EventRatingRepository, RepoError, RepoResult};
use std::cell::RefCell;

/// Rating repository backed by an owned in-process list.
///
/// Explicitly constructed and injected; never shared ambient state.
#[derive(Debug, Default)]
pub struct InMemoryEventRatingRepository {
    rows: RefCell<Vec<EventRating>>,
}

impl InMemoryEventRatingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventRatingRepository for InMemoryEventRatingRepository {
    fn add_event_rating(&self, rating: &EventRating) -> RepoResult<()> {
        let mut rows = self.rows.borrow_mut();
        if rows.iter().any(|row| row.event_id == rating.event_id) {
            return Err(RepoError::DuplicateEventId(rating.event_id.clone()));
        }

        rows.push(rating.clone());
        Ok(())
    }

    fn get_event_ratings(&self) -> RepoResult<Vec<EventRating>> {
        Ok(self.rows.borrow().clone())
    }

    fn get_event_rating_by_event_id(&self, event_id: &str) -> RepoResult<Option<EventRating>> {
        Ok(self
            .rows
            .borrow()
            .iter()
            .find(|row| row.event_id == event_id)
            .cloned())
    }
}
