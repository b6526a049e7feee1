//! Core domain logic for event ratings.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::event_rating::{EventRating, RatingValidationError, RATING_MAX, RATING_MIN};
pub use repo::memory_repo::InMemoryEventRatingRepository;
pub use repo::rating_repo::{
    EventRatingRepository, RepoError, RepoResult, SqliteEventRatingRepository,
};
pub use service::rating_service::{EventRatingService, RatingServiceError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
