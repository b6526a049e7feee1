//! Domain model for event ratings.
//!
//! # Responsibility
//! - Define the canonical rating record used by core business logic.
//! - Own the rating bound invariant shared by every entry point.
//!
//! # Invariants
//! - Every rating is identified by its `event_id` natural key.
//! - A stored rating is immutable; there is no update or delete path.

pub mod event_rating;
