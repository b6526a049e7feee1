//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract for event ratings.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repositories translate rows to records and back; business validation
//!   stays in the service layer.
//! - Duplicate natural keys surface as semantic errors, never as silent
//!   overwrites.

pub mod memory_repo;
pub mod rating_repo;
