//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep external callers decoupled from storage details.

pub mod rating_service;
