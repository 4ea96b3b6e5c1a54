//! Infrastructure layer for external integrations.
//!
//! Implements the repository interfaces defined by the domain layer.
//!
//! - [`persistence`] - PostgreSQL and in-memory link storage

pub mod persistence;
