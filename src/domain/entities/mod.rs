//! Core domain entities.
//!
//! Entities are plain data structures. Creation input lives in a separate
//! struct ([`NewLink`]) so that storage-assigned fields (`created_at`,
//! `clicks`) can never be supplied by callers.

pub mod link;

pub use link::{Link, NewLink};
