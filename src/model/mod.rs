//! Catalog domain model.
//!
//! # Responsibility
//! - Define the canonical author/book records used by core logic.
//!
//! # Invariants
//! - Every record is identified by a store-assigned integer id that never
//!   changes after creation.
//! - Author names are unique across the catalog; the write paths guard
//!   this, the model itself stays a plain record.

pub mod author;
pub mod book;
