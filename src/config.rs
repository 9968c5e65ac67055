//! Process-wide store configuration.
//!
//! # Responsibility
//! - Define the seed dataset used by first-run bootstrap.
//! - Pin the canonical table names used across SQL statements.
//!
//! # Invariants
//! - `StoreConfig` is immutable after construction; it is built once at
//!   startup and passed into the bootstrapper, never mutated in place.
//! - Seed author ids are caller-supplied and must stay aligned with the
//!   book rows that reference them.

/// Canonical authors table name.
pub const AUTHORS_TABLE: &str = "authors";

/// Canonical books table name.
pub const BOOKS_TABLE: &str = "books";

/// One (book, author) pair of the initial dataset.
///
/// `author_id` is the pre-assigned identity the bootstrapper inserts
/// verbatim, so the seeded book row can reference it directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRecord {
    pub author_id: i64,
    pub title: String,
    pub author: String,
}

impl SeedRecord {
    pub fn new(author_id: i64, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            author_id,
            title: title.into(),
            author: author.into(),
        }
    }
}

/// Immutable store configuration handed to the bootstrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Records inserted on first-run bootstrap only.
    pub seed: Vec<SeedRecord>,
}

impl StoreConfig {
    /// Creates a configuration with a caller-supplied seed dataset.
    pub fn with_seed(seed: Vec<SeedRecord>) -> Self {
        Self { seed }
    }

    /// Creates a configuration that seeds nothing on bootstrap.
    pub fn empty() -> Self {
        Self { seed: Vec::new() }
    }
}

impl Default for StoreConfig {
    /// The fixed initial dataset: three books with sequential author ids.
    fn default() -> Self {
        Self {
            seed: vec![
                SeedRecord::new(1, "A Byte of Python", "Swaroop C. H."),
                SeedRecord::new(2, "Moby-Dick; or, The Whale", "Herman Melville"),
                SeedRecord::new(3, "War and Peace", "Leo Tolstoy"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StoreConfig;

    #[test]
    fn default_seed_has_three_sequential_author_ids() {
        let config = StoreConfig::default();
        let ids: Vec<i64> = config.seed.iter().map(|record| record.author_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn empty_config_seeds_nothing() {
        assert!(StoreConfig::empty().seed.is_empty());
    }
}
