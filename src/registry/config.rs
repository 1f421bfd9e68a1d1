//! Registry configuration.

use std::cmp::Ordering;

use crate::types::Record;

/// Default number of pre-allocated node slots
pub const DEFAULT_CAPACITY: usize = 64;

/// Which key sorted insertion orders by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortBy {
    /// The record's ordering key ([`Record::sort_key`]), e.g. last name
    #[default]
    SortKey,
    /// The record's unique key ([`Record::key`])
    Key,
}

impl SortBy {
    /// Compare two records under this ordering
    pub fn compare<R: Record>(self, a: &R, b: &R) -> Ordering {
        match self {
            SortBy::SortKey => a.sort_key().cmp(b.sort_key()),
            SortBy::Key => a.key().cmp(b.key()),
        }
    }
}

/// Settings for a [`RecordRegistry`](crate::registry::RecordRegistry).
///
/// ## Example
///
/// ```
/// use student_roster::registry::{RegistryConfig, SortBy};
///
/// let config = RegistryConfig::default().capacity(1_000).sort_by(SortBy::Key);
/// assert_eq!(config.capacity, 1_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Node slots to pre-allocate
    pub capacity: usize,

    /// Ordering used by sorted insertion
    pub sort_by: SortBy,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            sort_by: SortBy::default(),
        }
    }
}

impl RegistryConfig {
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }
}
