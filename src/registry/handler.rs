//! Record registry: key-unique CRUD over an [`OrderedRecordList`].
//!
//! ## Responsibilities
//!
//! - Validate incoming records (no empty required fields)
//! - Keep unique keys unique across create and key-changing update
//! - Translate record commands into list operations
//!
//! ## Fail-fast
//!
//! Every command runs all of its checks before the first list mutation.
//! A rejected command leaves the list exactly as it was.
//!
//! ## Example
//!
//! ```
//! use student_roster::registry::RecordRegistry;
//! use student_roster::types::{Gender, Student};
//!
//! let mut registry = RecordRegistry::new();
//! registry.create(Student::new("001", "Ana", "Martinez", "ana@uni.edu", Gender::Female, "systems")).unwrap();
//! registry.create(Student::new("002", "Carlos", "Alvarez", "carlos@uni.edu", Gender::Male, "systems")).unwrap();
//!
//! // Sorted by last name, looked up by code
//! assert_eq!(registry.first().unwrap().last_name, "Alvarez");
//! assert!(registry.exists("001"));
//! ```

use tracing::{debug, warn};

use crate::list::{Iter, NodeHandle, OrderedRecordList};
use crate::registry::{RegistryConfig, RegistryError, RegistryResult};
use crate::types::{Placement, Record, RosterSnapshot};

/// Key-unique record collection.
///
/// Owns exactly one [`OrderedRecordList`]. Node handles never leave this
/// type; callers see records, booleans and `Vec`s of records.
#[derive(Debug, Clone)]
pub struct RecordRegistry<R> {
    /// Backing list
    records: OrderedRecordList<R>,

    config: RegistryConfig,
}

impl<R: Record> Default for RecordRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> RecordRegistry<R> {
    /// Create an empty registry with the default configuration
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry with an explicit configuration
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            records: OrderedRecordList::with_capacity(config.capacity),
            config,
        }
    }

    // ========================================================================
    // Create
    // ========================================================================

    /// Add a record in sorted position
    ///
    /// Orders by the configured [`SortBy`](crate::registry::SortBy), which by
    /// default is the record's ordering key rather than its unique key.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if a required field is empty
    /// - `DuplicateKey` if the key is already taken
    pub fn create(&mut self, record: R) -> RegistryResult<()> {
        self.admit(&record)?;

        let sort_by = self.config.sort_by;
        let key = record.key().to_owned();
        self.records.add_sorted_by(record, |a, b| sort_by.compare(a, b));

        self.committed(&Placement::Sorted, &key);
        Ok(())
    }

    /// Add a record at the head
    pub fn create_at_head(&mut self, record: R) -> RegistryResult<()> {
        self.admit(&record)?;

        let key = record.key().to_owned();
        self.records.add_first(record);

        self.committed(&Placement::Head, &key);
        Ok(())
    }

    /// Add a record at the tail
    pub fn create_at_tail(&mut self, record: R) -> RegistryResult<()> {
        self.admit(&record)?;

        let key = record.key().to_owned();
        self.records.add_last(record);

        self.committed(&Placement::Tail, &key);
        Ok(())
    }

    /// Add a record immediately before the record keyed `anchor_key`
    ///
    /// A taken key is reported even when the anchor is missing too.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `anchor_key` is empty or the record is invalid
    /// - `DuplicateKey` if the new record's key is already taken
    /// - `AnchorNotFound` if no record has `anchor_key`
    pub fn create_before(&mut self, anchor_key: &str, record: R) -> RegistryResult<()> {
        self.create_relative(anchor_key, record, false)
    }

    /// Add a record immediately after the record keyed `anchor_key`
    ///
    /// Fails the same ways as [`create_before`](Self::create_before).
    pub fn create_after(&mut self, anchor_key: &str, record: R) -> RegistryResult<()> {
        self.create_relative(anchor_key, record, true)
    }

    /// Add a record using the given placement
    pub fn insert(&mut self, placement: &Placement, record: R) -> RegistryResult<()> {
        match placement {
            Placement::Sorted => self.create(record),
            Placement::Head => self.create_at_head(record),
            Placement::Tail => self.create_at_tail(record),
            Placement::Before(anchor) => self.create_before(anchor, record),
            Placement::After(anchor) => self.create_after(anchor, record),
        }
    }

    fn create_relative(&mut self, anchor_key: &str, record: R, after: bool) -> RegistryResult<()> {
        require_key(anchor_key, "anchor key")?;
        self.admit(&record)?;
        let anchor = self.locate(anchor_key, RegistryError::AnchorNotFound)?;

        let key = record.key().to_owned();
        let (placement, linked) = if after {
            (Placement::After(anchor_key.to_owned()), self.records.add_after(anchor, record))
        } else {
            (Placement::Before(anchor_key.to_owned()), self.records.add_before(anchor, record))
        };
        linked.map_err(|_| reject(RegistryError::AnchorNotFound(anchor_key.to_owned())))?;

        self.committed(&placement, &key);
        Ok(())
    }

    // ========================================================================
    // Read
    // ========================================================================

    /// Look up a record by unique key
    ///
    /// # Errors
    ///
    /// `InvalidInput` if `key` is empty
    pub fn find_by_key(&self, key: &str) -> RegistryResult<Option<&R>> {
        require_key(key, "key")?;
        Ok(self
            .records
            .find_by_key(key)
            .and_then(|handle| self.records.get(handle)))
    }

    /// True if a record with `key` exists
    ///
    /// An empty key never exists.
    pub fn exists(&self, key: &str) -> bool {
        matches!(self.find_by_key(key), Ok(Some(_)))
    }

    /// Record at `index`, counting from the head
    ///
    /// # Errors
    ///
    /// `InvalidInput` if `index` is outside `[0, count)`
    pub fn by_position(&self, index: usize) -> RegistryResult<&R> {
        self.records.object_at(index).ok_or_else(|| {
            reject(RegistryError::InvalidInput(format!(
                "position {index} is outside 0..{}",
                self.count()
            )))
        })
    }

    /// Number of records
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// True if the registry holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at the head, if any
    pub fn first(&self) -> Option<&R> {
        self.records.first()
    }

    /// Record at the tail, if any
    pub fn last(&self) -> Option<&R> {
        self.records.last()
    }

    /// Borrowing iterator over the records, head to tail
    pub fn iter(&self) -> Iter<'_, R> {
        self.records.iter()
    }

    // ========================================================================
    // Update / Delete
    // ========================================================================

    /// Replace the record keyed `key`, keeping its position
    ///
    /// The new record may carry a different key, as long as no other record
    /// already uses it. The list is not re-sorted.
    ///
    /// # Returns
    ///
    /// The record that was replaced
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `key` is empty or the record is invalid
    /// - `RecordNotFound` if no record has `key`
    /// - `DuplicateKey` if the new key belongs to another record
    pub fn update(&mut self, key: &str, record: R) -> RegistryResult<R> {
        require_key(key, "key")?;
        validate(&record)?;
        let handle = self.locate(key, RegistryError::RecordNotFound)?;
        if record.key() != key {
            self.ensure_unique(record.key())?;
        }

        let new_key = record.key().to_owned();
        let previous = self
            .records
            .replace(handle, record)
            .map_err(|_| reject(RegistryError::RecordNotFound(key.to_owned())))?;

        debug!(key, new_key = %new_key, count = self.count(), "record updated");
        Ok(previous)
    }

    /// Remove the record keyed `key`
    ///
    /// # Returns
    ///
    /// The removed record
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `key` is empty
    /// - `RecordNotFound` if no record has `key`
    pub fn delete(&mut self, key: &str) -> RegistryResult<R> {
        require_key(key, "key")?;
        let handle = self.locate(key, RegistryError::RecordNotFound)?;

        let removed = self
            .records
            .remove(handle)
            .ok_or_else(|| reject(RegistryError::RecordNotFound(key.to_owned())))?;

        debug!(key, count = self.count(), "record deleted");
        Ok(removed)
    }

    /// Drop every record
    pub fn reset(&mut self) {
        let dropped = self.count();
        self.records.clear();
        debug!(dropped, "registry reset");
    }

    // ========================================================================
    // Checks
    // ========================================================================

    fn admit(&self, record: &R) -> RegistryResult<()> {
        validate(record)?;
        self.ensure_unique(record.key())
    }

    fn ensure_unique(&self, key: &str) -> RegistryResult<()> {
        match self.records.find_by_key(key) {
            Some(_) => Err(reject(RegistryError::DuplicateKey(key.to_owned()))),
            None => Ok(()),
        }
    }

    fn locate(
        &self,
        key: &str,
        missing: fn(String) -> RegistryError,
    ) -> RegistryResult<NodeHandle> {
        self.records
            .find_by_key(key)
            .ok_or_else(|| reject(missing(key.to_owned())))
    }

    fn committed(&self, placement: &Placement, key: &str) {
        debug!(
            placement = placement.label(),
            anchor = placement.anchor(),
            key,
            count = self.count(),
            "record created"
        );
    }
}

impl<R: Record + Clone> RecordRegistry<R> {
    /// Copy of every record, head to tail or tail to head
    pub fn list_all(&self, ascending: bool) -> Vec<R> {
        self.records.to_ordered_sequence(ascending)
    }

    /// Copy of every record plus a fingerprint of the content
    pub fn snapshot(&self, ascending: bool) -> RosterSnapshot<R> {
        RosterSnapshot::new(self.list_all(ascending), ascending)
    }
}

fn validate<R: Record>(record: &R) -> RegistryResult<()> {
    match record.missing_field() {
        Some(field) => Err(reject(RegistryError::InvalidInput(format!(
            "required field `{field}` is empty"
        )))),
        None => Ok(()),
    }
}

fn require_key(key: &str, what: &str) -> RegistryResult<()> {
    if key.trim().is_empty() {
        return Err(reject(RegistryError::InvalidInput(format!("{what} is empty"))));
    }
    Ok(())
}

fn reject(err: RegistryError) -> RegistryError {
    warn!(error = %err, "registry command rejected");
    err
}

// ============================================================================
// Unit Tests
// ============================================================================
