//! The `Record` trait: what the list and registry need to know about a value.
//!
//! A record carries two orderings that are deliberately kept apart:
//!
//! - the **unique key** ([`Record::key`]) identifies the record. Lookup,
//!   uniqueness checks and anchors for relative insertion all use it.
//! - the **ordering key** ([`Record::sort_key`]) decides where sorted
//!   insertion places the record. It defaults to the unique key.

/// A value that can live in an [`OrderedRecordList`](crate::list::OrderedRecordList)
/// and be managed by a [`RecordRegistry`](crate::registry::RecordRegistry).
pub trait Record {
    /// Unique key of this record.
    fn key(&self) -> &str;

    /// Ordering key used by sorted insertion.
    fn sort_key(&self) -> &str {
        self.key()
    }

    /// Name of the first required field that is empty, if any.
    ///
    /// The registry rejects records for which this returns `Some` with
    /// `InvalidInput` before touching the list.
    fn missing_field(&self) -> Option<&'static str> {
        if self.key().trim().is_empty() {
            Some("key")
        } else {
            None
        }
    }

    /// Canonical byte encoding used for snapshot fingerprints.
    ///
    /// Two records that compare equal field-by-field must encode identically.
    fn canonical_bytes(&self) -> Vec<u8> {
        self.key().as_bytes().to_vec()
    }
}

/// Plain strings are their own key. Handy for list-level tests and tools.
impl Record for String {
    fn key(&self) -> &str {
        self
    }
}

impl Record for &str {
    fn key(&self) -> &str {
        self
    }
}
