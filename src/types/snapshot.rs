//! Point-in-time copy of the roster with a content fingerprint.
//!
//! A presentation layer re-renders only when the fingerprint changes; the
//! snapshot itself is a plain `Vec`, detached from the live list.

use sha2::{Digest, Sha256};

use crate::types::Record;

/// Ordered copy of every record plus a SHA-256 fingerprint.
///
/// ## Fingerprint
///
/// The fingerprint hashes each record's [`Record::canonical_bytes`] in
/// traversal order, each prefixed by its length. Order is part of the
/// content: the same records listed ascending and descending fingerprint
/// differently.
///
/// ## Example
///
/// ```
/// use student_roster::types::RosterSnapshot;
///
/// let snapshot = RosterSnapshot::new(vec![String::from("A"), String::from("B")], true);
///
/// assert_eq!(snapshot.len(), 2);
/// assert_eq!(snapshot.fingerprint_hex().len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterSnapshot<R> {
    /// Records in traversal order
    pub records: Vec<R>,

    /// True if taken head to tail
    pub ascending: bool,

    /// SHA-256 over the records in order
    pub fingerprint: [u8; 32],
}

impl<R: Record> RosterSnapshot<R> {
    /// Build a snapshot and compute its fingerprint
    pub fn new(records: Vec<R>, ascending: bool) -> Self {
        let fingerprint = Self::compute_fingerprint(&records);
        Self {
            records,
            ascending,
            fingerprint,
        }
    }

    /// Compute the fingerprint of a record sequence
    pub fn compute_fingerprint(records: &[R]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for record in records {
            let bytes = record.canonical_bytes();
            hasher.update((bytes.len() as u64).to_le_bytes());
            hasher.update(&bytes);
        }

        let mut hash = [0u8; 32];
        hash.copy_from_slice(&hasher.finalize());
        hash
    }

    /// Get the fingerprint as a hex string
    pub fn fingerprint_hex(&self) -> String {
        hex::encode(self.fingerprint)
    }

    /// True if both snapshots hold the same records in the same order
    pub fn same_content(&self, other: &Self) -> bool {
        self.fingerprint == other.fingerprint
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Gender, Student};

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_snapshot_deterministic() {
        let a = RosterSnapshot::new(strings(&["A", "B", "C"]), true);
        let b = RosterSnapshot::new(strings(&["A", "B", "C"]), true);

        assert_eq!(a.fingerprint, b.fingerprint);
        assert!(a.same_content(&b));
    }

    #[test]
    fn test_snapshot_order_matters() {
        let forward = RosterSnapshot::new(strings(&["A", "B"]), true);
        let backward = RosterSnapshot::new(strings(&["B", "A"]), false);

        assert!(!forward.same_content(&backward));
    }

    #[test]
    fn test_snapshot_length_prefix() {
        // Without length prefixes these would hash the same bytes
        let joined = RosterSnapshot::new(strings(&["AB"]), true);
        let split = RosterSnapshot::new(strings(&["A", "B"]), true);

        assert!(!joined.same_content(&split));
    }

    #[test]
    fn test_snapshot_empty() {
        let empty: RosterSnapshot<String> = RosterSnapshot::new(Vec::new(), true);

        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
        // SHA-256 of the empty input
        assert_eq!(
            empty.fingerprint_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_snapshot_detects_field_change() {
        let before = Student::new("001", "Maria", "Perez", "maria.perez", Gender::Female, "systems");
        let mut after = before.clone();
        after.name = "Maria Camila".into();

        let a = RosterSnapshot::new(vec![before], true);
        let b = RosterSnapshot::new(vec![after], true);

        assert!(!a.same_content(&b));
    }
}
