//! List node for slab-based storage.
//!
//! ## Design
//!
//! `RecordNode` wraps a payload with doubly-linked list pointers. The
//! pointers are slab keys (`usize`), not references, so the slab owns every
//! node and the links never form ownership cycles.
//!
//! ## Slab Integration
//!
//! Per official slab docs (https://docs.rs/slab/0.4.11):
//! - Keys are `usize` values returned by `slab.insert()`
//! - Keys may be reused after `slab.remove()`
//! - O(1) insert, remove, and lookup

/// Opaque position of a node inside one [`OrderedRecordList`](crate::list::OrderedRecordList).
///
/// Handles are only meaningful for the list that produced them and only
/// until that node is removed; slab keys are recycled afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(pub(crate) usize);

/// Node stored in the list's slab.
///
/// ## Memory Layout
///
/// ```text
/// RecordNode<T> {
///     value: T
///     next: Option<usize>
///     prev: Option<usize>
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RecordNode<T> {
    /// The stored record
    pub value: T,

    /// Next node toward the tail (slab key)
    /// None if this is the tail
    pub next: Option<usize>,

    /// Previous node toward the head (slab key)
    /// None if this is the head
    pub prev: Option<usize>,
}

impl<T> RecordNode<T> {
    /// Create a new node (not yet linked)
    #[inline]
    pub fn new(value: T) -> Self {
        Self::linked(value, None, None)
    }

    /// Create a node already pointing at its neighbours
    #[inline]
    pub fn linked(value: T, prev: Option<usize>, next: Option<usize>) -> Self {
        Self { value, next, prev }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_node_new() {
        let node = RecordNode::new("001");

        assert_eq!(node.value, "001");
        assert!(node.next.is_none());
        assert!(node.prev.is_none());
    }

    #[test]
    fn test_record_node_linked() {
        let node = RecordNode::linked("002", Some(0), Some(4));

        assert_eq!(node.prev, Some(0));
        assert_eq!(node.next, Some(4));
    }

    #[test]
    fn test_node_handle_identity() {
        assert_eq!(NodeHandle(7), NodeHandle(7));
        assert_ne!(NodeHandle(7), NodeHandle(8));
    }
}
