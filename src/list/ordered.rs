//! Doubly-linked record list over a slab arena.
//!
//! ## Queue Structure
//!
//! ```text
//! head <-> node2 <-> node3 <-> tail
//! ```
//!
//! The list is linear: `head.prev` and `tail.next` are always `None`, and
//! every traversal stops on `None`. There is no wraparound link.
//!
//! - Insertion at either end, before/after a known node, or in sorted position
//! - Any node can be removed in O(1) using its handle
//! - The list knows nothing about uniqueness; that is the registry's job

use std::cmp::Ordering;
use std::iter::FusedIterator;

use slab::Slab;

use crate::list::{NodeHandle, RecordNode};
use crate::types::Record;

/// Doubly-linked list of records.
///
/// The node data lives in the slab; `head` and `tail` are slab keys.
///
/// ## Example
///
/// ```
/// use student_roster::list::OrderedRecordList;
///
/// let mut list = OrderedRecordList::new();
/// list.add_sorted("C");
/// list.add_sorted("A");
/// list.add_sorted("B");
///
/// assert_eq!(list.to_ordered_sequence(true), vec!["A", "B", "C"]);
/// assert_eq!(list.to_ordered_sequence(false), vec!["C", "B", "A"]);
/// ```
#[derive(Debug, Clone)]
pub struct OrderedRecordList<T> {
    /// Node storage
    /// Key: slab index, Value: RecordNode
    nodes: Slab<RecordNode<T>>,

    /// First node (slab key)
    head: Option<usize>,

    /// Last node (slab key)
    tail: Option<usize>,
}

impl<T> Default for OrderedRecordList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OrderedRecordList<T> {
    /// Create a new empty list
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: None,
            tail: None,
        }
    }

    /// Create a list with pre-allocated node capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    /// Get the current capacity (pre-allocated slots)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Number of records in the list
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True iff both head and tail are unset
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none() && self.tail.is_none()
    }

    /// Check if a handle points at a live node of this list
    #[inline]
    pub fn contains(&self, handle: NodeHandle) -> bool {
        self.nodes.contains(handle.0)
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Insert at the head of the list
    pub fn add_first(&mut self, value: T) -> NodeHandle {
        let key = self.nodes.insert(RecordNode::linked(value, None, self.head));

        match self.head {
            Some(old_head) => self.nodes[old_head].prev = Some(key),
            // Empty list - this is also the tail
            None => self.tail = Some(key),
        }
        self.head = Some(key);

        NodeHandle(key)
    }

    /// Insert at the tail of the list
    pub fn add_last(&mut self, value: T) -> NodeHandle {
        let key = self.nodes.insert(RecordNode::linked(value, self.tail, None));

        match self.tail {
            Some(old_tail) => self.nodes[old_tail].next = Some(key),
            // Empty list - this is also the head
            None => self.head = Some(key),
        }
        self.tail = Some(key);

        NodeHandle(key)
    }

    /// Insert immediately after `anchor`
    ///
    /// # Returns
    ///
    /// The new node's handle, or `Err(value)` if `anchor` is not a live node
    /// of this list. The list is untouched in that case.
    pub fn add_after(&mut self, anchor: NodeHandle, value: T) -> Result<NodeHandle, T> {
        if !self.contains(anchor) {
            return Err(value);
        }
        Ok(self.link_after(anchor.0, value))
    }

    /// Insert immediately before `anchor`
    ///
    /// # Returns
    ///
    /// The new node's handle, or `Err(value)` if `anchor` is not a live node
    /// of this list. The list is untouched in that case.
    pub fn add_before(&mut self, anchor: NodeHandle, value: T) -> Result<NodeHandle, T> {
        if !self.contains(anchor) {
            return Err(value);
        }
        Ok(self.link_before(anchor.0, value))
    }

    /// Insert in sorted position using `compare`
    ///
    /// Scans from the head and inserts before the first node that orders
    /// strictly after `value`, or at the tail if there is none. Values equal
    /// to existing ones land after them, so repeated insertion is a stable
    /// insertion sort.
    pub fn add_sorted_by<F>(&mut self, value: T, mut compare: F) -> NodeHandle
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut cursor = self.head;
        while let Some(key) = cursor {
            let node = &self.nodes[key];
            if compare(&value, &node.value) == Ordering::Less {
                return self.link_before(key, value);
            }
            cursor = node.next;
        }
        self.add_last(value)
    }

    /// Insert in sorted position using the natural order of `T`
    pub fn add_sorted(&mut self, value: T) -> NodeHandle
    where
        T: Ord,
    {
        self.add_sorted_by(value, |a, b| a.cmp(b))
    }

    /// `key` must be live.
    fn link_after(&mut self, key: usize, value: T) -> NodeHandle {
        let Some(next_key) = self.nodes[key].next else {
            return self.add_last(value);
        };

        let new_key = self.nodes.insert(RecordNode::linked(value, Some(key), Some(next_key)));
        self.nodes[key].next = Some(new_key);
        self.nodes[next_key].prev = Some(new_key);

        NodeHandle(new_key)
    }

    /// `key` must be live.
    fn link_before(&mut self, key: usize, value: T) -> NodeHandle {
        let Some(prev_key) = self.nodes[key].prev else {
            return self.add_first(value);
        };

        let new_key = self.nodes.insert(RecordNode::linked(value, Some(prev_key), Some(key)));
        self.nodes[prev_key].next = Some(new_key);
        self.nodes[key].prev = Some(new_key);

        NodeHandle(new_key)
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Remove a node and return its value
    ///
    /// Handles the sole-node, head, tail and interior cases by relinking
    /// the neighbours (or moving head/tail when there is no neighbour).
    ///
    /// # Returns
    ///
    /// The removed value, or None if `handle` is not a live node
    pub fn remove(&mut self, handle: NodeHandle) -> Option<T> {
        if !self.contains(handle) {
            return None;
        }
        let node = self.nodes.remove(handle.0);

        match node.prev {
            Some(prev) => self.nodes[prev].next = node.next,
            // This was the head
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.nodes[next].prev = node.prev,
            // This was the tail
            None => self.tail = node.prev,
        }

        Some(node.value)
    }

    /// Remove every node
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Value stored at `handle`
    #[inline]
    pub fn get(&self, handle: NodeHandle) -> Option<&T> {
        self.nodes.get(handle.0).map(|node| &node.value)
    }

    /// Mutable value stored at `handle`
    #[inline]
    pub fn get_mut(&mut self, handle: NodeHandle) -> Option<&mut T> {
        self.nodes.get_mut(handle.0).map(|node| &mut node.value)
    }

    /// Swap the value at `handle` in place, keeping its position
    ///
    /// # Returns
    ///
    /// The previous value, or `Err(value)` if `handle` is not live
    pub fn replace(&mut self, handle: NodeHandle, value: T) -> Result<T, T> {
        match self.get_mut(handle) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => Err(value),
        }
    }

    /// Peek at the head value
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.head.map(|key| &self.nodes[key].value)
    }

    /// Peek at the tail value
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.tail.map(|key| &self.nodes[key].value)
    }

    /// Value at position `index`, counting from the head
    pub fn object_at(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Borrowing iterator, head to tail (`.rev()` for tail to head)
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.nodes.len(),
        }
    }

    /// Fresh copy of every value
    ///
    /// Ascending walks head to tail through `next` links; descending walks
    /// tail to head through `prev` links.
    pub fn to_ordered_sequence(&self, ascending: bool) -> Vec<T>
    where
        T: Clone,
    {
        if ascending {
            self.iter().cloned().collect()
        } else {
            self.iter().rev().cloned().collect()
        }
    }

    fn keys(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.head, move |&key| self.nodes[key].next)
    }
}

impl<T: Record> OrderedRecordList<T> {
    /// Find the first node whose record has this unique key
    ///
    /// Compares [`Record::key`] only, never the rest of the payload.
    pub fn find_by_key(&self, key: &str) -> Option<NodeHandle> {
        self.keys()
            .find(|&slot| self.nodes[slot].value.key() == key)
            .map(NodeHandle)
    }
}

impl<'a, T> IntoIterator for &'a OrderedRecordList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Iterator
// ============================================================================

/// Double-ended iterator over an [`OrderedRecordList`].
///
/// Created by [`OrderedRecordList::iter`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    nodes: &'a Slab<RecordNode<T>>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = &nodes[self.front?];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = &nodes[self.back?];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Walk both directions and check every link agrees
    fn assert_consistent<T>(list: &OrderedRecordList<T>) {
        let forward: Vec<usize> = list.keys().collect();
        assert_eq!(forward.len(), list.len());

        let mut backward = Vec::new();
        let mut cursor = list.tail;
        while let Some(key) = cursor {
            backward.push(key);
            cursor = list.nodes[key].prev;
        }
        backward.reverse();
        assert_eq!(forward, backward);

        if let Some(head) = list.head {
            assert!(list.nodes[head].prev.is_none());
        }
        if let Some(tail) = list.tail {
            assert!(list.nodes[tail].next.is_none());
        }
        assert_eq!(list.head.is_none(), list.tail.is_none());
    }

    fn list_of(values: &[&'static str]) -> OrderedRecordList<&'static str> {
        let mut list = OrderedRecordList::new();
        for value in values {
            list.add_last(*value);
        }
        list
    }

    #[test]
    fn test_list_new() {
        let list: OrderedRecordList<&str> = OrderedRecordList::new();

        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.first().is_none());
        assert!(list.last().is_none());
        assert!(list.object_at(0).is_none());
        assert!(list.to_ordered_sequence(true).is_empty());
    }

    #[test]
    fn test_list_with_capacity() {
        let list: OrderedRecordList<String> = OrderedRecordList::with_capacity(128);
        assert!(list.capacity() >= 128);
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_first() {
        let mut list = OrderedRecordList::new();

        list.add_first("Node1");
        assert_eq!(list.first(), Some(&"Node1"));
        assert_eq!(list.last(), Some(&"Node1"));

        list.add_first("Node2");
        assert_eq!(list.first(), Some(&"Node2"));
        assert_eq!(list.last(), Some(&"Node1"));
        assert_consistent(&list);
    }

    #[test]
    fn test_add_last() {
        let mut list = OrderedRecordList::new();

        list.add_last("Node1");
        assert_eq!(list.last(), Some(&"Node1"));

        list.add_last("Node2");
        assert_eq!(list.first(), Some(&"Node1"));
        assert_eq!(list.last(), Some(&"Node2"));
        assert_consistent(&list);
    }

    #[test]
    fn test_single_node_has_no_neighbours() {
        let mut list = OrderedRecordList::new();
        let handle = list.add_last("Node1");

        let node = &list.nodes[handle.0];
        assert!(node.prev.is_none());
        assert!(node.next.is_none());
        assert_eq!(list.head, Some(handle.0));
        assert_eq!(list.tail, Some(handle.0));
    }

    #[test]
    fn test_add_after_interior() {
        let mut list = list_of(&["Node1", "Node2"]);
        let node1 = list.find_by_key("Node1").unwrap();

        let added = list.add_after(node1, "Node3").unwrap();

        assert_eq!(list.nodes[node1.0].next, Some(added.0));
        assert_eq!(list.to_ordered_sequence(true), vec!["Node1", "Node3", "Node2"]);
        assert_consistent(&list);
    }

    #[test]
    fn test_add_after_tail_moves_tail() {
        let mut list = list_of(&["Node1", "Node2"]);
        let node2 = list.find_by_key("Node2").unwrap();

        list.add_after(node2, "Node3").unwrap();

        assert_eq!(list.last(), Some(&"Node3"));
        assert_consistent(&list);
    }

    #[test]
    fn test_add_before_interior() {
        let mut list = list_of(&["Node1", "Node2"]);
        let node2 = list.find_by_key("Node2").unwrap();

        let added = list.add_before(node2, "Node3").unwrap();

        assert_eq!(list.nodes[node2.0].prev, Some(added.0));
        assert_eq!(list.to_ordered_sequence(true), vec!["Node1", "Node3", "Node2"]);
        assert_consistent(&list);
    }

    #[test]
    fn test_add_before_head_moves_head() {
        let mut list = list_of(&["Node1", "Node2"]);
        let node1 = list.find_by_key("Node1").unwrap();

        list.add_before(node1, "Node0").unwrap();

        assert_eq!(list.first(), Some(&"Node0"));
        assert_consistent(&list);
    }

    #[test]
    fn test_add_relative_to_stale_anchor() {
        let mut list = list_of(&["Node1", "Node2"]);
        let node1 = list.find_by_key("Node1").unwrap();
        list.remove(node1);

        assert_eq!(list.add_after(node1, "Node3"), Err("Node3"));
        assert_eq!(list.add_before(node1, "Node4"), Err("Node4"));
        assert_eq!(list.to_ordered_sequence(true), vec!["Node2"]);
        assert_consistent(&list);
    }

    #[test]
    fn test_add_sorted() {
        let mut list = OrderedRecordList::new();
        list.add_sorted("Node3");
        list.add_sorted("Node1");
        list.add_sorted("Node2");

        assert_eq!(list.first(), Some(&"Node1"));
        assert_eq!(list.last(), Some(&"Node3"));
        assert_eq!(list.to_ordered_sequence(true), vec!["Node1", "Node2", "Node3"]);
        assert_consistent(&list);
    }

    #[test]
    fn test_add_sorted_is_stable() {
        let mut list = OrderedRecordList::new();
        let by_letter = |a: &(char, u32), b: &(char, u32)| a.0.cmp(&b.0);

        list.add_sorted_by(('b', 1), by_letter);
        list.add_sorted_by(('a', 1), by_letter);
        list.add_sorted_by(('b', 2), by_letter);
        list.add_sorted_by(('a', 2), by_letter);
        list.add_sorted_by(('b', 3), by_letter);

        assert_eq!(
            list.to_ordered_sequence(true),
            vec![('a', 1), ('a', 2), ('b', 1), ('b', 2), ('b', 3)]
        );
        assert_consistent(&list);
    }

    #[test]
    fn test_find_by_key() {
        let list = list_of(&["Node1", "Node2"]);

        let found = list.find_by_key("Node2").unwrap();
        assert_eq!(list.get(found), Some(&"Node2"));
        assert!(list.find_by_key("Node9").is_none());
    }

    #[test]
    fn test_find_by_key_compares_key_only() {
        let mut list = OrderedRecordList::new();
        list.add_last(String::from("Node1"));

        // A different String allocation with the same key still matches
        let wanted = String::from("Node1");
        assert!(list.find_by_key(&wanted).is_some());
    }

    #[test]
    fn test_ordered_sequence_directions() {
        let list = list_of(&["Node1", "Node2", "Node3"]);

        let ascending = list.to_ordered_sequence(true);
        let mut descending = list.to_ordered_sequence(false);

        assert_eq!(ascending.len(), 3);
        assert_eq!(descending[0], "Node3");
        descending.reverse();
        assert_eq!(ascending, descending);
    }

    #[test]
    fn test_remove_only() {
        let mut list = OrderedRecordList::new();
        let handle = list.add_first("Node1");

        assert_eq!(list.remove(handle), Some("Node1"));
        assert!(list.is_empty());
        assert!(list.find_by_key("Node1").is_none());
        assert_consistent(&list);
    }

    #[test]
    fn test_remove_head() {
        let mut list = list_of(&["Node1", "Node2", "Node3"]);
        let head = list.find_by_key("Node1").unwrap();

        assert_eq!(list.remove(head), Some("Node1"));
        assert_eq!(list.first(), Some(&"Node2"));
        assert_consistent(&list);
    }

    #[test]
    fn test_remove_tail() {
        let mut list = list_of(&["Node1", "Node2", "Node3"]);
        let tail = list.find_by_key("Node3").unwrap();

        assert_eq!(list.remove(tail), Some("Node3"));
        assert_eq!(list.last(), Some(&"Node2"));
        assert_consistent(&list);
    }

    #[test]
    fn test_remove_middle() {
        let mut list = list_of(&["Node1", "Node2", "Node3"]);
        let middle = list.find_by_key("Node2").unwrap();

        assert_eq!(list.remove(middle), Some("Node2"));
        assert_eq!(list.to_ordered_sequence(true), vec!["Node1", "Node3"]);
        assert_consistent(&list);
    }

    #[test]
    fn test_remove_twice() {
        let mut list = list_of(&["Node1"]);
        let handle = list.find_by_key("Node1").unwrap();

        assert!(list.remove(handle).is_some());
        assert!(list.remove(handle).is_none());
    }

    #[test]
    fn test_len_and_object_at() {
        let mut list = OrderedRecordList::new();
        assert_eq!(list.len(), 0);

        list.add_first("Node1");
        assert_eq!(list.len(), 1);
        assert_eq!(list.object_at(0), Some(&"Node1"));
        assert!(list.object_at(1).is_none());

        list.add_last("Node2");
        assert_eq!(list.object_at(1), Some(&"Node2"));
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut list = list_of(&["Node1", "Node2", "Node3"]);
        let middle = list.find_by_key("Node2").unwrap();

        assert_eq!(list.replace(middle, "Node9"), Ok("Node2"));
        assert_eq!(list.to_ordered_sequence(true), vec!["Node1", "Node9", "Node3"]);

        list.remove(middle);
        assert_eq!(list.replace(middle, "Node7"), Err("Node7"));
    }

    #[test]
    fn test_iter_both_ends() {
        let list = list_of(&["Node1", "Node2", "Node3", "Node4"]);
        let mut iter = list.iter();

        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(&"Node1"));
        assert_eq!(iter.next_back(), Some(&"Node4"));
        assert_eq!(iter.next(), Some(&"Node2"));
        assert_eq!(iter.next_back(), Some(&"Node3"));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_clear() {
        let mut list = list_of(&["Node1", "Node2"]);
        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        // Usable after clearing
        list.add_sorted("Node3");
        assert_eq!(list.first(), Some(&"Node3"));
        assert_consistent(&list);
    }

    #[test]
    fn test_slot_reuse_after_remove() {
        let mut list = list_of(&["Node1", "Node2", "Node3"]);
        let middle = list.find_by_key("Node2").unwrap();
        list.remove(middle);

        let reused = list.add_first("Node0");
        assert_eq!(reused.0, middle.0);
        assert_eq!(list.to_ordered_sequence(true), vec!["Node0", "Node1", "Node3"]);
        assert_consistent(&list);
    }
}
