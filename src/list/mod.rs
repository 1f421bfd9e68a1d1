//! Record list module for the student roster.
//!
//! ## Architecture
//!
//! The list is a doubly-linked sequence whose nodes live in a slab:
//!
//! - **Slab-based storage**: O(1) node insertion, removal, and lookup by handle
//! - **Index links**: `next`/`prev` are slab keys, so nodes never own each other
//! - **Linear ends**: explicit head and tail, no wraparound
//!
//! ## Components
//!
//! - [`RecordNode`]: Payload plus neighbour links
//! - [`NodeHandle`]: Opaque position of a node, only valid for its own list
//! - [`OrderedRecordList`]: The list itself
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Add first / last | O(1) |
//! | Add before / after handle | O(1) |
//! | Add sorted | O(n) |
//! | Find by key | O(n) |
//! | Remove by handle | O(1) |
//! | Object at index | O(n) |
//! | Len | O(1) |

pub mod node;
pub mod ordered;

pub use node::{NodeHandle, RecordNode};
pub use ordered::{Iter, OrderedRecordList};
