//! # Student Roster
//!
//! In-memory student roster backed by a slab-allocated doubly-linked list.
//!
//! ## Architecture
//!
//! The roster consists of:
//! - **Types**: Record trait and the Student entity
//! - **List**: Doubly-linked record list with slab-based node storage
//! - **Registry**: Key-unique CRUD layer over one list
//!
//! Control flow: caller → registry (validates, checks uniqueness) → list
//! (structural mutation) → node (storage).
//!
//! ## Design Principles
//!
//! 1. **Index links**: Nodes link by slab key, never by pointer
//! 2. **Linear list**: Explicit head and tail, no wraparound
//! 3. **Fail fast**: Registry commands check everything before mutating
//! 4. **No hidden globals**: The caller owns the registry

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Record, Student, Placement, RosterSnapshot
pub mod types;

/// Doubly-linked record list with slab-based storage
pub mod list;

/// Key-unique record registry
pub mod registry;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{Gender, Placement, Record, RosterSnapshot, Student};
pub use list::{NodeHandle, OrderedRecordList, RecordNode};
pub use registry::{
    RecordRegistry, RegistryConfig, RegistryError, RegistryResult, SharedRegistry, SortBy,
};
