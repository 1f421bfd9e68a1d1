//! Core data types for the student roster
//!
//! ## Types
//!
//! - [`Record`]: Trait for values stored in the list (unique key + ordering key)
//! - [`Student`]: A student entry, keyed by code and ordered by last name
//! - [`Gender`]: Female, Male or Other
//! - [`Placement`]: Where a new record is inserted
//! - [`RosterSnapshot`]: Ordered copy of the roster with a fingerprint

mod record;
mod student;
mod placement;
mod snapshot;

// Re-export all types at module level
pub use record::Record;
pub use student::{Gender, Student};
pub use placement::Placement;
pub use snapshot::RosterSnapshot;
