//! Errors surfaced by the registry.
//!
//! Every variant is a caller error. The registry checks before it mutates,
//! so a rejected command never leaves the list partially changed.

use thiserror::Error;

/// Registry command failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A required field or argument is missing, empty, or out of range
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Another record already uses this key
    #[error("a record with key `{0}` already exists")]
    DuplicateKey(String),

    /// No record has this key
    #[error("no record with key `{0}`")]
    RecordNotFound(String),

    /// The anchor of a relative insertion does not exist
    #[error("anchor record `{0}` not found")]
    AnchorNotFound(String),
}

/// Result alias for registry commands
pub type RegistryResult<T> = Result<T, RegistryError>;
