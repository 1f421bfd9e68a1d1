//! Record registry module for the student roster.
//!
//! ## Design Principles
//!
//! 1. **Unique keys**: No two records share a key at any observable point
//! 2. **Fail fast**: All checks run before the list is touched
//! 3. **No node leakage**: Callers see records, never list handles
//! 4. **Caller-owned**: No global instance; share through [`SharedRegistry`]
//!
//! ## Errors
//!
//! | Error | Raised by |
//! |-------|-----------|
//! | `InvalidInput` | empty field/key, position out of range |
//! | `DuplicateKey` | create, key-changing update |
//! | `RecordNotFound` | update, delete |
//! | `AnchorNotFound` | create_before, create_after |

pub mod config;
pub mod error;
pub mod handler;
pub mod shared;

pub use config::{RegistryConfig, SortBy, DEFAULT_CAPACITY};
pub use error::{RegistryError, RegistryResult};
pub use handler::RecordRegistry;
pub use shared::SharedRegistry;
