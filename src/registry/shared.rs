//! Thread-shareable registry handle.
//!
//! One mutex guards the whole registry. Each method holds it for the full
//! command, so a uniqueness check and the insertion that follows it can't
//! be split by another thread. Reads that must agree with each other
//! (`list_all`, `count`) go through the same lock, or through
//! [`SharedRegistry::read`] when several need to be taken together.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::registry::{RecordRegistry, RegistryConfig, RegistryResult};
use crate::types::{Placement, Record, RosterSnapshot};

/// Cloneable handle to one [`RecordRegistry`] behind a mutex.
///
/// Clones share the same registry. Reads return owned records, never
/// references into the locked list.
///
/// ## Example
///
/// ```
/// use std::thread;
/// use student_roster::registry::SharedRegistry;
/// use student_roster::types::{Gender, Student};
///
/// let registry = SharedRegistry::new();
/// let worker = registry.clone();
///
/// thread::spawn(move || {
///     worker.create(Student::new("001", "Ana", "Diaz", "ana@uni.edu", Gender::Female, "law")).unwrap();
/// })
/// .join()
/// .unwrap();
///
/// assert_eq!(registry.count(), 1);
/// ```
#[derive(Debug)]
pub struct SharedRegistry<R> {
    inner: Arc<Mutex<RecordRegistry<R>>>,
}

impl<R> Clone for SharedRegistry<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Record + Clone> Default for SharedRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record + Clone> From<RecordRegistry<R>> for SharedRegistry<R> {
    fn from(registry: RecordRegistry<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }
}

impl<R: Record + Clone> SharedRegistry<R> {
    /// Empty registry with the default configuration
    pub fn new() -> Self {
        RecordRegistry::new().into()
    }

    /// Empty registry with an explicit configuration
    pub fn with_config(config: RegistryConfig) -> Self {
        RecordRegistry::with_config(config).into()
    }

    /// Lock the registry.
    ///
    /// Poisoning is recovered. Single commands check everything before their
    /// one mutation, `read` never mutates, and `write` only swaps in a
    /// finished draft, so a panic under the lock can't leave a half-applied
    /// change behind.
    fn lock(&self) -> MutexGuard<'_, RecordRegistry<R>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with shared access under the lock
    pub fn read<T>(&self, f: impl FnOnce(&RecordRegistry<R>) -> T) -> T {
        f(&self.lock())
    }

    /// Run `f` with exclusive access under the lock
    ///
    /// `f` works on a copy of the registry. The copy replaces the shared
    /// registry only when `f` returns; if `f` panics, other handles keep
    /// seeing the registry as it was before the call. Whatever `f` did
    /// before returning is kept, including after an `Err` it returns itself.
    pub fn write<T>(&self, f: impl FnOnce(&mut RecordRegistry<R>) -> T) -> T {
        let mut guard = self.lock();
        let mut draft = guard.clone();
        let out = f(&mut draft);
        *guard = draft;
        out
    }

    // ========================================================================
    // Commands
    // ========================================================================

    pub fn create(&self, record: R) -> RegistryResult<()> {
        self.lock().create(record)
    }

    pub fn create_at_head(&self, record: R) -> RegistryResult<()> {
        self.lock().create_at_head(record)
    }

    pub fn create_at_tail(&self, record: R) -> RegistryResult<()> {
        self.lock().create_at_tail(record)
    }

    pub fn create_before(&self, anchor_key: &str, record: R) -> RegistryResult<()> {
        self.lock().create_before(anchor_key, record)
    }

    pub fn create_after(&self, anchor_key: &str, record: R) -> RegistryResult<()> {
        self.lock().create_after(anchor_key, record)
    }

    pub fn insert(&self, placement: &Placement, record: R) -> RegistryResult<()> {
        self.lock().insert(placement, record)
    }

    pub fn update(&self, key: &str, record: R) -> RegistryResult<R> {
        self.lock().update(key, record)
    }

    pub fn delete(&self, key: &str) -> RegistryResult<R> {
        self.lock().delete(key)
    }

    pub fn reset(&self) {
        self.lock().reset()
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn find_by_key(&self, key: &str) -> RegistryResult<Option<R>> {
        self.lock().find_by_key(key).map(|found| found.cloned())
    }

    pub fn exists(&self, key: &str) -> bool {
        self.lock().exists(key)
    }

    pub fn by_position(&self, index: usize) -> RegistryResult<R> {
        self.lock().by_position(index).cloned()
    }

    pub fn list_all(&self, ascending: bool) -> Vec<R> {
        self.lock().list_all(ascending)
    }

    pub fn snapshot(&self, ascending: bool) -> RosterSnapshot<R> {
        self.lock().snapshot(ascending)
    }

    pub fn count(&self) -> usize {
        self.lock().count()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn first(&self) -> Option<R> {
        self.lock().first().cloned()
    }

    pub fn last(&self) -> Option<R> {
        self.lock().last().cloned()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
