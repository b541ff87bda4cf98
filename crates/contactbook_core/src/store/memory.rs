//! In-memory contact store.
//!
//! # Responsibility
//! - Provide a storage implementation with no file system behind it, for
//!   tests and embedding.
//!
//! # Invariants
//! - `load` returns exactly what the last `save` wrote.

use super::{ContactStore, StoreResult};
use crate::model::contact::Contact;
use std::cell::RefCell;

/// Contact store that keeps the persisted set in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RefCell<Vec<Contact>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with persisted records.
    pub fn with_records(records: Vec<Contact>) -> Self {
        Self {
            records: RefCell::new(records),
        }
    }

    /// Returns a copy of the currently persisted set.
    pub fn snapshot(&self) -> Vec<Contact> {
        self.records.borrow().clone()
    }
}

impl ContactStore for MemoryStore {
    fn load(&self) -> StoreResult<Vec<Contact>> {
        Ok(self.records.borrow().clone())
    }

    fn save(&self, records: &[Contact]) -> StoreResult<()> {
        *self.records.borrow_mut() = records.to_vec();
        Ok(())
    }
}
