//! Backing-file persistence for the contact record set.
//!
//! # Responsibility
//! - Define the storage contract the repository persists through.
//! - Keep delimited-text encoding details inside the persistence boundary.
//!
//! # Invariants
//! - `save` is a full-set overwrite; the backing file reflects exactly the
//!   given records after a successful call.
//! - `load` never fails on malformed rows; it skips them and keeps going.
//! - A missing backing file loads as an empty record set, not an error.

use crate::model::contact::Contact;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod delimited;
mod file;
mod memory;

pub use file::CsvFileStore;
pub use memory::MemoryStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer error for backing-file reads and writes.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Storage contract for the full contact record set.
///
/// The repository calls `load` once at open and `save` after every mutation.
pub trait ContactStore {
    /// Reads the whole record set. Missing backing state yields an empty set.
    fn load(&self) -> StoreResult<Vec<Contact>>;
    /// Overwrites the whole record set.
    fn save(&self, records: &[Contact]) -> StoreResult<()>;
}
