//! Core domain logic for the contact book.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{Contact, ContactId, ContactPatch, ContactValidationError};
pub use repo::contact_repo::{ContactRepository, DeleteOutcome, RepoError, RepoResult};
pub use store::{ContactStore, CsvFileStore, MemoryStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
