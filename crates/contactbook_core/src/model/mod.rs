//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical record persisted in the backing file.
//! - Keep creation invariants enforceable before any write path runs.
//!
//! # Invariants
//! - Every stored record carries a positive, unique `ContactId`.
//! - Deletion is a hard removal from the record set, there are no tombstones.

pub mod contact;
