//! Repository layer: the in-memory record set and its operations.
//!
//! # Responsibility
//! - Own the ordered contact sequence and the monotonic id allocator.
//! - Persist through an injected [`crate::store::ContactStore`] after every
//!   mutation.
//!
//! # Invariants
//! - Write paths validate before persisting.
//! - A failed persist rolls the in-memory mutation back; memory and file
//!   never diverge past an operation boundary.

pub mod contact_repo;
