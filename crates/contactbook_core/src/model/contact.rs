//! Contact record and partial-update request model.
//!
//! # Responsibility
//! - Define the canonical contact record shared by storage and repository.
//! - Validate creation invariants (`name`/`phone` required, positive id).
//!
//! # Invariants
//! - `id` is positive and never reused for another contact.
//! - `name` and `phone` are non-empty after trimming; `email`/`address` may
//!   be empty.
//! - Field text is stored trimmed of surrounding whitespace at creation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a stored contact.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ContactId = u32;

/// Canonical record for one stored contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Positive id unique across the active record set.
    pub id: ContactId,
    /// Display name. Required, non-empty.
    pub name: String,
    /// Phone number text. Required, non-empty. Not normalized.
    pub phone: String,
    /// Email address text. May be empty.
    pub email: String,
    /// Postal address text. May be empty.
    pub address: String,
}

impl Contact {
    /// Creates a validated contact, trimming surrounding whitespace from
    /// every field.
    ///
    /// # Errors
    /// - `ZeroId` when `id == 0`.
    /// - `EmptyName` / `EmptyPhone` when a required field is blank after
    ///   trimming.
    pub fn new(
        id: ContactId,
        name: &str,
        phone: &str,
        email: &str,
        address: &str,
    ) -> Result<Self, ContactValidationError> {
        let contact = Self {
            id,
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            email: email.trim().to_string(),
            address: address.trim().to_string(),
        };
        contact.validate()?;
        Ok(contact)
    }

    /// Checks creation invariants on an already-built record.
    ///
    /// Write paths must call this before persisting.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        if self.id == 0 {
            return Err(ContactValidationError::ZeroId);
        }
        if self.name.trim().is_empty() {
            return Err(ContactValidationError::EmptyName);
        }
        if self.phone.trim().is_empty() {
            return Err(ContactValidationError::EmptyPhone);
        }
        Ok(())
    }
}

/// Validation failure for contact creation or update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactValidationError {
    /// Ids start at 1; zero marks an unassigned record.
    ZeroId,
    EmptyName,
    EmptyPhone,
}

impl Display for ContactValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroId => write!(f, "contact id must be positive"),
            Self::EmptyName => write!(f, "contact name must not be empty"),
            Self::EmptyPhone => write!(f, "contact phone must not be empty"),
        }
    }
}

impl Error for ContactValidationError {}

/// Partial-update request for one contact.
///
/// A `None` field means "keep the existing value". Built from raw user input
/// via [`ContactPatch::from_input`], where blank-after-trim maps to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl ContactPatch {
    /// Builds a patch from raw input lines, treating blank input as
    /// "keep existing".
    pub fn from_input(name: &str, phone: &str, email: &str, address: &str) -> Self {
        Self {
            name: non_blank(name),
            phone: non_blank(phone),
            email: non_blank(email),
            address: non_blank(address),
        }
    }

    /// Returns whether the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.email.is_none() && self.address.is_none()
    }

    /// Applies every `Some` field onto the contact, leaving the rest intact.
    pub fn apply(&self, contact: &mut Contact) {
        if let Some(name) = &self.name {
            contact.name = name.clone();
        }
        if let Some(phone) = &self.phone {
            contact.phone = phone.clone();
        }
        if let Some(email) = &self.email {
            contact.email = email.clone();
        }
        if let Some(address) = &self.address {
            contact.address = address.clone();
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
