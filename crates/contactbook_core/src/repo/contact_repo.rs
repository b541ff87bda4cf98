//! Contact repository operations.
//!
//! # Responsibility
//! - Provide add/list/search/update/delete over the in-memory record set.
//! - Allocate ids monotonically and trigger a full persist on every
//!   mutation.
//!
//! # Invariants
//! - Ids strictly increase within a process run and are never reused, even
//!   after deleting the current maximum.
//! - The sequence stays in insertion order; updates never reorder it.
//! - Validation and not-found failures leave memory and file untouched.

use crate::model::contact::{Contact, ContactId, ContactPatch, ContactValidationError};
use crate::store::{ContactStore, StoreError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for contact operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ContactValidationError),
    NotFound(ContactId),
    Store(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "contact not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<ContactValidationError> for RepoError {
    fn from(value: ContactValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Outcome of a delete request on an existing contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The contact exists but the caller did not confirm removal.
    Cancelled,
}

/// Owner of the contact sequence, persisting through an injected store.
pub struct ContactRepository<S: ContactStore> {
    store: S,
    contacts: Vec<Contact>,
    next_id: ContactId,
}

impl<S: ContactStore> ContactRepository<S> {
    /// Loads the persisted record set once and seeds the id allocator one
    /// past the highest persisted id.
    pub fn open(store: S) -> RepoResult<Self> {
        let contacts = store.load()?;
        let next_id = contacts.iter().map(|c| c.id).max().map_or(1, |max| max + 1);
        info!(
            "event=repo_open module=repo status=ok rows={} next_id={next_id}",
            contacts.len()
        );
        Ok(Self {
            store,
            contacts,
            next_id,
        })
    }

    /// Returns the id the next successful add will assign.
    ///
    /// The allocator is a high-water mark: it only moves forward, so a
    /// deleted maximum is never handed out again within this process run.
    pub fn next_id(&self) -> ContactId {
        self.next_id
    }

    /// Appends a new contact and persists the full set.
    ///
    /// Inputs are trimmed; empty name or phone is rejected without touching
    /// memory or file. A failed persist rolls the append back.
    pub fn add(
        &mut self,
        name: &str,
        phone: &str,
        email: &str,
        address: &str,
    ) -> RepoResult<ContactId> {
        let contact = Contact::new(self.next_id, name, phone, email, address)?;
        let id = contact.id;

        self.contacts.push(contact);
        if let Err(err) = self.store.save(&self.contacts) {
            self.contacts.pop();
            return Err(err.into());
        }

        self.next_id = id + 1;
        info!("event=contact_add module=repo status=ok id={id}");
        Ok(id)
    }

    /// Returns the record set in insertion order. Pure read.
    pub fn list(&self) -> &[Contact] {
        &self.contacts
    }

    /// Looks one contact up by id. Linear scan; ids are unique.
    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// Substring search over name, email and phone, in original order.
    ///
    /// Name and email are matched case-insensitively; the phone comparison
    /// is exact-case. The asymmetry is long-standing observed behavior and
    /// is kept deliberately (see DESIGN.md).
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        let needle = query.to_lowercase();
        self.contacts
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&needle)
                    || c.email.to_lowercase().contains(&needle)
                    || c.phone.contains(query)
            })
            .collect()
    }

    /// Applies the non-blank fields of `patch` to the contact with `id` and
    /// persists the full set.
    ///
    /// An unknown id is reported as `NotFound` with no mutation. An all-blank
    /// patch still persists (an identical rewrite), matching the observed
    /// behavior of the original tool. A failed persist rolls the patch back.
    pub fn update(&mut self, id: ContactId, patch: &ContactPatch) -> RepoResult<()> {
        let Some(index) = self.contacts.iter().position(|c| c.id == id) else {
            return Err(RepoError::NotFound(id));
        };

        let previous = self.contacts[index].clone();
        patch.apply(&mut self.contacts[index]);

        if let Err(err) = self.store.save(&self.contacts) {
            self.contacts[index] = previous;
            return Err(err.into());
        }

        info!(
            "event=contact_update module=repo status=ok id={id} fields_changed={}",
            !patch.is_empty()
        );
        Ok(())
    }

    /// Removes the contact with `id` when `confirmed` is true and persists
    /// the full set.
    ///
    /// Three distinct outcomes: `NotFound` (error, nothing touched),
    /// `Cancelled` (exists, not confirmed, nothing touched), `Deleted`. A
    /// failed persist reinserts the record at its original position.
    pub fn delete(&mut self, id: ContactId, confirmed: bool) -> RepoResult<DeleteOutcome> {
        let Some(index) = self.contacts.iter().position(|c| c.id == id) else {
            return Err(RepoError::NotFound(id));
        };

        if !confirmed {
            info!("event=contact_delete module=repo status=cancelled id={id}");
            return Ok(DeleteOutcome::Cancelled);
        }

        let removed = self.contacts.remove(index);
        if let Err(err) = self.store.save(&self.contacts) {
            self.contacts.insert(index, removed);
            return Err(err.into());
        }

        info!("event=contact_delete module=repo status=ok id={id}");
        Ok(DeleteOutcome::Deleted)
    }
}
