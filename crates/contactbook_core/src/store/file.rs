//! File-backed contact store.
//!
//! # Responsibility
//! - Load and overwrite the delimited backing file.
//! - Skip structurally corrupt rows on load instead of failing.
//! - Emit `store_load`/`store_save` logging events with durations.
//!
//! # Invariants
//! - A missing backing file loads as an empty record set.
//! - `save` writes a sibling temp file and renames it over the target, so a
//!   failed write never truncates the existing file.
//! - Loaded field text is kept verbatim; only the id column is parsed.

use super::delimited::{encode_line, parse_records};
use super::{ContactStore, StoreResult};
use crate::model::contact::{Contact, ContactId};
use log::{error, info, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

const FIELDS_PER_RECORD: usize = 5;
const TEMP_SUFFIX: &str = "tmp";

/// Contact store backed by a delimited text file at a fixed path.
///
/// The path is injected at construction; the store never derives it from
/// process-global state.
pub struct CsvFileStore {
    path: PathBuf,
}

impl CsvFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map_or_else(
            || std::ffi::OsString::from(TEMP_SUFFIX),
            std::ffi::OsString::from,
        );
        name.push(".");
        name.push(TEMP_SUFFIX);
        self.path.with_file_name(name)
    }
}

impl ContactStore for CsvFileStore {
    fn load(&self) -> StoreResult<Vec<Contact>> {
        let started_at = Instant::now();
        info!(
            "event=store_load module=store status=start path={}",
            self.path.display()
        );

        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    "event=store_load module=store status=ok rows=0 missing_file=true duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                return Ok(Vec::new());
            }
            Err(err) => {
                error!(
                    "event=store_load module=store status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        let mut contacts = Vec::new();
        for row in parse_records(&text) {
            match decode_row(&row) {
                Some(contact) => contacts.push(contact),
                None => warn!(
                    "event=store_load module=store status=skip_row field_count={}",
                    row.len()
                ),
            }
        }

        info!(
            "event=store_load module=store status=ok rows={} duration_ms={}",
            contacts.len(),
            started_at.elapsed().as_millis()
        );
        Ok(contacts)
    }

    fn save(&self, records: &[Contact]) -> StoreResult<()> {
        let started_at = Instant::now();

        let mut buffer = String::new();
        for contact in records {
            let id = contact.id.to_string();
            buffer.push_str(&encode_line(&[
                &id,
                &contact.name,
                &contact.phone,
                &contact.email,
                &contact.address,
            ]));
            buffer.push('\n');
        }

        let temp_path = self.temp_path();
        let result = fs::write(&temp_path, buffer.as_bytes())
            .and_then(|()| fs::rename(&temp_path, &self.path));

        match result {
            Ok(()) => {
                info!(
                    "event=store_save module=store status=ok rows={} duration_ms={}",
                    records.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_save module=store status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err.into())
            }
        }
    }
}

/// Decodes one raw row, or `None` when the row is structurally corrupt
/// (wrong field count, or an id that is not a positive integer).
fn decode_row(row: &[String]) -> Option<Contact> {
    if row.len() != FIELDS_PER_RECORD {
        return None;
    }
    let id: ContactId = row[0].trim().parse().ok()?;
    if id == 0 {
        return None;
    }
    Some(Contact {
        id,
        name: row[1].clone(),
        phone: row[2].clone(),
        email: row[3].clone(),
        address: row[4].clone(),
    })
}
