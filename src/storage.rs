// 💾 Persistence - whole-book snapshots on local disk
//
// save: serialize every record, write to a temp sibling, rename over target
// load: missing or malformed file → empty book (never an error)

use crate::book::AddressBook;
use crate::entities::Record;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Default file name for the persisted book
pub const DEFAULT_FILE_NAME: &str = "addressbook.json";

/// Bump when the snapshot layout changes
pub const SNAPSHOT_VERSION: u32 = 1;

// ============================================================================
// SNAPSHOT
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    records: Vec<Record>,
}

impl Snapshot {
    fn from_book(book: &AddressBook) -> Self {
        Snapshot {
            version: SNAPSHOT_VERSION,
            records: book.iter().cloned().collect(),
        }
    }

    fn into_book(self) -> AddressBook {
        let mut book = AddressBook::new();
        for record in self.records {
            book.add_record(record);
        }
        book
    }
}

// ============================================================================
// SAVE / LOAD
// ============================================================================

/// Write the whole book to `path`, replacing any existing content
pub fn save(book: &AddressBook, path: &Path) -> Result<()> {
    let json = serde_json::to_vec_pretty(&Snapshot::from_book(book))
        .context("Failed to serialize address book")?;

    let tmp_path = temp_path_for(path);
    fs::write(&tmp_path, &json)
        .with_context(|| format!("Failed to write file: {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path)
        .with_context(|| format!("Failed to replace file: {}", path.display()))?;

    info!(path = %path.display(), records = book.len(), "address book saved");
    Ok(())
}

/// Read a book from `path`; any failure yields an empty book
pub fn load(path: &Path) -> AddressBook {
    match try_load(path) {
        Ok(Some(book)) => {
            info!(path = %path.display(), records = book.len(), "address book loaded");
            book
        }
        Ok(None) => {
            debug!(path = %path.display(), "no saved address book, starting empty");
            AddressBook::new()
        }
        Err(err) => {
            warn!(path = %path.display(), error = %format!("{err:#}"), "ignoring unreadable address book");
            AddressBook::new()
        }
    }
}

/// `Ok(None)` when the file does not exist
fn try_load(path: &Path) -> Result<Option<AddressBook>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to open file: {}", path.display()))
        }
    };

    let snapshot: Snapshot = serde_json::from_slice(&bytes)
        .with_context(|| format!("Failed to parse address book from {}", path.display()))?;

    if snapshot.version != SNAPSHOT_VERSION {
        anyhow::bail!("Unsupported snapshot version: {}", snapshot.version);
    }

    Ok(Some(snapshot.into_book()))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| DEFAULT_FILE_NAME.into());
    name.push(".tmp");
    path.with_file_name(name)
}

// ============================================================================
// TESTS
// ============================================================================
