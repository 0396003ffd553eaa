//! Durable per-count word records.
//!
//! One JSON file per stroke count, holding the full word list for that count.
//! A record is well formed iff it is a JSON array whose every element is a
//! string; anything else is treated as a cache miss so the engine recomputes
//! and overwrites it. Writes go through a temp file and rename, so a reader
//! never observes a partially written record.

use crate::error::{MinimError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Disk store mapping stroke counts to persisted word lists.
#[derive(Clone, Debug)]
pub struct WordStore {
    base_dir: PathBuf,
}

impl WordStore {
    /// Create a store rooted at `base_dir`; the directory is created on first write
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Path of the record for stroke count `n`
    #[must_use]
    pub fn record_path(&self, n: u32) -> PathBuf {
        self.base_dir.join(format!("words_{n}.json"))
    }

    /// Load the record for `n`.
    ///
    /// Returns `Ok(None)` when the record is missing or schema-corrupt (the
    /// corrupt file is left for the next save to replace). Only genuine I/O
    /// failures become errors.
    pub fn load(&self, n: u32) -> Result<Option<Vec<String>>> {
        let path = self.record_path(n);
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(MinimError::storage(path, e)),
        };
        match decode_record(&bytes) {
            Some(words) => Ok(Some(words)),
            None => {
                log::warn!(
                    "discarding corrupt record {}; it will be recomputed",
                    path.display()
                );
                Ok(None)
            }
        }
    }

    /// Write (or fully replace) the record for `n`
    pub fn save(&self, n: u32, words: &[String]) -> Result<()> {
        let path = self.record_path(n);
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| MinimError::storage(&self.base_dir, e))?;
        let bytes = serde_json::to_vec(words)
            .map_err(|e| MinimError::storage(&path, std::io::Error::from(e)))?;
        let tmp = path.with_extension("json.tmp");
        write_replacing(&tmp, &path, &bytes)
    }
}

fn write_replacing(tmp: &Path, path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(tmp, bytes).map_err(|e| MinimError::storage(tmp, e))?;
    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(MinimError::storage(path, e));
    }
    Ok(())
}

/// Accept only a JSON array in which every element is a string.
fn decode_record(bytes: &[u8]) -> Option<Vec<String>> {
    let value: serde_json::Value = serde_json::from_slice(bytes).ok()?;
    let items = value.as_array()?;
    items
        .iter()
        .map(|item| item.as_str().map(str::to_owned))
        .collect()
}
