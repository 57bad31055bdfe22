//! # Record Codec
//!
//! Serializes a whole record sequence to and from its durable container:
//! one JSON array file per account kind under the data directory.
//!
//! The unit of durability is the whole sequence. `save` writes to a temp
//! file in the same directory and renames it over the target, so a failed
//! save leaves the prior sequence intact and the next `load` is never
//! ambiguous.

use std::fs;
use std::path::{Path, PathBuf};

use super::errors::{StoreError, StoreResult};
use super::record::AccountRecord;

/// Whole-sequence JSON codec for one data directory
#[derive(Debug, Clone)]
pub struct RecordCodec {
    data_dir: PathBuf,
}

impl RecordCodec {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn record_path<R: AccountRecord>(&self) -> PathBuf {
        self.data_dir.join(R::KIND.record_file())
    }

    /// Load the full record sequence for `R`'s kind.
    ///
    /// A fresh system has no container yet; the directory and an empty
    /// sequence are created lazily so this returns `[]` rather than failing.
    pub fn load<R: AccountRecord>(&self) -> StoreResult<Vec<R>> {
        let path = self.record_path::<R>();
        if !path.exists() {
            self.save::<R>(&[])?;
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&path)?;
        let records = serde_json::from_str(&contents)?;
        Ok(records)
    }

    /// Replace the stored sequence for `R`'s kind with `records`.
    pub fn save<R: AccountRecord>(&self, records: &[R]) -> StoreResult<()> {
        fs::create_dir_all(&self.data_dir)?;

        let path = self.record_path::<R>();
        let tmp = path.with_extension("json.tmp");

        let contents = serde_json::to_string_pretty(records)?;
        fs::write(&tmp, contents).map_err(|e| {
            StoreError::Storage(format!("write {}: {}", tmp.display(), e))
        })?;
        fs::rename(&tmp, &path).map_err(|e| {
            StoreError::Storage(format!("rename into {}: {}", path.display(), e))
        })?;
        Ok(())
    }
}
