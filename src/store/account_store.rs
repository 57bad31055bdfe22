//! # Account Store
//!
//! One store per account kind, owning that kind's record sequence.
//!
//! Inserts run load → uniqueness scan → id assignment → whole-sequence
//! save under a per-kind mutex. Without that serialization point, two
//! concurrent inserts could both load the same prior sequence, both pass
//! the uniqueness check, and the second save would silently drop the
//! first insert. The lock closes that lost-update race; the externally
//! observed semantics (uniqueness, insertion order, no update/delete)
//! are unchanged. Reads stay lock-free.
//!
//! Lookups are linear scans over a freshly loaded sequence. There is no
//! incremental index: record volume is small and every operation is
//! file-system bound regardless.

use std::marker::PhantomData;
use std::path::Path;
use std::sync::Mutex;

use uuid::Uuid;

use super::codec::RecordCodec;
use super::errors::{StoreError, StoreResult};
use super::record::AccountRecord;

/// File-backed store for one account kind
#[derive(Debug)]
pub struct AccountStore<R: AccountRecord> {
    codec: RecordCodec,
    write_lock: Mutex<()>,
    _kind: PhantomData<R>,
}

impl<R: AccountRecord> AccountStore<R> {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            codec: RecordCodec::new(data_dir),
            write_lock: Mutex::new(()),
            _kind: PhantomData,
        }
    }

    /// Insert a new record built from `draft`.
    ///
    /// Assigns a fresh random id (collision probability negligible, not
    /// checked against existing ids), appends at the end of the sequence
    /// and saves the whole sequence. Fails with `DuplicateKey` and writes
    /// nothing if the draft's uniqueness key collides with an existing
    /// record.
    pub fn insert(&self, draft: R::Draft) -> StoreResult<R> {
        let _guard = self.write_lock.lock().unwrap();

        let mut records = self.codec.load::<R>()?;
        let record = R::materialize(Uuid::new_v4(), draft);

        if records.iter().any(|existing| existing.collides_with(&record)) {
            return Err(StoreError::DuplicateKey(record.describe_key()));
        }

        records.push(record.clone());
        self.codec.save(&records)?;
        Ok(record)
    }

    /// Find a record by its assigned id
    pub fn find_by_id(&self, id: Uuid) -> StoreResult<R> {
        self.codec
            .load::<R>()?
            .into_iter()
            .find(|r| r.id() == id)
            .ok_or(StoreError::NotFound)
    }

    /// Find a record by the kind's uniqueness key
    pub fn find_by_key(&self, key: &R::Key) -> StoreResult<R> {
        self.codec
            .load::<R>()?
            .into_iter()
            .find(|r| r.matches_key(key))
            .ok_or(StoreError::NotFound)
    }

    /// Load the full current sequence, in insertion order
    pub fn load_all(&self) -> StoreResult<Vec<R>> {
        self.codec.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::record::{Librarian, LibrarianDraft, LibrarianKey};
    use tempfile::TempDir;

    fn draft(username: &str) -> LibrarianDraft {
        LibrarianDraft {
            username: username.to_string(),
            fullname: format!("{} Example", username),
            password_hash: "digest".to_string(),
        }
    }

    #[test]
    fn test_insert_assigns_distinct_ids_and_preserves_order() {
        let temp = TempDir::new().unwrap();
        let store: AccountStore<Librarian> = AccountStore::new(temp.path());

        let a = store.insert(draft("a")).unwrap();
        let b = store.insert(draft("b")).unwrap();
        assert_ne!(a.id, b.id);

        let all = store.load_all().unwrap();
        let usernames: Vec<_> = all.iter().map(|r| r.username.as_str()).collect();
        assert_eq!(usernames, ["a", "b"]);
    }

    #[test]
    fn test_duplicate_key_leaves_sequence_unchanged() {
        let temp = TempDir::new().unwrap();
        let store: AccountStore<Librarian> = AccountStore::new(temp.path());

        store.insert(draft("alice")).unwrap();
        let err = store.insert(draft("ALICE")).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateKey(_)));
        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[test]
    fn test_find_by_key_folds_case() {
        let temp = TempDir::new().unwrap();
        let store: AccountStore<Librarian> = AccountStore::new(temp.path());

        let inserted = store.insert(draft("alice")).unwrap();
        let found = store
            .find_by_key(&LibrarianKey {
                username: "Alice".to_string(),
            })
            .unwrap();
        assert_eq!(found.id, inserted.id);
    }

    #[test]
    fn test_find_by_id_miss_is_not_found() {
        let temp = TempDir::new().unwrap();
        let store: AccountStore<Librarian> = AccountStore::new(temp.path());

        let result = store.find_by_id(Uuid::new_v4());
        assert!(matches!(result, Err(StoreError::NotFound)));
    }
}
