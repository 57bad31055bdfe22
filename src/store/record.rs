//! # Account Records
//!
//! Record models for the two account kinds, their uniqueness keys, and
//! the `AccountRecord` seam the generic store operates through.
//!
//! ## Invariants
//! - Record `id`s are assigned once at creation and never reused
//! - Librarian `username` is unique case-insensitively
//! - Student `(name, grade, section)` is unique with `grade` compared
//!   exactly and `name`/`section` case-insensitively
//! - Records are never mutated or removed after insert

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The two account kinds the system manages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Librarian,
    Student,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Librarian => "librarian",
            AccountKind::Student => "student",
        }
    }

    /// File name of the durable record-set container for this kind
    pub fn record_file(&self) -> &'static str {
        match self {
            AccountKind::Librarian => "librarians.json",
            AccountKind::Student => "students.json",
        }
    }

    /// File name of the rendered listing artifact for this kind
    pub fn view_file(&self) -> &'static str {
        match self {
            AccountKind::Librarian => "librarians.html",
            AccountKind::Student => "students.html",
        }
    }
}

/// Case-insensitive comparison used by the uniqueness rules
fn ci_eq(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// A persisted account record, generic seam for the store.
///
/// `Draft` is the record minus its identity: the store assigns the id and
/// timestamp when it materializes a draft during insert.
pub trait AccountRecord: Clone + Serialize + DeserializeOwned {
    /// The kind this record type belongs to
    const KIND: AccountKind;

    /// The uniqueness-key type used by `find_by_key` and collision checks
    type Key;

    /// The candidate shape accepted by `insert`
    type Draft;

    fn id(&self) -> Uuid;

    /// Build a full record from a draft and a freshly assigned id
    fn materialize(id: Uuid, draft: Self::Draft) -> Self;

    /// Whether this record's uniqueness key matches `key` under the
    /// kind's comparison rules
    fn matches_key(&self, key: &Self::Key) -> bool;

    /// Whether inserting `other` alongside this record would violate
    /// the kind's uniqueness invariant
    fn collides_with(&self, other: &Self) -> bool;

    /// Human-readable description of the uniqueness key, for conflict
    /// errors and log events
    fn describe_key(&self) -> String;
}

/// Librarian record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Librarian {
    /// Unique identifier, assigned at creation, immutable
    pub id: Uuid,

    /// Login name, unique case-insensitively across all librarians
    pub username: String,

    /// Display name
    pub fullname: String,

    /// Argon2id digest of the registration secret (never plaintext)
    pub password_hash: String,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

/// Librarian candidate, identity not yet assigned
#[derive(Debug, Clone)]
pub struct LibrarianDraft {
    pub username: String,
    pub fullname: String,
    pub password_hash: String,
}

/// Librarian uniqueness key
#[derive(Debug, Clone)]
pub struct LibrarianKey {
    pub username: String,
}

impl AccountRecord for Librarian {
    const KIND: AccountKind = AccountKind::Librarian;
    type Key = LibrarianKey;
    type Draft = LibrarianDraft;

    fn id(&self) -> Uuid {
        self.id
    }

    fn materialize(id: Uuid, draft: LibrarianDraft) -> Self {
        Self {
            id,
            username: draft.username,
            fullname: draft.fullname,
            password_hash: draft.password_hash,
            created_at: Utc::now(),
        }
    }

    fn matches_key(&self, key: &LibrarianKey) -> bool {
        ci_eq(&self.username, &key.username)
    }

    fn collides_with(&self, other: &Self) -> bool {
        ci_eq(&self.username, &other.username)
    }

    fn describe_key(&self) -> String {
        format!("username '{}'", self.username)
    }
}

/// Student record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier, assigned at creation, immutable
    pub id: Uuid,

    /// Display name, part of the uniqueness triple (case-insensitive)
    pub name: String,

    /// Grade token, part of the uniqueness triple (compared exactly)
    pub grade: String,

    /// Section token, part of the uniqueness triple (case-insensitive)
    pub section: String,

    /// Argon2id digest of the registration secret (never plaintext)
    pub password_hash: String,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

/// Student candidate, identity not yet assigned
#[derive(Debug, Clone)]
pub struct StudentDraft {
    pub name: String,
    pub grade: String,
    pub section: String,
    pub password_hash: String,
}

/// Student uniqueness key: the `(name, grade, section)` triple
#[derive(Debug, Clone)]
pub struct StudentKey {
    pub name: String,
    pub grade: String,
    pub section: String,
}

impl AccountRecord for Student {
    const KIND: AccountKind = AccountKind::Student;
    type Key = StudentKey;
    type Draft = StudentDraft;

    fn id(&self) -> Uuid {
        self.id
    }

    fn materialize(id: Uuid, draft: StudentDraft) -> Self {
        Self {
            id,
            name: draft.name,
            grade: draft.grade,
            section: draft.section,
            password_hash: draft.password_hash,
            created_at: Utc::now(),
        }
    }

    fn matches_key(&self, key: &StudentKey) -> bool {
        // grade is an exact match, name and section fold case
        ci_eq(&self.name, &key.name) && self.grade == key.grade && ci_eq(&self.section, &key.section)
    }

    fn collides_with(&self, other: &Self) -> bool {
        ci_eq(&self.name, &other.name)
            && self.grade == other.grade
            && ci_eq(&self.section, &other.section)
    }

    fn describe_key(&self) -> String {
        format!("student '{}' ({}/{})", self.name, self.grade, self.section)
    }
}
