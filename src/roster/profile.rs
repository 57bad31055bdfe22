//! # Account Profiles
//!
//! Sanitized views of account records returned to callers. Profiles carry
//! the public fields and a role tag; the credential hash never leaves the
//! store.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::store::{AccountKind, Librarian, Student};

/// Public view of a librarian record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LibrarianProfile {
    pub id: Uuid,
    pub username: String,
    pub fullname: String,
    pub role: &'static str,
    pub created_at: DateTime<Utc>,
}

impl From<&Librarian> for LibrarianProfile {
    fn from(record: &Librarian) -> Self {
        Self {
            id: record.id,
            username: record.username.clone(),
            fullname: record.fullname.clone(),
            role: AccountKind::Librarian.as_str(),
            created_at: record.created_at,
        }
    }
}

/// Public view of a student record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentProfile {
    pub id: Uuid,
    pub name: String,
    pub grade: String,
    pub section: String,
    pub role: &'static str,
    pub created_at: DateTime<Utc>,
}

impl From<&Student> for StudentProfile {
    fn from(record: &Student) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            grade: record.grade.clone(),
            section: record.section.clone(),
            role: AccountKind::Student.as_str(),
            created_at: record.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{AccountRecord, LibrarianDraft};

    #[test]
    fn test_profile_never_serializes_the_hash() {
        let record = Librarian::materialize(
            Uuid::new_v4(),
            LibrarianDraft {
                username: "alice".to_string(),
                fullname: "Alice A".to_string(),
                password_hash: "OPAQUE_DIGEST".to_string(),
            },
        );
        let json = serde_json::to_string(&LibrarianProfile::from(&record)).unwrap();
        assert!(!json.contains("OPAQUE_DIGEST"));
        assert!(!json.contains("password"));
        assert!(json.contains("\"role\":\"librarian\""));
    }
}
