//! # Roster Service
//!
//! The facade the API layer talks to: register, login and lookup per
//! account kind, with the derived listings refreshed after every
//! successful registration.
//!
//! Within one request the sequence is strictly ordered: load → uniqueness
//! check → id assignment → save → view regeneration. Regeneration runs
//! only after the triggering save has completed, so it always observes a
//! record set at least as new as the one just inserted. A regeneration
//! failure leaves the artifact stale and is logged; the registration has
//! already committed and still succeeds.

use std::path::Path;

use serde::Deserialize;

use crate::auth::{hash_password, verify_password};
use crate::observability::Logger;
use crate::store::{
    AccountStore, Librarian, LibrarianDraft, LibrarianKey, Student, StudentDraft, StudentKey,
    StoreError,
};
use crate::view::ViewSynchronizer;

use super::errors::{RosterError, RosterResult};
use super::profile::{LibrarianProfile, StudentProfile};

/// Librarian registration request
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterLibrarian {
    pub username: String,
    pub fullname: String,
    pub password: String,
}

/// Student registration request
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterStudent {
    pub name: String,
    pub grade: String,
    pub section: String,
    pub password: String,
}

/// Account service over explicit, injected store handles
pub struct RosterService {
    librarians: AccountStore<Librarian>,
    students: AccountStore<Student>,
    views: ViewSynchronizer,
}

impl RosterService {
    pub fn new(data_dir: &Path, views_dir: &Path) -> Self {
        Self {
            librarians: AccountStore::new(data_dir),
            students: AccountStore::new(data_dir),
            views: ViewSynchronizer::new(views_dir),
        }
    }

    pub fn views(&self) -> &ViewSynchronizer {
        &self.views
    }

    /// Register a librarian account
    pub fn register_librarian(&self, req: RegisterLibrarian) -> RosterResult<LibrarianProfile> {
        let password_hash = hash_password(&req.password)?;
        let record = self.librarians.insert(LibrarianDraft {
            username: req.username,
            fullname: req.fullname,
            password_hash,
        })?;
        Logger::info(
            "ACCOUNT_CREATED",
            &[("kind", "librarian"), ("id", &record.id.to_string())],
        );
        self.refresh_views();
        Ok(LibrarianProfile::from(&record))
    }

    /// Register a student account
    pub fn register_student(&self, req: RegisterStudent) -> RosterResult<StudentProfile> {
        let password_hash = hash_password(&req.password)?;
        let record = self.students.insert(StudentDraft {
            name: req.name,
            grade: req.grade,
            section: req.section,
            password_hash,
        })?;
        Logger::info(
            "ACCOUNT_CREATED",
            &[("kind", "student"), ("id", &record.id.to_string())],
        );
        self.refresh_views();
        Ok(StudentProfile::from(&record))
    }

    /// Authenticate a librarian by username and secret.
    ///
    /// A key miss and a secret mismatch both return `InvalidCredentials`.
    pub fn login_librarian(&self, username: &str, password: &str) -> RosterResult<LibrarianProfile> {
        let record = match self.librarians.find_by_key(&LibrarianKey {
            username: username.to_string(),
        }) {
            Ok(record) => record,
            Err(StoreError::NotFound) => return Err(RosterError::InvalidCredentials),
            Err(e) => return Err(e.into()),
        };

        if !verify_password(password, &record.password_hash)? {
            return Err(RosterError::InvalidCredentials);
        }
        Logger::info("LOGIN_OK", &[("kind", "librarian")]);
        Ok(LibrarianProfile::from(&record))
    }

    /// Authenticate a student by the `(name, grade, section)` triple.
    ///
    /// A missing secret skips verification entirely. This relaxation is
    /// deliberate but inconsistent with the librarian contract; it is
    /// kept as documented behavior, and the warning makes it visible in
    /// operation. A supplied secret is always verified.
    pub fn login_student(
        &self,
        key: StudentKey,
        password: Option<&str>,
    ) -> RosterResult<StudentProfile> {
        let record = match self.students.find_by_key(&key) {
            Ok(record) => record,
            Err(StoreError::NotFound) => return Err(RosterError::InvalidCredentials),
            Err(e) => return Err(e.into()),
        };

        match password {
            Some(secret) => {
                if !verify_password(secret, &record.password_hash)? {
                    return Err(RosterError::InvalidCredentials);
                }
            }
            None => Logger::warn("LOGIN_SECRETLESS", &[("kind", "student")]),
        }
        Logger::info("LOGIN_OK", &[("kind", "student")]);
        Ok(StudentProfile::from(&record))
    }

    /// Look up a librarian by id
    pub fn librarian_by_id(&self, id: uuid::Uuid) -> RosterResult<LibrarianProfile> {
        let record = self.librarians.find_by_id(id)?;
        Ok(LibrarianProfile::from(&record))
    }

    /// Look up a student by id
    pub fn student_by_id(&self, id: uuid::Uuid) -> RosterResult<StudentProfile> {
        let record = self.students.find_by_id(id)?;
        Ok(StudentProfile::from(&record))
    }

    /// Regenerate both listing artifacts from the current record sets.
    ///
    /// Failures leave the artifacts stale; they are logged and never
    /// propagate to the registration that triggered the refresh.
    fn refresh_views(&self) {
        let result = self
            .librarians
            .load_all()
            .map_err(|e| e.to_string())
            .and_then(|librarians| {
                self.students
                    .load_all()
                    .map_err(|e| e.to_string())
                    .map(|students| (librarians, students))
            })
            .and_then(|(librarians, students)| {
                self.views
                    .regenerate_all(&librarians, &students)
                    .map_err(|e| e.to_string())
            });

        if let Err(error) = result {
            Logger::warn("VIEW_REFRESH_FAILED", &[("error", &error)]);
        }
    }
}
