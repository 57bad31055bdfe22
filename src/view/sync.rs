//! # View Synchronizer
//!
//! Regenerates the rendered listing artifacts from the authoritative
//! record sets. Triggered after every successful insert; both kinds are
//! regenerated, not just the one that changed, so the artifacts always
//! reflect the latest observed state.

use std::fs;
use std::path::{Path, PathBuf};

use super::errors::ViewResult;
use super::render::{render_librarians, render_students};
use crate::store::{AccountKind, Librarian, Student};

/// Writes listing artifacts to a fixed output directory
#[derive(Debug, Clone)]
pub struct ViewSynchronizer {
    views_dir: PathBuf,
}

impl ViewSynchronizer {
    pub fn new(views_dir: impl Into<PathBuf>) -> Self {
        Self {
            views_dir: views_dir.into(),
        }
    }

    pub fn views_dir(&self) -> &Path {
        &self.views_dir
    }

    /// Fixed location of the artifact for `kind`
    pub fn artifact_path(&self, kind: AccountKind) -> PathBuf {
        self.views_dir.join(kind.view_file())
    }

    /// Regenerate both listing artifacts from the given record sets.
    ///
    /// Each artifact overwrites any previous one at its fixed location.
    /// The caller passes freshly loaded sequences; regeneration never
    /// consults anything but the authoritative record sets.
    pub fn regenerate_all(
        &self,
        librarians: &[Librarian],
        students: &[Student],
    ) -> ViewResult<()> {
        fs::create_dir_all(&self.views_dir)?;
        fs::write(
            self.artifact_path(AccountKind::Librarian),
            render_librarians(librarians),
        )?;
        fs::write(
            self.artifact_path(AccountKind::Student),
            render_students(students),
        )?;
        Ok(())
    }
}
