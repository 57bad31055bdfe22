//! Account Store Invariant Tests
//!
//! Tests for the store invariants:
//! - ids are pairwise distinct and never reused
//! - librarian usernames are unique case-insensitively
//! - student (name, grade, section) triples are unique, grade exact
//! - insertion order is preserved across the whole sequence
//! - a duplicate insert performs no write

use std::collections::HashSet;

use libroster::store::{
    AccountStore, Librarian, LibrarianDraft, Student, StudentDraft, StudentKey, StoreError,
};
use tempfile::TempDir;

// =============================================================================
// Test Utilities
// =============================================================================

fn librarian_draft(username: &str) -> LibrarianDraft {
    LibrarianDraft {
        username: username.to_string(),
        fullname: format!("{} Example", username),
        password_hash: "digest".to_string(),
    }
}

fn student_draft(name: &str, grade: &str, section: &str) -> StudentDraft {
    StudentDraft {
        name: name.to_string(),
        grade: grade.to_string(),
        section: section.to_string(),
        password_hash: "digest".to_string(),
    }
}

// =============================================================================
// Id Assignment
// =============================================================================

#[test]
fn test_ids_are_unique_across_inserts() {
    let temp = TempDir::new().unwrap();
    let store: AccountStore<Librarian> = AccountStore::new(temp.path());

    let mut seen = HashSet::new();
    for i in 0..20 {
        let record = store.insert(librarian_draft(&format!("user{}", i))).unwrap();
        assert!(seen.insert(record.id), "id reused: {}", record.id);
    }
}

#[test]
fn test_get_by_id_round_trips_after_insert() {
    let temp = TempDir::new().unwrap();
    let store: AccountStore<Librarian> = AccountStore::new(temp.path());

    let inserted = store.insert(librarian_draft("alice")).unwrap();
    let found = store.find_by_id(inserted.id).unwrap();
    assert_eq!(found.id, inserted.id);
    assert_eq!(found.username, inserted.username);
    assert_eq!(found.fullname, inserted.fullname);
}

// =============================================================================
// Librarian Uniqueness
// =============================================================================

#[test]
fn test_duplicate_username_any_case_is_rejected_without_write() {
    let temp = TempDir::new().unwrap();
    let store: AccountStore<Librarian> = AccountStore::new(temp.path());

    store.insert(librarian_draft("alice")).unwrap();

    for variant in ["alice", "ALICE", "Alice", "aLiCe"] {
        let err = store.insert(librarian_draft(variant)).unwrap_err();
        assert!(
            matches!(err, StoreError::DuplicateKey(_)),
            "expected DuplicateKey for '{}', got {:?}",
            variant,
            err
        );
    }

    assert_eq!(store.load_all().unwrap().len(), 1);
}

// =============================================================================
// Student Uniqueness
// =============================================================================

#[test]
fn test_student_triple_collides_under_name_and_section_case_variants() {
    let temp = TempDir::new().unwrap();
    let store: AccountStore<Student> = AccountStore::new(temp.path());

    store.insert(student_draft("Bob", "10a", "Blue")).unwrap();

    let err = store.insert(student_draft("BOB", "10a", "blue")).unwrap_err();
    assert!(matches!(err, StoreError::DuplicateKey(_)));
    assert_eq!(store.load_all().unwrap().len(), 1);
}

#[test]
fn test_student_grade_case_variation_is_a_distinct_account() {
    let temp = TempDir::new().unwrap();
    let store: AccountStore<Student> = AccountStore::new(temp.path());

    store.insert(student_draft("Bob", "10a", "Blue")).unwrap();
    // grade compared exactly: "10A" is a different grade token
    store.insert(student_draft("Bob", "10A", "Blue")).unwrap();

    assert_eq!(store.load_all().unwrap().len(), 2);
}

#[test]
fn test_student_lookup_by_key_folds_name_and_section_only() {
    let temp = TempDir::new().unwrap();
    let store: AccountStore<Student> = AccountStore::new(temp.path());

    let inserted = store.insert(student_draft("Bob", "10a", "Blue")).unwrap();

    let found = store
        .find_by_key(&StudentKey {
            name: "bob".to_string(),
            grade: "10a".to_string(),
            section: "BLUE".to_string(),
        })
        .unwrap();
    assert_eq!(found.id, inserted.id);

    let miss = store.find_by_key(&StudentKey {
        name: "bob".to_string(),
        grade: "10A".to_string(),
        section: "blue".to_string(),
    });
    assert!(matches!(miss, Err(StoreError::NotFound)));
}

// =============================================================================
// Insertion Order
// =============================================================================

#[test]
fn test_sequence_preserves_insertion_order_across_reopen() {
    let temp = TempDir::new().unwrap();

    {
        let store: AccountStore<Librarian> = AccountStore::new(temp.path());
        for name in ["first", "second", "third"] {
            store.insert(librarian_draft(name)).unwrap();
        }
    }

    // A fresh store over the same directory observes the same order
    let store: AccountStore<Librarian> = AccountStore::new(temp.path());
    let usernames: Vec<_> = store
        .load_all()
        .unwrap()
        .into_iter()
        .map(|r| r.username)
        .collect();
    assert_eq!(usernames, ["first", "second", "third"]);
}
