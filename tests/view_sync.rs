//! Derived-View Synchronization Tests
//!
//! Tests for the listing artifacts:
//! - after N registrations the artifact has exactly N entries, in
//!   insertion order
//! - the credential hash never appears in rendered output
//! - empty sets render a placeholder
//! - both artifacts are refreshed after either kind's insert
//! - user-supplied text cannot inject markup

use std::fs;

use libroster::roster::{RegisterLibrarian, RegisterStudent, RosterService};
use libroster::store::AccountKind;
use tempfile::TempDir;

// =============================================================================
// Test Utilities
// =============================================================================

fn service(temp: &TempDir) -> RosterService {
    RosterService::new(&temp.path().join("data"), &temp.path().join("views"))
}

fn librarian(username: &str, fullname: &str) -> RegisterLibrarian {
    RegisterLibrarian {
        username: username.to_string(),
        fullname: fullname.to_string(),
        password: "Secret1".to_string(),
    }
}

fn student(name: &str) -> RegisterStudent {
    RegisterStudent {
        name: name.to_string(),
        grade: "10a".to_string(),
        section: "Blue".to_string(),
        password: "Secret1".to_string(),
    }
}

fn read_artifact(svc: &RosterService, kind: AccountKind) -> String {
    fs::read_to_string(svc.views().artifact_path(kind)).unwrap()
}

fn count_rows(html: &str) -> usize {
    html.matches("<tr><td>").count()
}

// =============================================================================
// Entry Count and Order
// =============================================================================

#[test]
fn test_artifact_has_one_entry_per_registration_in_order() {
    let temp = TempDir::new().unwrap();
    let svc = service(&temp);

    for (i, name) in ["first", "second", "third"].iter().enumerate() {
        svc.register_librarian(librarian(name, &format!("Person {}", i)))
            .unwrap();
        let html = read_artifact(&svc, AccountKind::Librarian);
        assert_eq!(count_rows(&html), i + 1);
    }

    let html = read_artifact(&svc, AccountKind::Librarian);
    let first = html.find("first").unwrap();
    let second = html.find("second").unwrap();
    let third = html.find("third").unwrap();
    assert!(first < second && second < third);
}

#[test]
fn test_artifact_never_exposes_the_credential_hash() {
    let temp = TempDir::new().unwrap();
    let svc = service(&temp);

    svc.register_librarian(librarian("alice", "Alice A")).unwrap();
    svc.register_student(student("Bob")).unwrap();

    for kind in [AccountKind::Librarian, AccountKind::Student] {
        let html = read_artifact(&svc, kind);
        // Argon2 digests are unmistakable in output
        assert!(!html.contains("$argon2"), "{} artifact leaks hash", kind.as_str());
    }
}

// =============================================================================
// Placeholder and Cross-Kind Refresh
// =============================================================================

#[test]
fn test_untouched_kind_renders_placeholder() {
    let temp = TempDir::new().unwrap();
    let svc = service(&temp);

    // A librarian insert regenerates both artifacts; the student set is
    // still empty and must say so rather than render an empty list
    svc.register_librarian(librarian("alice", "Alice A")).unwrap();

    let students = read_artifact(&svc, AccountKind::Student);
    assert!(students.contains("No accounts yet"));
}

#[test]
fn test_student_insert_refreshes_librarian_artifact_too() {
    let temp = TempDir::new().unwrap();
    let svc = service(&temp);

    svc.register_librarian(librarian("alice", "Alice A")).unwrap();

    // Remove the librarian artifact; the next student insert must
    // regenerate it from the authoritative record set
    fs::remove_file(svc.views().artifact_path(AccountKind::Librarian)).unwrap();
    svc.register_student(student("Bob")).unwrap();

    let html = read_artifact(&svc, AccountKind::Librarian);
    assert!(html.contains("alice"));
}

// =============================================================================
// Escaping
// =============================================================================

#[test]
fn test_user_text_cannot_inject_markup() {
    let temp = TempDir::new().unwrap();
    let svc = service(&temp);

    svc.register_librarian(librarian("mallory", "<script>alert(1)</script>"))
        .unwrap();

    let html = read_artifact(&svc, AccountKind::Librarian);
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}
