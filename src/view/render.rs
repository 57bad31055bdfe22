//! # Listing Renderer
//!
//! Renders a record sequence into the HTML listing artifact for its kind.
//!
//! All user-supplied text passes through `escape_html` before embedding;
//! this is a structural-injection contract, not cosmetic formatting. The
//! credential hash never appears in any rendered output. Empty sets render
//! a placeholder row rather than an empty table.

use std::fmt::Write;

use crate::store::{Librarian, Student};

/// Neutralize characters with structural meaning in HTML
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}

const PLACEHOLDER_ROW: &str = "      <tr><td class=\"empty\" colspan=\"3\">No accounts yet</td></tr>\n";

fn page(title: &str, header_row: &str, body_rows: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
         <body>\n\
           <h1>{title}</h1>\n\
           <table>\n\
           <thead>{header_row}</thead>\n\
           <tbody>\n{body_rows}   </tbody>\n\
          </table>\n\
         </body>\n\
         </html>\n"
    )
}

/// Render the librarian listing, in insertion order
pub fn render_librarians(records: &[Librarian]) -> String {
    let mut rows = String::new();
    for record in records {
        let _ = writeln!(
            rows,
            "      <tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&record.username),
            escape_html(&record.fullname),
            record.id
        );
    }
    if rows.is_empty() {
        rows.push_str(PLACEHOLDER_ROW);
    }
    page(
        "Librarians",
        "<tr><th>Username</th><th>Full name</th><th>Id</th></tr>",
        &rows,
    )
}

/// Render the student listing, in insertion order
pub fn render_students(records: &[Student]) -> String {
    let mut rows = String::new();
    for record in records {
        let _ = writeln!(
            rows,
            "      <tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&record.name),
            escape_html(&record.grade),
            escape_html(&record.section)
        );
    }
    if rows.is_empty() {
        rows.push_str(PLACEHOLDER_ROW);
    }
    page(
        "Students",
        "<tr><th>Name</th><th>Grade</th><th>Section</th></tr>",
        &rows,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{AccountRecord, LibrarianDraft};
    use uuid::Uuid;

    fn librarian(username: &str, fullname: &str) -> Librarian {
        Librarian::materialize(
            Uuid::new_v4(),
            LibrarianDraft {
                username: username.to_string(),
                fullname: fullname.to_string(),
                password_hash: "OPAQUE_DIGEST".to_string(),
            },
        )
    }

    #[test]
    fn test_escape_neutralizes_structural_characters() {
        assert_eq!(
            escape_html(r#"<b>&"x"'</b>"#),
            "&lt;b&gt;&amp;&quot;x&quot;&#x27;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn test_empty_set_renders_placeholder() {
        let html = render_librarians(&[]);
        assert!(html.contains("No accounts yet"));
    }

    #[test]
    fn test_rows_in_insertion_order_without_hash() {
        let records = vec![librarian("a", "First"), librarian("b", "Second")];
        let html = render_librarians(&records);

        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        assert!(first < second);
        assert!(!html.contains("OPAQUE_DIGEST"));
    }

    #[test]
    fn test_user_text_is_escaped_into_markup() {
        let records = vec![librarian("<script>alert(1)</script>", "Evil")];
        let html = render_librarians(&records);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
