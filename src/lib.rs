//! Get values out of YAML documents with one-line dot paths.
//!
//! `yamlpick` answers "what is at `database.replicas.0.host`?" without a
//! schema or a typed struct. A path is resolved against the untyped document
//! and returns a `QueryResult` that converts itself to whatever primitive the
//! caller wants. Lookups never fail: a document that doesn't parse or a path
//! that doesn't resolve gives a `Null` result, and conversions fall back to
//! empty defaults.
//!
//! # Example
//!
//! ```
//! let yaml = r#"
//! name: {first: Janet, last: Prichard}
//! age: 47
//! children: [Sara, Alex, Jack]
//! friends:
//!   - {first: Dale, last: Murphy, age: 44}
//!   - {first: Roger, last: Craig, age: 68}
//! "#;
//!
//! assert_eq!(yamlpick::get(yaml, "name.last").to_string(), "Prichard");
//! assert_eq!(yamlpick::get(yaml, "children.#").int(), 3);
//! assert_eq!(yamlpick::get(yaml, "children.0").to_string(), "Sara");
//! assert_eq!(yamlpick::get(yaml, "friends.#(age>50).first").to_string(), "Roger");
//! assert!(!yamlpick::get(yaml, "children.5").exists());
//! ```
//!
//! To resolve many paths against one document, parse it once with
//! [`Document::parse`].

pub mod config;
pub mod document;
pub mod file;
pub mod result;
pub mod yamlpath;

pub use document::node::{Kind, YamlValue};
pub use document::parser::DocumentError;
pub use document::Document;
pub use result::QueryResult;

/// Resolves `path` in the YAML `document`.
///
/// Returns `Null` for empty or invalid documents and for paths that do not
/// resolve. The empty path returns the whole document.
pub fn get(document: &str, path: &str) -> QueryResult {
    if document.is_empty() {
        return QueryResult::default();
    }
    match Document::parse(document) {
        Ok(doc) => doc.get(path),
        Err(err) => {
            tracing::debug!(error = %err, "document did not parse");
            QueryResult::default()
        }
    }
}

/// Resolves `path` in a YAML document given as bytes.
///
/// Bytes that are not UTF-8 are treated like an invalid document.
pub fn get_bytes(document: &[u8], path: &str) -> QueryResult {
    match std::str::from_utf8(document) {
        Ok(text) => get(text, path),
        Err(err) => {
            tracing::debug!(error = %err, "document is not UTF-8");
            QueryResult::default()
        }
    }
}

/// Wraps a whole YAML document as a container result.
///
/// Returns `Null` for empty or invalid documents.
pub fn parse(document: &str) -> QueryResult {
    if document.is_empty() {
        return QueryResult::default();
    }
    Document::parse(document)
        .map(|doc| doc.root())
        .unwrap_or_default()
}

/// Returns true if `document` is well-formed YAML.
pub fn valid(document: &str) -> bool {
    document::parser::is_valid_yaml(document)
}
