//! Parsed YAML documents.
//!
//! This module holds the value model and the document arena, and the
//! `Document` handle that keeps a parsed tree around so many paths can be
//! resolved without parsing the text again.
//!
//! # Modules
//!
//! - `node`: Decoded values and their total coercions
//! - `tree`: Arena of tagged nodes with canonical re-encoding
//! - `parser`: `yaml-rust2` output flattened into the arena
//!
//! # Example
//!
//! ```
//! use yamlpick::document::Document;
//!
//! let doc = Document::parse("app: {name: demo, debug: true}").unwrap();
//! assert_eq!(doc.get("app.name").to_string(), "demo");
//! assert!(doc.get("app.debug").bool());
//! assert!(!doc.get("app.port").exists());
//! ```

pub mod node;
pub mod parser;
pub mod tree;

use crate::result::QueryResult;
use crate::yamlpath::{Evaluator, Parser};

use node::YamlValue;
use parser::{parse_yaml, DocumentError};
use tree::YamlTree;

/// A parsed document that can answer any number of path lookups.
///
/// Each lookup walks the same tree; nothing is cached between lookups, and
/// the document is never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    tree: YamlTree,
}

impl Document {
    /// Parses YAML text.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Syntax` if the text is not valid YAML.
    pub fn parse(text: &str) -> Result<Self, DocumentError> {
        Ok(Self {
            tree: parse_yaml(text)?,
        })
    }

    /// Returns the whole document as a container result.
    ///
    /// The container holds the text exactly as it was given. Empty text has
    /// nothing to wrap and yields `Null`.
    pub fn root(&self) -> QueryResult {
        match self.tree.original_source() {
            Some(source) if !source.is_empty() => {
                QueryResult::new(YamlValue::Container(source.to_string()))
            }
            _ => QueryResult::default(),
        }
    }

    /// Resolves a dot path against the document.
    ///
    /// The empty path returns `root()`. Any path that does not lead to a value
    /// returns `Null`.
    pub fn get(&self, path: &str) -> QueryResult {
        if path.is_empty() {
            return self.root();
        }
        let path = Parser::parse(path);
        Evaluator::new(&self.tree).evaluate(&path).into()
    }
}
