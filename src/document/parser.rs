//! YAML parsing into the document arena.
//!
//! The YAML grammar itself is handled by `yaml-rust2`; this module flattens its
//! output into a `YamlTree`. Only the first document of a multi-document stream
//! is kept. Aliases are resolved by the loader, so anchors and tags do not
//! survive into the tree.
//!
//! # Example
//!
//! ```
//! use yamlpick::document::parser::parse_yaml;
//!
//! let tree = parse_yaml("name: {first: Janet, last: Prichard}").unwrap();
//! let name = tree.get_key(tree.root(), "name").unwrap();
//! let last = tree.get_key(name, "last").unwrap();
//! assert_eq!(tree.value(last).string(), "Prichard");
//!
//! assert!(parse_yaml("key: [unclosed").is_err());
//! ```

use std::fmt;

use yaml_rust2::{ScanError, Yaml, YamlLoader};

use super::tree::{Entry, Node, NodeId, YamlTree};

/// Errors produced while parsing a YAML document.
#[derive(Debug, Clone)]
pub enum DocumentError {
    /// The text is not well-formed YAML.
    Syntax(ScanError),
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::Syntax(err) => write!(f, "Invalid YAML: {}", err),
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DocumentError::Syntax(err) => Some(err),
        }
    }
}

impl From<ScanError> for DocumentError {
    fn from(err: ScanError) -> Self {
        DocumentError::Syntax(err)
    }
}

/// Parses YAML text into a `YamlTree`.
///
/// Text holding no document at all (empty, or only comments) parses to a tree
/// whose root is `Null`.
///
/// # Errors
///
/// Returns `DocumentError::Syntax` when the scanner rejects the text.
pub fn parse_yaml(yaml_str: &str) -> Result<YamlTree, DocumentError> {
    let docs = YamlLoader::load_from_str(yaml_str)?;

    let mut tree = YamlTree::new();
    if let Some(first) = docs.first() {
        let root = convert(first, &mut tree);
        tree.set_root(root);
    }
    tree.set_source(yaml_str);

    tracing::trace!(documents = docs.len(), "parsed YAML stream");
    Ok(tree)
}

/// Returns true if the text parses as YAML.
pub fn is_valid_yaml(yaml_str: &str) -> bool {
    YamlLoader::load_from_str(yaml_str).is_ok()
}

/// Copies a loader value and all of its children into the arena.
fn convert(yaml: &Yaml, tree: &mut YamlTree) -> NodeId {
    let node = match yaml {
        Yaml::Null | Yaml::BadValue | Yaml::Alias(_) => Node::Null,
        Yaml::Boolean(b) => Node::Bool(*b),
        Yaml::Integer(i) => Node::Number {
            num: *i as f64,
            raw: i.to_string(),
        },
        Yaml::Real(text) => Node::Number {
            num: yaml.as_f64().unwrap_or(0.0),
            raw: text.clone(),
        },
        Yaml::String(s) => Node::String(s.clone()),
        Yaml::Array(items) => {
            let entries = items
                .iter()
                .map(|item| Entry {
                    key: None,
                    node: convert(item, tree),
                })
                .collect();
            Node::Sequence(tree.push_entries(entries))
        }
        Yaml::Hash(map) => {
            let entries = map
                .iter()
                .map(|(key, value)| Entry {
                    key: Some(key_text(key, tree)),
                    node: convert(value, tree),
                })
                .collect();
            Node::Mapping(tree.push_entries(entries))
        }
    };
    tree.push(node)
}

/// Renders a mapping key as the string paths match against.
fn key_text(key: &Yaml, tree: &mut YamlTree) -> String {
    match key {
        Yaml::String(s) | Yaml::Real(s) => s.clone(),
        Yaml::Integer(i) => i.to_string(),
        Yaml::Boolean(b) => b.to_string(),
        Yaml::Null | Yaml::BadValue | Yaml::Alias(_) => "null".to_string(),
        // complex keys match by their encoded YAML text
        Yaml::Array(_) | Yaml::Hash(_) => {
            let id = convert(key, tree);
            tree.encode(id)
                .map(|text| text.trim_end().to_string())
                .unwrap_or_default()
        }
    }
}
