//! The value returned by every lookup.
//!
//! `QueryResult` wraps one `YamlValue`. It is cheap to clone, never changes
//! after it is produced, and all of its accessors are total: a lookup that
//! missed is simply a `Null` result whose coercions return empty defaults.
//!
//! # Example
//!
//! ```
//! let yaml = "servers:\n  - {name: web1, port: 80}\n  - {name: db1, port: 5432}\n";
//!
//! let servers = yamlpick::get(yaml, "servers");
//! assert!(servers.is_container());
//! assert_eq!(servers.get("#").int(), 2);
//! assert_eq!(servers.get("1.port").uint(), 5432);
//!
//! let mut names = Vec::new();
//! servers.for_each(|_, server| {
//!     names.push(server.get("name").to_string());
//!     true
//! });
//! assert_eq!(names, ["web1", "db1"]);
//! ```

use std::fmt;

use indexmap::IndexMap;

use crate::document::node::{Kind, YamlValue};
use crate::document::parser::parse_yaml;
use crate::document::tree::{yaml_number, NodeId, YamlTree};

/// A value found in a YAML document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryResult {
    value: YamlValue,
    /// Position inside the parent container, set when produced by iteration.
    index: Option<usize>,
}

impl QueryResult {
    pub fn new(value: YamlValue) -> Self {
        Self { value, index: None }
    }

    fn child(tree: &YamlTree, id: NodeId, index: usize) -> Self {
        Self {
            value: tree.value(id),
            index: Some(index),
        }
    }

    /// Returns the wrapped value.
    pub fn value(&self) -> &YamlValue {
        &self.value
    }

    /// Returns the position of this value inside its parent when it was
    /// produced by `for_each`, `array` or `map`.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn kind(&self) -> Kind {
        self.value.kind()
    }

    /// Returns true unless the lookup missed or found an explicit null.
    pub fn exists(&self) -> bool {
        self.value.exists()
    }

    pub fn is_container(&self) -> bool {
        self.value.is_container()
    }

    /// Returns the retained source text of a number or container.
    pub fn raw(&self) -> Option<&str> {
        self.value.raw()
    }

    pub fn string(&self) -> String {
        self.value.string()
    }

    pub fn bool(&self) -> bool {
        self.value.bool()
    }

    pub fn int(&self) -> i64 {
        self.value.int()
    }

    pub fn uint(&self) -> u64 {
        self.value.uint()
    }

    pub fn float(&self) -> f64 {
        self.value.float()
    }

    /// Decodes a container holding a sequence into its elements.
    ///
    /// Returns an empty `Vec` for anything else, including mappings.
    pub fn array(&self) -> Vec<QueryResult> {
        let Some(tree) = self.decode() else {
            return Vec::new();
        };
        let root = tree.root();
        if !tree.is_sequence(root) {
            return Vec::new();
        }
        tree.children(root)
            .iter()
            .enumerate()
            .map(|(i, entry)| Self::child(&tree, entry.node, i))
            .collect()
    }

    /// Decodes a container holding a mapping into its entries, in document
    /// order. Returns an empty map for anything else, including sequences.
    pub fn map(&self) -> IndexMap<String, QueryResult> {
        let Some(tree) = self.decode() else {
            return IndexMap::new();
        };
        let root = tree.root();
        if !tree.is_mapping(root) {
            return IndexMap::new();
        }
        tree.children(root)
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let key = entry.key.clone().unwrap_or_default();
                (key, Self::child(&tree, entry.node, i))
            })
            .collect()
    }

    /// Resolves `path` against the subtree this result wraps.
    ///
    /// Only containers have anything to look into; every other result yields
    /// `Null`. The container text is parsed again on each call.
    pub fn get(&self, path: &str) -> QueryResult {
        match &self.value {
            YamlValue::Container(raw) => crate::get(raw, path),
            _ => QueryResult::default(),
        }
    }

    /// Calls `iterator` with each immediate child of a container.
    ///
    /// Sequence children are keyed by their position as a number, mapping
    /// children by their key as a string. Iteration stops as soon as the
    /// callback returns `false`. Non-containers are not iterated.
    pub fn for_each<F>(&self, mut iterator: F)
    where
        F: FnMut(QueryResult, QueryResult) -> bool,
    {
        let Some(tree) = self.decode() else {
            return;
        };
        let root = tree.root();
        let is_sequence = tree.is_sequence(root);

        for (i, entry) in tree.children(root).iter().enumerate() {
            let key = if is_sequence {
                YamlValue::from_count(i)
            } else {
                YamlValue::String(entry.key.clone().unwrap_or_default())
            };
            if !iterator(QueryResult::new(key), Self::child(&tree, entry.node, i)) {
                return;
            }
        }
    }

    /// Returns the value as a `serde_yaml::Value`.
    ///
    /// Containers are decoded from their text; a container that fails to
    /// decode yields `Null`.
    pub fn to_yaml(&self) -> serde_yaml::Value {
        use serde_yaml::Value;

        match &self.value {
            YamlValue::Null => Value::Null,
            YamlValue::False => Value::Bool(false),
            YamlValue::True => Value::Bool(true),
            YamlValue::Number { num, raw } => {
                Value::Number(yaml_number(*num, raw.as_deref().unwrap_or_default()))
            }
            YamlValue::String(s) => Value::String(s.clone()),
            YamlValue::Container(raw) => serde_yaml::from_str(raw).unwrap_or(Value::Null),
        }
    }

    /// Parses the container text, if this result is a container.
    fn decode(&self) -> Option<YamlTree> {
        match &self.value {
            YamlValue::Container(raw) => parse_yaml(raw).ok(),
            _ => None,
        }
    }
}

impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl From<YamlValue> for QueryResult {
    fn from(value: YamlValue) -> Self {
        Self::new(value)
    }
}
