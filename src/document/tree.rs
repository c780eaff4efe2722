//! Arena representation of a parsed YAML document.
//!
//! Every node of a document lives in one `Vec` inside `YamlTree` and is
//! addressed by a `NodeId`. Mappings and sequences don't own their children;
//! they hold a contiguous range into a shared entry table, so walking a path is
//! a series of slice lookups and re-encoding a subtree only touches the nodes
//! under it.
//!
//! # Example
//!
//! ```
//! use yamlpick::document::parser::parse_yaml;
//!
//! let tree = parse_yaml("children: [Sara, Alex, Jack]").unwrap();
//! let children = tree.get_key(tree.root(), "children").unwrap();
//! assert_eq!(tree.len(children), Some(3));
//!
//! let second = tree.get_index(children, 1).unwrap();
//! assert_eq!(tree.value(second).string(), "Alex");
//! ```

use std::ops::Range;

use super::node::YamlValue;

/// Index of a node inside its `YamlTree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// A single node in the arena.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Bool(bool),
    /// `raw` is the scalar as written (integers are rendered from the decoded
    /// value, so `0x1F` is kept as `31`).
    Number { num: f64, raw: String },
    String(String),
    /// Range into the entry table; every entry has `key: None`.
    Sequence(Range<usize>),
    /// Range into the entry table; every entry has a key.
    Mapping(Range<usize>),
}

/// A child slot of a container node.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub key: Option<String>,
    pub node: NodeId,
}

/// A parsed YAML document.
#[derive(Debug, Clone, PartialEq)]
pub struct YamlTree {
    nodes: Vec<Node>,
    entries: Vec<Entry>,
    root: NodeId,
    /// The YAML text the tree was parsed from.
    original_source: Option<String>,
}

impl YamlTree {
    /// Creates a tree holding a single `Null` root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::Null],
            entries: Vec::new(),
            root: NodeId(0),
            original_source: None,
        }
    }

    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Appends a block of entries and returns the range they occupy.
    ///
    /// Children must already be in the arena, which keeps each container's
    /// entries contiguous even though nested containers push their own first.
    pub(crate) fn push_entries(&mut self, entries: Vec<Entry>) -> Range<usize> {
        let start = self.entries.len();
        self.entries.extend(entries);
        start..self.entries.len()
    }

    pub(crate) fn set_root(&mut self, root: NodeId) {
        self.root = root;
    }

    pub(crate) fn set_source(&mut self, source: &str) {
        self.original_source = Some(source.to_string());
    }

    /// Returns the root node of the document.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the text the tree was parsed from, if any.
    pub fn original_source(&self) -> Option<&str> {
        self.original_source.as_deref()
    }

    /// Returns the node stored at `id`.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Returns the children of a container, or an empty slice for scalars.
    pub fn children(&self, id: NodeId) -> &[Entry] {
        match self.node(id) {
            Node::Sequence(range) | Node::Mapping(range) => &self.entries[range.clone()],
            _ => &[],
        }
    }

    pub fn is_sequence(&self, id: NodeId) -> bool {
        matches!(self.node(id), Node::Sequence(_))
    }

    pub fn is_mapping(&self, id: NodeId) -> bool {
        matches!(self.node(id), Node::Mapping(_))
    }

    /// Returns the element count of a sequence or mapping.
    pub fn len(&self, id: NodeId) -> Option<usize> {
        match self.node(id) {
            Node::Sequence(range) | Node::Mapping(range) => Some(range.len()),
            _ => None,
        }
    }

    /// Looks up `key` in a mapping. Returns `None` for non-mappings.
    pub fn get_key(&self, id: NodeId, key: &str) -> Option<NodeId> {
        if !self.is_mapping(id) {
            return None;
        }
        self.children(id)
            .iter()
            .find(|entry| entry.key.as_deref() == Some(key))
            .map(|entry| entry.node)
    }

    /// Returns element `index` of a sequence. Returns `None` for non-sequences.
    pub fn get_index(&self, id: NodeId, index: usize) -> Option<NodeId> {
        if !self.is_sequence(id) {
            return None;
        }
        self.children(id).get(index).map(|entry| entry.node)
    }

    /// Converts the node into a `YamlValue`.
    ///
    /// Scalars map onto their variant directly; containers are re-encoded to
    /// canonical YAML text.
    pub fn value(&self, id: NodeId) -> YamlValue {
        match self.node(id) {
            Node::Null => YamlValue::Null,
            Node::Bool(true) => YamlValue::True,
            Node::Bool(false) => YamlValue::False,
            Node::Number { num, raw } => YamlValue::Number {
                num: *num,
                raw: Some(raw.clone()),
            },
            Node::String(s) => YamlValue::String(s.clone()),
            Node::Sequence(_) | Node::Mapping(_) => match self.encode(id) {
                Some(raw) => YamlValue::Container(raw),
                None => YamlValue::Null,
            },
        }
    }

    /// Renders the subtree under `id` as canonical YAML text.
    pub fn encode(&self, id: NodeId) -> Option<String> {
        encode_yaml(&self.to_yaml(id))
    }

    /// Builds a `serde_yaml::Value` for the subtree under `id`.
    pub fn to_yaml(&self, id: NodeId) -> serde_yaml::Value {
        use serde_yaml::Value;

        match self.node(id) {
            Node::Null => Value::Null,
            Node::Bool(b) => Value::Bool(*b),
            Node::Number { num, raw } => Value::Number(yaml_number(*num, raw)),
            Node::String(s) => Value::String(s.clone()),
            Node::Sequence(_) => Value::Sequence(
                self.children(id)
                    .iter()
                    .map(|entry| self.to_yaml(entry.node))
                    .collect(),
            ),
            Node::Mapping(_) => {
                let map: serde_yaml::Mapping = self
                    .children(id)
                    .iter()
                    .map(|entry| {
                        (
                            Value::String(entry.key.clone().unwrap_or_default()),
                            self.to_yaml(entry.node),
                        )
                    })
                    .collect();
                Value::Mapping(map)
            }
        }
    }
}

impl Default for YamlTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializes a value as YAML, logging instead of failing.
pub(crate) fn encode_yaml(value: &serde_yaml::Value) -> Option<String> {
    match serde_yaml::to_string(value) {
        Ok(text) => Some(text),
        Err(err) => {
            tracing::warn!(error = %err, "failed to encode YAML subtree");
            None
        }
    }
}

/// Picks the most exact `serde_yaml::Number` for a scalar.
pub(crate) fn yaml_number(num: f64, raw: &str) -> serde_yaml::Number {
    let raw = raw.trim();
    if let Ok(i) = raw.parse::<i64>() {
        serde_yaml::Number::from(i)
    } else if let Ok(u) = raw.parse::<u64>() {
        serde_yaml::Number::from(u)
    } else {
        serde_yaml::Number::from(num)
    }
}
