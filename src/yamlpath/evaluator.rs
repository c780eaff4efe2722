use super::ast::{PathSegment, YamlPath};
use super::parser::Parser;
use super::query;
use crate::document::node::YamlValue;
use crate::document::tree::{encode_yaml, Node, NodeId, YamlTree};

/// Outcome of walking a path, before it is turned into a `YamlValue`.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// The path does not lead anywhere.
    Missing,
    /// The path ends at a node of the tree.
    Node(NodeId),
    /// A `#` length query.
    Count(usize),
    /// The defined results of a broadcast, in element order.
    Collected(Vec<Resolved>),
}

impl Resolved {
    /// Returns false for misses and for paths ending at an explicit null.
    pub fn exists(&self, tree: &YamlTree) -> bool {
        match self {
            Resolved::Missing => false,
            Resolved::Node(id) => !matches!(tree.node(*id), Node::Null),
            Resolved::Count(_) | Resolved::Collected(_) => true,
        }
    }

    /// Converts the outcome into a value, re-encoding containers as YAML.
    pub fn into_value(self, tree: &YamlTree) -> YamlValue {
        match self {
            Resolved::Missing => YamlValue::Null,
            Resolved::Node(id) => tree.value(id),
            Resolved::Count(count) => YamlValue::from_count(count),
            Resolved::Collected(_) => match encode_yaml(&self.to_yaml(tree)) {
                Some(raw) => YamlValue::Container(raw),
                None => YamlValue::Null,
            },
        }
    }

    fn to_yaml(&self, tree: &YamlTree) -> serde_yaml::Value {
        match self {
            Resolved::Missing => serde_yaml::Value::Null,
            Resolved::Node(id) => tree.to_yaml(*id),
            Resolved::Count(count) => serde_yaml::Value::Number((*count as u64).into()),
            Resolved::Collected(items) => {
                serde_yaml::Value::Sequence(items.iter().map(|item| item.to_yaml(tree)).collect())
            }
        }
    }
}

/// Walks dot paths over a `YamlTree`.
///
/// Every miss (absent key, index out of range, wrong container type) ends the
/// walk with `Resolved::Missing`; nothing here panics or errors.
pub struct Evaluator<'a> {
    tree: &'a YamlTree,
}

impl<'a> Evaluator<'a> {
    pub fn new(tree: &'a YamlTree) -> Self {
        Evaluator { tree }
    }

    /// Resolves `path` from the root of the tree and returns the terminal value.
    pub fn evaluate(&self, path: &YamlPath) -> YamlValue {
        self.resolve(self.tree.root(), &path.segments)
            .into_value(self.tree)
    }

    /// Walks `segments` starting at `start`.
    pub fn resolve(&self, start: NodeId, segments: &[PathSegment]) -> Resolved {
        let tree = self.tree;
        let mut current = start;

        for segment in segments {
            let next = match segment {
                PathSegment::Key(name) => tree.get_key(current, name),
                PathSegment::Index(index) => usize::try_from(*index)
                    .ok()
                    .and_then(|index| tree.get_index(current, index)),
                PathSegment::Length => {
                    return tree.len(current).map_or(Resolved::Missing, Resolved::Count);
                }
                PathSegment::Broadcast(payload) => return self.broadcast(current, payload),
                PathSegment::KeyOrBroadcast { key, payload } => {
                    match tree.get_key(current, key) {
                        Some(child) => Some(child),
                        None => return self.broadcast(current, payload),
                    }
                }
                PathSegment::Query(text) => query::select(tree, current, text),
            };

            match next {
                Some(child) => current = child,
                None => {
                    tracing::trace!(?segment, "path segment did not resolve");
                    return Resolved::Missing;
                }
            }
        }

        Resolved::Node(current)
    }

    /// Resolves `payload` against every element of a sequence and keeps the
    /// results that exist. Non-sequences resolve to `Missing`.
    fn broadcast(&self, target: NodeId, payload: &str) -> Resolved {
        if !self.tree.is_sequence(target) {
            return Resolved::Missing;
        }
        let sub_path = Parser::parse(payload);
        let collected = self
            .tree
            .children(target)
            .iter()
            .map(|entry| self.resolve(entry.node, &sub_path.segments))
            .filter(|resolved| resolved.exists(self.tree))
            .collect();
        Resolved::Collected(collected)
    }
}
