//! Abstract syntax tree types for dot-path expressions.

use std::fmt;

/// A segment in a dot-path expression.
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    /// Named child of a mapping (`name`)
    Key(String),
    /// Sequence element (`0`); negative indices never match
    Index(i64),
    /// Element count of a sequence or mapping (a trailing `#`)
    Length,
    /// `#.rest` - resolve `rest` against every sequence element
    Broadcast(String),
    /// `#(predicate)` - first sequence element matching the predicate
    Query(String),
    /// `#name` - the literal key `#name` if the mapping has one, otherwise a
    /// broadcast of `payload` (`name` plus whatever followed it in the path)
    KeyOrBroadcast { key: String, payload: String },
}

/// A complete dot-path expression.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct YamlPath {
    /// Segments that make up the path.
    pub segments: Vec<PathSegment>,
}

impl YamlPath {
    /// Creates a new path with the given segments.
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }
}

/// Comparison operator of a query predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
}

impl Operator {
    /// Operators in the order they are searched for. Two-character operators
    /// come first so `>=` is never read as `>` followed by `=value`.
    pub const SEARCH_ORDER: [Operator; 6] = [
        Operator::Ge,
        Operator::Le,
        Operator::Ne,
        Operator::Gt,
        Operator::Lt,
        Operator::Eq,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Ge => ">=",
            Operator::Le => "<=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A parsed `#(...)` condition: `[key] op literal`.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    /// Field compared on each element; `None` compares the element itself.
    pub key: Option<String>,
    pub op: Operator,
    /// Right-hand side, trimmed and unquoted.
    pub literal: String,
}
