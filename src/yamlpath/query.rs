//! `#(...)` predicate parsing and matching.
//!
//! A predicate has the form `[key] op value`. The evaluator walks a sequence
//! in order and stops at the first element that satisfies it; collecting every
//! match is left to a broadcast plus the caller's own filter.

use super::ast::{Operator, Predicate};
use super::error::QueryError;
use crate::document::node::YamlValue;
use crate::document::tree::{NodeId, YamlTree};

/// Parses the text between `#(` and `)`.
///
/// # Errors
///
/// Returns `QueryError::MissingOperator` when no comparison operator is present.
pub fn parse_predicate(query: &str) -> Result<Predicate, QueryError> {
    for op in Operator::SEARCH_ORDER {
        if let Some((key, value)) = query.split_once(op.symbol()) {
            let key = key.trim();
            return Ok(Predicate {
                key: (!key.is_empty()).then(|| key.to_string()),
                op,
                literal: unquote(value.trim()).to_string(),
            });
        }
    }
    Err(QueryError::MissingOperator {
        query: query.to_string(),
    })
}

/// Strips one pair of matching single or double quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

impl Predicate {
    /// Tests a single subject value against the predicate.
    ///
    /// Equality operators compare the subject's canonical text with the
    /// literal, so numbers match by value rather than by spelling.
    /// Ordering operators compare both sides as floats; if either side has no
    /// numeric reading the predicate does not hold.
    pub fn matches(&self, subject: &YamlValue) -> bool {
        match self.op {
            Operator::Eq => subject.canonical_string() == self.literal,
            Operator::Ne => subject.canonical_string() != self.literal,
            op => {
                let Some(lhs) = subject.as_comparable() else {
                    return false;
                };
                let Ok(rhs) = self.literal.parse::<f64>() else {
                    return false;
                };
                match op {
                    Operator::Gt => lhs > rhs,
                    Operator::Lt => lhs < rhs,
                    Operator::Ge => lhs >= rhs,
                    Operator::Le => lhs <= rhs,
                    Operator::Eq | Operator::Ne => false,
                }
            }
        }
    }

    /// Returns the first element of the sequence `target` that satisfies the
    /// predicate, or `None` if nothing matches or `target` is not a sequence.
    pub fn find_first(&self, tree: &YamlTree, target: NodeId) -> Option<NodeId> {
        if !tree.is_sequence(target) {
            return None;
        }
        tree.children(target)
            .iter()
            .map(|entry| entry.node)
            .find(|&element| {
                let subject = match &self.key {
                    Some(key) => match tree.get_key(element, key) {
                        Some(field) => field,
                        None => return false,
                    },
                    None => element,
                };
                self.matches(&tree.value(subject))
            })
    }
}

/// Parses `query` and selects the first matching element of `target`.
///
/// Malformed predicates select nothing.
pub fn select(tree: &YamlTree, target: NodeId, query: &str) -> Option<NodeId> {
    match parse_predicate(query) {
        Ok(predicate) => predicate.find_first(tree, target),
        Err(err) => {
            tracing::debug!(error = %err, "ignoring malformed query");
            None
        }
    }
}
