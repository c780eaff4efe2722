//! Dot-path string parser.
//!
//! Paths are split on `.` into tokens, and each token is classified on its
//! own. A dot inside a `#( ... )` group belongs to the predicate, so
//! `items.#(price>9.5).name` has three tokens. Empty tokens (from `a..b`, a
//! leading or a trailing dot) are skipped. Parsing never fails: anything that
//! isn't one of the special forms is a key.

use super::ast::{PathSegment, YamlPath};

/// Parser for dot-path strings.
pub struct Parser<'a> {
    tokens: Vec<&'a str>,
    position: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given path string.
    pub fn new(path: &'a str) -> Self {
        Self {
            tokens: split_tokens(path),
            position: 0,
        }
    }

    /// Parses the path string into a `YamlPath`.
    pub fn parse(path: &str) -> YamlPath {
        Parser::new(path).parse_path()
    }

    fn parse_path(&mut self) -> YamlPath {
        let mut segments = Vec::new();

        while let Some(token) = self.next() {
            if token == "#" {
                if self.is_eof() {
                    segments.push(PathSegment::Length);
                } else {
                    // everything after the `#` belongs to the broadcast
                    segments.push(PathSegment::Broadcast(self.rest()));
                    break;
                }
            } else if let Some(query) = token
                .strip_prefix("#(")
                .and_then(|inner| inner.strip_suffix(')'))
            {
                segments.push(PathSegment::Query(query.to_string()));
            } else if let Some(name) = token.strip_prefix('#') {
                let rest = self.peek_rest();
                let payload = if rest.is_empty() {
                    name.to_string()
                } else {
                    format!("{}.{}", name, rest)
                };
                segments.push(PathSegment::KeyOrBroadcast {
                    key: token.to_string(),
                    payload,
                });
            } else if let Ok(index) = token.parse::<i64>() {
                segments.push(PathSegment::Index(index));
            } else {
                segments.push(PathSegment::Key(token.to_string()));
            }
        }

        YamlPath::new(segments)
    }

    /// Returns the next token and advances position.
    fn next(&mut self) -> Option<&'a str> {
        let token = self.tokens.get(self.position).copied()?;
        self.position += 1;
        Some(token)
    }

    /// Checks if we've consumed every token.
    fn is_eof(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Joins the remaining tokens back into a path without consuming them.
    fn peek_rest(&self) -> String {
        self.tokens[self.position..].join(".")
    }

    /// Joins the remaining tokens back into a path and consumes them.
    fn rest(&mut self) -> String {
        let rest = self.peek_rest();
        self.position = self.tokens.len();
        rest
    }
}

/// Splits a path on dots that are outside of `#( ... )` groups and drops
/// empty tokens.
fn split_tokens(path: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut depth = 0usize;

    for (i, ch) in path.char_indices() {
        match ch {
            '(' if depth > 0 || &path[start..i] == "#" => depth += 1,
            ')' if depth > 0 => depth -= 1,
            '.' if depth == 0 => {
                tokens.push(&path[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    tokens.push(&path[start..]);

    tokens.retain(|token| !token.is_empty());
    tokens
}
