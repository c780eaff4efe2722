//! Dot-path parser and evaluator for YAML lookups.
//!
//! This module turns a path string into segments and walks them over a
//! parsed `YamlTree`.
//!
//! # Supported Syntax
//!
//! - `name.last` - Named mapping keys, separated by dots
//! - `children.0` - Sequence index (negative or out-of-range indices miss)
//! - `children.#` - Number of elements in a sequence or mapping
//! - `friends.#.first` - The sub-path applied to every element, collected
//! - `friends.#(age>50)` - First element matching a comparison
//!   (`=`, `!=`, `>`, `<`, `>=`, `<=`); the key may be omitted for
//!   sequences of scalars, e.g. `scores.#(>=90)`
//! - `#name` - The literal key `#name` when present, otherwise `#.name`;
//!   the broadcast keeps the rest of the path, so `a.#name.x` reads as
//!   `a.#.name.x` rather than dropping `.x`
//!
//! # Examples
//!
//! ```
//! // friends.#(last=Murphy).first - first Murphy's first name
//! // servers.#.roles.# - role count of every server
//! // items.#(price<=9.5).name - dots inside #( ) are part of the predicate
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod parser;
pub mod query;

pub use ast::{Operator, PathSegment, Predicate, YamlPath};
pub use error::QueryError;
pub use evaluator::{Evaluator, Resolved};
pub use parser::Parser;
