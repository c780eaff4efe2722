//! File I/O operations for YAML documents.
//!
//! This module provides functionality to read YAML text from disk or stdin
//! for the command-line front end.

pub mod loader;
