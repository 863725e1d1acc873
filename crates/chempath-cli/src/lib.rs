//! chempath CLI library.
//!
//! This crate provides the reusable pieces of the `chempath` command-line
//! interface: reaction loading from files or stdin and output formatting.

pub mod input;
pub mod output;
