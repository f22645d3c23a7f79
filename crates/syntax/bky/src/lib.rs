//! Block-editor XML parser.
//!
//! Decodes the `.bky` workspace serialization into a tree of [`Block`]s and
//! offers the lookups the code generator needs (top-level blocks, event
//! handlers, procedure definitions, flattened traversal).

mod block;
mod document;
mod parser;

pub use block::{Block, Mutation};
pub use document::{BlockDocument, BlockStatistics};
pub use parser::{BkyError, parse};

#[cfg(test)]
mod tests;
