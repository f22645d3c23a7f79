//! Block type to handler table.

use crate::{CompileError, Pass};
use rhizome_yail_ir::Expr;
use rhizome_yail_syntax_bky::Block;
use std::collections::HashMap;
use std::fmt;

/// Generates the expression for one block.
pub type BlockHandler = fn(&mut Pass<'_>, &Block) -> Result<Expr, CompileError>;

#[derive(Clone, Copy)]
pub enum Entry {
    Handler(BlockHandler),
    /// Known block type with no generator; emits a marker comment.
    Unhandled,
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Handler(_) => f.write_str("Handler"),
            Entry::Unhandled => f.write_str("Unhandled"),
        }
    }
}

/// Handlers keyed by block type. Built once, then shared read-only.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: HashMap<&'static str, Entry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in block family.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        crate::blocks::register_all(&mut registry);
        registry
    }

    pub fn register(&mut self, block_type: &'static str, handler: BlockHandler) {
        self.entries.insert(block_type, Entry::Handler(handler));
    }

    pub fn register_unhandled(&mut self, block_type: &'static str) {
        self.entries.insert(block_type, Entry::Unhandled);
    }

    pub fn get(&self, block_type: &str) -> Option<Entry> {
        self.entries.get(block_type).copied()
    }

    pub fn contains(&self, block_type: &str) -> bool {
        self.entries.contains_key(block_type)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
