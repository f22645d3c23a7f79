//! Queries over a parsed workspace.

use crate::Block;
use serde::Serialize;
use std::collections::BTreeMap;

/// All top-level blocks of one screen's workspace.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BlockDocument {
    blocks: Vec<Block>,
}

/// Summary counts for a workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BlockStatistics {
    pub total_blocks: usize,
    pub top_level_blocks: usize,
    pub global_variables: usize,
    pub procedures: usize,
    pub event_handlers: usize,
    pub block_types: BTreeMap<String, usize>,
}

impl BlockDocument {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Blocks not nested inside another block's slot or chain.
    pub fn top_level(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Every block in the workspace, pre-order.
    pub fn flatten(&self) -> Vec<&Block> {
        let mut out = Vec::new();
        for block in &self.blocks {
            block.walk(&mut out);
        }
        out
    }

    pub fn blocks_of_type<'a>(&'a self, block_type: &str) -> Vec<&'a Block> {
        self.flatten()
            .into_iter()
            .filter(|block| block.block_type == block_type)
            .collect()
    }

    pub fn first_of_type(&self, block_type: &str) -> Option<&Block> {
        self.flatten()
            .into_iter()
            .find(|block| block.block_type == block_type)
    }

    pub fn contains_type(&self, block_type: &str) -> bool {
        self.first_of_type(block_type).is_some()
    }

    pub fn blocks_with_type_containing<'a>(&'a self, fragment: &str) -> Vec<&'a Block> {
        self.flatten()
            .into_iter()
            .filter(|block| block.block_type.contains(fragment))
            .collect()
    }

    fn top_level_of_type<'a>(&'a self, block_type: &'a str) -> impl Iterator<Item = &'a Block> {
        self.blocks
            .iter()
            .filter(move |block| block.block_type == block_type)
    }

    pub fn global_declarations(&self) -> Vec<&Block> {
        self.top_level_of_type("global_declaration").collect()
    }

    /// Procedure definitions: no-return procedures first, then returning ones.
    pub fn procedure_definitions(&self) -> Vec<&Block> {
        self.top_level_of_type("procedures_defnoreturn")
            .chain(self.top_level_of_type("procedures_defreturn"))
            .collect()
    }

    pub fn event_handlers(&self) -> Vec<&Block> {
        self.blocks
            .iter()
            .filter(|block| is_event_handler(&block.block_type))
            .collect()
    }

    pub fn component_method_calls(&self) -> Vec<&Block> {
        self.blocks_of_type("component_method")
    }

    pub fn component_property_getters(&self) -> Vec<&Block> {
        self.flatten()
            .into_iter()
            .filter(|block| match block.block_type.as_str() {
                "component_get_property" => true,
                "component_set_get" => block.mutation_attr("set_or_get") != Some("set"),
                _ => false,
            })
            .collect()
    }

    pub fn component_property_setters(&self) -> Vec<&Block> {
        self.flatten()
            .into_iter()
            .filter(|block| match block.block_type.as_str() {
                "component_set_property" => true,
                "component_set_get" => block.mutation_attr("set_or_get") == Some("set"),
                _ => false,
            })
            .collect()
    }

    pub fn statistics(&self) -> BlockStatistics {
        let all = self.flatten();
        let mut block_types = BTreeMap::new();
        for block in &all {
            *block_types.entry(block.block_type.clone()).or_insert(0) += 1;
        }
        BlockStatistics {
            total_blocks: all.len(),
            top_level_blocks: self.blocks.len(),
            global_variables: self.global_declarations().len(),
            procedures: self.procedure_definitions().len(),
            event_handlers: self.event_handlers().len(),
            block_types,
        }
    }
}

/// Whether a top-level block type denotes an event handler.
pub(crate) fn is_event_handler(block_type: &str) -> bool {
    block_type.contains("_when") || block_type.contains("event")
}
