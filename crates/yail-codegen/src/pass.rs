//! Per-screen generation state.

use crate::registry::Entry;
use crate::{CompileError, Generator, Warning};
use rhizome_yail_ir::builders::{global_name, local_name};
use rhizome_yail_ir::{Expr, ValueKind};
use rhizome_yail_metadata::ComponentMetadata;
use rhizome_yail_syntax_bky::Block;
use rhizome_yail_syntax_scm::ScreenDocument;
use std::collections::HashMap;

/// Map a variable field to its table key. `global X` names a screen global,
/// anything else a lexical local.
pub(crate) fn variable_key(raw: &str) -> String {
    match raw.strip_prefix("global ") {
        Some(name) => global_name(name),
        None => local_name(raw),
    }
}

/// State for generating one screen.
///
/// Handlers receive the pass mutably so they can recurse into child blocks
/// and record variable kinds; nothing in it outlives the screen.
pub struct Pass<'a> {
    generator: &'a Generator,
    screen: &'a ScreenDocument,
    metadata: ComponentMetadata<'a>,
    variable_kinds: HashMap<String, ValueKind>,
    warnings: Vec<Warning>,
}

impl<'a> Pass<'a> {
    pub(crate) fn new(generator: &'a Generator, screen: &'a ScreenDocument) -> Self {
        Self {
            generator,
            screen,
            metadata: ComponentMetadata::new(generator.environment()),
            variable_kinds: HashMap::new(),
            warnings: Vec::new(),
        }
    }

    pub fn generator(&self) -> &'a Generator {
        self.generator
    }

    pub fn screen(&self) -> &'a ScreenDocument {
        self.screen
    }

    pub fn metadata(&self) -> ComponentMetadata<'a> {
        self.metadata
    }

    pub fn form_name(&self) -> &'a str {
        self.screen.form_name()
    }

    pub fn warn(&mut self, warning: Warning) {
        if !self.warnings.contains(&warning) {
            self.warnings.push(warning);
        }
    }

    pub(crate) fn take_warnings(&mut self) -> Vec<Warning> {
        std::mem::take(&mut self.warnings)
    }

    /// Generate the expression for `block` through the registry.
    pub fn expr(&mut self, block: &Block) -> Result<Expr, CompileError> {
        let generator = self.generator;
        match generator.registry().get(&block.block_type) {
            Some(Entry::Handler(handler)) => handler(self, block),
            Some(Entry::Unhandled) => {
                tracing::warn!(block_type = %block.block_type, "unhandled block type");
                self.warn(Warning::UnhandledBlock(block.block_type.clone()));
                Ok(Expr::block_comment(format!(
                    "; Unhandled block type '{}'",
                    block.block_type
                )))
            }
            None => Err(CompileError::UnresolvedSymbol(block.block_type.clone())),
        }
    }

    /// Expression for a value slot; an empty slot yields a placeholder.
    pub fn value(&mut self, block: &Block, slot: &str) -> Result<Expr, CompileError> {
        match block.value(slot) {
            Some(child) => self.expr(child),
            None => Ok(empty_slot()),
        }
    }

    /// Expression for a value slot, or `default` when the slot is empty.
    pub fn value_or(
        &mut self,
        block: &Block,
        slot: &str,
        default: Expr,
    ) -> Result<Expr, CompileError> {
        match block.value(slot) {
            Some(child) => self.expr(child),
            None => Ok(default),
        }
    }

    pub fn optional_value(
        &mut self,
        block: &Block,
        slot: &str,
    ) -> Result<Option<Expr>, CompileError> {
        block.value(slot).map(|child| self.expr(child)).transpose()
    }

    /// Expressions for a statement slot, following the `next` chain.
    pub fn statements(&mut self, block: &Block, slot: &str) -> Result<Vec<Expr>, CompileError> {
        match block.statement(slot) {
            Some(head) => self.chain(head),
            None => Ok(Vec::new()),
        }
    }

    pub fn chain(&mut self, head: &Block) -> Result<Vec<Expr>, CompileError> {
        head.chain().map(|block| self.expr(block)).collect()
    }

    /// Value slots `PREFIX0`, `PREFIX1`, ... up to `count`. Empty slots
    /// yield `default`.
    pub fn numbered_values(
        &mut self,
        block: &Block,
        prefix: &str,
        count: usize,
        default: impl Fn() -> Expr,
    ) -> Result<Vec<Expr>, CompileError> {
        (0..count)
            .map(|i| self.value_or(block, &format!("{prefix}{i}"), default()))
            .collect()
    }

    /// Record the kind of the value assigned to `key`. Nothing is recorded
    /// without a value block, and `any` is never recorded.
    pub fn track_variable(&mut self, key: String, value: Option<&Block>) {
        if value.is_none() {
            return;
        }
        let kind = self.infer(value);
        self.record_variable(key, kind);
    }

    pub fn record_variable(&mut self, key: String, kind: ValueKind) {
        if kind != ValueKind::Any {
            self.variable_kinds.insert(key, kind);
        }
    }

    pub fn variable_kind(&self, key: &str) -> ValueKind {
        self.variable_kinds
            .get(key)
            .copied()
            .unwrap_or(ValueKind::Any)
    }

    /// Instance a component block acts on.
    pub fn component_instance(&self, block: &Block) -> String {
        block
            .mutation_attr("instance_name")
            .or_else(|| block.field("COMPONENT_SELECTOR"))
            .unwrap_or_else(|| self.form_name())
            .to_string()
    }

    /// Type of `instance`, from the block's own mutation first and the
    /// component tree second.
    pub fn component_type(&self, block: &Block, instance: &str) -> Option<String> {
        block
            .mutation_attr("component_type")
            .map(str::to_string)
            .or_else(|| {
                self.screen
                    .component(instance)
                    .map(|component| component.component_type.clone())
            })
    }

    /// Kind of a component property, if metadata knows it.
    pub fn property_kind(&self, component_type: Option<&str>, property: &str) -> Option<ValueKind> {
        component_type
            .and_then(|ty| self.metadata.property(ty, property))
            .map(|signature| signature.kind)
    }
}

fn empty_slot() -> Expr {
    Expr::block_comment("; Empty block")
}
