//! Block tree nodes.

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeMap;

/// Extra configuration attached to a block (`<mutation>`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Mutation {
    /// Attributes verbatim.
    pub attributes: BTreeMap<String, String>,
    /// `name` attributes of nested elements such as `<arg name="x"/>`, in
    /// document order.
    pub names: Vec<String>,
    /// Trimmed text content, if any.
    pub text: Option<String>,
}

impl Mutation {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// One block from the editor workspace.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Block {
    #[serde(rename = "type")]
    pub block_type: String,
    pub id: Option<String>,
    pub x: i32,
    pub y: i32,
    pub collapsed: bool,
    pub disabled: bool,
    pub fields: IndexMap<String, String>,
    pub values: IndexMap<String, Block>,
    /// Statement slots hold the head of a `next` chain.
    pub statements: IndexMap<String, Block>,
    pub mutation: Option<Mutation>,
    pub next: Option<Box<Block>>,
}

impl Block {
    pub fn new(block_type: impl Into<String>) -> Self {
        Self {
            block_type: block_type.into(),
            ..Self::default()
        }
    }

    /// Non-empty field text.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    pub fn value(&self, name: &str) -> Option<&Block> {
        self.values.get(name)
    }

    pub fn statement(&self, name: &str) -> Option<&Block> {
        self.statements.get(name)
    }

    /// Non-empty mutation attribute.
    pub fn mutation_attr(&self, name: &str) -> Option<&str> {
        self.mutation
            .as_ref()
            .and_then(|mutation| mutation.attr(name))
            .filter(|text| !text.is_empty())
    }

    pub fn mutation_names(&self) -> &[String] {
        self.mutation
            .as_ref()
            .map(|mutation| mutation.names.as_slice())
            .unwrap_or(&[])
    }

    /// Mutation attribute parsed as a count.
    pub fn mutation_count(&self, name: &str) -> Option<usize> {
        self.mutation_attr(name)
            .and_then(|text| text.trim().parse().ok())
    }

    /// This block followed by every block chained through `next`.
    pub fn chain(&self) -> impl Iterator<Item = &Block> {
        std::iter::successors(Some(self), |block| block.next.as_deref())
    }

    /// Pre-order walk: this block, then value children, statement children
    /// and finally the `next` chain.
    pub fn walk<'a>(&'a self, out: &mut Vec<&'a Block>) {
        out.push(self);
        for child in self.values.values() {
            child.walk(out);
        }
        for child in self.statements.values() {
            child.walk(out);
        }
        if let Some(next) = &self.next {
            next.walk(out);
        }
    }

    /// Builder-style setters, handy when assembling trees by hand.
    pub fn with_field(mut self, name: &str, text: impl Into<String>) -> Self {
        self.fields.insert(name.to_string(), text.into());
        self
    }

    pub fn with_value(mut self, name: &str, block: Block) -> Self {
        self.values.insert(name.to_string(), block);
        self
    }

    pub fn with_statement(mut self, name: &str, block: Block) -> Self {
        self.statements.insert(name.to_string(), block);
        self
    }

    pub fn with_mutation_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.mutation
            .get_or_insert_with(Mutation::default)
            .attributes
            .insert(name.to_string(), value.into());
        self
    }

    pub fn with_next(mut self, block: Block) -> Self {
        self.next = Some(Box::new(block));
        self
    }
}
