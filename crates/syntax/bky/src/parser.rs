//! XML decoding with `xmltree`.

use crate::{Block, BlockDocument, Mutation};
use thiserror::Error;
use xmltree::{Element, ParserConfig, XMLNode};

#[derive(Debug, Error)]
pub enum BkyError {
    #[error("malformed block XML: {0}")]
    Xml(#[from] xmltree::ParseError),

    #[error("block XML has no <xml> container")]
    MissingRoot,
}

/// Parse a `.bky` document.
pub fn parse(source: &str) -> Result<BlockDocument, BkyError> {
    // Whitespace-only field text (a lone space in a join) is content.
    let config = ParserConfig::new().whitespace_to_characters(true);
    let root = Element::parse_with_config(source.as_bytes(), config)?;
    let container = find_container(&root).ok_or(BkyError::MissingRoot)?;

    let mut blocks = Vec::new();
    collect_top_level(container, &mut blocks);
    tracing::debug!(count = blocks.len(), "parsed top-level blocks");
    Ok(BlockDocument::new(blocks))
}

fn child_elements(element: &Element) -> impl Iterator<Item = &Element> {
    element.children.iter().filter_map(|node| match node {
        XMLNode::Element(child) => Some(child),
        _ => None,
    })
}

fn find_container(element: &Element) -> Option<&Element> {
    if element.name.eq_ignore_ascii_case("xml") {
        return Some(element);
    }
    child_elements(element).find_map(find_container)
}

fn collect_top_level(element: &Element, out: &mut Vec<Block>) {
    for child in child_elements(element) {
        match child.name.as_str() {
            "block" => out.push(parse_block(child)),
            // Anything under a slot belongs to its parent block.
            "value" | "statement" | "next" => {}
            _ => collect_top_level(child, out),
        }
    }
}

/// Concatenated text of an element and its descendants.
fn text_content(element: &Element) -> String {
    let mut text = String::new();
    push_text(element, &mut text);
    text
}

fn push_text(element: &Element, out: &mut String) {
    for node in &element.children {
        match node {
            XMLNode::Text(text) | XMLNode::CData(text) => out.push_str(text),
            XMLNode::Element(child) => push_text(child, out),
            _ => {}
        }
    }
}

fn first_block(element: &Element) -> Option<Block> {
    child_elements(element)
        .find(|child| child.name == "block" || child.name == "shadow")
        .map(parse_block)
}

/// Editor coordinates may be written as floats; keep the integer part.
fn parse_coordinate(text: Option<&String>) -> i32 {
    let Some(text) = text else { return 0 };
    let text = text.trim();
    text.parse::<i32>()
        .ok()
        .or_else(|| text.parse::<f64>().ok().map(|value| value.trunc() as i32))
        .unwrap_or(0)
}

fn parse_block(element: &Element) -> Block {
    let attr = |name: &str| element.attributes.get(name);
    let mut block = Block {
        block_type: attr("type").cloned().unwrap_or_default(),
        id: attr("id").cloned(),
        x: parse_coordinate(attr("x")),
        y: parse_coordinate(attr("y")),
        collapsed: attr("collapsed").is_some_and(|v| v == "true"),
        disabled: attr("disabled").is_some_and(|v| v == "true"),
        ..Block::default()
    };

    for child in child_elements(element) {
        let name = child.attributes.get("name");
        match child.name.as_str() {
            "field" => {
                if let Some(name) = name {
                    block.fields.insert(name.clone(), text_content(child));
                }
            }
            "value" => {
                if let (Some(name), Some(inner)) = (name, first_block(child)) {
                    block.values.insert(name.clone(), inner);
                }
            }
            "statement" => {
                if let (Some(name), Some(inner)) = (name, first_block(child)) {
                    block.statements.insert(name.clone(), inner);
                }
            }
            "next" => block.next = first_block(child).map(Box::new),
            "mutation" => block.mutation = Some(parse_mutation(child)),
            _ => {}
        }
    }
    block
}

fn parse_mutation(element: &Element) -> Mutation {
    let attributes = element
        .attributes
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    let names = child_elements(element)
        .filter_map(|child| child.attributes.get("name").cloned())
        .collect();
    let text = text_content(element).trim().to_string();
    Mutation {
        attributes,
        names,
        text: (!text.is_empty()).then_some(text),
    }
}
