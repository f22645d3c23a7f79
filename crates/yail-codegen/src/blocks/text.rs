//! text_* blocks.

use super::primitive_over;
use crate::{CompileError, Pass, Registry};
use rhizome_yail_ir::builders::primitive_call;
use rhizome_yail_ir::{Expr, ValueKind as K};
use rhizome_yail_syntax_bky::Block;

pub(crate) fn register(registry: &mut Registry) {
    registry.register("text", literal);
    registry.register("text_join", join);
    registry.register("text_length", length);
    registry.register("text_changeCase", change_case);
    registry.register("text_substring", substring);
    registry.register("text_segment", segment);
    registry.register("text_trim", trim);
    registry.register("text_replace", replace_all);
    registry.register("text_replace_all", replace_all);
    registry.register("text_contains", contains);
    registry.register("text_starts_at", starts_at);
    registry.register("text_split", split);
    registry.register("text_split_at_spaces", split_at_spaces);
    registry.register("text_compare", compare);
    registry.register("text_isEmpty", is_empty);
    registry.register("text_is_string", is_string);
    registry.register("obfuscated_text", obfuscated);
    registry.register("text_reverse", reverse);
    registry.register("text_replace_mappings", replace_mappings);
}

fn literal(_pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    Ok(Expr::string(block.field("TEXT").unwrap_or_default()))
}

/// `string-append` over `ADD0..ADDn`; unconnected items join as `""`.
fn join(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let count = block.mutation_count("items").unwrap_or(2);
    let items = pass.numbered_values(block, "ADD", count, || Expr::string(""))?;
    let kinds = vec![K::Text; items.len()];
    Ok(primitive_call("string-append", items, &kinds, "join"))
}

fn length(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(pass, block, &[("VALUE", K::Text)], "string-length", "length")
}

fn change_case(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let case = block.field("CASE").unwrap_or("UPPERCASE");
    let primitive = match case {
        "LOWERCASE" => "downcase-string",
        "TITLECASE" => "string-to-title-case",
        _ => "upcase-string",
    };
    let label = case.to_lowercase().replacen("case", "", 1);
    primitive_over(pass, block, &[("TEXT", K::Text)], primitive, &label)
}

fn substring(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(
        pass,
        block,
        &[("STRING", K::Text), ("FROM", K::Number), ("TO", K::Number)],
        "string-substring",
        "substring",
    )
}

fn segment(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(
        pass,
        block,
        &[("TEXT", K::Text), ("START", K::Number), ("LENGTH", K::Number)],
        "string-substring",
        "segment",
    )
}

fn trim(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(pass, block, &[("TEXT", K::Text)], "string-trim", "trim")
}

fn replace_all(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(
        pass,
        block,
        &[("TEXT", K::Text), ("SEGMENT", K::Text), ("REPLACEMENT", K::Text)],
        "string-replace-all",
        "replace all",
    )
}

fn contains(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(
        pass,
        block,
        &[("TEXT", K::Text), ("PIECE", K::Text)],
        "string-contains",
        "contains",
    )
}

fn starts_at(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(
        pass,
        block,
        &[("TEXT", K::Text), ("PIECE", K::Text)],
        "string-starts-at",
        "starts at",
    )
}

fn split(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(
        pass,
        block,
        &[("TEXT", K::Text), ("AT", K::Text)],
        "string-split",
        "split",
    )
}

fn split_at_spaces(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(
        pass,
        block,
        &[("TEXT", K::Text)],
        "string-split-at-spaces",
        "split at spaces",
    )
}

fn compare(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let (primitive, label) = match block.field("OP").unwrap_or("LT") {
        "LT" => ("string<?", "less than"),
        "GT" => ("string>?", "greater than"),
        _ => ("string=?", "equal"),
    };
    primitive_over(
        pass,
        block,
        &[("TEXT1", K::Text), ("TEXT2", K::Text)],
        primitive,
        label,
    )
}

fn is_empty(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(pass, block, &[("VALUE", K::Text)], "string-empty?", "is text empty?")
}

fn is_string(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(pass, block, &[("ITEM", K::Any)], "string?", "is string?")
}

fn reverse(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(pass, block, &[("VALUE", K::Text)], "string-reverse", "reverse")
}

fn replace_mappings(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let primitive = match block.field("OP").unwrap_or("LONGEST_STRING_FIRST") {
        "DICTIONARY_ORDER" => "string-replace-mappings-dictionary",
        _ => "string-replace-mappings-longest-string",
    };
    primitive_over(
        pass,
        block,
        &[("TEXT", K::Text), ("MAPPINGS", K::Dictionary)],
        primitive,
        "replace with mappings",
    )
}

/// `(call-yail-primitive text-deobfuscate (*list-for-runtime* "enc" "conf") ...)`
fn obfuscated(_pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let text = block.field("TEXT").unwrap_or_default();
    let confounder = block.mutation_attr("confounder").unwrap_or("default");
    Ok(primitive_call(
        "text-deobfuscate",
        vec![
            Expr::string(obfuscate(text, confounder)),
            Expr::string(confounder),
        ],
        &[K::Text, K::Text],
        "deobfuscate text",
    ))
}

/// Encode `input` for `text-deobfuscate`.
///
/// Works on UTF-16 code units. Each unit is XORed with the confounder
/// (repeated to cover the input) and with its distance from the end of the
/// input, keeping the low byte.
pub(crate) fn obfuscate(input: &str, confounder: &str) -> String {
    let units: Vec<u16> = input.encode_utf16().collect();
    let mask: Vec<u16> = confounder.encode_utf16().collect();
    if mask.is_empty() {
        return obfuscate(input, "default");
    }

    let len = units.len();
    units
        .iter()
        .enumerate()
        .map(|(i, unit)| {
            let c = (unit ^ mask[i % mask.len()]) & 0xFF;
            let b = (c as usize ^ (len - i)) & 0xFF;
            char::from(b as u8)
        })
        .collect()
}
