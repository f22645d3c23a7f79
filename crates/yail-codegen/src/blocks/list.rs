//! lists_* blocks.

use super::primitive_over;
use crate::{CompileError, Pass, Registry};
use rhizome_yail_ir::builders::primitive_call;
use rhizome_yail_ir::{Expr, ValueKind as K};
use rhizome_yail_syntax_bky::Block;

const HIGHER_ORDER: [&str; 11] = [
    "lists_map",
    "lists_filter",
    "lists_reduce",
    "lists_sort",
    "lists_sort_comparator",
    "lists_sort_key",
    "lists_minimum_value",
    "lists_maximum_value",
    "lists_but_first",
    "lists_but_last",
    "lists_slice",
];

pub(crate) fn register(registry: &mut Registry) {
    registry.register("lists_create_with", create_with);
    registry.register("lists_create_empty", create_empty);
    registry.register("lists_length", length);
    registry.register("lists_is_empty", is_empty);
    registry.register("lists_append", append);
    registry.register("lists_add_items", add_items);
    registry.register("lists_from_csv_table", from_csv_table);
    registry.register("lists_from_csv_row", from_csv_row);
    registry.register("lists_to_csv_table", to_csv_table);
    registry.register("lists_to_csv_row", to_csv_row);
    registry.register("lists_pick_random_item", pick_random);
    registry.register("lists_get_index", get_index);
    registry.register("lists_select_item", select_item);
    registry.register("lists_set_index", set_index);
    registry.register("lists_replace_item", replace_item);
    registry.register("lists_insert", insert);
    registry.register("lists_insert_item", insert);
    registry.register("lists_remove", remove);
    registry.register("lists_remove_item", remove);
    registry.register("lists_append_list", append_list);
    registry.register("lists_copy", copy);
    registry.register("lists_reverse", reverse);
    registry.register("lists_contains", is_in);
    registry.register("lists_is_in", is_in);
    registry.register("lists_position", position);
    registry.register("lists_position_in", position_in);
    registry.register("lists_is_list", is_list);
    registry.register("lists_lookup_in_pairs", lookup_in_pairs);
    registry.register("lists_join_with_separator", join_with_separator);

    for tag in HIGHER_ORDER {
        registry.register_unhandled(tag);
    }
}

/// `make-yail-list` over `ADD0..ADDn`. Connected items carry their inferred
/// kind; gaps become `""` typed as text.
fn create_with(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let count = block.mutation_count("items").unwrap_or(0);
    let mut items = Vec::with_capacity(count);
    let mut kinds = Vec::with_capacity(count);
    for i in 0..count {
        match block.value(&format!("ADD{i}")) {
            Some(item) => {
                kinds.push(pass.infer(Some(item)));
                items.push(pass.expr(item)?);
            }
            None => {
                kinds.push(K::Text);
                items.push(Expr::string(""));
            }
        }
    }
    Ok(primitive_call("make-yail-list", items, &kinds, "make a list"))
}

fn create_empty(_pass: &mut Pass<'_>, _block: &Block) -> Result<Expr, CompileError> {
    Ok(primitive_call("make-yail-list", vec![], &[], "make a list"))
}

fn length(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(pass, block, &[("LIST", K::List)], "yail-list-length", "length of list")
}

fn is_empty(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(pass, block, &[("LIST", K::List)], "yail-list-empty?", "is list empty?")
}

fn append(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(
        pass,
        block,
        &[("LIST1", K::List), ("LIST2", K::List)],
        "yail-list-append",
        "append to list",
    )
}

fn add_items(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(
        pass,
        block,
        &[("LIST", K::List), ("ITEM", K::Any)],
        "yail-list-add-to-list!",
        "add items to list",
    )
}

fn from_csv_table(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(
        pass,
        block,
        &[("TEXT", K::Text)],
        "yail-list-from-csv-table",
        "list from csv table",
    )
}

fn from_csv_row(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(
        pass,
        block,
        &[("TEXT", K::Text)],
        "yail-list-from-csv-row",
        "list from csv row",
    )
}

fn to_csv_table(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(
        pass,
        block,
        &[("LIST", K::List)],
        "yail-list-to-csv-table",
        "list to csv table",
    )
}

fn to_csv_row(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(
        pass,
        block,
        &[("LIST", K::List)],
        "yail-list-to-csv-row",
        "list to csv row",
    )
}

fn pick_random(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(
        pass,
        block,
        &[("LIST", K::List)],
        "yail-list-pick-random",
        "pick random item",
    )
}

fn get_index(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(
        pass,
        block,
        &[("LIST", K::List), ("INDEX", K::Number)],
        "yail-list-get-item",
        "select list item",
    )
}

fn select_item(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(
        pass,
        block,
        &[("LIST", K::List), ("NUM", K::Number)],
        "yail-list-get-item",
        "select list item",
    )
}

fn set_index(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(
        pass,
        block,
        &[("LIST", K::List), ("INDEX", K::Number), ("VALUE", K::Any)],
        "yail-list-set-item!",
        "replace list item",
    )
}

fn replace_item(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(
        pass,
        block,
        &[("LIST", K::List), ("NUM", K::Number), ("ITEM", K::Any)],
        "yail-list-set-item!",
        "replace list item",
    )
}

fn insert(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(
        pass,
        block,
        &[("LIST", K::List), ("INDEX", K::Number), ("ITEM", K::Any)],
        "yail-list-insert-item!",
        "insert list item",
    )
}

fn remove(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(
        pass,
        block,
        &[("LIST", K::List), ("INDEX", K::Number)],
        "yail-list-remove-item!",
        "remove list item",
    )
}

fn append_list(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(
        pass,
        block,
        &[("LIST0", K::List), ("LIST1", K::List)],
        "yail-list-append!",
        "append to list",
    )
}

fn copy(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(pass, block, &[("LIST", K::List)], "yail-list-copy", "copy list")
}

fn reverse(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(pass, block, &[("LIST", K::List)], "yail-list-reverse", "reverse list")
}

/// Item first, then the list.
fn is_in(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(
        pass,
        block,
        &[("ITEM", K::Any), ("LIST", K::List)],
        "yail-list-member?",
        "is in list?",
    )
}

fn position(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(
        pass,
        block,
        &[("ITEM", K::Any), ("LIST", K::List)],
        "yail-list-index",
        "position in list",
    )
}

fn position_in(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(
        pass,
        block,
        &[("ITEM", K::Any), ("LIST", K::List)],
        "yail-list-index",
        "index in list",
    )
}

fn is_list(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(pass, block, &[("ITEM", K::Any)], "yail-list?", "is a list?")
}

fn lookup_in_pairs(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(
        pass,
        block,
        &[("KEY", K::Any), ("LIST", K::List), ("NOTFOUND", K::Any)],
        "yail-alist-lookup",
        "lookup in pairs",
    )
}

fn join_with_separator(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    primitive_over(
        pass,
        block,
        &[("LIST", K::List), ("SEPARATOR", K::Text)],
        "yail-list-join-with-separator",
        "join with separator",
    )
}
