//! dictionaries_* and pair blocks.
//!
//! Unconnected slots fall back to neutral values: the null value for keys
//! and values, a fresh empty dictionary for dictionary operands.

use super::empty_dictionary;
use crate::{CompileError, Pass, Registry};
use rhizome_yail_ir::builders::primitive_call;
use rhizome_yail_ir::{Expr, ValueKind as K};
use rhizome_yail_syntax_bky::Block;

pub(crate) fn register(registry: &mut Registry) {
    registry.register("dictionaries_create_with", create_with);
    registry.register("pair", pair);
    registry.register("dictionaries_set_pair", set_pair);
    registry.register("dictionaries_delete_pair", delete_pair);
    registry.register("dictionaries_lookup", lookup);
    registry.register("dictionaries_recursive_lookup", recursive_lookup);
    registry.register("dictionaries_recursive_set", recursive_set);
    registry.register("dictionaries_getters", getters);
    registry.register("dictionaries_get_values", get_values);
    registry.register("dictionaries_is_key_in", is_key_in);
    registry.register("dictionaries_length", length);
    registry.register("dictionaries_alist_to_dict", alist_to_dict);
    registry.register("dictionaries_dict_to_alist", dict_to_alist);
    registry.register("dictionaries_copy", copy);
    registry.register("dictionaries_combine_dicts", combine);
    registry.register("dictionaries_walk_tree", walk_tree);
    registry.register("dictionaries_walk_all", walk_all);
    registry.register("dictionaries_is_dict", is_dict);
}

/// Slot defaults.
enum Or {
    Null,
    False,
    EmptyDict,
    EmptyList,
}

impl Or {
    fn expr(&self) -> Expr {
        match self {
            Or::Null => Expr::null(),
            Or::False => Expr::boolean(false),
            Or::EmptyDict => empty_dictionary(),
            Or::EmptyList => Expr::empty_list(),
        }
    }
}

fn call(
    pass: &mut Pass<'_>,
    block: &Block,
    slots: &[(&str, K, Or)],
    primitive: &str,
    label: &str,
) -> Result<Expr, CompileError> {
    let mut args = Vec::with_capacity(slots.len());
    let mut kinds = Vec::with_capacity(slots.len());
    for (slot, kind, default) in slots {
        args.push(pass.value_or(block, slot, default.expr())?);
        kinds.push(*kind);
    }
    Ok(primitive_call(primitive, args, &kinds, label))
}

/// `make-yail-dictionary` over the connected `ADDn` pairs. The item count
/// comes from mutation `items`, else from the slots present.
fn create_with(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let count = block
        .mutation_count("items")
        .unwrap_or_else(|| block.values.keys().filter(|slot| slot.starts_with("ADD")).count());
    let mut pairs = Vec::new();
    for i in 0..count {
        if let Some(item) = block.value(&format!("ADD{i}")) {
            pairs.push(pass.expr(item)?);
        }
    }
    let kinds = vec![K::Pair; pairs.len()];
    Ok(primitive_call(
        "make-yail-dictionary",
        pairs,
        &kinds,
        "make a dictionary",
    ))
}

fn pair(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    call(
        pass,
        block,
        &[("KEY", K::Key, Or::Null), ("VALUE", K::Any, Or::Null)],
        "make-dictionary-pair",
        "make a pair",
    )
}

fn set_pair(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    call(
        pass,
        block,
        &[
            ("KEY", K::Key, Or::Null),
            ("DICT", K::Dictionary, Or::EmptyDict),
            ("VALUE", K::Any, Or::Null),
        ],
        "yail-dictionary-set-pair",
        "set value for key in dictionary to value",
    )
}

fn delete_pair(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    call(
        pass,
        block,
        &[("DICT", K::Dictionary, Or::EmptyDict), ("KEY", K::Key, Or::Null)],
        "yail-dictionary-delete-pair",
        "delete dictionary pair",
    )
}

fn lookup(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    call(
        pass,
        block,
        &[
            ("KEY", K::Key, Or::False),
            ("DICT", K::Any, Or::EmptyDict),
            ("NOTFOUND", K::Any, Or::Null),
        ],
        "yail-dictionary-lookup",
        "dictionary lookup",
    )
}

fn recursive_lookup(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    call(
        pass,
        block,
        &[
            ("KEYS", K::List, Or::False),
            ("DICT", K::Dictionary, Or::EmptyDict),
            ("NOTFOUND", K::Any, Or::Null),
        ],
        "yail-dictionary-recursive-lookup",
        "dictionary recursive lookup",
    )
}

fn recursive_set(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    call(
        pass,
        block,
        &[
            ("KEYS", K::List, Or::EmptyList),
            ("DICT", K::Dictionary, Or::EmptyDict),
            ("VALUE", K::Any, Or::False),
        ],
        "yail-dictionary-recursive-set",
        "dictionary recursive set",
    )
}

fn getters(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let (primitive, label) = match block.field("OP") {
        Some("VALUES") => ("yail-dictionary-get-values", "get a dictionary's values"),
        _ => ("yail-dictionary-get-keys", "get a dictionary's keys"),
    };
    call(
        pass,
        block,
        &[("DICT", K::Dictionary, Or::EmptyDict)],
        primitive,
        label,
    )
}

fn get_values(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    call(
        pass,
        block,
        &[("DICT", K::Dictionary, Or::EmptyDict)],
        "yail-dictionary-get-values",
        "get a dictionary's values",
    )
}

fn is_key_in(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    call(
        pass,
        block,
        &[("KEY", K::Key, Or::False), ("DICT", K::Dictionary, Or::EmptyDict)],
        "yail-dictionary-is-key-in",
        "is key in dict?",
    )
}

fn length(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    call(
        pass,
        block,
        &[("DICT", K::Dictionary, Or::EmptyDict)],
        "yail-dictionary-length",
        "get a dictionary's length",
    )
}

fn alist_to_dict(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    call(
        pass,
        block,
        &[("PAIRS", K::List, Or::EmptyDict)],
        "yail-dictionary-alist-to-dict",
        "convert an alist to a dictionary",
    )
}

fn dict_to_alist(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    call(
        pass,
        block,
        &[("DICT", K::Dictionary, Or::EmptyDict)],
        "yail-dictionary-dict-to-alist",
        "convert a dictionary to an alist",
    )
}

fn copy(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    call(
        pass,
        block,
        &[("DICT", K::Dictionary, Or::EmptyDict)],
        "yail-dictionary-copy",
        "get a shallow copy of a dict",
    )
}

fn combine(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    call(
        pass,
        block,
        &[
            ("DICT1", K::Dictionary, Or::False),
            ("DICT2", K::Dictionary, Or::EmptyDict),
        ],
        "yail-dictionary-combine-dicts",
        "combine 2 dictionaries",
    )
}

fn walk_tree(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let root_path = Expr::quote(Expr::list(vec![Expr::symbol("*list*")]));
    let path = pass.value_or(block, "PATH", root_path)?;
    let dictionary = pass.value_or(block, "DICT", empty_dictionary())?;
    Ok(primitive_call(
        "yail-dictionary-walk",
        vec![path, dictionary],
        &[K::List, K::Any],
        "list by walking key path in dictionary",
    ))
}

/// The walk-all path marker, `(static-field ...YailDictionary "ALL")`.
fn walk_all(_pass: &mut Pass<'_>, _block: &Block) -> Result<Expr, CompileError> {
    Ok(Expr::call(
        "static-field",
        vec![
            Expr::symbol("com.google.appinventor.components.runtime.util.YailDictionary"),
            Expr::string("ALL"),
        ],
    ))
}

fn is_dict(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    call(
        pass,
        block,
        &[("THING", K::Any, Or::EmptyDict)],
        "yail-dictionary?",
        "check if something is a dictionary",
    )
}
