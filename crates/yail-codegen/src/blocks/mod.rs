//! Block handler families.
//!
//! Each family registers its block types with the [`Registry`]; a handler
//! builds the expression for one block, recursing into slots through the
//! [`Pass`](crate::Pass).

mod color;
mod component;
mod control;
mod dictionary;
mod helper;
mod list;
mod logic;
mod math;
mod procedure;
mod text;
mod variable;

use crate::{CompileError, Pass, Registry};
use rhizome_yail_ir::builders::primitive_call;
use rhizome_yail_ir::{Expr, ValueKind};
use rhizome_yail_syntax_bky::Block;

pub(crate) use color::color_value;

pub(crate) fn register_all(registry: &mut Registry) {
    color::register(registry);
    component::register(registry);
    control::register(registry);
    dictionary::register(registry);
    helper::register(registry);
    list::register(registry);
    logic::register(registry);
    math::register(registry);
    procedure::register(registry);
    text::register(registry);
    variable::register(registry);
}

/// `(make com.google.appinventor.components.runtime.util.YailDictionary)`
pub(crate) fn empty_dictionary() -> Expr {
    Expr::call(
        "make",
        vec![Expr::symbol(
            "com.google.appinventor.components.runtime.util.YailDictionary",
        )],
    )
}

/// `(call-yail-primitive yail-list-get-item (*list-for-runtime* list index) ...)`
pub(crate) fn list_item(list: Expr, index: i64) -> Expr {
    primitive_call(
        "yail-list-get-item",
        vec![list, Expr::integer(index)],
        &[ValueKind::List, ValueKind::Number],
        "select list item",
    )
}

/// Primitive call over the given value slots, one kind per slot.
pub(crate) fn primitive_over(
    pass: &mut Pass<'_>,
    block: &Block,
    slots: &[(&str, ValueKind)],
    primitive: &str,
    label: &str,
) -> Result<Expr, CompileError> {
    let mut args = Vec::with_capacity(slots.len());
    for (slot, _) in slots {
        args.push(pass.value(block, slot)?);
    }
    let kinds: Vec<ValueKind> = slots.iter().map(|(_, kind)| *kind).collect();
    Ok(primitive_call(primitive, args, &kinds, label))
}
