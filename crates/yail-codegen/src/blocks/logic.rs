//! logic_* blocks.

use crate::{CompileError, Pass, Registry};
use rhizome_yail_ir::builders::{and_delayed, or_delayed, primitive_call};
use rhizome_yail_ir::{Expr, ValueKind as K};
use rhizome_yail_syntax_bky::Block;

pub(crate) fn register(registry: &mut Registry) {
    registry.register("logic_boolean", boolean);
    registry.register("logic_operation", operation);
    registry.register("logic_negate", negate);
    registry.register("logic_compare", compare);
    registry.register("logic_null", null_check);
    registry.register("logic_ternary", ternary);
    registry.register("logic_or", or);
    registry.register("logic_false", false_value);
}

fn boolean(_pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let value = block
        .field("BOOL")
        .is_some_and(|text| text.eq_ignore_ascii_case("TRUE"));
    Ok(Expr::boolean(value))
}

fn false_value(_pass: &mut Pass<'_>, _block: &Block) -> Result<Expr, CompileError> {
    Ok(Expr::boolean(false))
}

fn operands(pass: &mut Pass<'_>, block: &Block) -> Result<Vec<Expr>, CompileError> {
    Ok(vec![pass.value(block, "A")?, pass.value(block, "B")?])
}

fn operation(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let args = operands(pass, block)?;
    Ok(match block.field("OP").unwrap_or("AND") {
        "AND" => and_delayed(args),
        "OR" => or_delayed(args),
        _ => primitive_call("and", args, &[K::Any, K::Any], "and"),
    })
}

fn or(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    Ok(or_delayed(operands(pass, block)?))
}

fn negate(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let value = pass.value(block, "BOOL")?;
    Ok(primitive_call("yail-not", vec![value], &[K::Any], "not"))
}

fn compare(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let (primitive, label) = match block.field("OP").unwrap_or("EQ") {
        "NEQ" => ("yail-not-equal?", "not-equal"),
        "LT" => ("<", "less-than"),
        "LTE" => ("<=", "less-than-equal"),
        "GT" => (">", "greater-than"),
        "GTE" => (">=", "greater-than-equal"),
        _ => ("yail-equal?", "equal"),
    };
    let args = operands(pass, block)?;
    Ok(primitive_call(primitive, args, &[K::Any, K::Any], label))
}

fn null_check(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let value = pass.value(block, "VALUE")?;
    Ok(primitive_call(
        "yail-equal?",
        vec![value, Expr::null()],
        &[K::Any, K::Any],
        "is null?",
    ))
}

fn ternary(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let cond = pass.value(block, "IF")?;
    let then = pass.value(block, "THEN")?;
    let otherwise = pass.value(block, "ELSE")?;
    Ok(Expr::if_(cond, then, Some(otherwise)))
}
