//! math_* blocks.
//!
//! Almost everything lowers to a `call-yail-primitive` over number operands;
//! operator fields pick the primitive and its display label.

use crate::{CompileError, Pass, Registry};
use rhizome_yail_ir::builders::primitive_call;
use rhizome_yail_ir::{Expr, ValueKind as K, format_number};
use rhizome_yail_syntax_bky::Block;

pub(crate) fn register(registry: &mut Registry) {
    registry.register("math_number", number);
    registry.register("math_number_radix", number_radix);
    registry.register("math_arithmetic", arithmetic);
    registry.register("math_subtract", subtract);
    registry.register("math_division", division);
    registry.register("math_power", power);
    registry.register("math_add", add);
    registry.register("math_multiply", multiply);
    registry.register("math_single", single);
    registry.register("math_bitwise", bitwise);
    registry.register("math_abs", abs);
    registry.register("math_neg", neg);
    registry.register("math_ceiling", ceiling);
    registry.register("math_floor", floor);
    registry.register("math_trig", trig);
    registry.register("math_cos", cos);
    registry.register("math_tan", tan);
    registry.register("math_atan2", atan2);
    registry.register("math_random_int", random_int);
    registry.register("math_random_float", random_float);
    registry.register("math_random_set_seed", random_set_seed);
    registry.register("math_modulo", modulo);
    registry.register("math_round", round);
    registry.register("math_min_max", min_max);
    registry.register("math_on_list", on_list);
    registry.register("math_divide", divide);
    registry.register("math_convert_angles", convert_angles);
    registry.register("math_format_as_decimal", format_as_decimal);
    registry.register("math_is_a_number", is_a_number);
    registry.register("math_convert_number", convert_number);
    registry.register("math_compare", compare);
}

fn operator<'b>(block: &'b Block, default: &'b str) -> &'b str {
    block.field("OP").unwrap_or(default)
}

/// Binary number primitive over two value slots.
fn binary(
    pass: &mut Pass<'_>,
    block: &Block,
    slots: (&str, &str),
    primitive: &str,
    label: &str,
) -> Result<Expr, CompileError> {
    let args = vec![pass.value(block, slots.0)?, pass.value(block, slots.1)?];
    Ok(primitive_call(primitive, args, &[K::Number, K::Number], label))
}

/// Unary number primitive over `NUM`.
fn unary(
    pass: &mut Pass<'_>,
    block: &Block,
    primitive: &str,
    label: &str,
) -> Result<Expr, CompileError> {
    let value = pass.value(block, "NUM")?;
    Ok(primitive_call(primitive, vec![value], &[K::Number], label))
}

/// Number primitive over `NUM0..NUMn`, `n` from mutation `items`.
fn variadic(
    pass: &mut Pass<'_>,
    block: &Block,
    primitive: &str,
    label: &str,
    default_count: usize,
) -> Result<Expr, CompileError> {
    let count = block.mutation_count("items").unwrap_or(default_count);
    let mut items = Vec::with_capacity(count);
    for i in 0..count {
        items.push(pass.value(block, &format!("NUM{i}"))?);
    }
    let kinds = vec![K::Number; items.len()];
    Ok(primitive_call(primitive, items, &kinds, label))
}

fn number(_pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    Ok(Expr::atom(block.field("NUM").unwrap_or("0")))
}

/// Literal in base 10, 2, 8 or 16. Digits that do not parse in the chosen
/// base yield 0.
fn number_radix(_pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let digits = block.field("NUM").unwrap_or("0").trim();
    let value = match operator(block, "DEC") {
        "HEX" => i64::from_str_radix(digits, 16).map(|n| n as f64).ok(),
        "BIN" => i64::from_str_radix(digits, 2).map(|n| n as f64).ok(),
        "OCT" => i64::from_str_radix(digits, 8).map(|n| n as f64).ok(),
        _ => digits.parse::<f64>().ok().filter(|n| n.is_finite()),
    };
    Ok(Expr::atom(format_number(value.unwrap_or(0.0))))
}

fn arithmetic(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let primitive = match operator(block, "ADD") {
        "MINUS" => "-",
        "MULTIPLY" => "*",
        "DIVIDE" => "/",
        "POWER" => "expt",
        _ => "+",
    };
    binary(pass, block, ("A", "B"), primitive, primitive)
}

fn subtract(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    binary(pass, block, ("A", "B"), "-", "-")
}

fn division(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    binary(pass, block, ("A", "B"), "yail-divide", "/")
}

fn power(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    binary(pass, block, ("A", "B"), "expt", "expt")
}

fn add(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    variadic(pass, block, "+", "+", 2)
}

fn multiply(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    variadic(pass, block, "*", "*", 2)
}

fn bitwise(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let primitive = match operator(block, "BITAND") {
        "BITIOR" => "bitwise-ior",
        "BITXOR" => "bitwise-xor",
        _ => "bitwise-and",
    };
    variadic(pass, block, primitive, primitive, 2)
}

fn single(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let (primitive, label) = match operator(block, "ROOT") {
        "ROOT" => ("sqrt", "square root"),
        "NEG" => ("-", "negate"),
        "LN" => ("log", "ln"),
        "LOG10" => ("log10", "log10"),
        "EXP" => ("exp", "exp"),
        "POW10" => ("expt-10", "pow10"),
        _ => ("abs", "abs"),
    };
    unary(pass, block, primitive, label)
}

fn abs(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    unary(pass, block, "abs", "abs")
}

fn neg(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    unary(pass, block, "-", "negate")
}

fn ceiling(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    unary(pass, block, "yail-ceiling", "ceiling")
}

fn floor(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    unary(pass, block, "yail-floor", "floor")
}

fn trig(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let (primitive, label) = match operator(block, "SIN") {
        "COS" => ("cos-degrees", "cos"),
        "TAN" => ("tan-degrees", "tan"),
        "ASIN" => ("asin-degrees", "asin"),
        "ACOS" => ("acos-degrees", "acos"),
        "ATAN" => ("atan-degrees", "atan"),
        _ => ("sin-degrees", "sin"),
    };
    unary(pass, block, primitive, label)
}

fn cos(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    unary(pass, block, "cos-degrees", "cos")
}

fn tan(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    unary(pass, block, "tan-degrees", "tan")
}

fn atan2(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    binary(pass, block, ("Y", "X"), "atan2-degrees", "atan2")
}

fn random_int(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    binary(pass, block, ("FROM", "TO"), "random-integer", "random integer")
}

fn random_float(_pass: &mut Pass<'_>, _block: &Block) -> Result<Expr, CompileError> {
    Ok(primitive_call("random-fraction", vec![], &[], "random fraction"))
}

fn random_set_seed(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    unary(pass, block, "random-set-seed", "random set seed")
}

fn modulo(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    binary(pass, block, ("DIVIDEND", "DIVISOR"), "modulo", "modulo")
}

fn round(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let primitive = match operator(block, "ROUND") {
        "ROUNDUP" => "ceiling",
        "ROUNDDOWN" => "floor",
        _ => "round",
    };
    unary(pass, block, primitive, primitive)
}

fn min_max(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let primitive = if operator(block, "MIN") == "MAX" { "max" } else { "min" };
    binary(pass, block, ("A", "B"), primitive, primitive)
}

/// `min`/`max` over the connected items. With no items the operand is the
/// operation's identity (`+inf.0` for min, `-inf.0` for max).
fn on_list(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let primitive = if operator(block, "MIN") == "MAX" { "max" } else { "min" };
    if block.mutation_count("items") == Some(0) {
        let identity = if primitive == "min" { "+inf.0" } else { "-inf.0" };
        return Ok(primitive_call(
            primitive,
            vec![Expr::atom(identity)],
            &[K::Number],
            primitive,
        ));
    }
    variadic(pass, block, primitive, primitive, 1)
}

fn divide(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let primitive = match operator(block, "MODULO") {
        "REMAINDER" => "remainder",
        "QUOTIENT" => "quotient",
        _ => "modulo",
    };
    binary(pass, block, ("DIVIDEND", "DIVISOR"), primitive, primitive)
}

fn convert_angles(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let (primitive, label) = match operator(block, "RADIANS_TO_DEGREES") {
        "DEGREES_TO_RADIANS" => ("degrees->radians", "convert degrees to radians"),
        _ => ("radians->degrees", "convert radians to degrees"),
    };
    unary(pass, block, primitive, label)
}

fn format_as_decimal(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    binary(pass, block, ("NUM", "PLACES"), "format-as-decimal", "format as decimal")
}

fn text_unary(
    pass: &mut Pass<'_>,
    block: &Block,
    primitive: &str,
    label: &str,
) -> Result<Expr, CompileError> {
    let value = pass.value(block, "NUM")?;
    Ok(primitive_call(primitive, vec![value], &[K::Text], label))
}

fn is_a_number(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let (primitive, label) = match operator(block, "NUMBER") {
        "BASE10" => ("is-base10?", "is base10?"),
        "HEXADECIMAL" => ("is-hexadecimal?", "is hexadecimal?"),
        "BINARY" => ("is-binary?", "is binary?"),
        _ => ("is-number?", "is a number?"),
    };
    text_unary(pass, block, primitive, label)
}

fn convert_number(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let (primitive, label) = match operator(block, "DEC_TO_HEX") {
        "HEX_TO_DEC" => ("math-convert-hex-dec", "convert Hex to Dec"),
        "DEC_TO_BIN" => ("math-convert-dec-bin", "convert Dec to Bin"),
        "BIN_TO_DEC" => ("math-convert-bin-dec", "convert Bin to Dec"),
        _ => ("math-convert-dec-hex", "convert Dec to Hex"),
    };
    text_unary(pass, block, primitive, label)
}

/// Equality compares any values; ordering compares numbers.
fn compare(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let (primitive, label, kind) = match operator(block, "EQ") {
        "NEQ" => ("yail-not-equal?", "≠", K::Any),
        "LT" => ("yail-less?", "<", K::Number),
        "LTE" => ("yail-not-greater?", "≤", K::Number),
        "GT" => ("yail-greater?", ">", K::Number),
        "GTE" => ("yail-not-less?", "≥", K::Number),
        _ => ("yail-equal?", "=", K::Any),
    };
    let args = vec![pass.value(block, "A")?, pass.value(block, "B")?];
    Ok(primitive_call(primitive, args, &[kind, kind], label))
}
