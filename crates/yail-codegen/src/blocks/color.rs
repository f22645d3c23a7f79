//! color_* blocks.

use crate::{CompileError, Pass, Registry};
use rhizome_yail_ir::builders::primitive_call;
use rhizome_yail_ir::{Expr, ValueKind as K};
use rhizome_yail_syntax_bky::Block;

const NAMED_COLORS: [&str; 23] = [
    "color_white",
    "color_light_gray",
    "color_gray",
    "color_blue_gray",
    "color_dark_gray",
    "color_black",
    "color_red",
    "color_pink",
    "color_purple",
    "color_deep_purple",
    "color_indigo",
    "color_blue",
    "color_light_blue",
    "color_cyan",
    "color_teal",
    "color_green",
    "color_light_green",
    "color_lime",
    "color_yellow",
    "color_amber",
    "color_orange",
    "color_deep_orange",
    "color_brown",
];

pub(crate) fn register(registry: &mut Registry) {
    for tag in NAMED_COLORS {
        registry.register(tag, named_color);
    }
    registry.register("color_make_color", make_color);
    registry.register("color_split_color", split_color);
}

/// `#RRGGBB` as the signed ARGB integer the runtime uses (opaque alpha).
pub(crate) fn color_value(hex: &str) -> i64 {
    let digits = hex.trim().trim_start_matches('#');
    i64::from_str_radix(digits, 16).unwrap_or(0) - 0x100_0000
}

fn named_color(_pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    Ok(Expr::integer(color_value(
        block.field("COLOR").unwrap_or("#FFFFFF"),
    )))
}

fn make_color(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let black = primitive_call(
        "make-yail-list",
        vec![Expr::integer(0), Expr::integer(0), Expr::integer(0)],
        &[K::Any, K::Any, K::Any],
        "make a list",
    );
    let components = pass.value_or(block, "COLORLIST", black)?;
    Ok(primitive_call(
        "make-color",
        vec![components],
        &[K::List],
        "make-color",
    ))
}

fn split_color(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let color = pass.value_or(block, "COLOR", Expr::integer(-1))?;
    Ok(primitive_call(
        "split-color",
        vec![color],
        &[K::Number],
        "split-color",
    ))
}
