//! helpers_* blocks.

use crate::{CompileError, Pass, Registry};
use rhizome_yail_ir::Expr;
use rhizome_yail_syntax_bky::Block;

pub(crate) fn register(registry: &mut Registry) {
    registry.register("helpers_dropdown", dropdown);
    registry.register("helpers_screen_names", screen_names);
    registry.register("helpers_assets", assets);
}

/// `(static-field KEY "OPTION")`, or `""` when either part is missing.
fn dropdown(_pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    Ok(
        match (block.mutation_attr("key"), block.field("OPTION")) {
            (Some(key), Some(option)) => Expr::call(
                "static-field",
                vec![Expr::symbol(key), Expr::string(option)],
            ),
            _ => Expr::string(""),
        },
    )
}

fn screen_names(_pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    Ok(Expr::string(block.field("SCREEN").unwrap_or_default()))
}

fn assets(_pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    Ok(Expr::string(block.field("ASSET").unwrap_or_default()))
}
