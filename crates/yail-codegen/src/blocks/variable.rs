//! Global and lexical variable blocks.

use crate::pass::variable_key;
use crate::{CompileError, Pass, Registry};
use rhizome_yail_ir::Expr;
use rhizome_yail_ir::builders::{get_var, global_def, global_name, lexical_value, set_var};
use rhizome_yail_syntax_bky::Block;

pub(crate) fn register(registry: &mut Registry) {
    registry.register("variables_get", get);
    registry.register("variables_set", set);
    registry.register("lexical_variable_get", lexical_get);
    registry.register("lexical_variable_set", lexical_set);
    registry.register("local_declaration_statement", local_statement);
    registry.register("local_declaration_expression", local_expression);
    registry.register("global_declaration", global_declaration);
}

fn get(_pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let name = block.field("VAR").unwrap_or("unknown");
    Ok(get_var(&global_name(name)))
}

fn set(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let name = block.field("VAR").unwrap_or("unknown");
    let symbol = global_name(name);
    pass.track_variable(symbol.clone(), block.value("VALUE"));
    let value = pass.value(block, "VALUE")?;
    Ok(set_var(&symbol, value))
}

/// `global X` reads the screen global, anything else a lexical local.
pub(crate) fn lexical_get(_pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let name = block.field("VAR").unwrap_or_default();
    Ok(match name.strip_prefix("global ") {
        Some(global) => get_var(&global_name(global)),
        None => lexical_value(name),
    })
}

/// Assignment always goes through `set-var!` on the `g$` symbol.
fn lexical_set(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let name = block.field("VAR").unwrap_or_default();
    let target = global_name(name.strip_prefix("global ").unwrap_or(name));
    if !name.is_empty() {
        pass.track_variable(variable_key(name), block.value("VALUE"));
    }
    let value = pass.value(block, "VALUE")?;
    Ok(set_var(&target, value))
}

fn local_names(block: &Block) -> Vec<String> {
    match block.mutation_attr("localnames") {
        Some(names) => names.split(',').map(|name| name.trim().to_string()).collect(),
        None => block.mutation_names().to_vec(),
    }
}

/// `($name init)` bindings from `DECL0`, `DECL1`, ...; missing initializers
/// are the empty string.
fn local_bindings(pass: &mut Pass<'_>, block: &Block) -> Result<Vec<(String, Expr)>, CompileError> {
    let mut bindings = Vec::new();
    for (i, name) in local_names(block).into_iter().enumerate() {
        let slot = format!("DECL{i}");
        let key = format!("${name}");
        pass.track_variable(key.clone(), block.value(&slot));
        let init = pass.value_or(block, &slot, Expr::string(""))?;
        bindings.push((key, init));
    }
    Ok(bindings)
}

fn local_statement(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let bindings = local_bindings(pass, block)?;
    let mut body = pass.statements(block, "STACK")?;

    if bindings.is_empty() {
        return Ok(match body.len() {
            1 => body.remove(0),
            _ => Expr::begin(body),
        });
    }
    let body = match body.len() {
        0 => Expr::atom(""),
        1 => body.remove(0),
        _ => Expr::begin(body),
    };
    Ok(Expr::let_(bindings, body))
}

fn local_expression(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let bindings = local_bindings(pass, block)?;
    let body = pass.value_or(block, "RETURN", Expr::integer(0))?;
    if bindings.is_empty() {
        Ok(body)
    } else {
        Ok(Expr::let_(bindings, body))
    }
}

fn global_declaration(pass: &mut Pass<'_>, block: &Block) -> Result<Expr, CompileError> {
    let name = block.field("NAME").unwrap_or("unknown");
    let value = pass.value(block, "VALUE")?;
    Ok(global_def(name, value))
}
